//! Face behaviour through the public API: event sequences, redraws onto
//! in-memory displays, and settings persistence.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use effects::display::{APLITE, BASALT};
use effects::{Color, ColorDisplay, FrameHost, MonoDisplay};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use proptest::prelude::*;
use watchface::{
    ClockTime, Event, Granularity, Reaction, TimeUnits, Vibe, WatchConfig, WatchFace,
};

const T0: ClockTime = ClockTime::new(2024, 3, 7, 10, 20, 30);

fn lit(display: &MonoDisplay, region: Rectangle) -> usize {
    region.points().filter(|&p| display.pixel(p) == Color::new(1)).count()
}

#[test]
fn chrono_alarm_fires_after_period_minutes() {
    let mut face = WatchFace::new(WatchConfig::default(), true);
    face.start(T0, 80, false, true);
    let out = face.handle(Event::Config { key: 3, value: 2 });
    assert_eq!(out.as_slice(), &[Reaction::Redraw]);

    let mut vibes = Vec::new();
    let mut time = T0;
    for _ in 0..6 {
        time = ClockTime {
            minute: time.minute + 1,
            ..time
        };
        let out = face.handle(Event::Tick {
            time,
            units: TimeUnits::SECOND | TimeUnits::MINUTE,
        });
        vibes.push(out.contains(&Reaction::Vibe(Vibe::Double)));
    }
    assert_eq!(vibes, [false, false, true, false, false, true]);
}

#[test]
fn bluetooth_drop_before_start_is_silent() {
    let mut face = WatchFace::new(WatchConfig::default(), true);
    assert!(face.handle(Event::Bluetooth { connected: false }).is_empty());
    face.start(T0, 80, false, false);
    face.handle(Event::Bluetooth { connected: true });
    let out = face.handle(Event::Bluetooth { connected: false });
    assert_eq!(out.as_slice(), &[Reaction::Vibe(Vibe::Long)]);

    face.handle(Event::Config { key: 2, value: 0 });
    assert!(face.handle(Event::Bluetooth { connected: false }).is_empty());
}

#[test]
fn seconds_setting_drives_subscription() {
    let mut face = WatchFace::new(WatchConfig::default(), true);
    let out = face.start(T0, 80, false, true);
    assert!(out.contains(&Reaction::Subscribe(Granularity::Second)));
    let out = face.handle(Event::Config { key: 0, value: 0 });
    assert!(out.contains(&Reaction::Subscribe(Granularity::Minute)));
    assert_eq!(face.granularity(), Granularity::Minute);
}

#[test]
fn render_paints_mono_face() {
    let mut display = MonoDisplay::new(&APLITE).unwrap();
    let mut face = WatchFace::new(WatchConfig::default(), true);
    face.start(T0, 80, false, true);
    face.render(&mut display);
    assert!(!display.is_captured());
    assert_eq!(display.capture_count(), 1);
    // Time row, date row and the dial ring all paint something.
    assert!(lit(&display, Rectangle::new(Point::new(0, 62), Size::new(144, 15))) > 0);
    assert!(lit(&display, Rectangle::new(Point::new(0, 94), Size::new(144, 10))) > 0);
    assert_eq!(display.pixel(Point::new(72, 18)), Color::new(1));
    // Corners stay black.
    assert_eq!(display.pixel(Point::zero()), Color::new(0));
}

#[test]
fn invert_setting_flips_every_pixel() {
    let mut plain = MonoDisplay::new(&APLITE).unwrap();
    let mut inverted = MonoDisplay::new(&APLITE).unwrap();

    let mut face = WatchFace::new(WatchConfig::default(), true);
    face.start(T0, 80, false, true);
    face.render(&mut plain);

    let out = face.handle(Event::Config { key: 1, value: 1 });
    assert_eq!(out.as_slice(), &[Reaction::Redraw]);
    face.render(&mut inverted);
    assert_eq!(inverted.capture_count(), 2);

    for p in APLITE.bounds().points() {
        assert_eq!(inverted.pixel(p), plain.pixel(p).toggled(), "{p:?}");
    }
}

#[test]
fn render_on_color_display_uses_white_on_black() {
    let mut display = ColorDisplay::new(&BASALT).unwrap();
    let mut face = WatchFace::new(WatchConfig::default(), false);
    face.start(T0, 10, true, true);
    face.render(&mut display);
    for byte in display.bytes() {
        assert!(*byte == 0xC0 || *byte == 0xFF, "{byte:#x}");
    }
}

#[test]
fn busy_display_skips_paint() {
    let mut display = MonoDisplay::new(&APLITE).unwrap();
    display.begin_capture().unwrap();
    let mut face = WatchFace::new(WatchConfig::default(), true);
    face.start(T0, 80, false, true);
    face.render(&mut display);
    display.end_capture();
    assert!(display.bytes().iter().all(|&b| b == 0));
}

#[test]
fn zulu_style_replaces_date_row() {
    let mut date = MonoDisplay::new(&APLITE).unwrap();
    let mut zulu = MonoDisplay::new(&APLITE).unwrap();
    let mut face = WatchFace::new(WatchConfig::default(), true);
    face.start(T0, 80, false, true);
    face.render(&mut date);
    face.handle(Event::Config { key: 5, value: 2 });
    face.render(&mut zulu);
    // Narrower than the dial so the hand markers stay outside.
    let label = Rectangle::new(Point::new(40, 110), Size::new(64, 10));
    assert_eq!(lit(&date, label), 0);
    assert!(lit(&zulu, label) > 0);
}

proptest! {
    /// Settings survive a postcard round trip for every valid message.
    #[test]
    fn persisted_settings_decode(
        seconds in 0i32..2, invert in 0i32..2, vibe in 0i32..2,
        minutes in 0i32..=600, hands in 0i32..2, style in 0i32..3,
        background in 0i32..4, offset in -50_400i32..=50_400,
    ) {
        let mut config = WatchConfig::default();
        for (key, value) in [
            (0, seconds), (1, invert), (2, vibe), (3, minutes),
            (4, hands), (5, style), (6, background), (7, offset),
        ] {
            config.apply(key, value).unwrap();
        }
        let bytes = config.to_bytes().unwrap();
        prop_assert_eq!(WatchConfig::from_bytes(&bytes).unwrap(), config);
    }

    /// Offsetting stays within the day and is undone by the opposite offset.
    #[test]
    fn offset_round_trips(
        hour in 0u8..24, minute in 0u8..60, second in 0u8..60, offset in -200_000i32..200_000,
    ) {
        let t = ClockTime::new(2024, 1, 1, hour, minute, second);
        let shifted = t.offset_by(offset);
        prop_assert!(shifted.hour < 24 && shifted.minute < 60 && shifted.second < 60);
        prop_assert_eq!(shifted.offset_by(-offset), t);
    }
}
