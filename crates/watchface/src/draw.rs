//! Paints the face onto a captured frame, white on black in whatever
//! encoding the frame uses.
//!
//! ```text
//!  y=18   ┌── dial ring / marks ──┐
//!  y=46          LOCAL PM
//!  y=62          10:20:30
//!  y=84            [bat]
//!  y=94   07/03/2024  |  zulu time
//!  y=110          ZULU AM
//!  y=122          CR.AL:15
//! ```

// Layout coordinates are small constants.
#![allow(clippy::arithmetic_side_effects)]

use effects::{Color, FrameBuffer};
use embedded_graphics::geometry::AnchorY;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::battery::{BatteryIcon, BATTERY_FRAME};
use crate::clock::{
    marker_position, period_label, ClockTime, Zone, DIAL_CENTER, HOUR_RADIUS, MINUTE_RADIUS,
};
use crate::config::{Background, Style};
use crate::face::WatchFace;

/// Full 144×168 face.
pub const DISPLAY_FRAME: Rectangle = Rectangle::new(Point::zero(), Size::new(144, 168));

const DIAL_DIAMETER: u32 = 133;
const MARK_OUTER: i32 = 66;
const MARK_INNER: i32 = 63;
const MARK_INNER_LONG: i32 = 60;

const TOP_LABEL_Y: i32 = 46;
const TIME_Y: i32 = 62;
const LOWER_Y: i32 = 94;
const BOTTOM_LABEL_Y: i32 = 110;
const ALARM_Y: i32 = 122;

/// Paint every element of `face` onto `fb`.
pub fn draw_face(face: &WatchFace, fb: &mut FrameBuffer<'_>) {
    let fg = fb.format().white();
    let bg = fb.format().black();
    let config = face.config();
    let local = face.local_time();

    fb.fill(bg);
    draw_dial(fb, config.background, fg);

    centered(fb, period_label(Zone::Local, local.hour, face.is_24h()), TOP_LABEL_Y, &FONT_6X10, fg);
    centered(fb, &time_text(&local, face.is_24h(), config.seconds), TIME_Y, &FONT_9X15, fg);
    if face.shows_zulu() {
        let zulu = face.zulu_time();
        centered(fb, &time_text(&zulu, face.is_24h(), config.seconds), LOWER_Y, &FONT_9X15, fg);
        centered(fb, period_label(Zone::Zulu, zulu.hour, face.is_24h()), BOTTOM_LABEL_Y, &FONT_6X10, fg);
    } else {
        centered(fb, &date_text(&local, config.style), LOWER_Y, &FONT_6X10, fg);
    }
    if let Some(label) = face.alarm().label() {
        centered(fb, &label, ALARM_Y, &FONT_6X10, fg);
    }

    draw_battery(fb, face.battery().icon(), fg);
    if config.hands {
        draw_markers(fb, &local, fg, bg);
    }
}

/// `hh:mm[:ss]`; a hidden leading hour digit is dropped.
#[must_use]
pub fn time_text(time: &ClockTime, is_24h: bool, seconds: bool) -> heapless::String<8> {
    let shown = if seconds { 6 } else { 4 };
    let mut out = heapless::String::new();
    for (i, digit) in time.time_digits(is_24h).iter().take(shown).enumerate() {
        if i == 2 || i == 4 {
            out.push(':').ok();
        }
        if let Some(c) = digit.and_then(|d| char::from_digit(u32::from(d), 10)) {
            out.push(c).ok();
        }
    }
    out
}

/// `dd/mm/yyyy` or `mm/dd/yyyy` per `style`.
#[must_use]
pub fn date_text(time: &ClockTime, style: Style) -> heapless::String<10> {
    let mut out = heapless::String::new();
    for (i, digit) in time.date_digits(style).iter().enumerate() {
        if i == 2 || i == 4 {
            out.push('/').ok();
        }
        if let Some(c) = char::from_digit(u32::from(*digit), 10) {
            out.push(c).ok();
        }
    }
    out
}

fn centered(fb: &mut FrameBuffer<'_>, text: &str, y: i32, font: &MonoFont<'_>, color: Color) {
    let style = MonoTextStyle::new(font, color);
    let layout = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    Text::with_text_style(text, Point::new(DIAL_CENTER.x, y), style, layout)
        .draw(fb)
        .ok();
}

fn draw_dial(fb: &mut FrameBuffer<'_>, background: Background, fg: Color) {
    let (marks, ring) = match background {
        Background::Full => (60, true),
        Background::Simple => (12, true),
        Background::Minimal => (4, false),
        Background::None => return,
    };
    let stroke = PrimitiveStyle::with_stroke(fg, 1);
    if ring {
        Circle::with_center(DIAL_CENTER, DIAL_DIAMETER)
            .into_styled(stroke)
            .draw(fb)
            .ok();
    }
    for angle in (0u32..360).step_by(360 / marks) {
        let inner = if angle % 30 == 0 { MARK_INNER_LONG } else { MARK_INNER };
        Line::new(marker_position(angle, inner), marker_position(angle, MARK_OUTER))
            .into_styled(stroke)
            .draw(fb)
            .ok();
    }
}

fn draw_markers(fb: &mut FrameBuffer<'_>, time: &ClockTime, fg: Color, bg: Color) {
    Circle::with_center(marker_position(time.minute_angle(), MINUTE_RADIUS), 7)
        .into_styled(PrimitiveStyle::with_fill(fg))
        .draw(fb)
        .ok();
    let ring = PrimitiveStyleBuilder::new()
        .stroke_color(fg)
        .stroke_width(2)
        .fill_color(bg)
        .build();
    Circle::with_center(marker_position(time.hour_angle(), HOUR_RADIUS), 9)
        .into_styled(ring)
        .draw(fb)
        .ok();
}

fn draw_battery(fb: &mut FrameBuffer<'_>, icon: BatteryIcon, fg: Color) {
    BATTERY_FRAME
        .into_styled(PrimitiveStyle::with_stroke(fg, 1))
        .draw(fb)
        .ok();
    let inner = BATTERY_FRAME.offset(-1);
    let fill = PrimitiveStyle::with_fill(fg);
    match icon.fill_rows() {
        Some(rows) => {
            inner
                .resized_height(rows, AnchorY::Bottom)
                .into_styled(fill)
                .draw(fb)
                .ok();
        }
        None => {
            // Charging: a plus sign inside the frame.
            let mid = inner.top_left + Point::new(1, 1);
            Line::new(mid - Point::new(1, 0), mid + Point::new(2, 0))
                .into_styled(PrimitiveStyle::with_stroke(fg, 1))
                .draw(fb)
                .ok();
            Line::new(mid - Point::new(0, 1), mid + Point::new(0, 2))
                .into_styled(PrimitiveStyle::with_stroke(fg, 1))
                .draw(fb)
                .ok();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_time_text() {
        let t = ClockTime::new(2024, 3, 7, 9, 5, 7);
        assert_eq!(time_text(&t, false, true).as_str(), "9:05:07");
        assert_eq!(time_text(&t, true, true).as_str(), "09:05:07");
        assert_eq!(time_text(&t, true, false).as_str(), "09:05");
        let pm = ClockTime::new(2024, 3, 7, 22, 41, 0);
        assert_eq!(time_text(&pm, false, false).as_str(), "10:41");
    }

    #[test]
    fn test_date_text() {
        let t = ClockTime::new(2024, 3, 7, 0, 0, 0);
        assert_eq!(date_text(&t, Style::DateInternational).as_str(), "07/03/2024");
        assert_eq!(date_text(&t, Style::DateUs).as_str(), "03/07/2024");
    }

    #[test]
    fn test_battery_fill_rows_from_bottom() {
        let mut data = vec![0u8; 144 * 168];
        let mut fb = FrameBuffer::new(&mut data, 144, effects::PixelFormat::Direct8, Size::new(144, 168)).unwrap();
        draw_battery(&mut fb, BatteryIcon::Half, Color::new(0xFF));
        // Interior is x 70..=73, y 85..=88; half fills y 87..=88.
        assert_eq!(fb.get_pixel(Point::new(71, 88)), Color::new(0xFF));
        assert_eq!(fb.get_pixel(Point::new(71, 87)), Color::new(0xFF));
        assert_eq!(fb.get_pixel(Point::new(71, 86)), Color::new(0));
        assert_eq!(fb.get_pixel(Point::new(69, 84)), Color::new(0xFF));
    }
}
