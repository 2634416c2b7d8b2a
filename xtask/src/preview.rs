use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use effects::display::{self, DisplayProfile};
use effects::{
    Color, Direction, Effect, EffectLayer, Lens, MemoryDisplay, Offset, OffsetMode, PixelFormat,
    Zoom, MAX_EFFECTS,
};
use embedded_graphics::prelude::*;
use image::{Rgb, RgbImage};
use std::path::PathBuf;
use watchface::{ClockTime, WatchConfig, WatchFace};

/// Effects selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EffectArg {
    Invert,
    InvertBw,
    InvertBrightness,
    MirrorVertical,
    MirrorHorizontal,
    RotateCw,
    RotateCcw,
    Zoom,
    Lens,
    Shadow,
    Outline,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Display profile: aplite, basalt or basalt-palette
    #[arg(long, default_value = "aplite")]
    profile: String,
    /// Local time as HH:MM:SS
    #[arg(long, default_value = "10:08:42")]
    time: String,
    /// Date as YYYY-MM-DD
    #[arg(long, default_value = "2024-03-07")]
    date: String,
    /// 12-hour clock
    #[arg(long)]
    twelve_hour: bool,
    /// Configuration messages as KEY=VALUE (e.g. 5=2 for the zulu style)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    settings: Vec<String>,
    /// Battery percentage
    #[arg(long, default_value_t = 80)]
    battery: u8,
    /// Extra effects run over the whole face, in order
    #[arg(long = "effect", value_enum)]
    effects: Vec<EffectArg>,
    /// Output PNG path
    #[arg(long, short, default_value = "target/preview.png")]
    out: PathBuf,
}

pub fn run(args: &PreviewArgs) -> Result<()> {
    let profile = display::by_name(&args.profile)
        .with_context(|| format!("Unknown display profile '{}'", args.profile))?;
    if args.effects.len() > MAX_EFFECTS {
        bail!("At most {MAX_EFFECTS} effects fit in one layer");
    }

    let now = parse_clock(&args.date, &args.time)?;
    let mut config = WatchConfig::default();
    for setting in &args.settings {
        let (key, value) = setting
            .split_once('=')
            .with_context(|| format!("Expected KEY=VALUE, got '{setting}'"))?;
        config
            .apply(key.trim().parse()?, value.trim().parse()?)
            .with_context(|| format!("Rejected setting '{setting}'"))?;
    }

    let mut face = WatchFace::new(config, !args.twelve_hour);
    face.start(now, args.battery, false, true);

    let image = match profile.format {
        PixelFormat::Direct8 => {
            render(Box::new(MemoryDisplay::<{ display::COLOR_FRAME_BYTES }>::new(profile)?), &mut face, &args.effects, profile)
        }
        PixelFormat::Mono1 | PixelFormat::MonoPalette1 => {
            render(Box::new(MemoryDisplay::<{ display::MONO_FRAME_BYTES }>::new(profile)?), &mut face, &args.effects, profile)
        }
    };

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    image
        .save(&args.out)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    println!(
        "{}",
        format!("📸 Preview saved: {} ({})", args.out.display(), profile.name).green()
    );
    Ok(())
}

fn render<const N: usize>(
    mut display: Box<MemoryDisplay<N>>,
    face: &mut WatchFace,
    effects: &[EffectArg],
    profile: &DisplayProfile,
) -> RgbImage {
    face.render(display.as_mut());

    let mut layer = EffectLayer::new(profile.bounds());
    for arg in effects {
        // Length was checked against MAX_EFFECTS.
        let _ = layer.add_effect(effect_for(*arg, profile.format));
    }
    layer.render(display.as_mut());

    let format = display.format();
    RgbImage::from_fn(profile.width, profile.height, |x, y| {
        let point = Point::new(x as i32, y as i32);
        Rgb(to_rgb(display.pixel(point), format))
    })
}

fn effect_for(arg: EffectArg, format: PixelFormat) -> Effect<'static> {
    let shadow = Offset {
        dx: 3,
        dy: 3,
        offset_color: if format.is_monochrome() { format.white() } else { effects::palette::DARK_GRAY },
        orig_color: format.white(),
        mode: OffsetMode::Stamp,
    };
    match arg {
        EffectArg::Invert => Effect::Invert,
        EffectArg::InvertBw => Effect::InvertBlackWhite,
        EffectArg::InvertBrightness => Effect::InvertBrightness,
        EffectArg::MirrorVertical => Effect::MirrorVertical,
        EffectArg::MirrorHorizontal => Effect::MirrorHorizontal,
        EffectArg::RotateCw => Effect::Rotate90(Direction::Clockwise),
        EffectArg::RotateCcw => Effect::Rotate90(Direction::CounterClockwise),
        EffectArg::Zoom => Effect::Zoom(Zoom::from_percent(150, 150)),
        EffectArg::Lens => Effect::Lens(Lens::new(40, 60)),
        EffectArg::Shadow => Effect::shadow(shadow),
        EffectArg::Outline => Effect::Outline(Offset { dx: 1, dy: 1, ..shadow }),
    }
}

/// Screen color of a stored pixel: 1-bit frames are black/white, 8-bit
/// frames expand each 2-bit channel to 0, 85, 170 or 255.
fn to_rgb(color: Color, format: PixelFormat) -> [u8; 3] {
    if format.is_monochrome() {
        return if color.value() == 0 { [0; 3] } else { [0xFF; 3] };
    }
    let v = color.value();
    [(v >> 4) & 0b11, (v >> 2) & 0b11, v & 0b11].map(|c| c * 85)
}

fn parse_clock(date: &str, time: &str) -> Result<ClockTime> {
    let date_parts: Vec<&str> = date.split('-').collect();
    let time_parts: Vec<&str> = time.split(':').collect();
    let ([year, month, day], [hour, minute, second]) = (date_parts.as_slice(), time_parts.as_slice())
    else {
        bail!("Expected YYYY-MM-DD and HH:MM:SS, got '{date}' '{time}'");
    };
    let t = ClockTime::new(
        year.parse().context("year")?,
        month.parse().context("month")?,
        day.parse().context("day")?,
        hour.parse().context("hour")?,
        minute.parse().context("minute")?,
        second.parse().context("second")?,
    );
    if !(1..=12).contains(&t.month) || !(1..=31).contains(&t.day) || t.hour > 23 || t.minute > 59 || t.second > 59 {
        bail!("Date or time out of range: {date} {time}");
    }
    Ok(t)
}
