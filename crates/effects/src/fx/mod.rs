//! The effect catalog.
//!
//! Every function here works on an already captured [`FrameBuffer`] and a
//! region; [`crate::Effect::apply`] wraps them in a capture. Regions may
//! overhang the display: every coordinate is checked with
//! [`FrameBuffer::contains`] before it is touched.

// Region arithmetic stays within a few multiples of the display size.
#![allow(clippy::arithmetic_side_effects)]

mod fps;
mod invert;
mod lens;
mod mask;
mod mirror;
mod rotate;
mod shadow;
mod zoom;

pub use fps::{fps, format_fps, FpsState};
pub use invert::{colorize, color_swap, invert, invert_black_white, invert_brightness};
pub use lens::{lens, Lens};
pub use mask::{mask, Mask, MaskSource};
pub use mirror::{mirror_horizontal, mirror_vertical};
pub use rotate::{rotate_90, Direction};
pub use shadow::{outline, shadow, Offset, OffsetMode};
pub use zoom::{zoom, Zoom};

use core::ops::RangeInclusive;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::buffer::FrameBuffer;
use crate::color::Color;

/// Region width and height as signed coordinates.
pub(crate) fn extent(region: &Rectangle) -> (i32, i32) {
    (
        i32::try_from(region.size.width).unwrap_or(i32::MAX),
        i32::try_from(region.size.height).unwrap_or(i32::MAX),
    )
}

/// Center pixel of `region`: `origin + size / 2`.
pub(crate) fn center(region: &Rectangle) -> Point {
    let (w, h) = extent(region);
    Point::new(
        region.top_left.x.saturating_add(w / 2),
        region.top_left.y.saturating_add(h / 2),
    )
}

/// Offsets `d` in `0..=max` for which `center + d` or `center - d` falls in
/// `0..len`. Offsets outside the range only address off-display pixels.
pub(crate) fn reach(center: i32, len: i32, max: i32) -> RangeInclusive<i32> {
    let (c, len) = (i64::from(center), i64::from(len));
    let (lo, hi) = if c < 0 {
        (-c, len - 1 - c)
    } else if c >= len {
        (c - len + 1, c)
    } else {
        (0, c.max(len - 1 - c))
    };
    let lo = i32::try_from(lo).unwrap_or(i32::MAX);
    let hi = i32::try_from(hi).unwrap_or(i32::MAX).min(max);
    lo..=hi
}

/// `range` walked upwards, or downwards when `outer_first`.
pub(crate) fn scan(range: RangeInclusive<i32>, outer_first: bool) -> impl Iterator<Item = i32> {
    let (lo, hi) = range.into_inner();
    let steps = if hi >= lo { (hi - lo).saturating_add(1) } else { 0 };
    (0..steps).map(move |i| if outer_first { hi - i } else { lo + i })
}

/// Replace each on-display pixel of `region` for which `f` returns a color.
pub(crate) fn remap(
    fb: &mut FrameBuffer<'_>,
    region: &Rectangle,
    mut f: impl FnMut(Color) -> Option<Color>,
) {
    for point in region.points() {
        if !fb.contains(point) {
            continue;
        }
        if let Some(color) = f(fb.get_pixel(point)) {
            fb.set_pixel(point, color);
        }
    }
}

/// Sign pairs `(sy, sx)` of the four quadrants, in copy order.
pub(crate) const QUADRANTS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Copy the four mirrored source pixels `center ± src` onto
/// `center ± dst`. Sources are clamped to the display, off-display
/// destinations are skipped.
pub(crate) fn copy_quadrants(fb: &mut FrameBuffer<'_>, center: Point, src: Point, dst: Point) {
    for (sy, sx) in QUADRANTS {
        let from = fb.clamp(Point::new(
            center.x.saturating_add(src.x.saturating_mul(sx)),
            center.y.saturating_add(src.y.saturating_mul(sy)),
        ));
        let to = Point::new(
            center.x.saturating_add(dst.x.saturating_mul(sx)),
            center.y.saturating_add(dst.y.saturating_mul(sy)),
        );
        if fb.contains(to) {
            let color = fb.get_pixel(from);
            fb.set_pixel(to, color);
        }
    }
}

/// Draw `text` in `color` with `font`, top-aligned in `region` and clipped
/// to it.
pub(crate) fn draw_text(
    fb: &mut FrameBuffer<'_>,
    region: &Rectangle,
    text: &str,
    font: &MonoFont<'_>,
    alignment: Alignment,
    color: Color,
) {
    let (w, _) = extent(region);
    let x = match alignment {
        Alignment::Left => region.top_left.x,
        Alignment::Center => region.top_left.x + w / 2,
        Alignment::Right => region.top_left.x + w - 1,
    };
    let character_style = MonoTextStyle::new(font, color);
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Top)
        .build();
    let mut clipped = fb.clipped(region);
    // The frame buffer's DrawTarget is infallible.
    Text::with_text_style(text, Point::new(x, region.top_left.y), character_style, text_style)
        .draw(&mut clipped)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reach_covers_on_display_offsets() {
        // Center inside a 10-pixel axis.
        assert_eq!(reach(3, 10, 50), 0..=6);
        assert_eq!(reach(3, 10, 4), 0..=4);
        // Center before and after the axis.
        assert_eq!(reach(-5, 10, 50), 5..=14);
        assert_eq!(reach(12, 10, 50), 3..=12);
        // Nothing within the region's half-size reaches the display.
        assert!(reach(i32::MAX, 10, 50_000).is_empty());
    }

    #[test]
    fn test_scan_order() {
        assert!(scan(2..=4, false).eq([2, 3, 4]));
        assert!(scan(2..=4, true).eq([4, 3, 2]));
        assert_eq!(scan(i32::MAX..=5, true).count(), 0);
    }
}
