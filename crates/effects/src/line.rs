//! Fixed-point line rasterizer.
//!
//! Integer DDA with 8 fractional bits: the longer axis advances one pixel
//! per step while an accumulator carries the shorter axis. The rasterizer
//! backs the line-mode shadow, so besides plain drawing it knows two rules:
//!
//! - pixels holding `skip_color` are never overwritten;
//! - on 1-bit targets the draw color alternates every stepped pixel,
//!   producing a dotted ("dithered") line, and a [`VisitedMap`] keeps
//!   overlapping shadow lines from re-toggling the same pixel.

// Coordinates are bounded by the display (and the region sizes effects pass
// in), far below the range where the 8-bit fixed-point shifts could overflow.
#![allow(clippy::arithmetic_side_effects)]

use embedded_graphics::prelude::*;

use crate::buffer::FrameBuffer;
use crate::color::Color;

/// Bits tracked by a [`VisitedMap`]: one per pixel of a 144×168 display.
pub const VISITED_CAPACITY: usize = 144 * 168;

/// One bit per display pixel, row-major.
///
/// Pixels beyond [`VISITED_CAPACITY`] are never marked and always count as
/// unvisited.
#[derive(Debug, Clone)]
pub struct VisitedMap {
    bits: [u8; VISITED_CAPACITY / 8],
    width: u32,
}

impl VisitedMap {
    /// Empty map for a display `width` pixels wide.
    #[must_use]
    pub const fn new(width: u32) -> Self {
        Self {
            bits: [0; VISITED_CAPACITY / 8],
            width,
        }
    }

    /// Forget every mark and adopt a new display width.
    pub fn reset(&mut self, width: u32) {
        self.bits = [0; VISITED_CAPACITY / 8];
        self.width = width;
    }

    /// Forget every mark.
    pub fn clear(&mut self) {
        self.bits = [0; VISITED_CAPACITY / 8];
    }

    fn slot(&self, point: Point) -> Option<(usize, u8)> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        if x >= self.width {
            return None;
        }
        let index = usize::try_from(y.checked_mul(self.width)?.checked_add(x)?).ok()?;
        if index >= VISITED_CAPACITY {
            return None;
        }
        Some((index / 8, 1u8 << (index % 8)))
    }

    /// `true` when `point` has been marked.
    #[must_use]
    pub fn is_marked(&self, point: Point) -> bool {
        self.slot(point)
            .and_then(|(byte, mask)| self.bits.get(byte).map(|b| b & mask != 0))
            .unwrap_or(false)
    }

    /// Mark `point`; returns `true` when it was not marked before.
    pub fn mark(&mut self, point: Point) -> bool {
        let Some((byte, mask)) = self.slot(point) else {
            return true;
        };
        match self.bits.get_mut(byte) {
            Some(b) if *b & mask == 0 => {
                *b |= mask;
                true
            }
            Some(_) => false,
            None => true,
        }
    }

    /// Number of marked pixels.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }
}

impl Default for VisitedMap {
    fn default() -> Self {
        Self::new(144)
    }
}

/// Rasterize `from..=to` onto `fb`; returns the number of on-display pixels
/// stepped (written or not).
///
/// 1-bit targets: a pixel not yet in `visited` gets `draw_color` unless it
/// holds `skip_color`; the draw color then toggles and the pixel is marked.
/// 8-bit targets: a pixel gets `draw_color` unless it holds `skip_color` or
/// already holds `draw_color`.
pub fn draw_line(
    fb: &mut FrameBuffer<'_>,
    from: Point,
    to: Point,
    draw_color: Color,
    skip_color: Color,
    mut visited: Option<&mut VisitedMap>,
) -> u32 {
    let monochrome = fb.format().is_monochrome();

    let mut short_len = to.y - from.y;
    let mut long_len = to.x - from.x;
    let y_longer = short_len.abs() > long_len.abs();
    if y_longer {
        core::mem::swap(&mut short_len, &mut long_len);
    }
    let dec_inc = if long_len == 0 {
        0
    } else {
        (short_len << 8) / long_len
    };
    let step = if long_len > 0 { 1 } else { -1 };
    let (long_start, short_start) = if y_longer {
        (from.y, from.x)
    } else {
        (from.x, from.y)
    };

    let mut acc = 0x80 + (short_start << 8);
    let mut color = draw_color;
    let mut stepped = 0;
    for i in 0..=long_len.abs() {
        let along = long_start + i * step;
        let across = acc >> 8;
        acc += dec_inc * step;

        let point = if y_longer {
            Point::new(across, along)
        } else {
            Point::new(along, across)
        };
        if !fb.contains(point) {
            continue;
        }
        stepped += 1;

        let existing = fb.get_pixel(point);
        if monochrome {
            let fresh = visited.as_mut().map_or(true, |map| map.mark(point));
            if fresh {
                if existing != skip_color {
                    fb.set_pixel(point, color);
                }
                color = color.toggled();
            }
        } else if existing != skip_color && existing != color {
            fb.set_pixel(point, color);
        }
    }
    stepped
}
