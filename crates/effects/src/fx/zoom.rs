//! Center-anchored scaling with 4-bit fixed-point ratios.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::{center, copy_quadrants, extent, reach, scan};
use crate::buffer::FrameBuffer;

/// Per-axis scale factors, `0x10` = 100 %.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Zoom {
    /// Vertical ratio.
    pub ratio_y: u8,
    /// Horizontal ratio.
    pub ratio_x: u8,
}

impl Zoom {
    /// 1:1 on both axes.
    pub const IDENTITY: Self = Self::new(0x10, 0x10);

    /// Ratios in 1/16 steps.
    #[must_use]
    pub const fn new(ratio_y: u8, ratio_x: u8) -> Self {
        Self { ratio_y, ratio_x }
    }

    /// Unpack `0xYYXX`.
    #[must_use]
    pub const fn from_packed(packed: u16) -> Self {
        let [ratio_y, ratio_x] = packed.to_be_bytes();
        Self { ratio_y, ratio_x }
    }

    /// Pack as `0xYYXX`.
    #[must_use]
    pub const fn packed(self) -> u16 {
        u16::from_be_bytes([self.ratio_y, self.ratio_x])
    }

    /// Ratios from percentages, truncated to 1/16 and saturated at 255.
    #[must_use]
    pub fn from_percent(percent_y: u16, percent_x: u16) -> Self {
        let to_ratio = |percent: u16| {
            let sixteenths = u32::from(percent).saturating_mul(16) / 100;
            u8::try_from(sixteenths).unwrap_or(u8::MAX)
        };
        Self::new(to_ratio(percent_y), to_ratio(percent_x))
    }
}

/// Scale the region contents around the region center.
///
/// A ratio above `0x10` magnifies, below shrinks. For each destination
/// offset the source offset is `(d << 4) / ratio`; when magnifying the
/// destination walks from the outer edge inwards so sources are read before
/// they are overwritten. Sources off the display clamp to the nearest edge
/// pixel. Offsets whose destinations all fall off the display are skipped.
/// Any zero ratio makes this a no-op.
pub fn zoom(fb: &mut FrameBuffer<'_>, region: &Rectangle, zoom: Zoom) {
    let (ratio_y, ratio_x) = (i32::from(zoom.ratio_y), i32::from(zoom.ratio_x));
    if ratio_y == 0 || ratio_x == 0 {
        return;
    }
    let (w, h) = extent(region);
    let c = center(region);
    let rows = reach(c.y, fb.height(), h / 2);
    let columns = reach(c.x, fb.width(), w / 2);
    for ys in scan(rows, ratio_y > 16) {
        let y1 = source_offset(ys, ratio_y);
        for xs in scan(columns.clone(), ratio_x > 16) {
            let x1 = source_offset(xs, ratio_x);
            copy_quadrants(fb, c, Point::new(x1, y1), Point::new(xs, ys));
        }
    }
}

/// `(d << 4) / ratio`, saturating at `i32::MAX`.
fn source_offset(d: i32, ratio: i32) -> i32 {
    i32::try_from((i64::from(d) << 4) / i64::from(ratio)).unwrap_or(i32::MAX)
}
