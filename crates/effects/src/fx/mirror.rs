//! Reflections across the region's horizontal or vertical axis.
//!
//! Row `y` pairs with row `h - y - 2`, so the region's last row (or column)
//! never takes part in a swap and the reflection axis sits half a pixel
//! above the geometric center.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::extent;
use crate::buffer::FrameBuffer;

fn swap(fb: &mut FrameBuffer<'_>, a: Point, b: Point) {
    if fb.contains(a) && fb.contains(b) {
        let (ca, cb) = (fb.get_pixel(a), fb.get_pixel(b));
        fb.set_pixel(a, cb);
        fb.set_pixel(b, ca);
    }
}

/// Flip the region upside down.
pub fn mirror_vertical(fb: &mut FrameBuffer<'_>, region: &Rectangle) {
    let (w, h) = extent(region);
    let origin = region.top_left;
    for y in 0..h / 2 {
        for x in 0..w {
            swap(
                fb,
                origin + Point::new(x, y),
                origin + Point::new(x, h - y - 2),
            );
        }
    }
}

/// Flip the region left to right.
pub fn mirror_horizontal(fb: &mut FrameBuffer<'_>, region: &Rectangle) {
    let (w, h) = extent(region);
    let origin = region.top_left;
    for y in 0..h {
        for x in 0..w / 2 {
            swap(
                fb,
                origin + Point::new(x, y),
                origin + Point::new(w - x - 2, y),
            );
        }
    }
}
