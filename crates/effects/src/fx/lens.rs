//! Circular lens distortion.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::{center, copy_quadrants, extent, reach, scan};
use crate::buffer::FrameBuffer;

/// Thin-lens parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lens {
    /// Focal length in pixels; 0 disables the effect.
    pub focal: u8,
    /// Distance of the viewed object in pixels.
    pub object_distance: u8,
}

impl Lens {
    /// Lens with the given focal length and object distance.
    #[must_use]
    pub const fn new(focal: u8, object_distance: u8) -> Self {
        Self {
            focal,
            object_distance,
        }
    }
}

/// Source offset for destination offset `d`: `tan(asin(d / focal)) * distance`,
/// truncated. Angles past the lens edge give non-finite values, read as 0.
#[allow(clippy::cast_possible_truncation)] // float → int `as` saturates
#[allow(clippy::cast_precision_loss)] // |d| stays within the display's reach
fn source_offset(d: i32, focal: f32, distance: f32) -> i32 {
    let offset = libm::tanf(libm::asinf(d as f32 / focal)) * distance;
    if offset.is_finite() {
        offset as i32
    } else {
        0
    }
}

/// Refract the disc of radius `min(w, h) / 2` around the region center.
///
/// Destinations are visited from the rim inwards; those off the display are
/// skipped. Sources off the display clamp to the nearest edge pixel.
pub fn lens(fb: &mut FrameBuffer<'_>, region: &Rectangle, lens: Lens) {
    if lens.focal == 0 {
        return;
    }
    let focal = f32::from(lens.focal);
    let distance = f32::from(lens.object_distance);
    let (w, h) = extent(region);
    let r = w.min(h) / 2;
    let r_squared = i64::from(r) * i64::from(r);
    let c = center(region);
    let columns = reach(c.x, fb.width(), r);
    for y in scan(reach(c.y, fb.height(), r), true) {
        let y1 = source_offset(y, focal, distance);
        for x in scan(columns.clone(), true) {
            if i64::from(x) * i64::from(x) + i64::from(y) * i64::from(y) >= r_squared {
                continue;
            }
            let x1 = source_offset(x, focal, distance);
            copy_quadrants(fb, c, Point::new(x1, y1), Point::new(x, y));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::format::PixelFormat;

    #[test]
    fn test_offsets() {
        assert_eq!(source_offset(0, 10.0, 10.0), 0);
        // asin(0.5) = 30°, tan(30°) ≈ 0.577
        assert_eq!(source_offset(5, 10.0, 10.0), 5);
        // Beyond the focal length asin is NaN.
        assert_eq!(source_offset(11, 10.0, 10.0), 0);
    }

    #[test]
    fn test_zero_focal_is_noop() {
        let mut data = [0u8; 64];
        data[9] = 0xFF;
        let mut fb = FrameBuffer::new(&mut data, 8, PixelFormat::Direct8, Size::new(8, 8)).unwrap();
        lens(&mut fb, &Rectangle::new(Point::zero(), Size::new(8, 8)), Lens::new(0, 20));
        assert_eq!(fb.get_pixel(Point::new(1, 1)), Color::new(0xFF));
        assert_eq!(fb.as_bytes().iter().filter(|&&b| b != 0).count(), 1);
    }

    #[test]
    fn test_center_pixel_is_stable() {
        let mut data = [0xC0u8; 121];
        data[5 * 11 + 5] = 0xFF;
        let mut fb = FrameBuffer::new(&mut data, 11, PixelFormat::Direct8, Size::new(11, 11)).unwrap();
        lens(&mut fb, &Rectangle::new(Point::zero(), Size::new(11, 11)), Lens::new(30, 8));
        assert_eq!(fb.get_pixel(Point::new(5, 5)), Color::new(0xFF));
        // Corners are outside the disc.
        assert_eq!(fb.get_pixel(Point::new(0, 0)), Color::new(0xC0));
    }

    #[test]
    fn test_far_sources_clamp_to_edge() {
        const LEFT: u8 = 0xF0;
        const RIGHT: u8 = 0xCF;
        let mut data = [0xC0u8; 100];
        data[50] = LEFT;
        data[55] = 0xFF;
        data[59] = RIGHT;
        let mut fb = FrameBuffer::new(&mut data, 10, PixelFormat::Direct8, Size::new(10, 10)).unwrap();
        // Center (5, 5); offsets 2..=4 sample 8, 12 and 17 pixels out.
        lens(&mut fb, &Rectangle::new(Point::zero(), Size::new(10, 10)), Lens::new(10, 40));
        assert_eq!(
            &fb.as_bytes()[50..60],
            &[LEFT, LEFT, LEFT, LEFT, LEFT, 0xFF, RIGHT, RIGHT, RIGHT, RIGHT]
        );
    }

    #[test]
    fn test_oversized_region_leaves_small_display_alone() {
        let mut data = [0xE5u8; 100];
        let mut fb = FrameBuffer::new(&mut data, 10, PixelFormat::Direct8, Size::new(10, 10)).unwrap();
        // The disc's inside lies tens of thousands of pixels away.
        lens(&mut fb, &Rectangle::new(Point::zero(), Size::new(100_000, 100_000)), Lens::new(200, 10));
        assert!(fb.as_bytes().iter().all(|&b| b == 0xE5));
    }
}
