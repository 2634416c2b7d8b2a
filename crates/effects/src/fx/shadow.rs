//! Drop shadows and outlines cast from every pixel of one color.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::buffer::FrameBuffer;
use crate::color::Color;
use crate::line::{draw_line, VisitedMap};

/// How a shadow reaches its offset position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OffsetMode {
    /// Single pixel at the offset.
    Stamp,
    /// Line from the source pixel to the offset (a "long" shadow).
    Line,
}

/// Shadow/outline parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Offset {
    /// Horizontal offset.
    pub dx: i32,
    /// Vertical offset.
    pub dy: i32,
    /// Color painted at the offset.
    pub offset_color: Color,
    /// Color of the pixels that cast.
    pub orig_color: Color,
    /// Shadow shape; ignored by [`outline`].
    pub mode: OffsetMode,
}

/// Cast a shadow from every `orig_color` pixel of the region.
///
/// `visited` dedupes line-mode shadows on 1-bit targets; pass a cleared map.
pub fn shadow(
    fb: &mut FrameBuffer<'_>,
    region: &Rectangle,
    offset: &Offset,
    mut visited: Option<&mut VisitedMap>,
) {
    let delta = Point::new(offset.dx, offset.dy);
    for point in region.points() {
        if !fb.contains(point) || fb.get_pixel(point) != offset.orig_color {
            continue;
        }
        let target = point + delta;
        match offset.mode {
            OffsetMode::Line => {
                draw_line(
                    fb,
                    point,
                    target,
                    offset.offset_color,
                    offset.orig_color,
                    visited.as_deref_mut(),
                );
            }
            OffsetMode::Stamp => {
                if fb.contains(target) {
                    let existing = fb.get_pixel(target);
                    if existing != offset.orig_color && existing != offset.offset_color {
                        fb.set_pixel(target, offset.offset_color);
                    }
                }
            }
        }
    }
}

/// Diagonal sign pairs in stamping order.
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

/// Stamp `offset_color` at the four diagonal offsets `(±dx, ±dy)` of every
/// `orig_color` pixel, never over `orig_color` itself.
pub fn outline(fb: &mut FrameBuffer<'_>, region: &Rectangle, offset: &Offset) {
    for point in region.points() {
        if !fb.contains(point) || fb.get_pixel(point) != offset.orig_color {
            continue;
        }
        for (sx, sy) in DIAGONALS {
            let target = point + Point::new(sx * offset.dx, sy * offset.dy);
            if fb.contains(target) && fb.get_pixel(target) != offset.orig_color {
                fb.set_pixel(target, offset.offset_color);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::format::PixelFormat;
    use crate::palette::{BLACK, DARK_GRAY, WHITE};

    fn frame(data: &mut [u8; 64]) -> FrameBuffer<'_> {
        FrameBuffer::new(data, 8, PixelFormat::Direct8, Size::new(8, 8)).unwrap()
    }

    fn bounds() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(8, 8))
    }

    const STAMP: Offset = Offset {
        dx: 1,
        dy: 1,
        offset_color: DARK_GRAY,
        orig_color: WHITE,
        mode: OffsetMode::Stamp,
    };

    #[test]
    fn test_stamp_shadow() {
        let mut data = [BLACK.value(); 64];
        let mut fb = frame(&mut data);
        fb.set_pixel(Point::new(2, 2), WHITE);
        fb.set_pixel(Point::new(3, 3), WHITE);
        shadow(&mut fb, &bounds(), &STAMP, None);
        // (3, 3) is white and keeps its color; (4, 4) gets the shadow.
        assert_eq!(fb.get_pixel(Point::new(3, 3)), WHITE);
        assert_eq!(fb.get_pixel(Point::new(4, 4)), DARK_GRAY);
    }

    #[test]
    fn test_stamp_shadow_is_idempotent() {
        let mut data = [BLACK.value(); 64];
        let mut fb = frame(&mut data);
        fb.set_pixel(Point::new(1, 5), WHITE);
        fb.set_pixel(Point::new(6, 6), WHITE);
        shadow(&mut fb, &bounds(), &STAMP, None);
        let once = fb.as_bytes().to_vec();
        shadow(&mut fb, &bounds(), &STAMP, None);
        assert_eq!(fb.as_bytes(), once.as_slice());
    }

    #[test]
    fn test_line_shadow_stops_at_display_edge() {
        let mut data = [BLACK.value(); 64];
        let mut fb = frame(&mut data);
        fb.set_pixel(Point::new(4, 1), WHITE);
        let long = Offset {
            dx: 0,
            dy: 20,
            mode: OffsetMode::Line,
            ..STAMP
        };
        shadow(&mut fb, &bounds(), &long, None);
        assert_eq!(fb.get_pixel(Point::new(4, 1)), WHITE);
        for y in 2..8 {
            assert_eq!(fb.get_pixel(Point::new(4, y)), DARK_GRAY);
        }
    }

    #[test]
    fn test_mono_line_shadow_dithers() {
        let mut data = [0u8; 8];
        let mut fb = FrameBuffer::new(&mut data, 1, PixelFormat::Mono1, Size::new(8, 8)).unwrap();
        fb.set_pixel(Point::new(0, 0), Color::new(1));
        let mut visited = VisitedMap::new(8);
        let long = Offset {
            dx: 7,
            dy: 0,
            offset_color: Color::new(1),
            orig_color: Color::new(1),
            mode: OffsetMode::Line,
        };
        shadow(&mut fb, &Rectangle::new(Point::zero(), Size::new(1, 1)), &long, Some(&mut visited));
        // Skip color = orig: x = 0 keeps its pixel, the pattern starts there.
        assert_eq!(fb.as_bytes()[0], 0b0101_0101);
        assert_eq!(visited.count(), 8);
    }

    #[test]
    fn test_outline_four_diagonals() {
        let mut data = [BLACK.value(); 64];
        let mut fb = frame(&mut data);
        fb.set_pixel(Point::new(4, 4), WHITE);
        fb.set_pixel(Point::new(5, 5), WHITE);
        outline(&mut fb, &bounds(), &STAMP);
        for p in [Point::new(3, 3), Point::new(5, 3), Point::new(3, 5), Point::new(6, 6), Point::new(6, 4), Point::new(4, 6)] {
            assert_eq!(fb.get_pixel(p), DARK_GRAY, "{p:?}");
        }
        assert_eq!(fb.get_pixel(Point::new(5, 5)), WHITE);
        assert_eq!(fb.get_pixel(Point::new(4, 5)), BLACK);
    }
}
