//! Quarter-turn rotation of the square inscribed around the region center.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::{center, extent};
use crate::buffer::FrameBuffer;

/// Rotation sense as seen on screen (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Top moves to the right.
    Clockwise,
    /// Top moves to the left.
    CounterClockwise,
}

/// Rotate by 90° around `(ox + w/2, oy + h/2)`.
///
/// Pixels are moved in rings of four; a ring with any pixel off the display
/// is left untouched as a whole.
pub fn rotate_90(fb: &mut FrameBuffer<'_>, region: &Rectangle, direction: Direction) {
    let (w, h) = extent(region);
    let c = center(region);
    let q = w.min(h) / 2;
    for c1 in 0..q {
        for c2 in 1..q {
            let ring = [
                Point::new(c.x.saturating_add(c2), c.y.saturating_add(c1)),
                Point::new(c.x.saturating_add(c1), c.y.saturating_sub(c2)),
                Point::new(c.x.saturating_sub(c2), c.y.saturating_sub(c1)),
                Point::new(c.x.saturating_sub(c1), c.y.saturating_add(c2)),
            ];
            if !ring.iter().all(|&p| fb.contains(p)) {
                continue;
            }
            let mut colors = ring.map(|p| fb.get_pixel(p));
            // Each ring slot pulls from the next slot counter-clockwise.
            match direction {
                Direction::Clockwise => colors.rotate_left(1),
                Direction::CounterClockwise => colors.rotate_right(1),
            }
            for (point, color) in ring.into_iter().zip(colors) {
                fb.set_pixel(point, color);
            }
        }
    }
}
