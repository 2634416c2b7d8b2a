//! Per-pixel color remaps.

use embedded_graphics::primitives::Rectangle;

use super::remap;
use crate::brightness::opposite_brightness;
use crate::buffer::FrameBuffer;
use crate::color::Color;

/// Invert every pixel. 8-bit pixels keep their alpha bits set.
pub fn invert(fb: &mut FrameBuffer<'_>, region: &Rectangle) {
    if fb.format().is_monochrome() {
        remap(fb, region, |old| Some(old.toggled()));
    } else {
        remap(fb, region, |old| Some(Color::new(!old.value() | 0xC0)));
    }
}

/// Swap black and white, leaving other colors alone. On 1-bit targets this
/// is a full invert.
pub fn invert_black_white(fb: &mut FrameBuffer<'_>, region: &Rectangle) {
    let (black, white) = (fb.format().black(), fb.format().white());
    if fb.format().is_monochrome() {
        remap(fb, region, |old| Some(old.toggled()));
    } else {
        remap(fb, region, |old| match old {
            c if c == black => Some(white),
            c if c == white => Some(black),
            _ => None,
        });
    }
}

/// Replace each 8-bit color by its brightness opposite. No-op on 1-bit
/// targets.
pub fn invert_brightness(fb: &mut FrameBuffer<'_>, region: &Rectangle) {
    if fb.format().is_monochrome() {
        return;
    }
    remap(fb, region, |old| Some(opposite_brightness(old)));
}

/// Paint pixels holding `from` with `to`. No-op on 1-bit targets.
pub fn colorize(fb: &mut FrameBuffer<'_>, region: &Rectangle, from: Color, to: Color) {
    if fb.format().is_monochrome() {
        return;
    }
    remap(fb, region, |old| (old == from).then_some(to));
}

/// Exchange two colors. No-op on 1-bit targets.
pub fn color_swap(fb: &mut FrameBuffer<'_>, region: &Rectangle, first: Color, second: Color) {
    if fb.format().is_monochrome() {
        return;
    }
    remap(fb, region, |old| {
        if old == first {
            Some(second)
        } else if old == second {
            Some(first)
        } else {
            None
        }
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::format::PixelFormat;
    use crate::palette;
    use embedded_graphics::prelude::*;

    fn mono(data: &mut [u8]) -> FrameBuffer<'_> {
        FrameBuffer::new(data, 1, PixelFormat::Mono1, Size::new(8, 8)).unwrap()
    }

    fn color(data: &mut [u8]) -> FrameBuffer<'_> {
        FrameBuffer::new(data, 4, PixelFormat::Direct8, Size::new(4, 4)).unwrap()
    }

    #[test]
    fn test_invert_mono_single_set_pixel() {
        let mut data = [0u8; 8];
        let mut fb = mono(&mut data);
        fb.set_pixel(Point::new(3, 3), Color::new(1));
        let bounds = fb.bounding_box();
        invert(&mut fb, &bounds);
        let ones = fb.bounding_box().points().filter(|&p| fb.get_pixel(p) == Color::new(1)).count();
        assert_eq!(ones, 63);
        assert_eq!(fb.get_pixel(Point::new(3, 3)), Color::new(0));
    }

    #[test]
    fn test_invert_direct8_keeps_alpha() {
        let mut data = [palette::RED.value(); 16];
        let mut fb = color(&mut data);
        let bounds = fb.bounding_box();
        invert(&mut fb, &bounds);
        assert_eq!(fb.get_pixel(Point::zero()), palette::CYAN);
    }

    #[test]
    fn test_invert_clips_to_display() {
        let mut data = [0xC0u8; 16];
        let mut fb = color(&mut data);
        invert(&mut fb, &Rectangle::new(Point::new(2, 2), Size::new(10, 10)));
        assert_eq!(fb.get_pixel(Point::new(1, 1)), palette::BLACK);
        assert_eq!(fb.get_pixel(Point::new(3, 3)), palette::WHITE);
    }

    #[test]
    fn test_black_white_swap_leaves_colors() {
        let mut data = [0u8; 16];
        data[0] = palette::BLACK.value();
        data[1] = palette::WHITE.value();
        data[2] = palette::ORANGE.value();
        let mut fb = color(&mut data);
        let bounds = fb.bounding_box();
        invert_black_white(&mut fb, &bounds);
        assert_eq!(&fb.as_bytes()[..3], &[0xFF, 0xC0, palette::ORANGE.value()]);
    }

    #[test]
    fn test_colorize_direct8() {
        let mut data = [0xC5u8; 16];
        data[2 * 4 + 2] = 0x00;
        let mut fb = color(&mut data);
        let bounds = fb.bounding_box();
        colorize(&mut fb, &bounds, Color::new(0x00), Color::new(0xFF));
        assert_eq!(fb.get_pixel(Point::new(2, 2)), Color::new(0xFF));
        assert_eq!(fb.as_bytes().iter().filter(|&&b| b == 0xC5).count(), 15);
    }

    #[test]
    fn test_color_effects_skip_mono() {
        let mut data = [0b1010_1010u8; 8];
        let mut fb = mono(&mut data);
        let bounds = fb.bounding_box();
        colorize(&mut fb, &bounds, Color::new(0), Color::new(1));
        color_swap(&mut fb, &bounds, Color::new(0), Color::new(1));
        invert_brightness(&mut fb, &bounds);
        assert_eq!(fb.as_bytes(), &[0b1010_1010; 8]);
    }

    #[test]
    fn test_swap_exchanges_both_ways() {
        let mut data = [palette::RED.value(); 16];
        data[5] = palette::BLUE.value();
        let mut fb = color(&mut data);
        let bounds = fb.bounding_box();
        color_swap(&mut fb, &bounds, palette::RED, palette::BLUE);
        assert_eq!(fb.get_pixel(Point::new(1, 1)), palette::RED);
        assert_eq!(fb.get_pixel(Point::new(0, 0)), palette::BLUE);
    }

    #[test]
    fn test_brightness_maps_grays() {
        let mut data = [palette::DARK_GRAY.value(); 16];
        let mut fb = color(&mut data);
        let bounds = fb.bounding_box();
        invert_brightness(&mut fb, &bounds);
        assert_eq!(fb.get_pixel(Point::new(3, 3)), palette::LIGHT_GRAY);
    }
}
