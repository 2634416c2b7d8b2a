//! Read-only packed images used as mask stencils and mask backgrounds.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::buffer::{read_pixel, validate, BufferError};
use crate::color::Color;
use crate::format::PixelFormat;

/// Borrowed packed image, addressed the same way as a [`crate::FrameBuffer`].
#[derive(Debug, Clone, Copy)]
pub struct Bitmap<'a> {
    data: &'a [u8],
    stride: usize,
    format: PixelFormat,
    size: Size,
}

impl<'a> Bitmap<'a> {
    /// Wrap `data` as an image of `size` pixels.
    ///
    /// # Errors
    ///
    /// [`BufferError`] when the stride or storage is too small.
    pub fn new(
        data: &'a [u8],
        stride: usize,
        format: PixelFormat,
        size: Size,
    ) -> Result<Self, BufferError> {
        validate(data.len(), stride, format, size)?;
        Ok(Self {
            data,
            stride,
            format,
            size,
        })
    }

    /// Pixel encoding of the image.
    #[must_use]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Image size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Image bounds anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size)
    }

    /// Pixel at `point`, or `None` outside the image.
    #[must_use]
    pub fn get_pixel(&self, point: Point) -> Option<Color> {
        self.bounds()
            .contains(point)
            .then(|| read_pixel(self.data, self.stride, self.format, point))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_inside_and_rejects_outside() {
        let data = [0b0000_0010u8, 0];
        let bitmap = Bitmap::new(&data, 1, PixelFormat::Mono1, Size::new(8, 2)).unwrap();
        assert_eq!(bitmap.get_pixel(Point::new(1, 0)), Some(Color::new(1)));
        assert_eq!(bitmap.get_pixel(Point::new(0, 0)), Some(Color::new(0)));
        assert_eq!(bitmap.get_pixel(Point::new(8, 0)), None);
        assert_eq!(bitmap.get_pixel(Point::new(0, -1)), None);
    }

    #[test]
    fn test_validates_storage() {
        let data = [0u8; 3];
        assert!(Bitmap::new(&data, 2, PixelFormat::Direct8, Size::new(2, 2)).is_err());
    }
}
