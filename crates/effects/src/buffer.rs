//! Pixel accessor over packed frame storage.
//!
//! [`FrameBuffer`] is the handle every effect works through while a capture
//! is held. It knows the stride, encoding and physical size of the display
//! and exposes single-pixel reads/writes plus an `embedded-graphics`
//! [`DrawTarget`] for text and primitives.
//!
//! # Addressing
//!
//! ```text
//! Mono1 / MonoPalette1   byte = y * stride + x / 8, bit = x % 8
//!                        Mono1 is LSB-first, MonoPalette1 MSB-first
//! Direct8                byte = y * stride + x
//! ```
//!
//! The accessor does not clamp to the display: effects check
//! [`FrameBuffer::contains`] first. An address outside the storage reads as
//! color 0 and the write is dropped.

// Bit positions are always `x % 8` (0..=7), so every shift below is in range;
// row/column offsets go through checked_* before touching the storage.
#![allow(clippy::arithmetic_side_effects)]

use core::convert::Infallible;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Pixel;

use crate::color::Color;
use crate::format::PixelFormat;

/// Reasons a buffer or bitmap view cannot be built over some storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// The row stride cannot hold one row of pixels.
    StrideTooSmall {
        /// Stride passed in, in bytes.
        stride: usize,
        /// Smallest stride that holds the width.
        required: usize,
    },
    /// The storage is shorter than `stride * height`.
    StorageTooSmall {
        /// Storage length in bytes.
        len: usize,
        /// Bytes needed for the full frame.
        required: usize,
    },
    /// `stride * height` does not fit in `usize`.
    TooLarge,
}

#[cfg(feature = "std")]
impl std::error::Error for BufferError {}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::StrideTooSmall { stride, required } => {
                write!(f, "stride {stride} too small, need at least {required} bytes")
            }
            Self::StorageTooSmall { len, required } => {
                write!(f, "storage holds {len} bytes, frame needs {required}")
            }
            Self::TooLarge => write!(f, "frame size overflows the address space"),
        }
    }
}

/// Check that `len` bytes with the given `stride` hold a `size` frame.
pub(crate) fn validate(
    len: usize,
    stride: usize,
    format: PixelFormat,
    size: Size,
) -> Result<(), BufferError> {
    let required = format.min_stride(size.width);
    if stride < required {
        return Err(BufferError::StrideTooSmall { stride, required });
    }
    let height = usize::try_from(size.height).map_err(|_| BufferError::TooLarge)?;
    let required = stride.checked_mul(height).ok_or(BufferError::TooLarge)?;
    if len < required {
        return Err(BufferError::StorageTooSmall { len, required });
    }
    Ok(())
}

/// Byte index and bit position of `point`, or `None` for negative or
/// overflowing coordinates.
fn locate(stride: usize, format: PixelFormat, point: Point) -> Option<(usize, u32)> {
    let x = usize::try_from(point.x).ok()?;
    let y = usize::try_from(point.y).ok()?;
    let row = y.checked_mul(stride)?;
    if format.is_monochrome() {
        let bit = u32::try_from(x % 8).ok()?;
        Some((row.checked_add(x / 8)?, bit))
    } else {
        Some((row.checked_add(x)?, 0))
    }
}

/// Decode the pixel at `point` from packed storage.
pub(crate) fn read_pixel(data: &[u8], stride: usize, format: PixelFormat, point: Point) -> Color {
    let Some((index, bit)) = locate(stride, format, point) else {
        return Color::new(0);
    };
    let Some(&byte) = data.get(index) else {
        return Color::new(0);
    };
    match format {
        PixelFormat::Mono1 => Color::new((byte >> bit) & 1),
        PixelFormat::MonoPalette1 => Color::new(u8::from((byte << bit) & 0x80 != 0)),
        PixelFormat::Direct8 => Color::new(byte),
    }
}

/// Encode `color` at `point` into packed storage.
pub(crate) fn write_pixel(
    data: &mut [u8],
    stride: usize,
    format: PixelFormat,
    point: Point,
    color: Color,
) {
    let Some((index, bit)) = locate(stride, format, point) else {
        return;
    };
    let Some(byte) = data.get_mut(index) else {
        return;
    };
    let mask = match format {
        PixelFormat::Mono1 => 1u8 << bit,
        PixelFormat::MonoPalette1 => 0x80u8 >> bit,
        PixelFormat::Direct8 => {
            *byte = color.value();
            return;
        }
    };
    if color.value() == 0 {
        *byte &= !mask;
    } else {
        *byte |= mask;
    }
}

/// Mutable view of a display frame.
#[derive(Debug)]
pub struct FrameBuffer<'a> {
    data: &'a mut [u8],
    stride: usize,
    format: PixelFormat,
    size: Size,
}

impl<'a> FrameBuffer<'a> {
    /// Wrap `data` as a frame of `size` pixels with `stride` bytes per row.
    ///
    /// # Errors
    ///
    /// [`BufferError`] when the stride cannot hold a row or the storage
    /// cannot hold `stride * height` bytes.
    pub fn new(
        data: &'a mut [u8],
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

    /// Pixel encoding of the storage.
    #[must_use]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per row.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Physical display width in pixels, as a signed coordinate.
    #[must_use]
    pub fn width(&self) -> i32 {
        i32::try_from(self.size.width).unwrap_or(i32::MAX)
    }

    /// Physical display height in pixels, as a signed coordinate.
    #[must_use]
    pub fn height(&self) -> i32 {
        i32::try_from(self.size.height).unwrap_or(i32::MAX)
    }

    /// `true` when `point` lies on the physical display.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (0..self.width()).contains(&point.x) && (0..self.height()).contains(&point.y)
    }

    /// Nearest on-display point to `point`.
    #[must_use]
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(0, self.width().saturating_sub(1).max(0)),
            point.y.clamp(0, self.height().saturating_sub(1).max(0)),
        )
    }

    /// Read one pixel. No display clamping; see the module docs.
    #[must_use]
    pub fn get_pixel(&self, point: Point) -> Color {
        read_pixel(self.data, self.stride, self.format, point)
    }

    /// Write one pixel. No display clamping; see the module docs.
    pub fn set_pixel(&mut self, point: Point, color: Color) {
        write_pixel(self.data, self.stride, self.format, point, color);
    }

    /// Fill the whole display with `color`.
    pub fn fill(&mut self, color: Color) {
        let bounds = self.bounding_box();
        for point in bounds.points() {
            self.set_pixel(point, color);
        }
    }

    /// Fill the on-display part of `region` with `color`.
    pub fn fill_region(&mut self, region: &Rectangle, color: Color) {
        for point in region.points() {
            if self.contains(point) {
                self.set_pixel(point, color);
            }
        }
    }

    /// Raw frame bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.data
    }
}

impl OriginDimensions for FrameBuffer<'_> {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer<'_> {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if self.contains(point) {
                self.set_pixel(point, color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn frame(data: &mut [u8], format: PixelFormat, w: u32, h: u32) -> FrameBuffer<'_> {
        let stride = format.min_stride(w);
        FrameBuffer::new(data, stride, format, Size::new(w, h)).unwrap()
    }

    #[test]
    fn test_mono1_is_lsb_first() {
        let mut data = [0u8; 8];
        let mut fb = frame(&mut data, PixelFormat::Mono1, 8, 8);
        fb.set_pixel(Point::new(0, 0), Color::new(1));
        fb.set_pixel(Point::new(3, 1), Color::new(1));
        assert_eq!(fb.as_bytes()[0], 0b0000_0001);
        assert_eq!(fb.as_bytes()[1], 0b0000_1000);
    }

    #[test]
    fn test_palette1_is_msb_first() {
        let mut data = [0u8; 8];
        let mut fb = frame(&mut data, PixelFormat::MonoPalette1, 8, 8);
        fb.set_pixel(Point::new(0, 0), Color::new(1));
        fb.set_pixel(Point::new(3, 1), Color::new(1));
        assert_eq!(fb.as_bytes()[0], 0b1000_0000);
        assert_eq!(fb.as_bytes()[1], 0b0001_0000);
        assert_eq!(fb.get_pixel(Point::new(3, 1)), Color::new(1));
        assert_eq!(fb.get_pixel(Point::new(4, 1)), Color::new(0));
    }

    #[test]
    fn test_mono_write_nonzero_sets_zero_clears() {
        let mut data = [0u8; 2];
        let mut fb = frame(&mut data, PixelFormat::Mono1, 16, 1);
        fb.set_pixel(Point::new(9, 0), Color::new(0x7F));
        assert_eq!(fb.get_pixel(Point::new(9, 0)), Color::new(1));
        fb.set_pixel(Point::new(9, 0), Color::new(0));
        assert_eq!(fb.get_pixel(Point::new(9, 0)), Color::new(0));
        assert_eq!(fb.as_bytes(), &[0, 0]);
    }

    #[test]
    fn test_direct8_uses_one_byte_per_pixel() {
        let mut data = [0u8; 12];
        let mut fb = FrameBuffer::new(&mut data, 4, PixelFormat::Direct8, Size::new(3, 3)).unwrap();
        fb.set_pixel(Point::new(2, 1), Color::new(0xE3));
        assert_eq!(fb.as_bytes()[6], 0xE3);
        assert_eq!(fb.get_pixel(Point::new(2, 1)), Color::new(0xE3));
    }

    #[test]
    fn test_out_of_storage_reads_zero_and_drops_writes() {
        let mut data = [0xFFu8; 4];
        let mut fb = frame(&mut data, PixelFormat::Direct8, 2, 2);
        assert_eq!(fb.get_pixel(Point::new(-1, 0)), Color::new(0));
        assert_eq!(fb.get_pixel(Point::new(0, 9)), Color::new(0));
        fb.set_pixel(Point::new(0, 9), Color::new(0));
        assert_eq!(fb.as_bytes(), &[0xFF; 4]);
    }

    #[test]
    fn test_rejects_short_stride() {
        let mut data = [0u8; 64];
        let err = FrameBuffer::new(&mut data, 1, PixelFormat::Mono1, Size::new(9, 2)).unwrap_err();
        assert_eq!(err, BufferError::StrideTooSmall { stride: 1, required: 2 });
    }

    #[test]
    fn test_rejects_short_storage() {
        let mut data = [0u8; 10];
        let err = FrameBuffer::new(&mut data, 4, PixelFormat::Direct8, Size::new(4, 3)).unwrap_err();
        assert_eq!(err, BufferError::StorageTooSmall { len: 10, required: 12 });
    }

    #[test]
    fn test_contains_and_clamp() {
        let mut data = [0u8; 16];
        let fb = frame(&mut data, PixelFormat::Direct8, 4, 4);
        assert!(fb.contains(Point::new(3, 3)));
        assert!(!fb.contains(Point::new(4, 0)));
        assert!(!fb.contains(Point::new(0, -1)));
        assert_eq!(fb.clamp(Point::new(-5, 9)), Point::new(0, 3));
    }

    #[test]
    fn test_draw_target_clips_to_display() {
        use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

        let mut data = [0u8; 16];
        let mut fb = frame(&mut data, PixelFormat::Direct8, 4, 4);
        Rectangle::new(Point::new(2, 2), Size::new(5, 5))
            .into_styled(PrimitiveStyle::with_fill(Color::new(0xFF)))
            .draw(&mut fb)
            .unwrap();
        let set = fb.as_bytes().iter().filter(|&&b| b == 0xFF).count();
        assert_eq!(set, 4);
    }
}
