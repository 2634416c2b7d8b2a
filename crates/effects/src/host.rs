//! In-memory [`FrameHost`] backed by a fixed byte array.
//!
//! Used by tests, the desktop preview and any target that renders into RAM
//! before pushing the frame to the panel.

use embedded_graphics::prelude::*;

use crate::buffer::{read_pixel, validate, write_pixel, BufferError, FrameBuffer};
use crate::capture::{CaptureError, FrameHost};
use crate::color::Color;
use crate::display::{DisplayProfile, COLOR_FRAME_BYTES, MONO_FRAME_BYTES};
use crate::format::PixelFormat;

/// Host for the 1-bit profiles.
pub type MonoDisplay = MemoryDisplay<MONO_FRAME_BYTES>;

/// Host for the 8-bit profile.
pub type ColorDisplay = MemoryDisplay<COLOR_FRAME_BYTES>;

/// Frame memory of `N` bytes plus capture bookkeeping.
#[derive(Debug, Clone)]
pub struct MemoryDisplay<const N: usize> {
    storage: [u8; N],
    stride: usize,
    format: PixelFormat,
    size: Size,
    captured: bool,
    available: bool,
    captures: u32,
    uptime_ms: u64,
}

impl<const N: usize> MemoryDisplay<N> {
    /// Blank display laid out as `profile`.
    ///
    /// # Errors
    ///
    /// [`BufferError`] when `N` bytes cannot hold the profile's frame.
    pub fn new(profile: &DisplayProfile) -> Result<Self, BufferError> {
        Self::with_layout(profile.size(), profile.stride, profile.format)
    }

    /// Blank display with an explicit layout.
    ///
    /// # Errors
    ///
    /// [`BufferError`] when the stride or `N` is too small.
    pub fn with_layout(size: Size, stride: usize, format: PixelFormat) -> Result<Self, BufferError> {
        validate(N, stride, format, size)?;
        Ok(Self {
            storage: [0; N],
            stride,
            format,
            size,
            captured: false,
            available: true,
            captures: 0,
            uptime_ms: 0,
        })
    }

    /// Pixel encoding.
    #[must_use]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Display size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Read a pixel outside of any capture.
    #[must_use]
    pub fn pixel(&self, point: Point) -> Color {
        read_pixel(&self.storage, self.stride, self.format, point)
    }

    /// Write a pixel outside of any capture.
    pub fn set_pixel(&mut self, point: Point, color: Color) {
        write_pixel(&mut self.storage, self.stride, self.format, point, color);
    }

    /// Fill the whole display.
    pub fn fill(&mut self, color: Color) {
        if let Some(mut frame) = self.buffer() {
            frame.fill(color);
        }
    }

    /// Frame bytes (`stride * height` are meaningful).
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Bytes per row.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of captures opened so far.
    #[must_use]
    pub fn capture_count(&self) -> u32 {
        self.captures
    }

    /// `true` while a capture is live.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Make the frame (un)available to captures, e.g. while the panel sleeps.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Set the uptime clock.
    pub fn set_uptime_ms(&mut self, ms: u64) {
        self.uptime_ms = ms;
    }

    /// Advance the uptime clock.
    pub fn advance_ms(&mut self, ms: u64) {
        self.uptime_ms = self.uptime_ms.saturating_add(ms);
    }

    /// Draw directly, bypassing capture bookkeeping.
    pub fn buffer(&mut self) -> Option<FrameBuffer<'_>> {
        FrameBuffer::new(&mut self.storage, self.stride, self.format, self.size).ok()
    }
}

impl<const N: usize> FrameHost for MemoryDisplay<N> {
    fn begin_capture(&mut self) -> Result<(), CaptureError> {
        if !self.available {
            return Err(CaptureError::Unavailable);
        }
        if self.captured {
            return Err(CaptureError::Busy);
        }
        self.captured = true;
        self.captures = self.captures.saturating_add(1);
        Ok(())
    }

    fn frame(&mut self) -> Option<FrameBuffer<'_>> {
        if self.captured {
            self.buffer()
        } else {
            None
        }
    }

    fn end_capture(&mut self) {
        self.captured = false;
    }

    fn uptime_ms(&self) -> u64 {
        self.uptime_ms
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::capture::Capture;
    use crate::display::{APLITE, BASALT};

    #[test]
    fn test_capture_is_exclusive_and_released_on_drop() {
        let mut display = MonoDisplay::new(&APLITE).unwrap();
        {
            let _capture = Capture::begin(&mut display).unwrap();
        }
        assert!(!display.is_captured());
        display.begin_capture().unwrap();
        assert_eq!(display.begin_capture(), Err(CaptureError::Busy));
        display.end_capture();
        assert_eq!(display.capture_count(), 2);
    }

    #[test]
    fn test_frame_only_while_captured() {
        let mut display = ColorDisplay::new(&BASALT).unwrap();
        assert!(display.frame().is_none());
        let mut capture = Capture::begin(&mut display).unwrap();
        let mut frame = capture.frame().unwrap();
        frame.set_pixel(Point::new(1, 1), Color::new(0xF0));
        drop(capture);
        assert_eq!(display.pixel(Point::new(1, 1)), Color::new(0xF0));
    }

    #[test]
    fn test_unavailable_display_refuses_capture() {
        let mut display = MonoDisplay::new(&APLITE).unwrap();
        display.set_available(false);
        assert!(matches!(Capture::begin(&mut display), Err(CaptureError::Unavailable)));
        assert_eq!(display.capture_count(), 0);
    }

    #[test]
    fn test_storage_must_hold_profile() {
        assert!(MemoryDisplay::<64>::new(&APLITE).is_err());
    }
}
