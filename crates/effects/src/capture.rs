//! Exclusive access to a host's frame buffer.
//!
//! A [`FrameHost`] owns the display memory. Effects never hold a buffer
//! between redraws: every invocation opens a [`Capture`], works on the
//! [`FrameBuffer`] it yields and releases it when the guard drops, on every
//! exit path.

use crate::buffer::FrameBuffer;

/// Why a capture could not be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureError {
    /// Another capture is still live.
    Busy,
    /// The host has no frame buffer to hand out (e.g. display off).
    Unavailable,
}

#[cfg(feature = "std")]
impl std::error::Error for CaptureError {}

impl core::fmt::Display for CaptureError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Busy => write!(f, "frame buffer already captured"),
            Self::Unavailable => write!(f, "frame buffer unavailable"),
        }
    }
}

/// Owner of the display frame memory.
pub trait FrameHost {
    /// Take exclusive write access to the current frame.
    ///
    /// # Errors
    ///
    /// [`CaptureError::Busy`] while a capture is live,
    /// [`CaptureError::Unavailable`] when there is no frame to capture.
    fn begin_capture(&mut self) -> Result<(), CaptureError>;

    /// The captured frame; `None` unless a capture is live.
    fn frame(&mut self) -> Option<FrameBuffer<'_>>;

    /// Release the capture taken by [`FrameHost::begin_capture`].
    fn end_capture(&mut self);

    /// Milliseconds since the host started.
    fn uptime_ms(&self) -> u64;
}

/// RAII guard for one capture. Dropping it releases the frame.
pub struct Capture<'h, H: FrameHost + ?Sized> {
    host: &'h mut H,
}

impl<'h, H: FrameHost + ?Sized> Capture<'h, H> {
    /// Capture `host`'s frame buffer.
    ///
    /// # Errors
    ///
    /// Whatever [`FrameHost::begin_capture`] reports; nothing is held then.
    pub fn begin(host: &'h mut H) -> Result<Self, CaptureError> {
        host.begin_capture()?;
        Ok(Self { host })
    }

    /// The captured frame.
    pub fn frame(&mut self) -> Option<FrameBuffer<'_>> {
        self.host.frame()
    }

    /// Host uptime, readable while captured.
    #[must_use]
    pub fn uptime_ms(&self) -> u64 {
        self.host.uptime_ms()
    }
}

impl<H: FrameHost + ?Sized> Drop for Capture<'_, H> {
    fn drop(&mut self) {
        self.host.end_capture();
    }
}
