//! Frame-rate overlay.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

use super::draw_text;
use crate::buffer::FrameBuffer;

/// Frame counter owned by one FPS overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FpsState {
    start_ms: Option<u64>,
    frames: u32,
}

impl FpsState {
    /// Counter that starts on its first [`FpsState::tick`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start_ms: None,
            frames: 0,
        }
    }

    /// Frames counted since the start.
    #[must_use]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Count a frame drawn at `now_ms`; returns the rate in hundredths of a
    /// frame per second once there is elapsed time to divide by.
    pub fn tick(&mut self, now_ms: u64) -> Option<u32> {
        let Some(start) = self.start_ms else {
            self.start_ms = Some(now_ms);
            self.frames = 0;
            return None;
        };
        self.frames = self.frames.saturating_add(1);
        let elapsed = now_ms.saturating_sub(start);
        if elapsed == 0 {
            return None;
        }
        let rate = u64::from(self.frames).saturating_mul(100_000) / elapsed;
        Some(u32::try_from(rate).unwrap_or(u32::MAX))
    }
}

/// `FPS:12.34` for a rate of 1234 hundredths.
#[must_use]
pub fn format_fps(hundredths: u32) -> heapless::String<24> {
    let mut label = heapless::String::new();
    // 24 bytes always fit "FPS:" + ten digits + "." + two digits.
    let _ = write!(label, "FPS:{}.{:02}", hundredths / 100, hundredths % 100);
    label
}

/// Advance `state` and draw the current rate in white at the region's
/// top-left corner.
pub fn fps(fb: &mut FrameBuffer<'_>, region: &Rectangle, state: &mut FpsState, now_ms: u64) {
    if let Some(hundredths) = state.tick(now_ms) {
        let white = fb.format().white();
        draw_text(fb, region, &format_fps(hundredths), &FONT_6X10, Alignment::Left, white);
    }
}
