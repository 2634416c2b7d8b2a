//! Effect invocations: one catalog entry plus its bound parameters.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::buffer::FrameBuffer;
use crate::capture::{Capture, FrameHost};
use crate::color::Color;
use crate::fx::{self, Direction, FpsState, Lens, Mask, Offset, Zoom};
use crate::line::VisitedMap;

/// Two colors bound to [`Effect::Colorize`] or [`Effect::ColorSwap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorPair {
    /// Color to look for (`Colorize`) or the first of the pair (`ColorSwap`).
    pub first: Color,
    /// Replacement (`Colorize`) or the second of the pair (`ColorSwap`).
    pub second: Color,
}

impl ColorPair {
    /// Pair `first` with `second`.
    #[must_use]
    pub const fn new(first: Color, second: Color) -> Self {
        Self { first, second }
    }
}

/// A registered effect and its parameters.
#[derive(Debug)]
pub enum Effect<'a> {
    /// Invert every pixel.
    Invert,
    /// Swap black and white only.
    InvertBlackWhite,
    /// Map 8-bit colors to their brightness opposite.
    InvertBrightness,
    /// Repaint `first` with `second`.
    Colorize(ColorPair),
    /// Exchange `first` and `second`.
    ColorSwap(ColorPair),
    /// Flip upside down.
    MirrorVertical,
    /// Flip left to right.
    MirrorHorizontal,
    /// Quarter turn.
    Rotate90(Direction),
    /// Scale around the center.
    Zoom(Zoom),
    /// Lens distortion.
    Lens(Lens),
    /// Reveal a background through a stencil.
    Mask(Mask<'a>),
    /// Drop shadow. `visited` dedupes 1-bit line shadows and is cleared at
    /// the start of every pass.
    Shadow {
        /// Shadow geometry and colors.
        offset: Offset,
        /// Scratch map for 1-bit line shadows.
        visited: Option<&'a mut VisitedMap>,
    },
    /// Outline at the four diagonal offsets.
    Outline(Offset),
    /// Frame-rate overlay with its own counter.
    Fps(FpsState),
}

impl<'a> Effect<'a> {
    /// Stamp-or-line shadow without a visited map.
    #[must_use]
    pub const fn shadow(offset: Offset) -> Self {
        Self::Shadow {
            offset,
            visited: None,
        }
    }

    /// Shadow that dedupes 1-bit line casting through `visited`.
    #[must_use]
    pub fn shadow_with_map(offset: Offset, visited: &'a mut VisitedMap) -> Self {
        Self::Shadow {
            offset,
            visited: Some(visited),
        }
    }

    /// Fresh frame-rate overlay.
    #[must_use]
    pub const fn fps() -> Self {
        Self::Fps(FpsState::new())
    }

    /// Catalog name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Invert => "invert",
            Self::InvertBlackWhite => "invert-bw",
            Self::InvertBrightness => "invert-brightness",
            Self::Colorize(_) => "colorize",
            Self::ColorSwap(_) => "color-swap",
            Self::MirrorVertical => "mirror-vertical",
            Self::MirrorHorizontal => "mirror-horizontal",
            Self::Rotate90(_) => "rotate-90",
            Self::Zoom(_) => "zoom",
            Self::Lens(_) => "lens",
            Self::Mask(_) => "mask",
            Self::Shadow { .. } => "shadow",
            Self::Outline(_) => "outline",
            Self::Fps(_) => "fps",
        }
    }

    /// Run the effect on an already captured frame.
    pub fn render(&mut self, fb: &mut FrameBuffer<'_>, region: &Rectangle, now_ms: u64) {
        match self {
            Self::Invert => fx::invert(fb, region),
            Self::InvertBlackWhite => fx::invert_black_white(fb, region),
            Self::InvertBrightness => fx::invert_brightness(fb, region),
            Self::Colorize(pair) => fx::colorize(fb, region, pair.first, pair.second),
            Self::ColorSwap(pair) => fx::color_swap(fb, region, pair.first, pair.second),
            Self::MirrorVertical => fx::mirror_vertical(fb, region),
            Self::MirrorHorizontal => fx::mirror_horizontal(fb, region),
            Self::Rotate90(direction) => fx::rotate_90(fb, region, *direction),
            Self::Zoom(zoom) => fx::zoom(fb, region, *zoom),
            Self::Lens(lens) => fx::lens(fb, region, *lens),
            Self::Mask(mask) => fx::mask(fb, region, mask),
            Self::Shadow { offset, visited } => {
                if let Some(map) = visited.as_deref_mut() {
                    map.reset(fb.size().width);
                }
                fx::shadow(fb, region, offset, visited.as_deref_mut());
            }
            Self::Outline(offset) => fx::outline(fb, region, offset),
            Self::Fps(state) => fx::fps(fb, region, state, now_ms),
        }
    }

    /// Capture `host`, run the effect over `region`, release the capture.
    ///
    /// A host that refuses the capture turns this into a no-op.
    pub fn apply<H: FrameHost + ?Sized>(&mut self, host: &mut H, region: &Rectangle) {
        let now_ms = host.uptime_ms();
        let mut capture = match Capture::begin(host) {
            Ok(capture) => capture,
            Err(err) => {
                warn!("{} skipped: {}", self.name(), err);
                return;
            }
        };
        let Some(mut frame) = capture.frame() else {
            warn!("{} skipped: no frame while captured", self.name());
            return;
        };
        self.render(&mut frame, region, now_ms);
    }
}
