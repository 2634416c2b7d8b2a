//! Effect layers: a frame rectangle plus up to [`MAX_EFFECTS`] effects,
//! replayed in registration order on every redraw.
//!
//! ```text
//! redraw ──▶ EffectLayer::render(host)
//!              ├─ effect[0].apply: capture ─▶ remap region ─▶ release
//!              ├─ effect[1].apply: capture ─▶ remap region ─▶ release
//!              └─ ...
//! ```

use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::capture::FrameHost;
use crate::effect::Effect;

/// Effects one layer can hold.
pub const MAX_EFFECTS: usize = 4;

/// Registration failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerError {
    /// All [`MAX_EFFECTS`] slots are taken.
    Full,
}

#[cfg(feature = "std")]
impl std::error::Error for LayerError {}

impl core::fmt::Display for LayerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Full => write!(f, "effect layer full ({MAX_EFFECTS} effects)"),
        }
    }
}

/// Ordered effect list bound to a region of the display.
#[derive(Debug)]
pub struct EffectLayer<'a> {
    frame: Rectangle,
    effects: Vec<Effect<'a>, MAX_EFFECTS>,
    hidden: bool,
}

impl<'a> EffectLayer<'a> {
    /// Empty layer over `frame`.
    #[must_use]
    pub fn new(frame: Rectangle) -> Self {
        Self {
            frame,
            effects: Vec::new(),
            hidden: false,
        }
    }

    /// Append `effect`; it runs after every effect added before it.
    ///
    /// # Errors
    ///
    /// [`LayerError::Full`] when the layer already holds [`MAX_EFFECTS`].
    pub fn add_effect(&mut self, effect: Effect<'a>) -> Result<(), LayerError> {
        let name = effect.name();
        self.effects.push(effect).map_err(|_| LayerError::Full)?;
        debug!("effect layer: added {} ({} of {})", name, self.effects.len(), MAX_EFFECTS);
        Ok(())
    }

    /// Remove and return the most recently added effect.
    pub fn remove_effect(&mut self) -> Option<Effect<'a>> {
        self.effects.pop()
    }

    /// Region the effects run over.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Move or resize the region.
    pub fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
    }

    /// Number of registered effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// `true` when no effect is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Registered effects in run order.
    pub fn effects(&self) -> impl Iterator<Item = &Effect<'a>> {
        self.effects.iter()
    }

    /// Skip (or resume) rendering without dropping the effects.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// `true` while rendering is skipped.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Run every effect over the frame, each with its own capture.
    pub fn render<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if self.hidden {
            return;
        }
        let frame = self.frame;
        for effect in self.effects.iter_mut() {
            effect.apply(host, &frame);
        }
    }
}

/// Layer that inverts everything under `frame`.
#[must_use]
pub fn inverter_layer<'a>(frame: Rectangle) -> EffectLayer<'a> {
    let mut layer = EffectLayer::new(frame);
    if let Err(err) = layer.add_effect(Effect::Invert) {
        debug!("inverter layer: {}", err);
    }
    layer
}
