//! Framebuffer pixel effects for small watch displays.
//!
//! The crate remaps rectangular regions of a captured frame buffer in place:
//! inversion, color swaps, mirroring, quarter turns, zoom, lens distortion,
//! masks, shadows, outlines and a frame-rate overlay. Effects work on three
//! pixel encodings (1-bit LSB-first, 1-bit MSB-first palette, 8-bit
//! ARGB2222) and never allocate.
//!
//! # Architecture
//!
//! ```text
//! EffectLayer (≤ 4 effects, one frame rectangle)
//!         ↓  render(host)
//! Effect::apply ── Capture::begin(host) ─▶ FrameBuffer ─▶ release on drop
//!         ↓
//! fx::* (catalog) ─▶ line rasterizer / brightness table / color adapter
//!         ↓
//! FrameBuffer::{get,set}_pixel (per-format addressing)
//! ```
//!
//! # Features
//!
//! - `std`: `std::error::Error` impls and `tracing` events
//! - `defmt`: `defmt::Format` derives and defmt log frames
//!
//! # Example
//!
//! ```
//! use effects::{inverter_layer, display::APLITE, MonoDisplay};
//!
//! let mut display = MonoDisplay::new(&APLITE).unwrap();
//! let mut layer = inverter_layer(APLITE.bounds());
//! layer.render(&mut display);
//! assert_eq!(display.capture_count(), 1);
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)] // all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod logging;

pub mod bitmap;
pub mod brightness;
pub mod buffer;
pub mod capture;
pub mod color;
pub mod display;
pub mod effect;
pub mod format;
pub mod fx;
pub mod host;
pub mod layer;
pub mod line;
pub mod palette;

pub use bitmap::Bitmap;
pub use buffer::{BufferError, FrameBuffer};
pub use capture::{Capture, CaptureError, FrameHost};
pub use color::{convert, Color};
pub use display::DisplayProfile;
pub use effect::{ColorPair, Effect};
pub use format::PixelFormat;
pub use fx::{Direction, FpsState, Lens, Mask, MaskSource, Offset, OffsetMode, Zoom};
pub use host::{ColorDisplay, MemoryDisplay, MonoDisplay};
pub use layer::{inverter_layer, EffectLayer, LayerError, MAX_EFFECTS};
pub use line::{draw_line, VisitedMap};
