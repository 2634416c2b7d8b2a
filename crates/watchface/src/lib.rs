//! Aviator: a pilot-style watch face built on the `effects` engine.
//!
//! The face keeps its own state (settings, local and zulu time, battery,
//! phone connection, chronograph alarm) and turns host events into
//! reactions. Painting goes through a [`effects::FrameHost`] capture; the
//! invert setting installs an [`effects::EffectLayer`] over the whole
//! display.
//!
//! # Architecture
//!
//! ```text
//! host (tick / battery / bluetooth / config message)
//!         ↓
//! face::WatchFace ── config, clock, battery, connection, vibe
//!         ↓  Reaction::Redraw
//! draw::draw_face ─▶ FrameBuffer ─▶ inverter EffectLayer
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
//! use effects::{display::APLITE, MonoDisplay};
//! use watchface::{ClockTime, Reaction, WatchConfig, WatchFace};
//!
//! let mut display = MonoDisplay::new(&APLITE).unwrap();
//! let mut face = WatchFace::new(WatchConfig::default(), true);
//! let reactions = face.start(ClockTime::new(2024, 3, 7, 10, 20, 30), 80, false, true);
//! if reactions.contains(&Reaction::Redraw) {
//!     face.render(&mut display);
//! }
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

pub mod battery;
pub mod clock;
pub mod config;
pub mod connection;
pub mod draw;
pub mod face;
pub mod vibe;

pub use battery::{BatteryIcon, BatteryState};
pub use clock::{display_hour, period_label, ClockTime, TimeUnits, Zone};
pub use config::{Background, ConfigError, ConfigKey, Style, WatchConfig};
pub use connection::ConnectionState;
pub use draw::{draw_face, DISPLAY_FRAME};
pub use face::{Event, Granularity, Reaction, Reactions, WatchFace};
pub use vibe::{ChronoAlarm, Vibe};
