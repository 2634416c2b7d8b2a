//! Phone connection tracker.

use crate::vibe::Vibe;

/// Tracks whether the phone is connected and whether the face has finished
/// starting up (disconnects seen during startup never vibrate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConnectionState {
    connected: bool,
    started: bool,
}

impl ConnectionState {
    /// Create a new, disconnected, not yet started state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            connected: false,
            started: false,
        }
    }

    /// Mark startup as finished.
    pub fn on_started(&mut self) {
        self.started = true;
    }

    /// Record a connection change; returns the alert to play, if any.
    ///
    /// Only a disconnect after startup with `vibe_enabled` alerts.
    pub fn on_connection(&mut self, connected: bool, vibe_enabled: bool) -> Option<Vibe> {
        self.connected = connected;
        (self.started && !connected && vibe_enabled).then_some(Vibe::Long)
    }

    /// Returns `true` if the phone is currently connected.
    #[must_use]
    pub const fn connected(&self) -> bool {
        self.connected
    }

    /// Returns `true` once startup has finished.
    #[must_use]
    pub const fn started(&self) -> bool {
        self.started
    }
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self::new()
    }
}
