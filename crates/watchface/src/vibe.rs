//! Vibration alerts and the chronograph alarm that repeats every few minutes.

use core::fmt::Write as _;

/// Vibration patterns the face asks the host to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Vibe {
    /// One long pulse: phone disconnected.
    Long,
    /// Two short pulses: chronograph alarm.
    Double,
}

/// Minute countdown that fires a [`Vibe::Double`] and reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChronoAlarm {
    period: u16,
    remaining: u16,
}

impl ChronoAlarm {
    /// Alarm with `period` minutes; 0 is off.
    #[must_use]
    pub const fn new(period: u16) -> Self {
        Self {
            period,
            remaining: period,
        }
    }

    /// Change the period and restart the countdown.
    pub fn set_period(&mut self, period: u16) {
        *self = Self::new(period);
    }

    /// Period in minutes.
    #[must_use]
    pub const fn period(&self) -> u16 {
        self.period
    }

    /// Minute ticks left before the next alert.
    #[must_use]
    pub const fn remaining(&self) -> u16 {
        self.remaining
    }

    /// Count one minute. At zero the alarm fires and reloads.
    pub fn on_minute(&mut self) -> Option<Vibe> {
        if self.period == 0 {
            return None;
        }
        match self.remaining.checked_sub(1) {
            None => {
                self.remaining = self.period;
                Some(Vibe::Double)
            }
            Some(left) => {
                self.remaining = left;
                None
            }
        }
    }

    /// `"CR.AL:<n>"` while the alarm is on.
    #[must_use]
    pub fn label(&self) -> Option<heapless::String<16>> {
        if self.period == 0 {
            return None;
        }
        let mut label = heapless::String::new();
        // "CR.AL:" plus at most five digits fits the capacity.
        write!(label, "CR.AL:{}", self.period).ok()?;
        Some(label)
    }
}
