//! Battery gauge shown in the middle of the dial.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Gauge position and size on the 144×168 face.
pub const BATTERY_FRAME: Rectangle = Rectangle::new(Point::new(69, 84), Size::new(6, 6));

/// Icon picked for a charge reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryIcon {
    /// Below 30 %.
    Low,
    /// 30 % to 59 %.
    Half,
    /// 60 % to 89 %.
    ThreeQuarter,
    /// 90 % and up.
    Full,
    /// On the charger and not yet full.
    Charging,
}

impl BatteryIcon {
    /// Icon for `percent` charge.
    #[must_use]
    pub const fn for_state(percent: u8, charging: bool) -> Self {
        if charging && percent < 100 {
            return Self::Charging;
        }
        match percent {
            0..=29 => Self::Low,
            30..=59 => Self::Half,
            60..=89 => Self::ThreeQuarter,
            _ => Self::Full,
        }
    }

    /// Filled rows of the 4-row gauge interior; `None` for the charging bolt.
    #[must_use]
    pub const fn fill_rows(self) -> Option<u32> {
        match self {
            Self::Low => Some(1),
            Self::Half => Some(2),
            Self::ThreeQuarter => Some(3),
            Self::Full => Some(4),
            Self::Charging => None,
        }
    }
}

/// Last reported charge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryState {
    percent: u8,
    charging: bool,
}

impl BatteryState {
    /// State for a fresh reading.
    #[must_use]
    pub const fn new(percent: u8, charging: bool) -> Self {
        Self { percent, charging }
    }

    /// Record a new reading; returns `true` when the icon changed.
    pub fn update(&mut self, percent: u8, charging: bool) -> bool {
        let before = self.icon();
        self.percent = percent;
        self.charging = charging;
        before != self.icon()
    }

    /// Charge in percent.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// `true` while on the charger.
    #[must_use]
    pub const fn charging(&self) -> bool {
        self.charging
    }

    /// Icon for the current reading.
    #[must_use]
    pub const fn icon(&self) -> BatteryIcon {
        BatteryIcon::for_state(self.percent, self.charging)
    }
}

impl Default for BatteryState {
    fn default() -> Self {
        Self::new(100, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(BatteryIcon::for_state(0, false), BatteryIcon::Low);
        assert_eq!(BatteryIcon::for_state(29, false), BatteryIcon::Low);
        assert_eq!(BatteryIcon::for_state(30, false), BatteryIcon::Half);
        assert_eq!(BatteryIcon::for_state(59, false), BatteryIcon::Half);
        assert_eq!(BatteryIcon::for_state(60, false), BatteryIcon::ThreeQuarter);
        assert_eq!(BatteryIcon::for_state(89, false), BatteryIcon::ThreeQuarter);
        assert_eq!(BatteryIcon::for_state(90, false), BatteryIcon::Full);
        assert_eq!(BatteryIcon::for_state(100, false), BatteryIcon::Full);
    }

    #[test]
    fn test_charging_until_full() {
        assert_eq!(BatteryIcon::for_state(50, true), BatteryIcon::Charging);
        assert_eq!(BatteryIcon::for_state(99, true), BatteryIcon::Charging);
        assert_eq!(BatteryIcon::for_state(100, true), BatteryIcon::Full);
    }

    #[test]
    fn test_update_reports_icon_changes() {
        let mut state = BatteryState::default();
        assert!(!state.update(95, false));
        assert!(state.update(80, false));
        assert!(!state.update(70, false));
        assert!(state.update(70, true));
        assert_eq!(state.percent(), 70);
        assert!(state.charging());
    }
}
