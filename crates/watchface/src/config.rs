//! Face settings, updated one key at a time by the phone-side configuration
//! page and persisted as a postcard blob.
//!
//! | key | setting           | default              |
//! |-----|-------------------|----------------------|
//! | 0   | seconds           | on                   |
//! | 1   | invert            | off                  |
//! | 2   | bluetooth vibe    | on                   |
//! | 3   | vibe minutes      | 0 (off)              |
//! | 4   | hands             | on                   |
//! | 5   | style             | `DateInternational`  |
//! | 6   | background        | `Full`               |
//! | 7   | timezone offset   | 0 s                  |

use serde::{Deserialize, Serialize};

/// Upper bound for an encoded [`WatchConfig`].
pub const CONFIG_BYTES: usize = 32;

// ---------------------------------------------------------------------------
// Keys and value enums
// ---------------------------------------------------------------------------

/// Message keys of the configuration protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum ConfigKey {
    /// Show the seconds digits (and tick every second).
    Seconds = 0,
    /// Invert the whole display.
    Invert = 1,
    /// Vibrate when the phone disconnects.
    BluetoothVibe = 2,
    /// Chronograph alarm period in minutes; 0 disables it.
    VibeMinutes = 3,
    /// Show the hour/minute markers on the dial.
    Hands = 4,
    /// Date order or second time zone.
    Style = 5,
    /// Dial artwork.
    Background = 6,
    /// Zulu offset from local time, in seconds.
    TimezoneOffset = 7,
}

impl ConfigKey {
    /// Every key, in protocol order.
    pub const ALL: [Self; 8] = [
        Self::Seconds,
        Self::Invert,
        Self::BluetoothVibe,
        Self::VibeMinutes,
        Self::Hands,
        Self::Style,
        Self::Background,
        Self::TimezoneOffset,
    ];

    /// Key for a raw message id.
    #[must_use]
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.id() == id)
    }

    /// Raw message id.
    #[must_use]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Invert => "invert",
            Self::BluetoothVibe => "bluetooth-vibe",
            Self::VibeMinutes => "vibe-minutes",
            Self::Hands => "hands",
            Self::Style => "style",
            Self::Background => "background",
            Self::TimezoneOffset => "timezone-offset",
        }
    }
}

impl core::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// What the lower half of the face shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Style {
    /// `dd/mm/yyyy`.
    #[default]
    DateInternational,
    /// `mm/dd/yyyy`.
    DateUs,
    /// A second clock shifted by the timezone offset.
    Zulu,
}

impl Style {
    /// Style for a protocol value.
    #[must_use]
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::DateInternational),
            1 => Some(Self::DateUs),
            2 => Some(Self::Zulu),
            _ => None,
        }
    }
}

/// Dial artwork, from busiest to empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Background {
    /// Ring plus a mark every minute, long marks every five.
    #[default]
    Full,
    /// Ring plus twelve hour marks.
    Simple,
    /// Four quarter marks.
    Minimal,
    /// Plain black.
    None,
}

impl Background {
    /// Background for a protocol value.
    #[must_use]
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Full),
            1 => Some(Self::Simple),
            2 => Some(Self::Minimal),
            3 => Some(Self::None),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Rejected updates and persistence failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Message id outside `0..=7`.
    UnknownKey(u32),
    /// Value outside the key's range.
    OutOfRange {
        /// Key being set.
        key: ConfigKey,
        /// Offending value.
        value: i32,
    },
    /// postcard could not encode the settings.
    Encode,
    /// Stored bytes are corrupt or truncated.
    Decode,
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownKey(id) => write!(f, "unknown config key {id}"),
            Self::OutOfRange { key, value } => write!(f, "{key}: value {value} out of range"),
            Self::Encode => write!(f, "config encode failed"),
            Self::Decode => write!(f, "config decode failed"),
        }
    }
}

// ---------------------------------------------------------------------------
// WatchConfig
// ---------------------------------------------------------------------------

/// Every face setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchConfig {
    /// Show seconds.
    pub seconds: bool,
    /// Invert the display.
    pub invert: bool,
    /// Vibrate on disconnect.
    pub bluetooth_vibe: bool,
    /// Chronograph alarm period; 0 disables it.
    pub vibe_minutes: u16,
    /// Show the dial markers.
    pub hands: bool,
    /// Lower-half style.
    pub style: Style,
    /// Dial artwork.
    pub background: Background,
    /// Zulu offset in seconds.
    pub timezone_offset: i32,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            seconds: true,
            invert: false,
            bluetooth_vibe: true,
            vibe_minutes: 0,
            hands: true,
            style: Style::DateInternational,
            background: Background::Full,
            timezone_offset: 0,
        }
    }
}

impl WatchConfig {
    /// Apply one `(key, value)` message. Flags treat any nonzero value as on.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownKey`] for ids outside the protocol and
    /// [`ConfigError::OutOfRange`] for values the key cannot hold; the
    /// settings are unchanged in both cases.
    pub fn apply(&mut self, key: u32, value: i32) -> Result<ConfigKey, ConfigError> {
        let key = ConfigKey::from_id(key).ok_or(ConfigError::UnknownKey(key))?;
        let out_of_range = ConfigError::OutOfRange { key, value };
        match key {
            ConfigKey::Seconds => self.seconds = value != 0,
            ConfigKey::Invert => self.invert = value != 0,
            ConfigKey::BluetoothVibe => self.bluetooth_vibe = value != 0,
            ConfigKey::VibeMinutes => {
                self.vibe_minutes = u16::try_from(value).map_err(|_| out_of_range)?;
            }
            ConfigKey::Hands => self.hands = value != 0,
            ConfigKey::Style => self.style = Style::from_value(value).ok_or(out_of_range)?,
            ConfigKey::Background => {
                self.background = Background::from_value(value).ok_or(out_of_range)?;
            }
            ConfigKey::TimezoneOffset => self.timezone_offset = value,
        }
        Ok(key)
    }

    /// Encode for persistent storage.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Encode`] if postcard rejects the value.
    pub fn to_bytes(&self) -> Result<heapless::Vec<u8, CONFIG_BYTES>, ConfigError> {
        let mut buf = [0u8; CONFIG_BYTES];
        let used = postcard::to_slice(self, &mut buf).map_err(|_| ConfigError::Encode)?;
        heapless::Vec::from_slice(used).map_err(|_| ConfigError::Encode)
    }

    /// Decode settings written by [`WatchConfig::to_bytes`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::Decode`] on corrupt or truncated input.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WatchConfig::default();
        assert!(config.seconds);
        assert!(!config.invert);
        assert!(config.bluetooth_vibe);
        assert_eq!(config.vibe_minutes, 0);
        assert!(config.hands);
        assert_eq!(config.style, Style::DateInternational);
        assert_eq!(config.background, Background::Full);
        assert_eq!(config.timezone_offset, 0);
    }

    #[test]
    fn test_key_ids_match_protocol() {
        for (id, key) in ConfigKey::ALL.iter().enumerate() {
            assert_eq!(key.id(), u32::try_from(id).unwrap());
            assert_eq!(ConfigKey::from_id(key.id()), Some(*key));
        }
        assert_eq!(ConfigKey::from_id(8), None);
    }

    #[test]
    fn test_apply_each_key() {
        let mut config = WatchConfig::default();
        assert_eq!(config.apply(0, 0), Ok(ConfigKey::Seconds));
        assert_eq!(config.apply(1, 1), Ok(ConfigKey::Invert));
        assert_eq!(config.apply(2, 0), Ok(ConfigKey::BluetoothVibe));
        assert_eq!(config.apply(3, 15), Ok(ConfigKey::VibeMinutes));
        assert_eq!(config.apply(4, 0), Ok(ConfigKey::Hands));
        assert_eq!(config.apply(5, 2), Ok(ConfigKey::Style));
        assert_eq!(config.apply(6, 3), Ok(ConfigKey::Background));
        assert_eq!(config.apply(7, -3600), Ok(ConfigKey::TimezoneOffset));
        assert_eq!(
            config,
            WatchConfig {
                seconds: false,
                invert: true,
                bluetooth_vibe: false,
                vibe_minutes: 15,
                hands: false,
                style: Style::Zulu,
                background: Background::None,
                timezone_offset: -3600,
            }
        );
    }

    #[test]
    fn test_rejected_updates_leave_config_untouched() {
        let mut config = WatchConfig::default();
        assert_eq!(config.apply(9, 1), Err(ConfigError::UnknownKey(9)));
        assert_eq!(
            config.apply(5, 3),
            Err(ConfigError::OutOfRange {
                key: ConfigKey::Style,
                value: 3
            })
        );
        assert!(config.apply(6, -1).is_err());
        assert!(config.apply(3, -5).is_err());
        assert_eq!(config, WatchConfig::default());
    }

    #[test]
    fn test_persisted_bytes_decode() {
        let mut config = WatchConfig::default();
        config.apply(3, 30).unwrap();
        config.apply(7, 19_800).unwrap();
        let bytes = config.to_bytes().unwrap();
        assert!(bytes.len() <= CONFIG_BYTES);
        assert_eq!(WatchConfig::from_bytes(&bytes), Ok(config));
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let bytes = WatchConfig::default().to_bytes().unwrap();
        assert_eq!(WatchConfig::from_bytes(&bytes[..3]), Err(ConfigError::Decode));
    }
}
