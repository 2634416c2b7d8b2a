//! Wall-clock model: digit extraction for the time and date rows, the
//! AM/PM/24 labels and the dial marker geometry.

// Calendar fields are small and every divisor is a nonzero constant.
#![allow(clippy::arithmetic_side_effects)]

use embedded_graphics::prelude::Point;

use crate::config::Style;

/// Seconds in a day.
pub const SECONDS_PER_DAY: i32 = 86_400;

/// Dial center on a 144×168 display.
pub const DIAL_CENTER: Point = Point::new(72, 84);

/// Distance of the minute marker from [`DIAL_CENTER`].
pub const MINUTE_RADIUS: i32 = 56;

/// Distance of the hour marker from [`DIAL_CENTER`].
pub const HOUR_RADIUS: i32 = 57;

/// Broken-down local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    /// Full year, e.g. 2024.
    pub year: u16,
    /// 1..=12.
    pub month: u8,
    /// 1..=31.
    pub day: u8,
    /// 0..=23.
    pub hour: u8,
    /// 0..=59.
    pub minute: u8,
    /// 0..=59.
    pub second: u8,
}

impl ClockTime {
    /// Build a time; fields are taken as given.
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Seconds since midnight.
    #[must_use]
    pub fn seconds_of_day(&self) -> i32 {
        i32::from(self.hour) * 3600 + i32::from(self.minute) * 60 + i32::from(self.second)
    }

    /// Shift the time of day by `seconds`, wrapping at midnight. The date
    /// fields are kept.
    #[must_use]
    pub fn offset_by(&self, seconds: i32) -> Self {
        let shifted = (self.seconds_of_day() + seconds % SECONDS_PER_DAY).rem_euclid(SECONDS_PER_DAY);
        Self {
            hour: to_u8(shifted / 3600),
            minute: to_u8(shifted / 60 % 60),
            second: to_u8(shifted % 60),
            ..*self
        }
    }

    /// Hours, minutes and seconds as six digits; the leading hour digit is
    /// `None` when a 12-hour clock shows a single-digit hour.
    #[must_use]
    pub fn time_digits(&self, is_24h: bool) -> [Option<u8>; 6] {
        let hour = display_hour(self.hour, is_24h);
        let tens = hour / 10;
        [
            (is_24h || tens != 0).then_some(tens),
            Some(hour % 10),
            Some(self.minute / 10),
            Some(self.minute % 10),
            Some(self.second / 10),
            Some(self.second % 10),
        ]
    }

    /// Day and month in `style` order, then the four year digits.
    #[must_use]
    pub fn date_digits(&self, style: Style) -> [u8; 8] {
        let (first, second) = match style {
            Style::DateUs => (self.month, self.day),
            Style::DateInternational | Style::Zulu => (self.day, self.month),
        };
        let year = self.year;
        [
            first / 10,
            first % 10,
            second / 10,
            second % 10,
            to_u8(i32::from(year / 1000 % 10)),
            to_u8(i32::from(year / 100 % 10)),
            to_u8(i32::from(year / 10 % 10)),
            to_u8(i32::from(year % 10)),
        ]
    }

    /// Minute marker angle in degrees clockwise from 12 o'clock.
    #[must_use]
    pub fn minute_angle(&self) -> u32 {
        u32::from(self.minute) * 360 / 60
    }

    /// Hour marker angle in degrees clockwise from 12 o'clock; moves with
    /// the minutes.
    #[must_use]
    pub fn hour_angle(&self) -> u32 {
        (u32::from(self.hour % 12) * 60 + u32::from(self.minute)) * 360 / 720
    }
}

/// Set of calendar units that changed since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeUnits(u8);

impl TimeUnits {
    /// Nothing changed.
    pub const NONE: Self = Self(0);
    /// Seconds changed.
    pub const SECOND: Self = Self(1 << 0);
    /// Minutes changed.
    pub const MINUTE: Self = Self(1 << 1);
    /// Hours changed.
    pub const HOUR: Self = Self(1 << 2);
    /// Day changed.
    pub const DAY: Self = Self(1 << 3);
    /// Everything; used for the first paint.
    pub const ALL: Self = Self(0b1111);

    /// `true` when every unit of `other` is in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Units that changed going from `prev` to `next`. A change of a larger
    /// unit implies every smaller one.
    #[must_use]
    pub fn between(prev: &ClockTime, next: &ClockTime) -> Self {
        let day = (prev.year, prev.month, prev.day) != (next.year, next.month, next.day);
        let hour = day || prev.hour != next.hour;
        let minute = hour || prev.minute != next.minute;
        let second = minute || prev.second != next.second;
        [(second, Self::SECOND), (minute, Self::MINUTE), (hour, Self::HOUR), (day, Self::DAY)]
            .into_iter()
            .filter(|(changed, _)| *changed)
            .fold(Self::NONE, |acc, (_, unit)| acc | unit)
    }
}

impl core::ops::BitOr for TimeUnits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

fn to_u8(value: i32) -> u8 {
    u8::try_from(value).unwrap_or(0)
}

/// Hour as shown: unchanged on a 24-hour clock, otherwise `1..=12`.
#[must_use]
pub const fn display_hour(hour: u8, is_24h: bool) -> u8 {
    if is_24h {
        return hour;
    }
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Which clock a period label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Zone {
    /// The watch's own time.
    Local,
    /// The offset second time zone.
    Zulu,
}

/// Label above (local) or below (zulu) the digits.
#[must_use]
pub const fn period_label(zone: Zone, hour: u8, is_24h: bool) -> &'static str {
    match (zone, is_24h, hour < 12) {
        (Zone::Local, true, _) => "LOCAL 24",
        (Zone::Local, false, true) => "LOCAL AM",
        (Zone::Local, false, false) => "LOCAL PM",
        (Zone::Zulu, true, _) => "ZULU 24",
        (Zone::Zulu, false, true) => "ZULU AM",
        (Zone::Zulu, false, false) => "ZULU PM",
    }
}

/// Point `radius` pixels from [`DIAL_CENTER`] at `degrees` clockwise from
/// 12 o'clock.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn marker_position(degrees: u32, radius: i32) -> Point {
    let radians = (degrees % 360) as f32 * core::f32::consts::PI / 180.0;
    let r = radius as f32;
    // 0° points up: x follows sin, y follows -cos.
    let dx = libm::roundf(r * libm::sinf(radians)) as i32;
    let dy = libm::roundf(-r * libm::cosf(radians)) as i32;
    DIAL_CENTER + Point::new(dx, dy)
}
