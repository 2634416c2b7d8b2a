//! Pixel color values and the conversion between encodings.

use embedded_graphics::pixelcolor::raw::RawU8;
use embedded_graphics::pixelcolor::PixelColor;

use crate::format::PixelFormat;

/// 8-bit value substituted for a set 1-bit pixel when drawn onto `Direct8`.
const MONO_SET_AS_DIRECT8: u8 = 0xFF;
/// 8-bit value substituted for a clear 1-bit pixel when drawn onto `Direct8`.
const MONO_CLEAR_AS_DIRECT8: u8 = 0xC0;

/// A raw pixel value in some [`PixelFormat`].
///
/// 1-bit formats use `0` (black) and `1` (white); `Direct8` uses ARGB2222
/// bytes. Equality is plain byte equality, so two colors only compare
/// meaningfully within one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(u8);

impl Color {
    /// Wrap a raw pixel byte.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The raw pixel byte.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// `true` when both alpha bits of an ARGB2222 byte are set.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.0 & 0xC0 == 0xC0
    }

    /// The other 1-bit value: `0 ↔ 1`. Any non-zero value counts as set.
    #[must_use]
    pub const fn toggled(self) -> Self {
        if self.0 == 0 {
            Self(1)
        } else {
            Self(0)
        }
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl PixelColor for Color {
    type Raw = RawU8;
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:02x}", self.0)
    }
}

/// Convert `color` from the `from` encoding to the `to` encoding.
///
/// | from → to            | mapping                 |
/// |----------------------|-------------------------|
/// | 1-bit → `Direct8`    | `0 → 0xC0`, else `0xFF` |
/// | `Direct8` → 1-bit    | `0xFF → 1`, else `0`    |
/// | anything else        | identity                |
#[must_use]
pub const fn convert(color: Color, from: PixelFormat, to: PixelFormat) -> Color {
    match (from.is_monochrome(), to.is_monochrome()) {
        (true, false) => {
            if color.0 == 0 {
                Color(MONO_CLEAR_AS_DIRECT8)
            } else {
                Color(MONO_SET_AS_DIRECT8)
            }
        }
        (false, true) => {
            if color.0 == MONO_SET_AS_DIRECT8 {
                Color(1)
            } else {
                Color(0)
            }
        }
        _ => color,
    }
}
