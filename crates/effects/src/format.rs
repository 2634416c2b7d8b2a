//! Pixel encodings carried by frame buffers and bitmaps.

use crate::color::Color;

/// Pixel encoding of a frame buffer or bitmap.
///
/// Exactly one format applies to a buffer for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 1 bit per pixel, 8 pixels per byte, least significant bit first.
    Mono1,
    /// 1 bit per pixel, 8 pixels per byte, most significant bit first.
    MonoPalette1,
    /// 1 byte per pixel, ARGB2222 (`0b11rrggbb` for opaque colors).
    Direct8,
}

impl PixelFormat {
    /// `true` for both 1-bit encodings.
    #[must_use]
    pub const fn is_monochrome(self) -> bool {
        matches!(self, Self::Mono1 | Self::MonoPalette1)
    }

    /// Bits used to store one pixel.
    #[must_use]
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            Self::Mono1 | Self::MonoPalette1 => 1,
            Self::Direct8 => 8,
        }
    }

    /// Smallest row stride, in bytes, that holds `width` pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // u32 → usize is lossless on 32/64-bit targets
    pub const fn min_stride(self, width: u32) -> usize {
        let bytes = match self {
            Self::Mono1 | Self::MonoPalette1 => width.div_ceil(8),
            Self::Direct8 => width,
        };
        bytes as usize
    }

    /// Black in this encoding.
    #[must_use]
    pub const fn black(self) -> Color {
        match self {
            Self::Mono1 | Self::MonoPalette1 => Color::new(0),
            Self::Direct8 => crate::palette::BLACK,
        }
    }

    /// White in this encoding.
    #[must_use]
    pub const fn white(self) -> Color {
        match self {
            Self::Mono1 | Self::MonoPalette1 => Color::new(1),
            Self::Direct8 => crate::palette::WHITE,
        }
    }

    /// Short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mono1 => "mono1",
            Self::MonoPalette1 => "mono-palette1",
            Self::Direct8 => "direct8",
        }
    }
}

impl core::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
