//! Display profiles for the supported watch panels.
//!
//! Each profile is a `const` description of one panel: geometry, row stride
//! as laid out by the display controller, and pixel encoding. Hosts size
//! their frame storage from [`DisplayProfile::frame_bytes`].

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::format::PixelFormat;

/// Static description of a display panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayProfile {
    /// Short identifier, e.g. `"aplite"`.
    pub name: &'static str,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes per row in the controller's frame memory.
    pub stride: usize,
    /// Pixel encoding of the frame memory.
    pub format: PixelFormat,
}

impl DisplayProfile {
    /// Panel size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Full-display rectangle.
    #[must_use]
    pub const fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size())
    }

    /// Bytes of frame storage the panel needs (`stride * height`).
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)] // const profiles: 20*168 and 144*168
    #[allow(clippy::cast_possible_truncation)] // u32 → usize is lossless on 32/64-bit targets
    pub const fn frame_bytes(&self) -> usize {
        self.stride * self.height as usize
    }
}

/// 144×168 monochrome panel, 1 bpp LSB-first, rows padded to 20 bytes.
pub const APLITE: DisplayProfile = DisplayProfile {
    name: "aplite",
    width: 144,
    height: 168,
    stride: 20,
    format: PixelFormat::Mono1,
};

/// 144×168 color panel, one ARGB2222 byte per pixel.
pub const BASALT: DisplayProfile = DisplayProfile {
    name: "basalt",
    width: 144,
    height: 168,
    stride: 144,
    format: PixelFormat::Direct8,
};

/// 144×168 color panel running a 1-bit palettized frame (MSB-first).
pub const BASALT_PALETTE: DisplayProfile = DisplayProfile {
    name: "basalt-palette",
    width: 144,
    height: 168,
    stride: 20,
    format: PixelFormat::MonoPalette1,
};

/// Frame bytes for [`APLITE`] and [`BASALT_PALETTE`].
pub const MONO_FRAME_BYTES: usize = APLITE.frame_bytes();

/// Frame bytes for [`BASALT`].
pub const COLOR_FRAME_BYTES: usize = BASALT.frame_bytes();

/// Every built-in profile.
pub static PROFILES: [DisplayProfile; 3] = [APLITE, BASALT, BASALT_PALETTE];

/// Look a profile up by its [`DisplayProfile::name`].
#[must_use]
pub fn by_name(name: &str) -> Option<&'static DisplayProfile> {
    PROFILES.iter().find(|profile| profile.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_bytes() {
        assert_eq!(MONO_FRAME_BYTES, 3360);
        assert_eq!(COLOR_FRAME_BYTES, 24_192);
    }

    #[test]
    fn test_strides_cover_width() {
        for profile in PROFILES {
            assert!(profile.stride >= profile.format.min_stride(profile.width), "{}", profile.name);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(by_name("basalt"), Some(&BASALT));
        assert_eq!(by_name("chalk"), None);
    }
}
