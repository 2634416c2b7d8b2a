//! Stencil masking: draw a shape in a marker color, then let a background
//! image show through wherever the marker color landed.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

use super::draw_text;
use crate::bitmap::Bitmap;
use crate::buffer::FrameBuffer;
use crate::color::{convert, Color};

/// Shape drawn in [`Mask::mask_color`] before the background is revealed.
#[derive(Clone, Copy)]
pub enum MaskSource<'a> {
    /// No stencil; only pixels already holding the mask color reveal.
    None,
    /// Text, top-aligned in the region and clipped to it.
    Text {
        /// Text to draw.
        text: &'a str,
        /// Font to draw it with.
        font: &'a MonoFont<'a>,
        /// Horizontal alignment inside the region.
        alignment: Alignment,
    },
    /// Image copied to the region origin (converted to the frame encoding).
    Bitmap(Bitmap<'a>),
}

impl core::fmt::Debug for MaskSource<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Text {
                text, alignment, ..
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("alignment", alignment)
                .finish_non_exhaustive(),
            Self::Bitmap(bitmap) => f.debug_tuple("Bitmap").field(bitmap).finish(),
        }
    }
}

/// Parameters of the mask effect.
#[derive(Debug, Clone, Copy)]
pub struct Mask<'a> {
    /// Fill for the region before the stencil is drawn; `None` keeps the
    /// current contents.
    pub background_color: Option<Color>,
    /// Marker color drawn by the stencil and replaced by the background.
    pub mask_color: Color,
    /// The stencil.
    pub source: MaskSource<'a>,
    /// Image revealed through the stencil, addressed in display coordinates.
    pub background: Bitmap<'a>,
}

fn stamp_bitmap(fb: &mut FrameBuffer<'_>, region: &Rectangle, bitmap: &Bitmap<'_>) {
    let (from, to) = (bitmap.format(), fb.format());
    for point in region.points() {
        if !fb.contains(point) {
            continue;
        }
        if let Some(color) = bitmap.get_pixel(point - region.top_left) {
            fb.set_pixel(point, convert(color, from, to));
        }
    }
}

/// Apply `mask` over `region`.
pub fn mask(fb: &mut FrameBuffer<'_>, region: &Rectangle, mask: &Mask<'_>) {
    if let Some(color) = mask.background_color {
        fb.fill_region(region, color);
    }
    match mask.source {
        MaskSource::None => {}
        MaskSource::Text {
            text,
            font,
            alignment,
        } => draw_text(fb, region, text, font, alignment, mask.mask_color),
        MaskSource::Bitmap(ref bitmap) => stamp_bitmap(fb, region, bitmap),
    }

    let (from, to) = (mask.background.format(), fb.format());
    for point in region.points() {
        if !fb.contains(point) || fb.get_pixel(point) != mask.mask_color {
            continue;
        }
        if let Some(color) = mask.background.get_pixel(point) {
            fb.set_pixel(point, convert(color, from, to));
        }
    }
}
