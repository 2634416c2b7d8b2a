//! Brightness inversion lookup for 8-bit colors.
//!
//! Each opaque color is paired with a hand-picked color of roughly opposite
//! lightness and similar hue. The table is built at compile time; black,
//! white and every byte not listed map to themselves.

use crate::color::Color;
use crate::palette::*;

/// Curated `(from, to)` pairs. Not symmetric: several colors share a target.
const PAIRS: &[(Color, Color)] = &[
    (OXFORD_BLUE, CELESTE),
    (DUKE_BLUE, VIVID_CERULEAN),
    (BLUE, PICTON_BLUE),
    (DARK_GREEN, MINT_GREEN),
    (MIDNIGHT_GREEN, MEDIUM_SPRING_GREEN),
    (COBALT_BLUE, CYAN),
    (BLUE_MOON, ELECTRIC_BLUE),
    (ISLAMIC_GREEN, MALACHITE),
    (JAEGER_GREEN, SCREAMIN_GREEN),
    (TIFFANY_BLUE, CADET_BLUE),
    (VIVID_CERULEAN, DUKE_BLUE),
    (GREEN, MAY_GREEN),
    (MALACHITE, ISLAMIC_GREEN),
    (MEDIUM_SPRING_GREEN, MIDNIGHT_GREEN),
    (CYAN, COBALT_BLUE),
    (BULGARIAN_ROSE, MELON),
    (IMPERIAL_PURPLE, RICH_BRILLIANT_LAVENDER),
    (INDIGO, LAVENDER_INDIGO),
    (ELECTRIC_ULTRAMARINE, VERY_LIGHT_BLUE),
    (ARMY_GREEN, BRASS),
    (DARK_GRAY, LIGHT_GRAY),
    (LIBERTY, BABY_BLUE_EYES),
    (VERY_LIGHT_BLUE, ELECTRIC_ULTRAMARINE),
    (KELLY_GREEN, GREEN),
    (MAY_GREEN, MEDIUM_AQUAMARINE),
    (CADET_BLUE, TIFFANY_BLUE),
    (PICTON_BLUE, BLUE),
    (BRIGHT_GREEN, ISLAMIC_GREEN),
    (SCREAMIN_GREEN, KELLY_GREEN),
    (MEDIUM_AQUAMARINE, MAY_GREEN),
    (ELECTRIC_BLUE, BLUE_MOON),
    (DARK_CANDY_APPLE_RED, MELON),
    (JAZZBERRY_JAM, BRILLIANT_ROSE),
    (PURPLE, SHOCKING_PINK),
    (VIVID_VIOLET, PURPUREUS),
    (WINDSOR_TAN, ROSE_VALE),
    (ROSE_VALE, WINDSOR_TAN),
    (PURPUREUS, VIVID_VIOLET),
    (LAVENDER_INDIGO, INDIGO),
    (LIMERICK, PASTEL_YELLOW),
    (BRASS, ARMY_GREEN),
    (LIGHT_GRAY, DARK_GRAY),
    (BABY_BLUE_EYES, LIBERTY),
    (SPRING_BUD, DARK_GREEN),
    (INCHWORM, MIDNIGHT_GREEN),
    (MINT_GREEN, DARK_GREEN),
    (CELESTE, OXFORD_BLUE),
    (RED, SUNSET_ORANGE),
    (FOLLY, MELON),
    (FASHION_MAGENTA, MAGENTA),
    (MAGENTA, FASHION_MAGENTA),
    (ORANGE, RAJAH),
    (SUNSET_ORANGE, RED),
    (BRILLIANT_ROSE, JAZZBERRY_JAM),
    (SHOCKING_PINK, PURPLE),
    (CHROME_YELLOW, WINDSOR_TAN),
    (RAJAH, ORANGE),
    (MELON, DARK_CANDY_APPLE_RED),
    (RICH_BRILLIANT_LAVENDER, IMPERIAL_PURPLE),
    (YELLOW, CHROME_YELLOW),
    (ICTERINE, CHROME_YELLOW),
    (PASTEL_YELLOW, CHROME_YELLOW),
];

/// Lookup table indexed by the raw color byte.
pub static BRIGHTNESS_TABLE: [u8; 256] = build_table();

// Const evaluation: any out-of-range index is a compile error, not a panic.
#[allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
#[allow(clippy::cast_possible_truncation)] // i < 256
const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = i as u8;
        i += 1;
    }
    let mut p = 0;
    while p < PAIRS.len() {
        let (from, to) = PAIRS[p];
        table[from.value() as usize] = to.value();
        p += 1;
    }
    table
}

/// The brightness-opposite of an 8-bit color.
#[must_use]
pub fn opposite_brightness(color: Color) -> Color {
    BRIGHTNESS_TABLE
        .get(usize::from(color.value()))
        .map_or(color, |&b| Color::new(b))
}
