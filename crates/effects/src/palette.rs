//! The 64 opaque ARGB2222 colors of an 8-bit display, by name.
//!
//! Names follow the watch platform's documented color chart. Every opaque
//! byte `0b11rrggbb` appears exactly once in [`ALL`].

use crate::color::Color;

/// Fully transparent; never produced by the effects themselves.
pub const CLEAR: Color = Color::new(0x00);

/// r=0 g=0 b=0
pub const BLACK: Color = Color::new(0xC0);
/// r=0 g=0 b=1
pub const OXFORD_BLUE: Color = Color::new(0xC1);
/// r=0 g=0 b=2
pub const DUKE_BLUE: Color = Color::new(0xC2);
/// r=0 g=0 b=3
pub const BLUE: Color = Color::new(0xC3);
/// r=0 g=1 b=0
pub const DARK_GREEN: Color = Color::new(0xC4);
/// r=0 g=1 b=1
pub const MIDNIGHT_GREEN: Color = Color::new(0xC5);
/// r=0 g=1 b=2
pub const COBALT_BLUE: Color = Color::new(0xC6);
/// r=0 g=1 b=3
pub const BLUE_MOON: Color = Color::new(0xC7);
/// r=0 g=2 b=0
pub const ISLAMIC_GREEN: Color = Color::new(0xC8);
/// r=0 g=2 b=1
pub const JAEGER_GREEN: Color = Color::new(0xC9);
/// r=0 g=2 b=2
pub const TIFFANY_BLUE: Color = Color::new(0xCA);
/// r=0 g=2 b=3
pub const VIVID_CERULEAN: Color = Color::new(0xCB);
/// r=0 g=3 b=0
pub const GREEN: Color = Color::new(0xCC);
/// r=0 g=3 b=1
pub const MALACHITE: Color = Color::new(0xCD);
/// r=0 g=3 b=2
pub const MEDIUM_SPRING_GREEN: Color = Color::new(0xCE);
/// r=0 g=3 b=3
pub const CYAN: Color = Color::new(0xCF);
/// r=1 g=0 b=0
pub const BULGARIAN_ROSE: Color = Color::new(0xD0);
/// r=1 g=0 b=1
pub const IMPERIAL_PURPLE: Color = Color::new(0xD1);
/// r=1 g=0 b=2
pub const INDIGO: Color = Color::new(0xD2);
/// r=1 g=0 b=3
pub const ELECTRIC_ULTRAMARINE: Color = Color::new(0xD3);
/// r=1 g=1 b=0
pub const ARMY_GREEN: Color = Color::new(0xD4);
/// r=1 g=1 b=1
pub const DARK_GRAY: Color = Color::new(0xD5);
/// r=1 g=1 b=2
pub const LIBERTY: Color = Color::new(0xD6);
/// r=1 g=1 b=3
pub const VERY_LIGHT_BLUE: Color = Color::new(0xD7);
/// r=1 g=2 b=0
pub const KELLY_GREEN: Color = Color::new(0xD8);
/// r=1 g=2 b=1
pub const MAY_GREEN: Color = Color::new(0xD9);
/// r=1 g=2 b=2
pub const CADET_BLUE: Color = Color::new(0xDA);
/// r=1 g=2 b=3
pub const PICTON_BLUE: Color = Color::new(0xDB);
/// r=1 g=3 b=0
pub const BRIGHT_GREEN: Color = Color::new(0xDC);
/// r=1 g=3 b=1
pub const SCREAMIN_GREEN: Color = Color::new(0xDD);
/// r=1 g=3 b=2
pub const MEDIUM_AQUAMARINE: Color = Color::new(0xDE);
/// r=1 g=3 b=3
pub const ELECTRIC_BLUE: Color = Color::new(0xDF);
/// r=2 g=0 b=0
pub const DARK_CANDY_APPLE_RED: Color = Color::new(0xE0);
/// r=2 g=0 b=1
pub const JAZZBERRY_JAM: Color = Color::new(0xE1);
/// r=2 g=0 b=2
pub const PURPLE: Color = Color::new(0xE2);
/// r=2 g=0 b=3
pub const VIVID_VIOLET: Color = Color::new(0xE3);
/// r=2 g=1 b=0
pub const WINDSOR_TAN: Color = Color::new(0xE4);
/// r=2 g=1 b=1
pub const ROSE_VALE: Color = Color::new(0xE5);
/// r=2 g=1 b=2
pub const PURPUREUS: Color = Color::new(0xE6);
/// r=2 g=1 b=3
pub const LAVENDER_INDIGO: Color = Color::new(0xE7);
/// r=2 g=2 b=0
pub const LIMERICK: Color = Color::new(0xE8);
/// r=2 g=2 b=1
pub const BRASS: Color = Color::new(0xE9);
/// r=2 g=2 b=2
pub const LIGHT_GRAY: Color = Color::new(0xEA);
/// r=2 g=2 b=3
pub const BABY_BLUE_EYES: Color = Color::new(0xEB);
/// r=2 g=3 b=0
pub const SPRING_BUD: Color = Color::new(0xEC);
/// r=2 g=3 b=1
pub const INCHWORM: Color = Color::new(0xED);
/// r=2 g=3 b=2
pub const MINT_GREEN: Color = Color::new(0xEE);
/// r=2 g=3 b=3
pub const CELESTE: Color = Color::new(0xEF);
/// r=3 g=0 b=0
pub const RED: Color = Color::new(0xF0);
/// r=3 g=0 b=1
pub const FOLLY: Color = Color::new(0xF1);
/// r=3 g=0 b=2
pub const FASHION_MAGENTA: Color = Color::new(0xF2);
/// r=3 g=0 b=3
pub const MAGENTA: Color = Color::new(0xF3);
/// r=3 g=1 b=0
pub const ORANGE: Color = Color::new(0xF4);
/// r=3 g=1 b=1
pub const SUNSET_ORANGE: Color = Color::new(0xF5);
/// r=3 g=1 b=2
pub const BRILLIANT_ROSE: Color = Color::new(0xF6);
/// r=3 g=1 b=3
pub const SHOCKING_PINK: Color = Color::new(0xF7);
/// r=3 g=2 b=0
pub const CHROME_YELLOW: Color = Color::new(0xF8);
/// r=3 g=2 b=1
pub const RAJAH: Color = Color::new(0xF9);
/// r=3 g=2 b=2
pub const MELON: Color = Color::new(0xFA);
/// r=3 g=2 b=3
pub const RICH_BRILLIANT_LAVENDER: Color = Color::new(0xFB);
/// r=3 g=3 b=0
pub const YELLOW: Color = Color::new(0xFC);
/// r=3 g=3 b=1
pub const ICTERINE: Color = Color::new(0xFD);
/// r=3 g=3 b=2
pub const PASTEL_YELLOW: Color = Color::new(0xFE);
/// r=3 g=3 b=3
pub const WHITE: Color = Color::new(0xFF);

/// Every opaque color, in byte order.
pub const ALL: [Color; 64] = [
    BLACK,
    OXFORD_BLUE,
    DUKE_BLUE,
    BLUE,
    DARK_GREEN,
    MIDNIGHT_GREEN,
    COBALT_BLUE,
    BLUE_MOON,
    ISLAMIC_GREEN,
    JAEGER_GREEN,
    TIFFANY_BLUE,
    VIVID_CERULEAN,
    GREEN,
    MALACHITE,
    MEDIUM_SPRING_GREEN,
    CYAN,
    BULGARIAN_ROSE,
    IMPERIAL_PURPLE,
    INDIGO,
    ELECTRIC_ULTRAMARINE,
    ARMY_GREEN,
    DARK_GRAY,
    LIBERTY,
    VERY_LIGHT_BLUE,
    KELLY_GREEN,
    MAY_GREEN,
    CADET_BLUE,
    PICTON_BLUE,
    BRIGHT_GREEN,
    SCREAMIN_GREEN,
    MEDIUM_AQUAMARINE,
    ELECTRIC_BLUE,
    DARK_CANDY_APPLE_RED,
    JAZZBERRY_JAM,
    PURPLE,
    VIVID_VIOLET,
    WINDSOR_TAN,
    ROSE_VALE,
    PURPUREUS,
    LAVENDER_INDIGO,
    LIMERICK,
    BRASS,
    LIGHT_GRAY,
    BABY_BLUE_EYES,
    SPRING_BUD,
    INCHWORM,
    MINT_GREEN,
    CELESTE,
    RED,
    FOLLY,
    FASHION_MAGENTA,
    MAGENTA,
    ORANGE,
    SUNSET_ORANGE,
    BRILLIANT_ROSE,
    SHOCKING_PINK,
    CHROME_YELLOW,
    RAJAH,
    MELON,
    RICH_BRILLIANT_LAVENDER,
    YELLOW,
    ICTERINE,
    PASTEL_YELLOW,
    WHITE,
];
