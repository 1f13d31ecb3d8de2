//! The cosmetic catalog shown on the try-on screen.
//!
//! The catalog is a fixed table of five categories. Each category owns an
//! ordered palette of shades; the first category is the default selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TryOnError;

/// An sRGB shade, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Hex digits without the leading `#`, used in query strings.
    pub fn to_hex_digits(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex_digits())
    }
}

impl FromStr for Color {
    type Err = TryOnError;

    /// Accepts `#RRGGBB` or `RRGGBB`, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TryOnError::InvalidColor(s.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(Color::hex)
            .map_err(|_| TryOnError::InvalidColor(s.to_string()))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = TryOnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Line icons used across the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    AlertCircle,
    Camera,
    Crown,
    Heart,
    Palette,
    Shield,
    ShoppingBag,
    Sparkles,
    Sun,
    Wand,
    WandSparkles,
}

/// A makeup category and its palette.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub colors: &'static [Color],
}

impl Category {
    /// Whether `color` is one of this category's shades.
    pub fn offers(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

const LIPSTICK: &[Color] = &[
    Color::hex(0xFF0000),
    Color::hex(0xFF69B4),
    Color::hex(0xFF1493),
    Color::hex(0xC71585),
    Color::hex(0xDB7093),
];

const EYESHADOW: &[Color] = &[
    Color::hex(0xB8860B),
    Color::hex(0xCD853F),
    Color::hex(0xDEB887),
    Color::hex(0xD2691E),
    Color::hex(0x8B4513),
];

const FOUNDATION: &[Color] = &[
    Color::hex(0xFFE4C4),
    Color::hex(0xDEB887),
    Color::hex(0xD2B48C),
    Color::hex(0xBC8F8F),
    Color::hex(0xF4A460),
];

const BLUSH: &[Color] = &[
    Color::hex(0xFFB6C1),
    Color::hex(0xFF69B4),
    Color::hex(0xDB7093),
    Color::hex(0xDC143C),
    Color::hex(0xC71585),
];

const EYELINER: &[Color] = &[
    Color::hex(0x000000),
    Color::hex(0x4B0082),
    Color::hex(0x800080),
    Color::hex(0x8B4513),
    Color::hex(0x696969),
];

pub static CATEGORIES: [Category; 5] = [
    Category {
        id: "lipstick",
        name: "Lipstick",
        description: "Perfect your pout with vibrant colors",
        icon: Icon::Palette,
        colors: LIPSTICK,
    },
    Category {
        id: "eyeshadow",
        name: "Eye Shadow",
        description: "Create stunning eye looks",
        icon: Icon::Wand,
        colors: EYESHADOW,
    },
    Category {
        id: "foundation",
        name: "Foundation",
        description: "Flawless base for your look",
        icon: Icon::Sparkles,
        colors: FOUNDATION,
    },
    Category {
        id: "blush",
        name: "Blush",
        description: "Add a natural flush",
        icon: Icon::Heart,
        colors: BLUSH,
    },
    Category {
        id: "eyeliner",
        name: "Eyeliner",
        description: "Define your eyes",
        icon: Icon::Wand,
        colors: EYELINER,
    },
];

pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn default_category() -> &'static Category {
    &CATEGORIES[0]
}

pub fn find(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_five_categories_in_order() {
        let ids: Vec<_> = categories().iter().map(|c| c.id).collect();
        assert_eq!(ids, ["lipstick", "eyeshadow", "foundation", "blush", "eyeliner"]);
        assert_eq!(default_category().id, "lipstick");
    }

    #[test]
    fn every_palette_has_five_distinct_shades() {
        for category in categories() {
            let unique: HashSet<_> = category.colors.iter().collect();
            assert_eq!(category.colors.len(), 5, "{}", category.id);
            assert_eq!(unique.len(), 5, "{}", category.id);
        }
    }

    #[test]
    fn find_returns_none_for_unknown_ids() {
        assert_eq!(find("blush").map(|c| c.name), Some("Blush"));
        assert!(find("mascara").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn colors_parse_with_or_without_hash() {
        assert_eq!("#ff69b4".parse::<Color>().unwrap(), Color::rgb(0xFF, 0x69, 0xB4));
        assert_eq!("C71585".parse::<Color>().unwrap(), Color::hex(0xC71585));
        assert_eq!(Color::hex(0x4B0082).to_string(), "#4B0082");
    }

    #[test]
    fn malformed_colors_are_rejected() {
        for input in ["", "#", "#FFF", "#GGGGGG", "#FF00000", "red"] {
            assert!(
                matches!(input.parse::<Color>(), Err(TryOnError::InvalidColor(_))),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn offers_checks_membership() {
        let blush = find("blush").unwrap();
        assert!(blush.offers(Color::hex(0xDC143C)));
        assert!(!blush.offers(Color::hex(0x000000)));
    }

    #[test]
    fn categories_serialize_with_hex_colors() {
        let json = serde_json::to_value(find("eyeliner").unwrap()).unwrap();
        assert_eq!(json["icon"], "wand");
        assert_eq!(json["colors"][1], "#4B0082");
    }
}
