//! Colors and the series palette.

use std::fmt;

use serde::Deserialize;

/// 8-bit sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Neutral gray used for missing data.
    pub const GRAY: Self = Self::rgb(169, 169, 169);

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(text: &str) -> Option<Self> {
        let hex = text.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        match hex.len() {
            3 => {
                let short = |index: usize| channel(index..index + 1).map(|value| value * 17);
                Some(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Perceived brightness in `0.0..=255.0`.
    pub fn brightness(&self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }

    /// Check whether light text reads better on this color.
    pub fn is_dark(&self) -> bool {
        self.brightness() < 128.0
    }

    /// Text color with enough contrast against this background.
    pub fn contrasting_text(&self) -> Color {
        if self.is_dark() { Self::WHITE } else { Self::BLACK }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid color `{value}`"))
    }
}

/// Series color for male life expectancy.
pub const MALE_COLOR: Color = Color::rgb(0x3b, 0x82, 0xf6);
/// Series color for female life expectancy.
pub const FEMALE_COLOR: Color = Color::rgb(0xa8, 0x55, 0xf7);
/// Series color for the population average.
pub const ALL_COLOR: Color = Color::rgb(0x1b, 0x20, 0x21);

const DEFAULT_PALETTE: [Color; 10] = [
    Color::rgb(0x44, 0x72, 0xc4),
    Color::rgb(0xed, 0x7d, 0x31),
    Color::rgb(0x70, 0xad, 0x47),
    Color::rgb(0xff, 0xc0, 0x00),
    Color::rgb(0x5b, 0x9b, 0xd5),
    Color::rgb(0x82, 0x73, 0x97),
    Color::rgb(0x26, 0x44, 0x78),
    Color::rgb(0x9e, 0x48, 0x0e),
    Color::rgb(0x63, 0x63, 0x63),
    Color::rgb(0x99, 0x73, 0x00),
];

/// Ordered list of colors handed out to selected countries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette; an empty list falls back to the default colors.
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    /// Color for the `index`-th selected entry, wrapping around.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes hold at least one color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let color = Color::from_hex("#827397").unwrap();
        assert_eq!(color, Color::rgb(0x82, 0x73, 0x97));
        assert_eq!(color.to_string(), "#827397");
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("#00000080").unwrap().to_string(), "#00000080");
        assert!(Color::from_hex("827397").is_none());
        assert!(Color::from_hex("#82739").is_none());
        assert!(Color::from_hex("#zzzzzz").is_none());
    }

    #[test]
    fn contrast() {
        assert!(Color::BLACK.is_dark());
        assert_eq!(Color::rgb(0x26, 0x44, 0x78).contrasting_text(), Color::WHITE);
        assert_eq!(Color::rgb(0xff, 0xc0, 0x00).contrasting_text(), Color::BLACK);
    }

    #[test]
    fn palette_wraps() {
        let palette = Palette::new(vec![Color::BLACK, Color::WHITE]);
        assert_eq!(palette.color(0), Color::BLACK);
        assert_eq!(palette.color(3), Color::WHITE);
        assert_eq!(Palette::new(Vec::new()), Palette::default());
    }
}
