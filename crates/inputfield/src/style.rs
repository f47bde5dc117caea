//! Style value types exchanged with the host renderer.
//!
//! The engine never draws anything. It only decides which [`TextStyle`] the
//! host should apply (base style or placeholder style) and which
//! [`TextAlignment`] suits the active input mode.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An RGBA color with straight (non-premultiplied) 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Gainsboro, the default foreground of user content.
    pub const GAINSBORO: Self = Self::from_rgb8(220, 220, 220);
    /// Dim gray, the default placeholder foreground.
    pub const DIM_GRAY: Self = Self::from_rgb8(105, 105, 105);
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);

    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let len = hex.len();

        if (len != 6 && len != 8) || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if len == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or(ConfigError::InvalidColor(value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Normal upright style.
    #[default]
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// A font request handed to the host renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family name, resolved by the host.
    pub family: String,
    /// Size in points.
    pub size: f32,
    #[serde(default)]
    pub style: FontStyle,
}

impl Font {
    /// Create an upright font with the given family and size.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            style: FontStyle::Normal,
        }
    }

    /// Builder-style setter for the slant.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Sans Serif", 10.0)
    }
}

/// Foreground color and font applied to the displayed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Color,
    pub font: Font,
}

impl TextStyle {
    pub fn new(color: Color, font: Font) -> Self {
        Self { color, font }
    }

    /// The style used for user content unless the host sets its own.
    pub fn base() -> Self {
        Self::new(Color::GAINSBORO, Font::default())
    }

    /// The style used while the placeholder is shown.
    pub fn placeholder() -> Self {
        Self::new(
            Color::DIM_GRAY,
            Font::new("Consolas", 10.0).with_style(FontStyle::Italic),
        )
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::base()
    }
}

/// Horizontal alignment hint for the displayed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#696969"), Some(Color::DIM_GRAY));
        assert_eq!(
            Color::from_hex("FF000080"),
            Some(Color::from_rgba8(255, 0, 0, 128))
        );
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::GAINSBORO.to_hex(), "#DCDCDC");
        assert_eq!(Color::from_rgba8(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn test_color_try_from_rejects_garbage() {
        let err = Color::try_from("blue".to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(ref s) if s == "blue"));
    }

    #[test]
    fn test_placeholder_style_differs_from_base() {
        let base = TextStyle::base();
        let placeholder = TextStyle::placeholder();
        assert_ne!(base, placeholder);
        assert_eq!(placeholder.font.style, FontStyle::Italic);
    }
}
