//! Color handling for wiring diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are parsed from CSS color strings, rendered
//! back into SVG attribute values, and converted to 8-bit RGBA when a raster
//! backend needs a solid fill.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};
use serde::Deserialize;
use thiserror::Error;

/// Error returned when a string is not a valid CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{input}`: {reason}")]
pub struct ColorError {
    input: String,
    reason: String,
}

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Deserializes from any CSS color string, so configuration files can use
/// `"white"`, `"#c0392b"` or `"rgb(36, 113, 163)"` interchangeably.
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiring_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, ColorError> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| ColorError {
                input: color_str.to_string(),
                reason: err.to_string(),
            })
    }

    /// Returns the alpha component of this color, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Converts this color to 8-bit sRGB components `[r, g, b, a]`.
    ///
    /// Used by raster backends that fill a pixel buffer directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiring_core::color::Color;
    ///
    /// let white = Color::new("white").unwrap();
    /// assert_eq!(white.to_rgba8(), [255, 255, 255, 255]);
    /// ```
    pub fn to_rgba8(&self) -> [u8; 4] {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        [rgba.r, rgba.g, rgba.b, rgba.a]
    }

    /// Formats the color as an opaque `#rrggbb` hex string.
    ///
    /// SVG output uses this form for `fill` and `stroke` so every backend,
    /// including the rasterizer, reads the same value; the alpha component is
    /// emitted separately as an opacity attribute.
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());

        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_color_alpha() {
        assert!((Color::new("red").unwrap().alpha() - 1.0).abs() < 0.001);
        assert!((Color::new("rgba(0, 0, 0, 0.5)").unwrap().alpha() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_color_to_rgba8() {
        assert_eq!(Color::new("black").unwrap().to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(Color::new("#ff0000").unwrap().to_rgba8(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::new("white").unwrap().to_hex(), "#ffffff");
        assert_eq!(Color::new("rgb(36, 113, 163)").unwrap().to_hex(), "#2471a3");
        // Alpha is not part of the hex form
        assert_eq!(Color::new("rgba(255, 0, 0, 0.2)").unwrap().to_hex(), "#ff0000");
    }

    #[test]
    fn test_color_from_str_and_try_from() {
        let parsed: Color = "navy".parse().unwrap();
        let converted = Color::try_from("navy".to_string()).unwrap();
        assert_eq!(parsed, converted);
        assert!(Color::try_from("nope".to_string()).is_err());
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2 = Color::new("red").unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
