//! Configuration types for wiring diagram rendering.
//!
//! All types implement [`serde::Deserialize`] and every field has a default,
//! so a configuration file only needs the keys it changes.
//!
//! - [`AppConfig`] - Top-level configuration combining style and export settings.
//! - [`StyleConfig`] - Colors, font and the unit-to-pixel mapping.
//! - [`NetsConfig`] - Wire color per [`Net`].
//! - [`ExportConfig`] - Limits applied by the exporters.
//!
//! # Example
//!
//! ```
//! # use wiring::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.style().scale(), 100.0);
//! ```

use serde::Deserialize;

use wiring_core::color::Color;

use crate::canvas::Net;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    pub fn new(style: StyleConfig, export: ExportConfig) -> Self {
        Self { style, export }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Checks the values that deserialization alone cannot reject.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending key when the scale is not
    /// positive, the margin is negative, or the maximum export dimension is
    /// zero.
    pub fn validate(&self) -> Result<(), String> {
        let style = &self.style;
        if !(style.scale.is_finite() && style.scale > 0.0) {
            return Err(format!(
                "style.scale must be a positive number, got {}",
                style.scale
            ));
        }
        if !(style.margin.is_finite() && style.margin >= 0.0) {
            return Err(format!(
                "style.margin must not be negative, got {}",
                style.margin
            ));
        }
        if style.font_family.trim().is_empty() {
            return Err("style.font_family must not be empty".to_string());
        }
        if self.export.max_dimension == 0 {
            return Err("export.max_dimension must be greater than zero".to_string());
        }
        Ok(())
    }
}

/// Visual styling configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Color,
    font_family: String,
    /// Pixels per drawing unit.
    scale: f32,
    /// Pixels of empty space around the content.
    margin: f32,
    nets: NetsConfig,
}

impl StyleConfig {
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn nets(&self) -> &NetsConfig {
        &self.nets
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: color_literal("white"),
            font_family: "sans-serif".to_string(),
            scale: 100.0,
            margin: 40.0,
            nets: NetsConfig::default(),
        }
    }
}

/// Wire colors, one per [`Net`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetsConfig {
    power: Color,
    ground: Color,
    i2c: Color,
    spi: Color,
    control: Color,
    rf: Color,
}

impl NetsConfig {
    /// Returns the wire color for `net`.
    pub fn color(&self, net: Net) -> Color {
        match net {
            Net::Power => self.power,
            Net::Ground => self.ground,
            Net::I2c => self.i2c,
            Net::Spi => self.spi,
            Net::Control => self.control,
            Net::Rf => self.rf,
        }
    }
}

impl Default for NetsConfig {
    fn default() -> Self {
        Self {
            power: color_literal("#c0392b"),
            ground: color_literal("#2c3e50"),
            i2c: color_literal("#2471a3"),
            spi: color_literal("#1e8449"),
            control: color_literal("#b9770e"),
            rf: color_literal("#7d3c98"),
        }
    }
}

/// Limits applied by the exporters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Largest raster width or height, in pixels.
    max_dimension: u32,
}

impl ExportConfig {
    pub fn new(max_dimension: u32) -> Self {
        Self { max_dimension }
    }

    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            max_dimension: 8192,
        }
    }
}

fn color_literal(css: &str) -> Color {
    Color::new(css).unwrap_or_default()
}
