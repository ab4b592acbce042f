//! Stroke definitions shared by boxes and wires.
//!
//! [`StrokeDefinition`] follows SVG terminology, and the
//! [`apply_stroke!`](crate::apply_stroke!) macro writes all of its attributes
//! onto an SVG element in one go.
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#000000"`, `0.5` |
//! | `width` | `stroke-width` | `2.0` |
//! | `style` | `stroke-dasharray` | `"5,5"` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"`, `"square"` |
//!
//! ```
//! use wiring_core::draw::{StrokeCap, StrokeDefinition};
//! use wiring_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let mut stroke = StrokeDefinition::solid(Color::new("#c0392b").unwrap(), 2.0);
//! stroke.set_cap(StrokeCap::Round);
//!
//! let line = svg_element::Line::new().set("x1", 0).set("x2", 10);
//! let line = wiring_core::apply_stroke!(line, &stroke);
//! ```

use crate::color::Color;

/// Line pattern of a stroke.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// 5px dash, 5px gap
    Dashed,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
        }
    }
}

/// How line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// A stroke for rendering wires and box outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Creates a dashed stroke with the given color and width.
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::solid(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
            cap: StrokeCap::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width and line cap, plus the dash pattern when the
/// style is not solid.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_hex())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
