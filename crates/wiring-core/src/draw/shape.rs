//! Component boxes.
//!
//! A [`BoxDefinition`] carries the outline and fill of a component box and a
//! [`Shape`] pairs it with a concrete pixel size so it can be drawn.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// Outline, fill and corner rounding of a component box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxDefinition {
    stroke: StrokeDefinition,
    fill_color: Option<Color>,
    corner_radius: f32,
}

impl BoxDefinition {
    /// Create a new box definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn set_stroke(&mut self, stroke: StrokeDefinition) {
        self.stroke = stroke;
    }

    /// Sets the fill color. `None` leaves the box unfilled.
    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
    }
}

impl Default for BoxDefinition {
    fn default() -> Self {
        Self {
            stroke: StrokeDefinition::solid(Color::default(), 1.5),
            fill_color: None,
            corner_radius: 0.0,
        }
    }
}

/// A [`BoxDefinition`] with a size in pixels.
#[derive(Debug, Clone)]
pub struct Shape<'a> {
    definition: &'a BoxDefinition,
    size: Size,
}

impl<'a> Shape<'a> {
    pub fn new(definition: &'a BoxDefinition, size: Size) -> Self {
        Self { definition, size }
    }

    pub fn definition(&self) -> &BoxDefinition {
        self.definition
    }
}

impl Drawable for Shape<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = position.to_bounds(self.size);

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("rx", self.definition.corner_radius());

        let rect = match self.definition.fill_color() {
            Some(fill) => rect
                .set("fill", fill.to_hex())
                .set("fill-opacity", fill.alpha()),
            None => rect.set("fill", "none"),
        };

        let rect = apply_stroke!(rect, self.definition.stroke());
        output.add_to_layer(RenderLayer::Component, Box::new(rect));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}
