//! Straight wires between two pixel-space points.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Insets, Point},
};

/// Stroke and endpoint decoration for a wire.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WireDefinition {
    stroke: StrokeDefinition,
    endpoint_radius: Option<f32>,
}

impl WireDefinition {
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self {
            stroke,
            endpoint_radius: None,
        }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn endpoint_radius(&self) -> Option<f32> {
        self.endpoint_radius
    }

    /// Draws a filled dot of `radius` pixels at both ends of the wire.
    pub fn set_endpoint_radius(&mut self, radius: Option<f32>) {
        self.endpoint_radius = radius;
    }
}

/// A wire from `start` to `end`, both in pixel space.
///
/// Unlike boxes and text a wire is placed by its endpoints, so it does not
/// implement [`Drawable`](crate::draw::Drawable).
#[derive(Debug, Clone)]
pub struct Wire<'a> {
    definition: &'a WireDefinition,
    start: Point,
    end: Point,
}

impl<'a> Wire<'a> {
    pub fn new(definition: &'a WireDefinition, start: Point, end: Point) -> Self {
        Self {
            definition,
            start,
            end,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Bounding box of the wire including its endpoint dots.
    pub fn bounds(&self) -> Bounds {
        let bounds = Bounds::from_corners(self.start, self.end);
        match self.definition.endpoint_radius() {
            Some(radius) => bounds.add_padding(Insets::uniform(radius)),
            None => bounds,
        }
    }

    pub fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let stroke = self.definition.stroke();

        let line = svg_element::Line::new()
            .set("x1", self.start.x())
            .set("y1", self.start.y())
            .set("x2", self.end.x())
            .set("y2", self.end.y());
        let line = apply_stroke!(line, stroke);
        output.add_to_layer(RenderLayer::Wire, Box::new(line));

        if let Some(radius) = self.definition.endpoint_radius() {
            for point in [self.start, self.end] {
                let dot = svg_element::Circle::new()
                    .set("cx", point.x())
                    .set("cy", point.y())
                    .set("r", radius)
                    .set("fill", stroke.color().to_hex());
                output.add_to_layer(RenderLayer::Wire, Box::new(dot));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Color;

    use super::*;

    fn render(wire: &Wire<'_>) -> String {
        wire.render_to_layers()
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_wire_renders_line_on_wire_layer() {
        let def = WireDefinition::new(StrokeDefinition::solid(Color::new("#c0392b").unwrap(), 2.0));
        let wire = Wire::new(&def, Point::new(10.0, 20.0), Point::new(110.0, 60.0));
        let svg = render(&wire);

        assert!(svg.contains("data-layer=\"wire\""));
        assert!(svg.contains("x1=\"10\""));
        assert!(svg.contains("y2=\"60\""));
        assert!(svg.contains("stroke=\"#c0392b\""));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_wire_endpoint_dots() {
        let mut def = WireDefinition::default();
        def.set_endpoint_radius(Some(3.0));
        let wire = Wire::new(&def, Point::new(0.0, 0.0), Point::new(50.0, 0.0));

        let output = wire.render_to_layers();
        assert_eq!(output.layer_len(RenderLayer::Wire), 3);
    }

    #[test]
    fn test_wire_bounds_include_dots() {
        let mut def = WireDefinition::default();
        let wire = Wire::new(&def, Point::new(50.0, 10.0), Point::new(0.0, 30.0));
        let bounds = wire.bounds();
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.max_y(), 30.0);

        def.set_endpoint_radius(Some(2.0));
        let wire = Wire::new(&def, Point::new(50.0, 10.0), Point::new(0.0, 30.0));
        let bounds = wire.bounds();
        assert_eq!(bounds.min_x(), -2.0);
        assert_eq!(bounds.max_y(), 32.0);
    }
}
