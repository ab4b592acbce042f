//! SVG rendering of a [`Canvas`].
//!
//! Descriptors are mapped from drawing units into pixel space by a
//! [`Viewport`], converted to drawables, and collected into render layers so
//! that wires always paint above boxes and text above wires.

use log::{debug, info, trace};
use svg::node::element as svg_element;

use wiring_core::{
    color::Color,
    draw::{
        BoxDefinition, Drawable, LayeredOutput, RenderLayer, Shape, StrokeCap, StrokeDefinition,
        Text, TextAlign, TextDefinition, Wire, WireDefinition,
    },
    geometry::{Bounds, Insets, Point, Size},
};

use super::{Error, Exporter};
use crate::{
    canvas::{
        Canvas, Element, LabelDescriptor, LineDescriptor, LinePlacement, Net,
        SHAPE_LABEL_FONT_SIZE, ShapeDescriptor,
    },
    config::StyleConfig,
};

const BOX_STROKE_WIDTH: f32 = 1.5;
const BOX_CORNER_RADIUS: f32 = 4.0;
const WIRE_STROKE_WIDTH: f32 = 2.0;
const WIRE_ENDPOINT_RADIUS: f32 = 2.5;

/// Writes the SVG document as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgText;

impl Exporter for SvgText {
    fn export(&self, document: &str) -> Result<Vec<u8>, Error> {
        Ok(document.as_bytes().to_vec())
    }
}

/// Maps drawing units (Y up) to SVG pixels (Y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    content: Bounds,
    scale: f32,
    margin: f32,
}

impl Viewport {
    /// `content` is the extent to fit, in drawing units.
    pub fn new(content: Bounds, scale: f32, margin: f32) -> Self {
        Self {
            content,
            scale,
            margin,
        }
    }

    pub fn to_pixels(&self, point: Point) -> Point {
        Point::new(
            (point.x() - self.content.min_x()) * self.scale + self.margin,
            (self.content.max_y() - point.y()) * self.scale + self.margin,
        )
    }

    pub fn size_to_pixels(&self, size: Size) -> Size {
        size.scale(self.scale)
    }

    /// Total document size: the scaled content plus the margin on every side.
    pub fn document_size(&self) -> Size {
        self.size_to_pixels(self.content.to_size())
            .add_padding(Insets::uniform(self.margin))
    }
}

/// Renders canvases with one [`StyleConfig`].
#[derive(Debug)]
pub struct Svg<'a> {
    style: &'a StyleConfig,
    box_definition: BoxDefinition,
    text_definition: TextDefinition,
}

impl<'a> Svg<'a> {
    pub fn new(style: &'a StyleConfig) -> Self {
        let mut box_definition = BoxDefinition::new();
        box_definition.set_stroke(StrokeDefinition::solid(Color::default(), BOX_STROKE_WIDTH));
        box_definition.set_corner_radius(BOX_CORNER_RADIUS);
        box_definition.set_fill_color(Some(style.background_color()));

        let mut text_definition = TextDefinition::new();
        text_definition.set_font_family(style.font_family());

        Self {
            style,
            box_definition,
            text_definition,
        }
    }

    /// Size of `text` at `font_size`, in drawing units.
    fn measure(&self, text: &str, font_size: u16) -> Size {
        let definition = self.text_definition.with_font_size(font_size);
        Text::new(&definition, text)
            .calculate_size()
            .scale(1.0 / self.style.scale())
    }

    /// Renders `canvas` into a complete SVG document.
    pub fn render_canvas(&self, canvas: &Canvas) -> svg::Document {
        info!(elements = canvas.len(); "Rendering canvas to SVG");

        let content = canvas.bounds(|text, size| self.measure(text, size));
        let viewport = Viewport::new(content, self.style.scale(), self.style.margin());
        let doc_size = viewport.document_size();
        debug!(width = doc_size.width(), height = doc_size.height(); "SVG dimensions");

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Background, Box::new(self.background(doc_size)));

        if let Some((title, font_size)) = canvas.title() {
            let content_only = canvas
                .content_bounds(&mut |text, size| self.measure(text, size))
                .unwrap_or_default();
            let title_size = self.measure(title, font_size);
            let center = canvas.title_center(content_only, title_size);
            let definition = self.text_definition.with_font_size(font_size);
            output.merge(Text::new(&definition, title).render_to_layers(viewport.to_pixels(center)));
        }

        for element in canvas.elements() {
            trace!(element:?; "Rendering element");
            let rendered = match element {
                Element::Shape(shape) => self.render_shape(shape, &viewport),
                Element::Label(label) => self.render_label(label, &viewport),
                Element::Line(line) => self.render_line(line, &viewport),
            };
            output.merge(rendered);
        }

        let doc = svg::Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", doc_size.width(), doc_size.height()),
            )
            .set("width", doc_size.width())
            .set("height", doc_size.height());

        output
            .render()
            .into_iter()
            .fold(doc, |doc, group| doc.add(group))
    }

    fn background(&self, size: Size) -> svg_element::Rectangle {
        let color = self.style.background_color();
        svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", color.to_hex())
            .set("fill-opacity", color.alpha())
    }

    fn render_shape(&self, shape: &ShapeDescriptor, viewport: &Viewport) -> LayeredOutput {
        let size = viewport.size_to_pixels(shape.size());
        let center = viewport.to_pixels(shape.bounds().center());
        let mut output = Shape::new(&self.box_definition, size).render_to_layers(center);

        let label_size = self.measure(shape.label(), SHAPE_LABEL_FONT_SIZE);
        let label_center = viewport.to_pixels(shape.label_center(label_size));
        let definition = self.text_definition.with_font_size(SHAPE_LABEL_FONT_SIZE);
        output.merge(Text::new(&definition, shape.label()).render_to_layers(label_center));
        output
    }

    fn render_label(&self, label: &LabelDescriptor, viewport: &Viewport) -> LayeredOutput {
        let mut definition = self.text_definition.with_font_size(label.font_size());
        definition.set_align(TextAlign::Start);

        let size = self.measure(label.text(), label.font_size());
        let center = viewport.to_pixels(label.center(size));
        Text::new(&definition, label.text()).render_to_layers(center)
    }

    fn render_line(&self, line: &LineDescriptor, viewport: &Viewport) -> LayeredOutput {
        let color = self.style.nets().color(line.net());
        let definition = wire_definition(line.net(), color);
        let start = viewport.to_pixels(line.start());
        let end = viewport.to_pixels(line.end());
        let mut output = Wire::new(&definition, start, end).render_to_layers();

        if let Some(text) = line.label() {
            let mut text_definition = self.text_definition.with_font_size(line.font_size());
            text_definition.set_color(Some(color));
            if line.label_placement() == LinePlacement::Middle {
                text_definition.set_background_color(Some(self.style.background_color()));
                text_definition.set_padding(Insets::uniform(2.0));
            }

            let size = self.measure(text, line.font_size());
            let center = viewport.to_pixels(line.label_center(size));
            output.merge(Text::new(&text_definition, text).render_to_layers(center));
        }

        output
    }
}

/// RF runs are drawn dashed without endpoint dots; every other net is a
/// solid wire with a dot at each end.
fn wire_definition(net: Net, color: Color) -> WireDefinition {
    let mut stroke = match net {
        Net::Rf => StrokeDefinition::dashed(color, WIRE_STROKE_WIDTH),
        _ => StrokeDefinition::solid(color, WIRE_STROKE_WIDTH),
    };
    stroke.set_cap(StrokeCap::Round);

    let mut definition = WireDefinition::new(stroke);
    if net != Net::Rf {
        definition.set_endpoint_radius(Some(WIRE_ENDPOINT_RADIUS));
    }
    definition
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::canvas::Anchor;

    fn viewport() -> Viewport {
        let content = Bounds::from_corners(Point::new(-1.0, -2.0), Point::new(3.0, 2.0));
        Viewport::new(content, 10.0, 5.0)
    }

    #[test]
    fn test_viewport_maps_corners_inside_margin() {
        let viewport = viewport();
        assert_eq!(viewport.to_pixels(Point::new(-1.0, 2.0)), Point::new(5.0, 5.0));
        assert_eq!(viewport.to_pixels(Point::new(3.0, -2.0)), Point::new(45.0, 45.0));
    }

    #[test]
    fn test_viewport_flips_y() {
        let viewport = viewport();
        let upper = viewport.to_pixels(Point::new(0.0, 1.0));
        let lower = viewport.to_pixels(Point::new(0.0, -1.0));
        assert!(upper.y() < lower.y());
    }

    #[test]
    fn test_viewport_document_size() {
        let size = viewport().document_size();
        assert_approx_eq!(f32, size.width(), 50.0);
        assert_approx_eq!(f32, size.height(), 50.0);
    }

    #[test]
    fn test_svg_text_exporter_returns_document_bytes() {
        let bytes = SvgText.export("<svg/>").unwrap();
        assert_eq!(bytes, b"<svg/>");
    }

    #[test]
    fn test_wire_definition_per_net() {
        let color = Color::new("#7d3c98").unwrap();
        let rf = wire_definition(Net::Rf, color);
        assert!(rf.endpoint_radius().is_none());
        assert!(rf.stroke().style().to_svg_value().is_some());

        let spi = wire_definition(Net::Spi, color);
        assert_eq!(spi.endpoint_radius(), Some(WIRE_ENDPOINT_RADIUS));
        assert!(spi.stroke().style().to_svg_value().is_none());
    }

    #[test]
    fn test_render_canvas_layers_and_background() {
        let style = StyleConfig::default();
        let mut canvas = Canvas::new().with_title("Bench", 14);
        canvas.push(
            ShapeDescriptor::new(Point::new(0.0, 1.0), Size::new(2.0, 1.0), "U9")
                .with_anchor(Anchor::TopLeft),
        );
        canvas.push(LabelDescriptor::new(Point::new(0.1, 0.5), "- VCC", 10));
        canvas.push(
            LineDescriptor::new(Point::new(-2.0, 0.5), Point::new(-0.2, 0.5), Net::Power)
                .with_label("3.3V"),
        );

        let doc = Svg::new(&style).render_canvas(&canvas).to_string();

        assert!(doc.starts_with("<svg"));
        assert!(doc.contains("viewBox=\"0 0 "));
        for layer in ["background", "component", "wire", "label-background", "text"] {
            assert!(doc.contains(&format!("data-layer=\"{layer}\"")), "missing {layer}");
        }
        for text in ["Bench", "U9", "- VCC", "3.3V"] {
            assert!(doc.contains(text), "missing {text}");
        }
        assert!(doc.contains("stroke=\"#c0392b\""));
        assert!(doc.contains("fill=\"#ffffff\""));
    }

    #[test]
    fn test_render_canvas_empty() {
        let style = StyleConfig::default();
        let doc = Svg::new(&style).render_canvas(&Canvas::new()).to_string();

        // Margins only.
        assert!(doc.contains("width=\"80\""));
        assert!(doc.contains("height=\"80\""));
        assert!(!doc.contains("data-layer=\"text\""));
    }
}
