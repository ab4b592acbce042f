//! The descriptor model of a wiring diagram.
//!
//! A [`Canvas`] is an ordered list of immutable [`Element`]s. Positions and
//! sizes are in drawing units with the Y axis pointing up; the renderer maps
//! them to pixels.
//!
//! ```
//! use wiring::canvas::{Canvas, LabelDescriptor, Net, LineDescriptor};
//! use wiring_core::geometry::Point;
//!
//! let mut canvas = Canvas::new();
//! canvas.push(LabelDescriptor::new(Point::new(0.0, 0.0), "- GND", 10));
//! canvas.push(
//!     LineDescriptor::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Net::Ground)
//!         .with_label("GND"),
//! );
//! assert_eq!(canvas.len(), 2);
//! ```

use wiring_core::geometry::{Bounds, Point, Size};

/// Gap between an element and a label placed next to it, in drawing units.
pub const LABEL_GAP: f32 = 0.08;

/// Default font size for wire labels, in points.
pub const WIRE_LABEL_FONT_SIZE: u16 = 10;

/// Font size of box labels, in points.
pub const SHAPE_LABEL_FONT_SIZE: u16 = 11;

/// Which point of a box its `position` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Center,
    TopLeft,
}

/// Where a wire's label goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePlacement {
    /// Above the midpoint
    Top,
    /// On the midpoint, over a background patch
    #[default]
    Middle,
    /// Just past the end point
    End,
}

/// Electrical role of a wire. Selects its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Net {
    Power,
    Ground,
    I2c,
    Spi,
    Control,
    Rf,
}

impl Net {
    pub fn name(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Ground => "ground",
            Self::I2c => "i2c",
            Self::Spi => "spi",
            Self::Control => "control",
            Self::Rf => "rf",
        }
    }
}

/// A labelled component box.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    position: Point,
    size: Size,
    anchor: Anchor,
    label: &'static str,
}

impl ShapeDescriptor {
    /// A box centered on `position`, labelled above.
    pub const fn new(position: Point, size: Size, label: &'static str) -> Self {
        Self {
            position,
            size,
            anchor: Anchor::Center,
            label,
        }
    }

    pub const fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Extent of the box itself.
    pub fn bounds(&self) -> Bounds {
        match self.anchor {
            Anchor::Center => Bounds::new_from_center(self.position, self.size),
            Anchor::TopLeft => Bounds::new_from_min_point(
                Point::new(self.position.x(), self.position.y() - self.size.height()),
                self.size,
            ),
        }
    }

    /// Center of a label of `label_size` placed just above the box.
    pub fn label_center(&self, label_size: Size) -> Point {
        let bounds = self.bounds();
        Point::new(
            bounds.center().x(),
            bounds.max_y() + LABEL_GAP + label_size.height() / 2.0,
        )
    }
}

/// A free-standing text label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDescriptor {
    position: Point,
    text: &'static str,
    font_size: u16,
}

impl LabelDescriptor {
    /// `position` is the left edge of the text at its vertical middle.
    pub const fn new(position: Point, text: &'static str, font_size: u16) -> Self {
        Self {
            position,
            text,
            font_size,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn center(&self, text_size: Size) -> Point {
        Point::new(self.position.x() + text_size.width() / 2.0, self.position.y())
    }
}

/// A straight wire, optionally labelled.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDescriptor {
    start: Point,
    end: Point,
    net: Net,
    label: Option<&'static str>,
    label_placement: LinePlacement,
    font_size: u16,
}

impl LineDescriptor {
    pub const fn new(start: Point, end: Point, net: Net) -> Self {
        Self {
            start,
            end,
            net,
            label: None,
            label_placement: LinePlacement::Middle,
            font_size: WIRE_LABEL_FONT_SIZE,
        }
    }

    pub const fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub const fn with_label_placement(mut self, placement: LinePlacement) -> Self {
        self.label_placement = placement;
        self
    }

    pub const fn with_font_size(mut self, font_size: u16) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn net(&self) -> Net {
        self.net
    }

    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    pub fn label_placement(&self) -> LinePlacement {
        self.label_placement
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.start, self.end)
    }

    pub fn label_center(&self, label_size: Size) -> Point {
        let mid = self.start.midpoint(self.end);
        match self.label_placement {
            LinePlacement::Top => {
                Point::new(mid.x(), mid.y() + LABEL_GAP + label_size.height() / 2.0)
            }
            LinePlacement::Middle => mid,
            LinePlacement::End => Point::new(
                self.end.x() + LABEL_GAP + label_size.width() / 2.0,
                self.end.y(),
            ),
        }
    }
}

/// One descriptor on a [`Canvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Shape(ShapeDescriptor),
    Label(LabelDescriptor),
    Line(LineDescriptor),
}

impl From<ShapeDescriptor> for Element {
    fn from(shape: ShapeDescriptor) -> Self {
        Self::Shape(shape)
    }
}

impl From<LabelDescriptor> for Element {
    fn from(label: LabelDescriptor) -> Self {
        Self::Label(label)
    }
}

impl From<LineDescriptor> for Element {
    fn from(line: LineDescriptor) -> Self {
        Self::Line(line)
    }
}

impl Element {
    /// Extent of the element including its label.
    ///
    /// `measure` returns the size of a text at a font size, in drawing units.
    pub fn bounds<F>(&self, measure: &mut F) -> Bounds
    where
        F: FnMut(&str, u16) -> Size,
    {
        match self {
            Self::Shape(shape) => {
                let label_size = measure(shape.label(), SHAPE_LABEL_FONT_SIZE);
                shape
                    .bounds()
                    .merge(&shape.label_center(label_size).to_bounds(label_size))
            }
            Self::Label(label) => {
                let size = measure(label.text(), label.font_size());
                label.center(size).to_bounds(size)
            }
            Self::Line(line) => match line.label() {
                Some(text) => {
                    let size = measure(text, line.font_size());
                    line.bounds()
                        .merge(&line.label_center(size).to_bounds(size))
                }
                None => line.bounds(),
            },
        }
    }
}

/// An ordered collection of descriptors with an optional title.
///
/// Elements are drawn in insertion order: within a render layer, later
/// elements paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    title: Option<(&'static str, u16)>,
    elements: Vec<Element>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a title drawn centered above all other content.
    pub fn with_title(mut self, text: &'static str, font_size: u16) -> Self {
        self.title = Some((text, font_size));
        self
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn title(&self) -> Option<(&'static str, u16)> {
        self.title
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &ShapeDescriptor> {
        self.elements.iter().filter_map(|element| match element {
            Element::Shape(shape) => Some(shape),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &LabelDescriptor> {
        self.elements.iter().filter_map(|element| match element {
            Element::Label(label) => Some(label),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineDescriptor> {
        self.elements.iter().filter_map(|element| match element {
            Element::Line(line) => Some(line),
            _ => None,
        })
    }

    /// Union of every element's extent, excluding the title.
    ///
    /// Returns `None` for an empty canvas.
    pub fn content_bounds<F>(&self, measure: &mut F) -> Option<Bounds>
    where
        F: FnMut(&str, u16) -> Size,
    {
        self.elements
            .iter()
            .map(|element| element.bounds(measure))
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Center of the title for the given content extent.
    pub fn title_center(&self, content: Bounds, title_size: Size) -> Point {
        Point::new(
            content.center().x(),
            content.max_y() + 2.0 * LABEL_GAP + title_size.height() / 2.0,
        )
    }

    /// Union of every element's extent and the title.
    ///
    /// An empty canvas without a title has zero-sized bounds at the origin.
    pub fn bounds<F>(&self, mut measure: F) -> Bounds
    where
        F: FnMut(&str, u16) -> Size,
    {
        let content = self.content_bounds(&mut measure);
        match (self.title, content) {
            (Some((text, size)), content) => {
                let content = content.unwrap_or_default();
                let title_size = measure(text, size);
                let title = self.title_center(content, title_size).to_bounds(title_size);
                if self.is_empty() {
                    title
                } else {
                    content.merge(&title)
                }
            }
            (None, content) => content.unwrap_or_default(),
        }
    }
}
