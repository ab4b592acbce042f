//! Drawable components for wiring diagrams.
//!
//! Every drawable emits SVG nodes into one or more [`RenderLayer`]s. Layers
//! are ordered when the final document is assembled, so a drawable never has
//! to care about what else is on the canvas.
//!
//! All positions handed to drawables are in pixel space (Y down).

mod layer;
mod shape;
mod stroke;
mod text;
mod wire;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use shape::{BoxDefinition, Shape};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
pub use text::{Text, TextAlign, TextDefinition};
pub use wire::{Wire, WireDefinition};

use crate::geometry::{Point, Size};

/// Trait for elements that occupy a box around a center point.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable centered on `position`.
    ///
    /// Simple drawables emit to a single layer; composite ones may spread
    /// their nodes over several layers for correct z-ordering.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
