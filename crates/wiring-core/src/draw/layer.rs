//! Layer-based z-ordering for SVG output.
//!
//! Drawables tag each SVG node with a [`RenderLayer`]; [`LayeredOutput`]
//! collects the tagged nodes and emits one `<g data-layer="...">` group per
//! non-empty layer, bottom layer first.
//!
//! # Example
//!
//! ```
//! # use wiring_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Line, Rectangle};
//! let mut output = LayeredOutput::new();
//!
//! // Added out of order on purpose: the wire still ends up above the box.
//! output.add_to_layer(RenderLayer::Wire, Box::new(Line::new()));
//! output.add_to_layer(RenderLayer::Component, Box::new(Rectangle::new()));
//!
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use std::collections::BTreeMap;

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background fill
    Background,
    /// Component boxes
    Component,
    /// Wires between pins
    Wire,
    /// Patches behind labels that sit on top of wires
    LabelBackground,
    /// All text
    Text,
}

impl RenderLayer {
    /// Returns the name used for the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Component => "component",
            Self::Wire => "wire",
            Self::LabelBackground => "label-background",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// Within a layer, nodes keep the order in which they were added, which is
/// what makes canvas insertion order the painting order.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    layers: BTreeMap<RenderLayer, Vec<SvgNode>>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the given layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.layers.entry(layer).or_default().push(node);
    }

    /// Moves every node of `other` into this output, after the nodes already
    /// present on the same layer.
    pub fn merge(&mut self, other: LayeredOutput) {
        for (layer, nodes) in other.layers {
            self.layers.entry(layer).or_default().extend(nodes);
        }
    }

    /// Returns `true` if no layer holds a node.
    pub fn is_empty(&self) -> bool {
        self.layers.values().all(Vec::is_empty)
    }

    /// Returns the number of nodes on `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.layers.get(&layer).map_or(0, Vec::len)
    }

    /// Consumes the output and returns one SVG group per non-empty layer,
    /// bottom layer first.
    pub fn render(self) -> Vec<SvgNode> {
        self.layers
            .into_iter()
            .filter(|(_, nodes)| !nodes.is_empty())
            .map(|(layer, nodes)| {
                let group = nodes.into_iter().fold(
                    svg_element::Group::new().set("data-layer", layer.name()),
                    |group, node| group.add(node),
                );
                Box::new(group) as SvgNode
            })
            .collect()
    }
}
