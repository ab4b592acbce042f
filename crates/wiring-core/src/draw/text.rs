//! Text rendering for component titles, pin labels and wire labels.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - Content paired with a [`TextDefinition`], measurable and drawable
//!
//! ```
//! # use wiring_core::draw::{Text, TextAlign, TextDefinition};
//! let mut style = TextDefinition::new();
//! style.set_font_size(10);
//! style.set_align(TextAlign::Start);
//!
//! let text = Text::new(&style, "- MISO -> D6 (GPIO12)");
//! assert!(text.calculate_size().width() > 0.0);
//! ```
//!
//! Rendering produces an SVG `<text>` element with one `<tspan>` per line on
//! the [`Text`](crate::draw::RenderLayer::Text) layer, and, when a background
//! color is set, a rounded patch on the
//! [`LabelBackground`](crate::draw::RenderLayer::LabelBackground) layer.

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{debug, info};
use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Insets, Point, Size},
};

/// Points to CSS pixels at 96 DPI.
const POINTS_TO_PIXELS: f32 = 96.0 / 72.0;

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Horizontal alignment of text lines inside the text box.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Lines start at the left edge of the box
    Start,
    /// Lines are centered in the box
    #[default]
    Middle,
}

impl TextAlign {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Visual style for text elements.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` pt |
/// | Text color | `None` (SVG default, black) |
/// | Background color | `None` |
/// | Padding | Zero on all sides |
/// | Alignment | [`TextAlign::Middle`] |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
    background_color: Option<Color>,
    padding: Insets,
    align: TextAlign,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family, e.g. `"sans-serif"` or `"DejaVu Sans"`.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color. `None` uses the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the color of the patch drawn behind the text. `None` draws no patch.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    /// Sets the padding between the text and the edges of its box.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn set_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    /// Returns a copy of this definition with a different font size.
    pub fn with_font_size(&self, size: u16) -> Self {
        let mut definition = self.clone();
        definition.set_font_size(size);
        definition
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }

    fn font_size_px(&self) -> f32 {
        f32::from(self.font_size) * POINTS_TO_PIXELS
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    fn padding(&self) -> Insets {
        self.padding
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            color: None,
            background_color: None,
            padding: Insets::default(),
            align: TextAlign::default(),
        }
    }
}

/// A renderable text element combining content with styling.
///
/// Content may span several lines separated by `\n`.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Calculate the total size required to display this text, including padding.
    pub fn calculate_size(&self) -> Size {
        self.calculate_size_without_padding()
            .add_padding(self.definition.padding())
    }

    fn calculate_size_without_padding(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let padding = self.definition.padding();
        let bounds = position.to_bounds(self.calculate_size());

        let lines: Vec<&str> = self.content.lines().collect();
        let inner_size = self.calculate_size_without_padding();
        let line_height = if lines.is_empty() {
            0.0
        } else {
            inner_size.height() / lines.len() as f32
        };

        // Padding may be asymmetric, so center on the padded-in area.
        let inner_center_y = bounds.min_y() + padding.top() + inner_size.height() / 2.0;
        let x = match self.definition.align() {
            TextAlign::Start => bounds.min_x() + padding.left(),
            TextAlign::Middle => bounds.min_x() + padding.left() + inner_size.width() / 2.0,
        };
        // Each tspan advances by one line height, so start half a line above
        // the first line's center.
        let y = inner_center_y - (inner_size.height() + line_height) / 2.0;

        let mut rendered_text = svg_element::Text::new("")
            .set("x", x)
            .set("y", y)
            .set("text-anchor", self.definition.align().to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size_px());

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_hex())
                .set("fill-opacity", color.alpha());
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", x)
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        if let Some(bg_color) = self.definition.background_color() {
            let bg_min_point = bounds.min_point();
            let bg = svg_element::Rectangle::new()
                .set("x", bg_min_point.x())
                .set("y", bg_min_point.y())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("fill", bg_color.to_hex())
                .set("fill-opacity", bg_color.alpha())
                .set("rx", 2.0);

            output.add_to_layer(RenderLayer::LabelBackground, Box::new(bg));
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// Measures text with a shared cosmic-text [`FontSystem`].
///
/// Creating a `FontSystem` scans the system fonts, so one instance is kept
/// for the whole process.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Measures `text` in pixels using real font metrics and shaping.
    ///
    /// Falls back to an average glyph advance when no font could shape the
    /// text, so layout still works on machines without fonts installed.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size_px = text_def.font_size_px();
        let metrics = Metrics::new(font_size_px, font_size_px * LINE_HEIGHT_FACTOR);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(family(text_def.font_family()));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        if max_width == 0.0 {
            let longest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
            let line_count = text.lines().count().max(1);
            debug!(text = text, font_size_px = font_size_px; "No glyphs shaped, estimating text size");
            max_width = longest as f32 * font_size_px * 0.55;
            total_height = line_count as f32 * metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

/// Maps CSS generic family names onto cosmic-text's generic families.
fn family(name: &str) -> Family<'_> {
    match name {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        other => Family::Name(other),
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
