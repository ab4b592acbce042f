//! PNG rasterization of an SVG document with `resvg`.

use std::sync::{Arc, LazyLock};

use fontdb::{Database, Family, Query};
use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use log::{debug, info, warn};
use resvg::{tiny_skia, usvg};

use wiring_core::color::Color;

use super::{Error, Exporter};

const SANS_SERIF_FAMILIES: [&str; 6] = [
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
    "FreeSans",
];
const SERIF_FAMILIES: [&str; 5] = [
    "Times New Roman",
    "Liberation Serif",
    "DejaVu Serif",
    "Noto Serif",
    "FreeSerif",
];
const MONOSPACE_FAMILIES: [&str; 5] = [
    "Courier New",
    "Liberation Mono",
    "DejaVu Sans Mono",
    "Noto Sans Mono",
    "FreeMono",
];

/// System fonts, loaded once per process for every rasterization.
///
/// The generic families point at installed faces. fontdb's own defaults
/// name fonts such as Arial that many hosts lack, and usvg drops text whose
/// family resolves to nothing.
static FONT_DATABASE: LazyLock<Arc<Database>> = LazyLock::new(|| {
    let mut database = Database::new();
    database.load_system_fonts();
    info!(faces = database.len(); "Loaded system fonts for rasterization");

    if let Some(name) = installed_family(&database, &SANS_SERIF_FAMILIES) {
        debug!(family = name.as_str(); "Resolved sans-serif");
        database.set_sans_serif_family(name);
    } else {
        warn!("No system fonts found, text will not be rasterized");
    }
    if let Some(name) = installed_family(&database, &SERIF_FAMILIES) {
        database.set_serif_family(name);
    }
    if let Some(name) = installed_family(&database, &MONOSPACE_FAMILIES) {
        database.set_monospace_family(name);
    }
    Arc::new(database)
});

/// The first of `preferred` that is installed, else the family of any
/// installed face.
fn installed_family(database: &Database, preferred: &[&str]) -> Option<String> {
    preferred
        .iter()
        .find(|name| {
            let query = Query {
                families: &[Family::Name(name)],
                ..Query::default()
            };
            database.query(&query).is_some()
        })
        .map(|name| (*name).to_string())
        .or_else(|| {
            database
                .faces()
                .find_map(|face| face.families.first())
                .map(|(name, _)| name.clone())
        })
}

/// Rasterizes SVG documents to PNG.
#[derive(Debug, Clone)]
pub struct Png {
    background: Color,
    max_dimension: u32,
}

impl Png {
    /// `background` fills the whole raster before the document is drawn.
    pub fn new(background: Color, max_dimension: u32) -> Self {
        Self {
            background,
            max_dimension,
        }
    }

    fn check_dimensions(&self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Err(Error::Render(format!(
                "raster size {width}x{height} is empty"
            )));
        }
        if width > self.max_dimension || height > self.max_dimension {
            return Err(Error::Render(format!(
                "raster size {width}x{height} exceeds the limit of {} pixels",
                self.max_dimension
            )));
        }
        Ok(())
    }
}

impl Exporter for Png {
    fn export(&self, document: &str) -> Result<Vec<u8>, Error> {
        let options = usvg::Options {
            fontdb: Arc::clone(&FONT_DATABASE),
            font_family: FONT_DATABASE.family_name(&Family::SansSerif).to_string(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(document, &options)
            .map_err(|err| Error::Render(format!("failed to parse SVG document: {err}")))?;

        let size = tree.size();
        let width = size.width().ceil() as u32;
        let height = size.height().ceil() as u32;
        self.check_dimensions(width, height)?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            Error::Render(format!("failed to allocate a {width}x{height} raster"))
        })?;
        let [r, g, b, a] = self.background.to_rgba8();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        // tiny-skia stores premultiplied alpha, PNG expects straight alpha.
        let pixels: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();

        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(&pixels, width, height, ExtendedColorType::Rgba8)
            .map_err(|err| Error::Render(format!("failed to encode PNG: {err}")))?;

        debug!(width = width, height = height, bytes = bytes.len(); "PNG encoded");
        Ok(bytes)
    }
}
