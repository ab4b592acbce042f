//! Wiring - renders the NodeMCU ESP8266 + RA-02 LoRa + BME280 gateway
//! wiring diagram.
//!
//! The diagram is a fixed [`Canvas`](canvas::Canvas) of boxes, pin labels and
//! wires built by [`gateway::canvas`]. [`DiagramRenderer`] turns a canvas into
//! an SVG document and encodes it as SVG text or a PNG raster.

pub mod canvas;
pub mod config;
pub mod export;
pub mod gateway;

mod error;

pub use wiring_core::{color, draw, geometry};

pub use error::WiringError;

use std::{fs, path::Path};

use log::{debug, error, info};

use canvas::Canvas;
use config::AppConfig;
use export::Format;

/// Renders canvases to SVG and PNG.
///
/// # Examples
///
/// ```rust,no_run
/// use wiring::{DiagramRenderer, config::AppConfig, gateway};
///
/// let renderer = DiagramRenderer::new(AppConfig::default());
/// let svg = renderer
///     .render_svg(&gateway::canvas())
///     .expect("Failed to render");
/// assert!(svg.contains("NodeMCU ESP8266"));
///
/// renderer
///     .save(&gateway::canvas(), "gateway_diagram.png")
///     .expect("Failed to save");
/// ```
#[derive(Debug, Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render a canvas to an SVG document string.
    ///
    /// The output depends only on the canvas and the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError::Config`] if the configuration is invalid.
    pub fn render_svg(&self, canvas: &Canvas) -> Result<String, WiringError> {
        self.config.validate().map_err(WiringError::Config)?;

        let document = export::svg::Svg::new(self.config.style()).render_canvas(canvas);
        let svg = document.to_string();

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Render a canvas to the contents of a file in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError::Config`] for an invalid configuration and
    /// [`WiringError::Export`] if encoding fails.
    pub fn render_bytes(&self, canvas: &Canvas, format: Format) -> Result<Vec<u8>, WiringError> {
        let svg = self.render_svg(canvas)?;
        let bytes = format.exporter(&self.config).export(&svg)?;
        debug!(format:? = format, bytes = bytes.len(); "Canvas encoded");
        Ok(bytes)
    }

    /// Render a canvas and write it to `path`.
    ///
    /// The format comes from the extension of `path`. The file is written in
    /// a single call after rendering has succeeded, so nothing is created
    /// when rendering fails.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError::Export`] for an unsupported extension or a
    /// failed encoding and [`WiringError::Io`] if the file cannot be written.
    pub fn save(&self, canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), WiringError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let bytes = self.render_bytes(canvas, format)?;

        info!(path:? = path, format = format.extension(); "Writing diagram");
        if let Err(err) = fs::write(path, &bytes) {
            error!(path:? = path, err:% = err; "Failed to write diagram");
            return Err(export::Error::Io(err).into());
        }

        info!(path:? = path, bytes = bytes.len(); "Diagram written");
        Ok(())
    }
}

/// Render the gateway diagram to `path` with the default configuration and
/// print `Saved diagram to: <path>`.
///
/// # Errors
///
/// See [`DiagramRenderer::save`].
pub fn render(path: impl AsRef<Path>) -> Result<(), WiringError> {
    let path = path.as_ref();
    DiagramRenderer::default().save(&gateway::canvas(), path)?;
    println!("Saved diagram to: {}", path.display());
    Ok(())
}
