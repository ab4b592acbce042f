//! CLI logic for the gateway wiring diagram renderer.
//!
//! [`run`] loads the configuration, renders the gateway canvas to the output
//! path and reports the saved path.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::io::Write;

use log::info;

use wiring::{DiagramRenderer, WiringError, gateway};

/// Run the wiring CLI application
///
/// Renders the gateway diagram to `args.output` and, once the file is
/// written, writes `Saved diagram to: <output>` as a single line to `out`.
///
/// # Errors
///
/// Returns `WiringError` for:
/// - Configuration loading errors
/// - Unsupported output extensions and rendering errors
/// - File I/O errors, including an output directory that does not exist
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), WiringError> {
    info!(output_path = args.output; "Rendering gateway diagram");

    let app_config = config::load_config(args.config.as_ref())?;

    let canvas = gateway::canvas();
    let renderer = DiagramRenderer::new(app_config);
    renderer.save(&canvas, &args.output)?;

    writeln!(out, "Saved diagram to: {}", args.output)?;

    info!(output_file = args.output; "Diagram exported successfully");
    Ok(())
}
