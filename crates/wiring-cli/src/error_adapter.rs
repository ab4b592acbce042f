//! Error adapter for converting WiringError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::{fmt, io};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use wiring::{WiringError, export};

/// Adapter that renders a [`WiringError`] as a miette diagnostic with an
/// error code and, where one applies, a help line.
pub struct ErrorAdapter<'a>(pub &'a WiringError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            WiringError::Io(_) => "wiring::io",
            WiringError::Config(_) => "wiring::config",
            WiringError::Export(_) => "wiring::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            WiringError::Io(err) if err.kind() == io::ErrorKind::NotFound => {
                "check that the output directory exists"
            }
            WiringError::Io(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                "check that the output location is writable"
            }
            WiringError::Io(_) => return None,
            WiringError::Config(_) => {
                "see `[style]`, `[style.nets]` and `[export]` in the configuration file"
            }
            WiringError::Export(err) => match err.downcast_ref::<export::Error>() {
                Some(export::Error::UnsupportedFormat(_)) => {
                    "use an output path ending in `.png` or `.svg`"
                }
                Some(export::Error::Render(msg)) if msg.contains("exceeds") => {
                    "raise `export.max_dimension` or lower `style.scale`"
                }
                _ => return None,
            },
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
