//! Error types for wiring diagram rendering.
//!
//! [`WiringError`] is the single error type returned by the public API.
//! Failures inside the exporters are raised as [`crate::export::Error`] and
//! converted at the crate boundary.

use std::io;

use thiserror::Error;

/// The main error type for wiring operations.
#[derive(Debug, Error)]
pub enum WiringError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for WiringError {
    fn from(error: crate::export::Error) -> Self {
        match error {
            // Keep the io::ErrorKind reachable for callers.
            crate::export::Error::Io(err) => Self::Io(err),
            other => Self::Export(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export;

    #[test]
    fn test_export_io_error_becomes_io() {
        let err: WiringError =
            export::Error::Io(io::Error::new(io::ErrorKind::NotFound, "missing")).into();
        match err {
            WiringError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_export_render_error_is_boxed() {
        let err: WiringError = export::Error::Render("empty raster".to_string()).into();
        assert!(matches!(err, WiringError::Export(_)));
        assert_eq!(err.to_string(), "Export error: Render error: empty raster");
    }
}
