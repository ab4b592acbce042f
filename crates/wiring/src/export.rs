//! Output formats and the exporters that encode a rendered SVG document.
//!
//! [`svg`] turns a canvas into an SVG document; [`Format`] picks how that
//! document is encoded for the file.

pub mod png;
pub mod svg;

use std::{io, path::Path};

use thiserror::Error;

use crate::config::AppConfig;

/// Encodes a complete SVG document into the bytes of an output file.
pub trait Exporter {
    fn export(&self, document: &str) -> Result<Vec<u8>, Error>;
}

/// Output file format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Png,
    Svg,
}

impl Format {
    /// Infers the format from the extension of `path`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] when the extension is missing or
    /// is neither `png` nor `svg`.
    ///
    /// ```
    /// # use std::path::Path;
    /// # use wiring::export::Format;
    /// assert_eq!(Format::from_path(Path::new("out.PNG")).unwrap(), Format::Png);
    /// assert!(Format::from_path(Path::new("out.jpg")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!("`{}` has no file extension", path.display()))
            })?;

        match extension.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            other => Err(Error::UnsupportedFormat(format!(
                "`.{other}` is not supported, use `.png` or `.svg`"
            ))),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    /// Returns the exporter for this format.
    pub fn exporter(self, config: &AppConfig) -> Box<dyn Exporter> {
        match self {
            Self::Png => Box::new(png::Png::new(
                config.style().background_color(),
                config.export().max_dimension(),
            )),
            Self::Svg => Box::new(svg::SvgText),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("gateway_diagram.png")).unwrap(), Format::Png);
        assert_eq!(Format::from_path(Path::new("dir/out.svg")).unwrap(), Format::Svg);
        assert_eq!(Format::from_path(Path::new("OUT.Svg")).unwrap(), Format::Svg);
    }

    #[test]
    fn test_format_from_path_rejects_unknown_extension() {
        let err = Format::from_path(Path::new("out.pdf")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
        assert!(err.to_string().contains(".pdf"));
    }

    #[test]
    fn test_format_from_path_rejects_missing_extension() {
        let err = Format::from_path(Path::new("gateway_diagram")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(Format::Png.extension(), "png");
        assert_eq!(Format::Svg.extension(), "svg");
    }
}
