//! Error types for view configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or applying an [`HtmlTextConfig`](crate::HtmlTextConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid TOML, or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A color literal is not `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// The theme name is not one of `light`, `dark` or `high-contrast`.
    #[error("unknown theme: {0:?}")]
    InvalidTheme(String),

    /// The font size is not a positive number.
    #[error("invalid font size: {0}")]
    InvalidFontSize(f32),

    /// The base URL cannot be parsed as an absolute URL.
    #[error("invalid base url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ConfigError {
    /// Wrap an I/O error with the path that caused it.
    pub fn io(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
