//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while converting markup to styled text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The markup could not be parsed within the configured limits.
    #[error("{message}")]
    Parse {
        /// Short message shown to the user in place of the content.
        message: String,
        /// Additional detail for logs.
        detail: String,
    },

    /// The underlying parser faulted.
    #[error("internal parser error: {0}")]
    Internal(String),

    /// An attribute range does not fit the text.
    #[error("invalid range {start}..{end} for text of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

impl RenderError {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// The text displayed instead of the content when conversion fails.
    ///
    /// Parse errors show their message; anything else shows `"error"`.
    pub fn fallback_text(&self) -> &str {
        match self {
            Self::Parse { message, .. } => message,
            _ => "error",
        }
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
