//! Error types for tfeed.
//!
//! Absence of an optional structure (image, reply, preview parts) is never an
//! error; only missing required elements or attributes are.

/// Error type for feed extraction and rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required element or attribute is absent from the document.
    ///
    /// The payload names what was looked for, e.g. `a.tgme_widget_message_date[href]`.
    #[error("Malformed document: missing {0}")]
    MalformedDocument(String),

    /// A channel or base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The RSS writer failed to serialize the feed.
    #[error("Feed rendering failed: {0}")]
    Render(String),

    /// Reading the input page failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn missing(what: impl Into<String>) -> Self {
        Self::MalformedDocument(what.into())
    }
}

/// Result type alias for tfeed operations.
pub type Result<T> = std::result::Result<T, Error>;
