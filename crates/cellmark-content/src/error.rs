//! Error types for cellmark-content
//!
//! Parsing and writing Markdown never fail. Errors only come from the
//! structured notebook document that surrounds them.

/// Result type for cellmark-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellmark-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unparsable notebook document: {message}")]
    UnparsableDocument { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn unparsable(message: impl Into<String>) -> Self {
        Self::UnparsableDocument {
            message: message.into(),
        }
    }
}
