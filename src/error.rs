//! Error types for docsplit-rs
//!
//! This module provides error handling for all docsplit operations,
//! including PDF processing, segmentation, classification, and output writing.

use thiserror::Error;

/// Main error type for docsplit operations
#[derive(Error, Debug)]
pub enum DocsplitError {
    /// PDF loading/extraction/writing errors
    #[error("PDF processing error: {0}")]
    Pdf(String),

    /// Output file errors
    #[error("Output error: {0}")]
    Output(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("Generic error: {0}")]
    Generic(String),
}

/// Result type alias for docsplit operations
pub type Result<T> = std::result::Result<T, DocsplitError>;

// Implement From traits for external error types
impl From<lopdf::Error> for DocsplitError {
    fn from(err: lopdf::Error) -> Self {
        DocsplitError::Pdf(err.to_string())
    }
}

impl From<anyhow::Error> for DocsplitError {
    fn from(err: anyhow::Error) -> Self {
        DocsplitError::Generic(err.to_string())
    }
}
