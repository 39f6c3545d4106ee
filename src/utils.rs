//! Utility functions for docsplit-rs
//!
//! This module provides common utility functions used throughout the project.

use crate::error::{DocsplitError, Result};
use std::path::Path;

/// Get file extension from path
pub fn get_file_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a file looks like a PDF by extension
pub fn is_pdf_file<P: AsRef<Path>>(path: P) -> bool {
    matches!(get_file_extension(path).as_deref(), Some("pdf"))
}

/// Create directory if it doesn't exist
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if !path.exists() {
        std::fs::create_dir_all(path).map_err(DocsplitError::Io)?;
    }

    Ok(())
}

/// Escape special characters for safe file naming
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}
