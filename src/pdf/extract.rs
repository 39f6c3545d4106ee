//! Per-page text extraction
//!
//! The segmenter consumes one string per physical page, in page order. An
//! empty string is meaningful input (a blank page), so extraction failures
//! on individual pages degrade to empty text rather than aborting the run.
//! A document that cannot be loaded at all is a fatal input error.

use crate::error::{DocsplitError, Result};
use lopdf::Document;
use std::path::Path;

/// Source of per-page text, index-aligned with the PDF's physical pages
pub trait PageTextSource {
    /// One string per page, in page order; empty string for pages with no
    /// extractable text
    fn page_texts(&self, path: &Path) -> Result<Vec<String>>;
}

/// Text source backed by lopdf's built-in extraction
#[derive(Debug, Clone, Default)]
pub struct LopdfTextSource;

impl LopdfTextSource {
    pub fn new() -> Self {
        Self
    }
}

impl PageTextSource for LopdfTextSource {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>> {
        let doc = Document::load(path)
            .map_err(|e| DocsplitError::Pdf(format!("Failed to load {}: {}", path.display(), e)))?;

        if doc.is_encrypted() {
            return Err(DocsplitError::Pdf(format!(
                "{} is encrypted",
                path.display()
            )));
        }

        // get_pages is ordered by 1-based page number
        let mut texts = Vec::new();
        for (page_num, _page_id) in doc.get_pages() {
            let text = match doc.extract_text(&[page_num]) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!(
                        "Text extraction failed for page {} of {}: {}",
                        page_num,
                        path.display(),
                        e
                    );
                    String::new()
                }
            };
            texts.push(text);
        }

        log::info!(
            "Extracted text from {} pages of {}",
            texts.len(),
            path.display()
        );
        Ok(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_fatal() {
        let source = LopdfTextSource::new();
        let result = source.page_texts(Path::new("/nonexistent/input.pdf"));
        assert!(matches!(result, Err(DocsplitError::Pdf(_))));
    }
}
