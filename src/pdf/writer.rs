//! Selected-page PDF output
//!
//! Writes a subset of a source PDF's pages to a new file by loading the
//! source, deleting every page outside the subset, and pruning objects the
//! remaining pages no longer reference.

use crate::error::{DocsplitError, Result};
use lopdf::Document;
use std::collections::HashSet;
use std::path::Path;

/// Writes page subsets of a source PDF as independent output files
#[derive(Debug, Clone, Default)]
pub struct PdfPageWriter;

impl PdfPageWriter {
    pub fn new() -> Self {
        Self
    }

    /// Copy exactly the given 0-based pages of `source` into a new PDF at
    /// `dest`. Indices must be in range; contiguity is not required.
    pub fn write_pages(&self, source: &Path, page_indices: &[usize], dest: &Path) -> Result<()> {
        if page_indices.is_empty() {
            return Err(DocsplitError::Output(
                "No pages selected for output".to_string(),
            ));
        }

        let mut doc = Document::load(source).map_err(|e| {
            DocsplitError::Pdf(format!("Failed to load {}: {}", source.display(), e))
        })?;

        let total_pages = doc.get_pages().len();
        if let Some(&out_of_range) = page_indices.iter().find(|&&i| i >= total_pages) {
            return Err(DocsplitError::Output(format!(
                "Page index {} out of range ({} pages in {})",
                out_of_range,
                total_pages,
                source.display()
            )));
        }

        // lopdf numbers pages from 1; delete the complement of the keep set
        let keep: HashSet<u32> = page_indices.iter().map(|&i| i as u32 + 1).collect();
        let delete: Vec<u32> = (1..=total_pages as u32)
            .filter(|page_num| !keep.contains(page_num))
            .collect();

        if !delete.is_empty() {
            doc.delete_pages(&delete);
        }
        doc.prune_objects();

        doc.save(dest).map_err(|e| {
            DocsplitError::Output(format!("Failed to save {}: {}", dest.display(), e))
        })?;

        log::info!(
            "Wrote {} pages from {} to {}",
            page_indices.len(),
            source.display(),
            dest.display()
        );
        Ok(())
    }
}
