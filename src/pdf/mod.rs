//! PDF collaborators for docsplit-rs
//!
//! Per-page text extraction and selected-page output, both built on lopdf.

pub mod extract;
pub mod writer;

// Re-export main types
pub use extract::{LopdfTextSource, PageTextSource};
pub use writer::PdfPageWriter;
