//! API layer for docsplit-rs
//!
//! This module provides the main public interface for splitting a source
//! PDF into classified per-document output files.

pub mod splitter;

// Re-export main API types
pub use splitter::{PdfSplitter, SplitOutput, SplitStats};
