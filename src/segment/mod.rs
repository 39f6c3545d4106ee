//! Page segmentation for docsplit-rs
//!
//! This module partitions an ordered sequence of per-page texts into
//! logical sub-documents, using blank and title pages as boundaries.

pub mod splitter;

// Re-export main types
pub use splitter::{DocumentSegmenter, Segment};
