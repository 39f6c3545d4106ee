//! # docsplit-rs
//!
//! Splits a multi-page PDF into per-document output files. Page texts are
//! extracted in page order, grouped into logical sub-documents using blank
//! and title pages as boundaries, classified into a fixed category set via
//! an OpenAI-compatible service, and written out one PDF per document.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docsplit_rs::{Config, PdfSplitter};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // API key comes from config or OPENAI_API_KEY
//!     let splitter = PdfSplitter::new(Config::default())?;
//!
//!     let stats = splitter
//!         .split(Path::new("input.pdf"), Path::new("output_pdfs"))
//!         .await?;
//!
//!     for output in &stats.outputs {
//!         println!("{} -> {}", output.category, output.path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```

// Core modules
pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod pdf;
pub mod segment;
pub mod utils;

// Re-export main API types
pub use api::{PdfSplitter, SplitOutput, SplitStats};
pub use classify::{Category, Classifier, OpenAiClassifier};
pub use config::Config;
pub use error::{DocsplitError, Result};
pub use pdf::{LopdfTextSource, PageTextSource, PdfPageWriter};
pub use segment::{DocumentSegmenter, Segment};
