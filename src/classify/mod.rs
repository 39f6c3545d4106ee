//! Document classification for docsplit-rs
//!
//! This module maps a segment's text onto a fixed set of document
//! categories using an OpenAI-compatible chat completion service.

pub mod category;
pub mod openai;

// Re-export main types
pub use category::Category;
pub use openai::OpenAiClassifier;

/// Classification seam between the pipeline and the language-model service.
///
/// Implementations are infallible by contract: any service failure or
/// unrecognized response degrades to [`Category::Uncategorized`] instead of
/// propagating an error, so one bad segment never aborts the run.
pub trait Classifier {
    fn classify(&self, text: &str) -> impl Future<Output = Category> + Send;
}
