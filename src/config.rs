//! Configuration for docsplit-rs
//!
//! Settings are grouped by subsystem and can be loaded from a JSON file,
//! overridden from the environment, or left at their defaults.

use crate::error::{DocsplitError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Classifier (OpenAI-compatible chat completion) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// API key; falls back to the OPENAI_API_KEY environment variable
    pub api_key: Option<String>,

    /// Base URL for OpenAI-compatible APIs (e.g. an Azure or Ollama endpoint)
    pub base_url: Option<String>,

    /// Model / deployment name
    pub model: String,

    /// Maximum characters of segment text sent per classification request
    pub max_input_chars: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: "gpt-4o-mini".to_string(),
            max_input_chars: 12_000,
        }
    }
}

/// Output file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that split PDFs are written into
    pub directory: String,

    /// Filename prefix for split PDFs
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "output_pdfs".to_string(),
            file_prefix: "document".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub classifier: ClassifierConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DocsplitError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| DocsplitError::Config(format!("Invalid config file: {}", e)))?;
        Ok(config)
    }

    /// Resolve the API key from config or the OPENAI_API_KEY environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.classifier
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
    }
}
