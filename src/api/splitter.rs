//! PdfSplitter - Main splitting API
//!
//! This provides the high-level interface for the full pipeline: extract
//! page texts, segment into logical documents, classify each segment, and
//! write one output PDF per segment.

use crate::classify::{Category, Classifier, OpenAiClassifier};
use crate::config::Config;
use crate::error::{DocsplitError, Result};
use crate::pdf::{LopdfTextSource, PageTextSource, PdfPageWriter};
use crate::segment::{DocumentSegmenter, Segment};
use crate::utils;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One written output file
#[derive(Debug, Clone, Serialize)]
pub struct SplitOutput {
    /// 1-based position in segment emission order
    pub position: usize,

    /// Category assigned by classification
    pub category: Category,

    /// 0-based source page indices contained in the file
    pub pages: Vec<usize>,

    /// Path of the written PDF
    pub path: PathBuf,
}

/// Statistics for one split run
#[derive(Debug, Clone, Serialize)]
pub struct SplitStats {
    /// Pages in the source PDF
    pub total_pages: usize,

    /// Segments found by the segmenter
    pub total_segments: usize,

    /// Successfully written output files
    pub outputs: Vec<SplitOutput>,

    /// Segments whose output file could not be written
    pub failed_writes: usize,

    /// Total processing time in seconds
    pub processing_time: f64,
}

/// Main pipeline for splitting a PDF into classified sub-documents
pub struct PdfSplitter<S = LopdfTextSource, C = OpenAiClassifier> {
    config: Config,
    text_source: S,
    classifier: C,
    segmenter: DocumentSegmenter,
    writer: PdfPageWriter,
}

impl PdfSplitter {
    /// Create a splitter with the default lopdf text source and an
    /// OpenAI-backed classifier. Requires an API key in config or the
    /// OPENAI_API_KEY environment variable.
    pub fn new(config: Config) -> Result<Self> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            DocsplitError::Config(
                "No API key: set classifier.api_key or OPENAI_API_KEY".to_string(),
            )
        })?;
        let classifier = OpenAiClassifier::new(&config.classifier, &api_key);

        Ok(Self {
            config,
            text_source: LopdfTextSource::new(),
            classifier,
            segmenter: DocumentSegmenter::new(),
            writer: PdfPageWriter::new(),
        })
    }
}

impl<S: PageTextSource, C: Classifier> PdfSplitter<S, C> {
    /// Create a splitter with explicit collaborators
    pub fn with_components(config: Config, text_source: S, classifier: C) -> Self {
        Self {
            config,
            text_source,
            classifier,
            segmenter: DocumentSegmenter::new(),
            writer: PdfPageWriter::new(),
        }
    }

    /// Extract page texts and segment them, without classification or
    /// output. Useful for inspecting how a PDF will be split.
    pub fn segment_file(&self, input: &Path) -> Result<Vec<Segment>> {
        let page_texts = self.text_source.page_texts(input)?;
        Ok(self.segmenter.segment(&page_texts))
    }

    /// Run the full pipeline on `input`, writing one PDF per segment into
    /// `output_dir` as `<prefix>_<position>_<category>.pdf`.
    pub async fn split(&self, input: &Path, output_dir: &Path) -> Result<SplitStats> {
        let start_time = std::time::Instant::now();

        let page_texts = self.text_source.page_texts(input)?;
        let total_pages = page_texts.len();

        let segments = self.segmenter.segment(&page_texts);
        log::info!(
            "Segmented {} into {} documents ({} pages)",
            input.display(),
            segments.len(),
            total_pages
        );

        if segments.is_empty() {
            return Ok(SplitStats {
                total_pages,
                total_segments: 0,
                outputs: Vec::new(),
                failed_writes: 0,
                processing_time: start_time.elapsed().as_secs_f64(),
            });
        }

        // Segments are immutable and independent; classify them concurrently.
        // Classifier implementations degrade to Uncategorized on failure, so
        // this never errors.
        let categories =
            futures::future::join_all(segments.iter().map(|s| self.classifier.classify(&s.text)))
                .await;

        utils::ensure_directory(output_dir)?;

        let mut outputs = Vec::new();
        let mut failed_writes = 0;
        for (i, (segment, category)) in segments.iter().zip(categories).enumerate() {
            let position = i + 1;
            let filename = utils::sanitize_filename(&format!(
                "{}_{}_{}.pdf",
                self.config.output.file_prefix, position, category
            ));
            let dest = output_dir.join(filename);

            // One failed write must not block the remaining segments
            match self.writer.write_pages(input, &segment.pages, &dest) {
                Ok(()) => outputs.push(SplitOutput {
                    position,
                    category,
                    pages: segment.pages.clone(),
                    path: dest,
                }),
                Err(e) => {
                    log::error!("Failed to write segment {}: {}", position, e);
                    failed_writes += 1;
                }
            }
        }

        if outputs.is_empty() {
            return Err(DocsplitError::Output(format!(
                "All {} segment writes failed for {}",
                segments.len(),
                input.display()
            )));
        }

        Ok(SplitStats {
            total_pages,
            total_segments: segments.len(),
            outputs,
            failed_writes,
            processing_time: start_time.elapsed().as_secs_f64(),
        })
    }
}
