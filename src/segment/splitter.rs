//! Document segmentation algorithm
//!
//! A single forward scan over the page texts, flushing the accumulated run
//! whenever a boundary page (blank or title) is hit. Title pages double as
//! the first page of the document they introduce; blank pages are dropped.

use serde::{Deserialize, Serialize};

/// Keywords whose presence (case-insensitive) marks a page as a title page
const TITLE_KEYWORDS: &[&str] = &[
    "Exhibit",
    "Medical Record",
    "Police Report",
    "Earnings Evidence",
    "Medical Bill",
    "Property Damage Evidence",
];

/// One logical sub-document: the retained page indices (0-based, strictly
/// increasing) and the concatenation of their texts, one per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// 0-based indices into the source PDF's page sequence
    pub pages: Vec<usize>,

    /// Concatenated page texts, each followed by a newline, in page order
    pub text: String,
}

impl Segment {
    /// Number of pages in this segment
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Partitions per-page texts into logical sub-documents
#[derive(Debug, Clone, Default)]
pub struct DocumentSegmenter;

impl DocumentSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Split page texts into segments.
    ///
    /// Pure and total: any input sequence (including empty) produces a
    /// well-defined output. Blank pages separate documents and appear in no
    /// segment; title pages separate documents but open the segment they
    /// introduce, since an exhibit cover sheet usually names the document
    /// that follows it.
    pub fn segment(&self, page_texts: &[String]) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut current_pages: Vec<usize> = Vec::new();
        let mut current_text = String::new();

        for (page_index, text) in page_texts.iter().enumerate() {
            let blank = Self::is_blank(text);

            if blank || Self::is_title_page(text) {
                if !current_pages.is_empty() {
                    segments.push(Segment {
                        pages: std::mem::take(&mut current_pages),
                        text: std::mem::take(&mut current_text),
                    });
                }
                // A title page starts the next document; a blank page is dropped
                if !blank {
                    current_pages.push(page_index);
                    current_text.push_str(text);
                    current_text.push('\n');
                }
            } else {
                current_pages.push(page_index);
                current_text.push_str(text);
                current_text.push('\n');
            }
        }

        if !current_pages.is_empty() {
            segments.push(Segment {
                pages: current_pages,
                text: current_text,
            });
        }

        segments
    }

    /// A page is blank when its text trims to nothing
    pub fn is_blank(text: &str) -> bool {
        text.trim().is_empty()
    }

    /// A non-blank page is a title page when it contains any recognized
    /// keyword, case-insensitively
    pub fn is_title_page(text: &str) -> bool {
        if Self::is_blank(text) {
            return false;
        }

        let lowered = text.to_lowercase();
        TITLE_KEYWORDS
            .iter()
            .any(|keyword| lowered.contains(&keyword.to_lowercase()))
    }
}
