//! Segmentation behavior through the public API
//!
//! These tests exercise the boundary heuristics on larger, realistic page
//! sequences than the unit tests cover.

use docsplit_rs::{DocumentSegmenter, Segment};

fn pages(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_exhibit_bundle_layout() {
    // A typical exhibit bundle: cover sheets with blank separator pages
    let segmenter = DocumentSegmenter::new();
    let segments = segmenter.segment(&pages(&[
        "Exhibit 1: Medical Record",
        "Patient: J. Doe. Admitted 2024-03-02.",
        "Discharge summary and medication list.",
        "",
        "Exhibit 2: Police Report",
        "Incident #4417, intersection of 5th and Main.",
        "",
        "",
        "Exhibit 3: Earnings Evidence",
        "Pay stubs, Jan-Jun.",
    ]));

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].pages, vec![0, 1, 2]);
    assert_eq!(segments[1].pages, vec![4, 5]);
    assert_eq!(segments[2].pages, vec![8, 9]);

    assert!(segments[0].text.starts_with("Exhibit 1: Medical Record\n"));
    assert!(segments[2].text.ends_with("Pay stubs, Jan-Jun.\n"));
}

#[test]
fn test_keyword_inside_body_text_still_splits() {
    // The heuristic is substring-based: a content page that happens to
    // mention a keyword is treated as a title page
    let segmenter = DocumentSegmenter::new();
    let segments = segmenter.segment(&pages(&[
        "first page",
        "see the attached medical bill for totals",
        "last page",
    ]));

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].pages, vec![0]);
    assert_eq!(segments[1].pages, vec![1, 2]);
}

#[test]
fn test_trailing_title_page_emits_final_segment() {
    let segmenter = DocumentSegmenter::new();
    let segments = segmenter.segment(&pages(&["notes", "", "Exhibit 9"]));

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1].pages, vec![2]);
    assert_eq!(segments[1].text, "Exhibit 9\n");
}

#[test]
fn test_whitespace_only_pages_are_separators() {
    let segmenter = DocumentSegmenter::new();
    let segments = segmenter.segment(&pages(&["a", " \t ", "b", "\n\n", "c"]));

    assert_eq!(segments.len(), 3);
    let all_pages: Vec<usize> = segments.iter().flat_map(|s| s.pages.clone()).collect();
    assert_eq!(all_pages, vec![0, 2, 4]);
}

#[test]
fn test_segments_partition_retained_pages() {
    let segmenter = DocumentSegmenter::new();
    let input = pages(&[
        "Exhibit A", "body", "body", "", "stray", "Medical Bill totals", "body", "",
    ]);
    let segments = segmenter.segment(&input);

    // Total retained pages = input pages minus blanks
    let retained: usize = segments.iter().map(Segment::page_count).sum();
    let blanks = input
        .iter()
        .filter(|t| DocumentSegmenter::is_blank(t))
        .count();
    assert_eq!(retained, input.len() - blanks);

    // Emission order follows page order
    let firsts: Vec<usize> = segments.iter().map(|s| s.pages[0]).collect();
    let mut sorted = firsts.clone();
    sorted.sort_unstable();
    assert_eq!(firsts, sorted);
}
