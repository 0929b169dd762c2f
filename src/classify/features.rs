//! Typographic and textual features used for title and heading detection.

use regex::Regex;

use crate::model::TextBlock;

/// Derived, ephemeral view over a [`TextBlock`].
///
/// Recomputed on every classification pass; never serialized.
#[derive(Debug, Clone)]
pub struct BlockFeatures {
    /// Trimmed block text
    pub text: String,

    /// Block font size
    pub font_size: f32,

    /// Font name suggests a bold face
    pub is_bold: bool,

    /// Text contains letters and none of them are lowercase
    pub is_all_caps: bool,

    /// Text starts with a numeric outline prefix ("1.", "1.2.3 ")
    pub starts_with_number: bool,

    /// Block center sits near the horizontal page center
    pub is_centered: bool,

    /// Number of whitespace-separated words
    pub word_count: usize,

    /// Text looks like a table-of-contents entry ("Intro .......... 5")
    pub is_toc_entry: bool,
}

/// Computes [`BlockFeatures`], holding its regexes compiled once.
#[derive(Debug)]
pub struct FeatureExtractor {
    toc_entry: Regex,
    numeric_prefix: Regex,
    center_tolerance_ratio: f32,
}

impl FeatureExtractor {
    /// Create an extractor with the given centering tolerance (fraction of
    /// page width).
    pub fn new(center_tolerance_ratio: f32) -> Self {
        Self {
            toc_entry: Regex::new(r"\.{4,}\s*\d+\s*$").unwrap(),
            numeric_prefix: Regex::new(r"^\d+(\.\d+)*\.?\s+").unwrap(),
            center_tolerance_ratio,
        }
    }

    /// Extract features for one block against the page geometry.
    pub fn extract(&self, block: &TextBlock, page_width: f32) -> BlockFeatures {
        let text = block.text.trim().to_string();
        let word_count = text.split_whitespace().count();

        let center_offset = (block.bbox.center_x() - page_width / 2.0).abs();

        BlockFeatures {
            is_bold: is_bold_font(&block.font_name),
            is_all_caps: is_all_caps(&text),
            starts_with_number: self.numeric_prefix.is_match(&text),
            is_centered: center_offset < page_width * self.center_tolerance_ratio,
            is_toc_entry: self.toc_entry.is_match(&text),
            font_size: block.font_size,
            word_count,
            text,
        }
    }
}

/// Font-name heuristic for boldness.
pub fn is_bold_font(font_name: &str) -> bool {
    let lower = font_name.to_lowercase();
    lower.contains("bold") || lower.contains("black")
}

/// True when the text has at least one letter and every letter is uppercase.
fn is_all_caps(text: &str) -> bool {
    let mut has_letter = false;
    for c in text.chars().filter(|c| c.is_alphabetic()) {
        if c.is_lowercase() {
            return false;
        }
        has_letter = true;
    }
    has_letter
}

/// True when the trimmed text is non-empty and consists solely of digits.
pub fn is_purely_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
