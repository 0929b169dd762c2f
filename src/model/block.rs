//! Derived text structure: lines and typographically continuous blocks.

use serde::{Deserialize, Serialize};

use super::fragment::{BoundingBox, WordFragment};

/// A horizontal line of words sharing a vertical position within tolerance.
///
/// Lines are an intermediate product of the grouper; they are never
/// serialized on their own.
#[derive(Debug, Clone)]
pub struct TextLine {
    /// Words in this line, sorted left to right
    pub words: Vec<WordFragment>,
}

impl TextLine {
    /// Create a line from words, re-sorting them by horizontal position.
    ///
    /// Extraction order is not guaranteed to be left-to-right, so the sort
    /// here is what establishes reading order within the line.
    pub fn from_words(mut words: Vec<WordFragment>) -> Self {
        words.sort_by(|a, b| a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal));
        Self { words }
    }

    /// Combined text of the line, words joined by single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Top coordinate of the line's first (leftmost) word.
    pub fn top(&self) -> f32 {
        self.words.first().map(|w| w.top).unwrap_or(0.0)
    }

    /// Font name of the line's first word.
    pub fn font_name(&self) -> &str {
        self.words.first().map(|w| w.font_name.as_str()).unwrap_or("")
    }

    /// Font size of the line's first word.
    pub fn font_size(&self) -> f32 {
        self.words.first().map(|w| w.font_size).unwrap_or(0.0)
    }

    /// Check if the line has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A maximal run of typographically continuous lines treated as one text unit
/// (paragraph, heading, caption). A block never spans pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    /// Concatenated text: lines joined by single spaces
    pub text: String,

    /// Unified bounding box over every constituent word
    pub bbox: BoundingBox,

    /// Font name of the block's very first word
    pub font_name: String,

    /// Font size of the block's very first word, rounded to 2 decimals
    pub font_size: f32,

    /// Page the block belongs to (1-indexed)
    pub page: u32,
}

impl TextBlock {
    /// Build a block from its constituent lines.
    ///
    /// Font identity is taken from the first word of the first line rather
    /// than any aggregate; downstream scoring depends on that choice.
    /// Returns `None` when the lines carry no words.
    pub fn from_lines(lines: &[TextLine], page: u32) -> Option<Self> {
        let first = lines.iter().flat_map(|l| l.words.iter()).next()?;

        let text = lines
            .iter()
            .map(|l| l.text())
            .collect::<Vec<_>>()
            .join(" ");

        let bbox = lines
            .iter()
            .flat_map(|l| l.words.iter())
            .map(|w| w.bbox())
            .reduce(|acc, b| acc.union(&b))?;

        Some(Self {
            text,
            bbox,
            font_name: first.font_name.clone(),
            font_size: round2(first.font_size),
            page,
        })
    }

    /// Number of whitespace-separated words in the block text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Check if the block text is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Round a value to 2 decimal places.
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x0: f32, top: f32) -> WordFragment {
        WordFragment::new(text, x0, top, x0 + 40.0, top + 12.0, "Helvetica", 12.0)
    }

    #[test]
    fn test_line_sorts_left_to_right() {
        let line =
            TextLine::from_words(vec![word("world", 150.0, 100.0), word("Hello", 100.0, 100.0)]);
        assert_eq!(line.text(), "Hello world");
        assert_eq!(line.top(), 100.0);
    }

    #[test]
    fn test_block_from_lines() {
        let first =
            TextLine::from_words(vec![word("Chapter", 100.0, 100.0), word("One", 145.0, 100.5)]);
        let second = TextLine::from_words(vec![word("continued", 100.0, 115.0)]);
        let block = TextBlock::from_lines(&[first, second], 2).unwrap();

        assert_eq!(block.text, "Chapter One continued");
        assert_eq!(block.page, 2);
        assert_eq!(block.word_count(), 3);
        assert_eq!(block.bbox.x0, 100.0);
        assert_eq!(block.bbox.top, 100.0);
        assert_eq!(block.bbox.x1, 185.0);
    }

    #[test]
    fn test_block_from_empty_lines() {
        assert!(TextBlock::from_lines(&[], 1).is_none());
        assert!(TextBlock::from_lines(&[TextLine::from_words(vec![])], 1).is_none());
    }

    #[test]
    fn test_block_font_from_first_word() {
        let mut bold = word("HEADING", 100.0, 50.0);
        bold.font_name = "Helvetica-Bold".to_string();
        bold.font_size = 18.004;
        let line = TextLine::from_words(vec![bold, word("tail", 200.0, 50.0)]);
        let block = TextBlock::from_lines(&[line], 1).unwrap();

        assert_eq!(block.font_name, "Helvetica-Bold");
        assert_eq!(block.font_size, 18.0);
    }
}
