//! Groups word fragments into lines and typographically continuous blocks.
//!
//! This is the first stage of the pipeline: per page, fragments are sorted
//! into reading order, bucketed into lines by vertical position, and lines
//! are merged into blocks while font identity and spacing stay continuous.

use crate::model::{PageWords, TextBlock, TextLine, WordFragment};

/// Tolerances for line and block assembly.
///
/// The defaults were tuned against word-level extraction output measured in
/// points; callers working with other coordinate scales should adjust them.
#[derive(Debug, Clone)]
pub struct GroupingOptions {
    /// Maximum vertical distance between a fragment and the line anchor for
    /// the fragment to join the line
    pub line_tolerance: f32,

    /// A new block starts when the gap between consecutive line tops exceeds
    /// this multiple of the previous line's font size
    pub gap_factor: f32,

    /// A new block starts when consecutive lines' font sizes differ by at
    /// least this much
    pub size_tolerance: f32,
}

impl GroupingOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the same-line vertical tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the block-break gap factor.
    pub fn with_gap_factor(mut self, factor: f32) -> Self {
        self.gap_factor = factor;
        self
    }

    /// Set the block-break font size tolerance.
    pub fn with_size_tolerance(mut self, tolerance: f32) -> Self {
        self.size_tolerance = tolerance;
        self
    }
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            line_tolerance: 2.0,
            gap_factor: 1.6,
            size_tolerance: 1.0,
        }
    }
}

/// Groups per-page word fragments into text blocks.
///
/// Deterministic and side-effect free: identical input always produces
/// identical blocks, and empty input produces no blocks.
#[derive(Debug, Clone, Default)]
pub struct BlockGrouper {
    options: GroupingOptions,
}

impl BlockGrouper {
    /// Create a grouper with default tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grouper with custom tolerances.
    pub fn with_options(options: GroupingOptions) -> Self {
        Self { options }
    }

    /// Group a page's word fragments into text blocks.
    pub fn group(&self, words: &[WordFragment], page_number: u32) -> Vec<TextBlock> {
        if words.is_empty() {
            return Vec::new();
        }

        let lines = self.assemble_lines(words);
        let blocks = self.assemble_blocks(&lines, page_number);

        log::debug!(
            "page {}: {} fragments -> {} lines -> {} blocks",
            page_number,
            words.len(),
            lines.len(),
            blocks.len()
        );

        blocks
    }

    /// Convenience wrapper over [`group`](Self::group) for a whole page.
    pub fn group_page(&self, page: &PageWords) -> Vec<TextBlock> {
        self.group(&page.words, page.number)
    }

    /// Bucket fragments into lines by vertical position.
    ///
    /// Fragments are first sorted by (top, x0). A fragment joins the current
    /// line while its top stays within `line_tolerance` of the fragment that
    /// opened the line; each finished line re-sorts its words left to right.
    fn assemble_lines(&self, words: &[WordFragment]) -> Vec<TextLine> {
        let mut sorted: Vec<WordFragment> = words.to_vec();
        sorted.sort_by(|a, b| {
            let top_cmp = a.top.partial_cmp(&b.top).unwrap_or(std::cmp::Ordering::Equal);
            if top_cmp == std::cmp::Ordering::Equal {
                a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal)
            } else {
                top_cmp
            }
        });

        let mut lines: Vec<TextLine> = Vec::new();
        let mut current: Vec<WordFragment> = Vec::new();
        let mut anchor_top = 0.0f32;

        for word in sorted {
            if current.is_empty() {
                anchor_top = word.top;
                current.push(word);
            } else if (word.top - anchor_top).abs() < self.options.line_tolerance {
                current.push(word);
            } else {
                lines.push(TextLine::from_words(std::mem::take(&mut current)));
                anchor_top = word.top;
                current.push(word);
            }
        }

        if !current.is_empty() {
            lines.push(TextLine::from_words(current));
        }

        lines
    }

    /// Merge consecutive lines into blocks while typography stays continuous.
    fn assemble_blocks(&self, lines: &[TextLine], page_number: u32) -> Vec<TextBlock> {
        let mut blocks: Vec<TextBlock> = Vec::new();
        let mut current: Vec<TextLine> = Vec::new();

        for line in lines {
            if let Some(prev) = current.last() {
                if self.breaks_block(prev, line) {
                    if let Some(block) = TextBlock::from_lines(&current, page_number) {
                        blocks.push(block);
                    }
                    current.clear();
                }
            }
            current.push(line.clone());
        }

        // Trailing block that no break trigger closed
        if let Some(block) = TextBlock::from_lines(&current, page_number) {
            blocks.push(block);
        }

        blocks
    }

    /// Decide whether `line` starts a new block after `prev`.
    ///
    /// Comparisons use each line's first (leftmost) word, matching how block
    /// font identity is later derived.
    fn breaks_block(&self, prev: &TextLine, line: &TextLine) -> bool {
        let vertical_gap = line.top() - prev.top();

        vertical_gap > prev.font_size() * self.options.gap_factor
            || line.font_name() != prev.font_name()
            || (line.font_size() - prev.font_size()).abs() >= self.options.size_tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordFragment;

    fn word(text: &str, x0: f32, top: f32, font: &str, size: f32) -> WordFragment {
        WordFragment::new(text, x0, top, x0 + 40.0, top + size, font, size)
    }

    #[test]
    fn test_empty_input_yields_no_blocks() {
        let grouper = BlockGrouper::new();
        assert!(grouper.group(&[], 1).is_empty());
    }

    #[test]
    fn test_words_on_one_line_merge() {
        // "One" sits half a point below "Chapter"; both land on one line.
        let grouper = BlockGrouper::new();
        let words = vec![
            word("Chapter", 100.0, 100.0, "Bold", 16.0),
            word("One", 145.0, 100.5, "Bold", 16.0),
        ];
        let blocks = grouper.group(&words, 1);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "Chapter One");
        assert_eq!(blocks[0].font_size, 16.0);
    }

    #[test]
    fn test_font_change_breaks_block() {
        let grouper = BlockGrouper::new();
        let words = vec![
            word("Heading", 100.0, 100.0, "Bold", 16.0),
            word("body", 100.0, 120.0, "Regular", 10.0),
        ];
        let blocks = grouper.group(&words, 1);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "Heading");
        assert_eq!(blocks[1].text, "body");
    }

    #[test]
    fn test_large_gap_breaks_block() {
        let grouper = BlockGrouper::new();
        let words = vec![
            word("para", 100.0, 100.0, "Regular", 10.0),
            word("one", 100.0, 112.0, "Regular", 10.0),
            // 30pt gap > 1.6 * 10pt
            word("para", 100.0, 142.0, "Regular", 10.0),
            word("two", 100.0, 154.0, "Regular", 10.0),
        ];
        let blocks = grouper.group(&words, 1);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "para one");
        assert_eq!(blocks[1].text, "para two");
    }

    #[test]
    fn test_close_lines_same_font_stay_together() {
        let grouper = BlockGrouper::new();
        let words = vec![
            word("first", 100.0, 100.0, "Regular", 10.0),
            word("second", 100.0, 112.0, "Regular", 10.0),
            word("third", 100.0, 124.0, "Regular", 10.0),
        ];
        let blocks = grouper.group(&words, 1);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "first second third");
        assert_eq!(blocks[0].bbox.top, 100.0);
        assert_eq!(blocks[0].bbox.bottom, 134.0);
    }

    #[test]
    fn test_horizontal_order_restored_within_line() {
        // Extraction emitted the rightmost word first.
        let grouper = BlockGrouper::new();
        let words = vec![
            word("world", 150.0, 100.0, "Regular", 12.0),
            word("Hello", 100.0, 100.4, "Regular", 12.0),
        ];
        let blocks = grouper.group(&words, 1);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "Hello world");
    }

    #[test]
    fn test_size_step_breaks_block() {
        let grouper = BlockGrouper::new();
        let words = vec![
            word("big", 100.0, 100.0, "Regular", 14.0),
            word("small", 100.0, 114.0, "Regular", 13.0),
        ];
        // Exactly 1.0 apart: at the tolerance, so a break.
        assert_eq!(grouper.group(&words, 1).len(), 2);

        let words = vec![
            word("big", 100.0, 100.0, "Regular", 14.0),
            word("near", 100.0, 114.0, "Regular", 13.5),
        ];
        assert_eq!(grouper.group(&words, 1).len(), 1);
    }

    #[test]
    fn test_block_carries_page_number() {
        let grouper = BlockGrouper::new();
        let words = vec![word("text", 100.0, 100.0, "Regular", 10.0)];
        let blocks = grouper.group(&words, 7);
        assert_eq!(blocks[0].page, 7);
    }

    #[test]
    fn test_custom_line_tolerance() {
        let grouper = BlockGrouper::with_options(GroupingOptions::new().with_line_tolerance(6.0));
        let words = vec![
            word("wavy", 100.0, 100.0, "Regular", 12.0),
            word("baseline", 150.0, 104.0, "Regular", 12.0),
        ];
        let blocks = grouper.group(&words, 1);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "wavy baseline");
    }
}
