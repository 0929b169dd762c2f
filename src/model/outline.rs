//! Output model: the inferred document outline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Heading depth tag. H1 is the most prominent level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
}

impl HeadingLevel {
    /// Map a prominence rank (0 = most prominent) to a level.
    ///
    /// Ranks beyond 2 saturate at H3; the classifier caps cluster count at 3
    /// so deeper ranks never occur in practice.
    pub fn from_rank(rank: usize) -> Self {
        match rank {
            0 => HeadingLevel::H1,
            1 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        }
    }

    /// Level tag as it appears in output ("H1", "H2", "H3").
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single outline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level
    pub level: HeadingLevel,

    /// Heading text
    pub text: String,

    /// Page the heading appears on (1-indexed)
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// The inferred outline: a title plus ordered heading entries.
///
/// Entries are sorted by (page ascending, vertical position ascending), and
/// the title never also appears as an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineResult {
    /// Document title
    pub title: String,

    /// Ordered heading entries
    pub outline: Vec<OutlineEntry>,
}

impl OutlineResult {
    /// Create a result with a title and no entries.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            outline: Vec::new(),
        }
    }

    /// Sentinel result for an empty page list.
    pub fn no_content() -> Self {
        Self::empty("No Content Found")
    }

    /// Check if the outline has no entries.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Number of outline entries.
    pub fn len(&self) -> usize {
        self.outline.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_rank() {
        assert_eq!(HeadingLevel::from_rank(0), HeadingLevel::H1);
        assert_eq!(HeadingLevel::from_rank(1), HeadingLevel::H2);
        assert_eq!(HeadingLevel::from_rank(2), HeadingLevel::H3);
        assert_eq!(HeadingLevel::from_rank(7), HeadingLevel::H3);
    }

    #[test]
    fn test_level_serializes_as_tag() {
        let json = serde_json::to_string(&HeadingLevel::H2).unwrap();
        assert_eq!(json, "\"H2\"");
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = OutlineEntry::new(HeadingLevel::H1, "Introduction", 1);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"level":"H1","text":"Introduction","page":1}"#);
    }

    #[test]
    fn test_no_content_sentinel() {
        let result = OutlineResult::no_content();
        assert_eq!(result.title, "No Content Found");
        assert!(result.is_empty());
    }
}
