//! Input model: positioned word fragments produced by an extraction front end.

use serde::{Deserialize, Serialize};

/// Default A4 page width in points, used when the input omits dimensions.
pub const DEFAULT_PAGE_WIDTH: f32 = 595.0;

/// Default A4 page height in points.
pub const DEFAULT_PAGE_HEIGHT: f32 = 842.0;

/// Axis-aligned bounding box with a top-left origin (y increases downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub top: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub bottom: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x0: f32, top: f32, x1: f32, bottom: f32) -> Self {
        Self { x0, top, x1, bottom }
    }

    /// Smallest box enclosing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Horizontal center of the box.
    pub fn center_x(&self) -> f32 {
        (self.x0 + self.x1) / 2.0
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }
}

/// A single positioned word emitted by the extraction layer.
///
/// Fragments are immutable input: the grouper and classifier never modify
/// them, only derive lines and blocks from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordFragment {
    /// The word text (non-empty per the extraction contract)
    pub text: String,

    /// Left edge
    pub x0: f32,

    /// Top edge (top-left origin, y increases downward)
    pub top: f32,

    /// Right edge
    pub x1: f32,

    /// Bottom edge
    pub bottom: f32,

    /// Font name as reported by the extractor (e.g., "Helvetica-Bold")
    pub font_name: String,

    /// Font size in points
    pub font_size: f32,
}

impl WordFragment {
    /// Create a new word fragment.
    pub fn new(
        text: impl Into<String>,
        x0: f32,
        top: f32,
        x1: f32,
        bottom: f32,
        font_name: impl Into<String>,
        font_size: f32,
    ) -> Self {
        Self {
            text: text.into(),
            x0,
            top,
            x1,
            bottom,
            font_name: font_name.into(),
            font_size,
        }
    }

    /// Bounding box of the fragment.
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(self.x0, self.top, self.x1, self.bottom)
    }
}

/// One page of extraction output: page geometry plus its word fragments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageWords {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points
    #[serde(default = "default_page_width")]
    pub width: f32,

    /// Page height in points
    #[serde(default = "default_page_height")]
    pub height: f32,

    /// Word fragments on the page, in extraction order
    #[serde(default)]
    pub words: Vec<WordFragment>,
}

fn default_page_width() -> f32 {
    DEFAULT_PAGE_WIDTH
}

fn default_page_height() -> f32 {
    DEFAULT_PAGE_HEIGHT
}

impl PageWords {
    /// Create a new page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            words: Vec::new(),
        }
    }

    /// Create a new page with standard A4 dimensions.
    pub fn a4(number: u32) -> Self {
        Self::new(number, DEFAULT_PAGE_WIDTH, DEFAULT_PAGE_HEIGHT)
    }

    /// Add a word fragment to the page.
    pub fn add_word(&mut self, word: WordFragment) {
        self.words.push(word);
    }

    /// Check if the page has no fragments.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get page dimensions as (width, height).
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl Default for PageWords {
    fn default() -> Self {
        Self::a4(1)
    }
}
