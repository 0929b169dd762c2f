//! # headline
//!
//! Document outline inference for Rust.
//!
//! This library takes positioned word fragments extracted from a page-based
//! document and infers a hierarchical outline: a title plus H1/H2/H3 heading
//! entries in reading order.
//!
//! ## Quick Start
//!
//! ```
//! use headline::{Outliner, PageWords, WordFragment};
//!
//! let mut page = PageWords::a4(1);
//! page.add_word(WordFragment::new("OVERVIEW", 250.0, 90.0, 360.0, 114.0, "Helvetica-Bold", 24.0));
//! page.add_word(WordFragment::new("Body", 72.0, 300.0, 100.0, 310.0, "Helvetica", 10.0));
//! page.add_word(WordFragment::new("text.", 104.0, 300.0, 130.0, 310.0, "Helvetica", 10.0));
//!
//! let result = Outliner::new().build(&[page]);
//! assert_eq!(result.title, "OVERVIEW");
//! ```
//!
//! ## Pipeline
//!
//! Word fragments flow one way through two stages:
//!
//! - [`BlockGrouper`]: fragments → lines → typographically continuous blocks
//! - [`OutlineClassifier`]: header/footer filtering, title extraction,
//!   heading candidate detection, and font-size clustering into levels
//!
//! Both stages are pure and deterministic; there is no cross-document state,
//! so independent documents can be processed in parallel by independent
//! instances.

pub mod classify;
pub mod error;
pub mod grouper;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use classify::{
    BlockFeatures, ClassifyOptions, FeatureExtractor, KMeansAssigner, LevelAssigner,
    OutlineClassifier,
};
pub use error::{Error, Result};
pub use grouper::{BlockGrouper, GroupingOptions};
pub use model::{
    BoundingBox, HeadingLevel, OutlineEntry, OutlineResult, PageWords, TextBlock, TextLine,
    WordFragment,
};
pub use render::{to_json, JsonFormat};

use std::path::Path;

/// Infer an outline from extracted pages with default options.
///
/// # Example
///
/// ```
/// use headline::{outline_pages, PageWords};
///
/// let result = outline_pages(&[PageWords::a4(1)]);
/// assert_eq!(result.title, "Untitled Document");
/// ```
pub fn outline_pages(pages: &[PageWords]) -> OutlineResult {
    OutlineClassifier::new().build(pages)
}

/// Infer an outline from a JSON array of pages.
///
/// The JSON shape is the extraction contract: each element carries `number`,
/// optional `width`/`height` (A4 defaults), and `words` with `text`,
/// `x0`/`top`/`x1`/`bottom`, `font_name`, `font_size`.
pub fn outline_json_str(json: &str) -> Result<OutlineResult> {
    let pages: Vec<PageWords> = serde_json::from_str(json)?;
    Ok(outline_pages(&pages))
}

/// Infer an outline from a page-dump JSON file.
///
/// # Example
///
/// ```no_run
/// use headline::outline_json_file;
///
/// let result = outline_json_file("document.pages.json").unwrap();
/// println!("{}", result.title);
/// ```
pub fn outline_json_file<P: AsRef<Path>>(path: P) -> Result<OutlineResult> {
    let json = std::fs::read_to_string(path)?;
    outline_json_str(&json)
}

/// Builder for configuring and running outline inference.
///
/// # Example
///
/// ```
/// use headline::{Outliner, PageWords};
///
/// let result = Outliner::new()
///     .with_edge_zone_ratio(0.05)
///     .with_line_tolerance(3.0)
///     .build(&[PageWords::a4(1)]);
/// assert!(result.outline.is_empty());
/// ```
pub struct Outliner {
    classify_options: ClassifyOptions,
    grouping_options: GroupingOptions,
}

impl Outliner {
    /// Create a new outliner with default options.
    pub fn new() -> Self {
        Self {
            classify_options: ClassifyOptions::default(),
            grouping_options: GroupingOptions::default(),
        }
    }

    /// Replace the classification options wholesale.
    pub fn with_classify_options(mut self, options: ClassifyOptions) -> Self {
        self.classify_options = options;
        self
    }

    /// Replace the grouping options wholesale.
    pub fn with_grouping_options(mut self, options: GroupingOptions) -> Self {
        self.grouping_options = options;
        self
    }

    /// Set the header/footer zone as a fraction of page height.
    pub fn with_edge_zone_ratio(mut self, ratio: f32) -> Self {
        self.classify_options = self.classify_options.with_edge_zone_ratio(ratio);
        self
    }

    /// Set the title top-coordinate cutoff.
    pub fn with_title_top_cutoff(mut self, cutoff: f32) -> Self {
        self.classify_options = self.classify_options.with_title_top_cutoff(cutoff);
        self
    }

    /// Set the same-line vertical tolerance for the grouper.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.grouping_options = self.grouping_options.with_line_tolerance(tolerance);
        self
    }

    /// Run outline inference over the given pages.
    pub fn build(&self, pages: &[PageWords]) -> OutlineResult {
        OutlineClassifier::with_options(self.classify_options.clone())
            .with_grouping(self.grouping_options.clone())
            .build(pages)
    }

    /// Run outline inference and serialize the result to JSON.
    pub fn build_json(&self, pages: &[PageWords], format: JsonFormat) -> Result<String> {
        to_json(&self.build(pages), format)
    }
}

impl Default for Outliner {
    fn default() -> Self {
        Self::new()
    }
}
