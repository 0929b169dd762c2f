//! Data model for outline inference.
//!
//! This module defines the input contract shared with the extraction layer
//! (`WordFragment`, `PageWords`), the derived text structure produced by the
//! grouper (`TextLine`, `TextBlock`), and the public output
//! (`OutlineEntry`, `OutlineResult`).

mod block;
mod fragment;
mod outline;

pub use block::{TextBlock, TextLine};
pub use fragment::{BoundingBox, PageWords, WordFragment, DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH};
pub use outline::{HeadingLevel, OutlineEntry, OutlineResult};
