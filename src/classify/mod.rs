//! Outline classification: title extraction, heading detection, leveling.
//!
//! Consumes the grouper's blocks and produces the final [`OutlineResult`]:
//! header/footer zones are dropped, the title is scored out of page 1,
//! heading candidates are picked by typographic signal, and candidate font
//! sizes are clustered into at most three levels.

mod features;
mod level;

pub use features::{BlockFeatures, FeatureExtractor};
pub use level::{cluster_means, KMeansAssigner, LevelAssigner};

use features::is_purely_numeric;

use crate::grouper::{BlockGrouper, GroupingOptions};
use crate::model::{
    HeadingLevel, OutlineEntry, OutlineResult, PageWords, TextBlock, DEFAULT_PAGE_HEIGHT,
    DEFAULT_PAGE_WIDTH,
};

/// Classification thresholds.
///
/// The defaults reproduce behavior tuned for A4-ish pages measured in
/// points. They are deliberately configuration, not invariants: the edge
/// zone, centering tolerance, and title cutoff are all format-sensitive.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Fraction of page height treated as header/footer zone at each edge
    pub edge_zone_ratio: f32,

    /// Fraction of page width a block center may sit from the page center
    /// and still count as centered
    pub center_tolerance_ratio: f32,

    /// Absolute top-coordinate cutoff for title candidates on page 1
    pub title_top_cutoff: f32,

    /// Maximum word count for a title candidate
    pub title_max_words: usize,

    /// Word count above which a block is disqualified outright
    pub candidate_max_words: usize,

    /// Word count a block must stay under to qualify on any heading signal
    pub heading_max_words: usize,

    /// Font size above which short blocks qualify as headings
    pub large_font_threshold: f32,

    /// Font size an all-caps block must exceed to qualify
    pub caps_font_threshold: f32,
}

impl ClassifyOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header/footer zone as a fraction of page height.
    pub fn with_edge_zone_ratio(mut self, ratio: f32) -> Self {
        self.edge_zone_ratio = ratio;
        self
    }

    /// Set the centering tolerance as a fraction of page width.
    pub fn with_center_tolerance_ratio(mut self, ratio: f32) -> Self {
        self.center_tolerance_ratio = ratio;
        self
    }

    /// Set the title top-coordinate cutoff.
    pub fn with_title_top_cutoff(mut self, cutoff: f32) -> Self {
        self.title_top_cutoff = cutoff;
        self
    }

    /// Set the large-font heading threshold.
    pub fn with_large_font_threshold(mut self, threshold: f32) -> Self {
        self.large_font_threshold = threshold;
        self
    }
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            edge_zone_ratio: 0.08,
            center_tolerance_ratio: 0.15,
            title_top_cutoff: 400.0,
            title_max_words: 25,
            candidate_max_words: 20,
            heading_max_words: 15,
            large_font_threshold: 14.0,
            caps_font_threshold: 11.0,
        }
    }
}

/// Title fallback when page 1 offers no scoreable block.
const UNTITLED: &str = "Untitled Document";

/// A qualified heading candidate, pre-leveling.
#[derive(Debug, Clone)]
struct Candidate {
    text: String,
    font_size: f32,
    page: u32,
    top: f32,
}

/// A leveled entry still carrying its sort key.
///
/// Internal only: the (page, top) key is stripped when the entry becomes a
/// public [`OutlineEntry`] at final assembly.
#[derive(Debug, Clone)]
struct LeveledEntry {
    level: HeadingLevel,
    text: String,
    page: u32,
    top: f32,
}

/// Builds a document outline from per-page word fragments.
pub struct OutlineClassifier {
    options: ClassifyOptions,
    grouper: BlockGrouper,
    features: FeatureExtractor,
    assigner: Box<dyn LevelAssigner>,
}

impl OutlineClassifier {
    /// Create a classifier with default options and the k-means leveler.
    pub fn new() -> Self {
        Self::with_options(ClassifyOptions::default())
    }

    /// Create a classifier with custom thresholds.
    pub fn with_options(options: ClassifyOptions) -> Self {
        let features = FeatureExtractor::new(options.center_tolerance_ratio);
        Self {
            options,
            grouper: BlockGrouper::new(),
            features,
            assigner: Box::new(KMeansAssigner::new()),
        }
    }

    /// Replace the grouping tolerances.
    pub fn with_grouping(mut self, options: GroupingOptions) -> Self {
        self.grouper = BlockGrouper::with_options(options);
        self
    }

    /// Replace the clustering backend.
    pub fn with_assigner(mut self, assigner: Box<dyn LevelAssigner>) -> Self {
        self.assigner = assigner;
        self
    }

    /// Build the outline for a document.
    ///
    /// Never fails: an empty page list yields the "No Content Found"
    /// sentinel, and a document without heading signal yields an empty
    /// outline under its title.
    pub fn build(&self, pages: &[PageWords]) -> OutlineResult {
        let Some(first_page) = pages.first() else {
            return OutlineResult::no_content();
        };

        // Pages are assumed uniform; the first page sets document geometry.
        let page_width = if first_page.width > 0.0 {
            first_page.width
        } else {
            DEFAULT_PAGE_WIDTH
        };
        let page_height = if first_page.height > 0.0 {
            first_page.height
        } else {
            DEFAULT_PAGE_HEIGHT
        };

        let blocks: Vec<TextBlock> = pages
            .iter()
            .flat_map(|page| self.grouper.group_page(page))
            .collect();

        let content: Vec<TextBlock> = blocks
            .into_iter()
            .filter(|block| !self.in_edge_zone(block, page_height))
            .collect();

        log::debug!(
            "{} content blocks after header/footer filtering",
            content.len()
        );

        let title = self
            .extract_title(&content, page_width)
            .unwrap_or_else(|| UNTITLED.to_string());

        let candidates: Vec<Candidate> = content
            .iter()
            .filter_map(|block| {
                let features = self.features.extract(block, page_width);
                if !self.qualifies_as_heading(&features) {
                    return None;
                }
                // The title must never reappear as an outline entry
                if features.text == title {
                    return None;
                }
                Some(Candidate {
                    text: features.text,
                    font_size: features.font_size,
                    page: block.page,
                    top: block.bbox.top,
                })
            })
            .collect();

        log::debug!("{} heading candidates", candidates.len());

        let mut leveled = self.assign_levels(&candidates);
        leveled.sort_by(|a, b| {
            a.page.cmp(&b.page).then(
                a.top
                    .partial_cmp(&b.top)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
        });

        OutlineResult {
            title: title.replace('\n', " ").trim().to_string(),
            outline: leveled
                .into_iter()
                .map(|entry| OutlineEntry::new(entry.level, entry.text, entry.page))
                .collect(),
        }
    }

    /// Header/footer test: top of the block in the edge bands of the page.
    fn in_edge_zone(&self, block: &TextBlock, page_height: f32) -> bool {
        let top = block.bbox.top;
        top < page_height * self.options.edge_zone_ratio
            || top > page_height * (1.0 - self.options.edge_zone_ratio)
    }

    /// Pick the title from page 1 by scored typographic prominence.
    ///
    /// Score starts at the font size, boosted for centered and bold blocks.
    /// The strictly-greater comparison keeps the first-encountered block on
    /// ties, so the pick is stable.
    fn extract_title(&self, content: &[TextBlock], page_width: f32) -> Option<String> {
        let mut best: Option<(f32, String)> = None;

        for block in content {
            if block.page != 1 || block.is_empty() {
                continue;
            }
            if block.bbox.top > self.options.title_top_cutoff {
                continue;
            }

            let features = self.features.extract(block, page_width);
            if features.text.is_empty() || features.word_count > self.options.title_max_words {
                continue;
            }

            let mut score = features.font_size;
            if features.is_centered {
                score *= 1.5;
            }
            if features.is_bold {
                score *= 1.2;
            }

            match &best {
                Some((best_score, _)) if score <= *best_score => {}
                _ => best = Some((score, features.text)),
            }
        }

        best.map(|(_, text)| text)
    }

    /// Heading qualification: disqualifiers first, then any positive signal.
    fn qualifies_as_heading(&self, features: &BlockFeatures) -> bool {
        if features.text.is_empty()
            || features.word_count > self.options.candidate_max_words
            || features.is_toc_entry
            || is_purely_numeric(&features.text)
        {
            return false;
        }

        let short = features.word_count < self.options.heading_max_words;
        if !short {
            return false;
        }

        features.font_size > self.options.large_font_threshold
            || features.starts_with_number
            || features.is_bold
            || (features.is_all_caps && features.font_size > self.options.caps_font_threshold)
    }

    /// Cluster candidate font sizes into at most three levels.
    fn assign_levels(&self, candidates: &[Candidate]) -> Vec<LeveledEntry> {
        match candidates {
            [] => return Vec::new(),
            [only] => {
                return vec![LeveledEntry {
                    level: HeadingLevel::H1,
                    text: only.text.clone(),
                    page: only.page,
                    top: only.top,
                }]
            }
            _ => {}
        }

        let sizes: Vec<f32> = candidates.iter().map(|c| c.font_size).collect();

        let mut distinct = sizes.clone();
        distinct.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        distinct.dedup();

        let k = distinct.len().min(3);
        let assignments = self.assigner.assign(&sizes, k);
        let means = cluster_means(&sizes, &assignments, k);

        // Rank clusters by mean size, largest first; rank 0 becomes H1.
        let mut order: Vec<usize> = (0..k).collect();
        order.sort_by(|&a, &b| {
            means[b]
                .partial_cmp(&means[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut rank_of_cluster = vec![0usize; k];
        for (rank, &cluster) in order.iter().enumerate() {
            rank_of_cluster[cluster] = rank;
        }

        candidates
            .iter()
            .zip(&assignments)
            .map(|(candidate, &cluster)| LeveledEntry {
                level: HeadingLevel::from_rank(rank_of_cluster[cluster]),
                text: candidate.text.clone(),
                page: candidate.page,
                top: candidate.top,
            })
            .collect()
    }
}

impl Default for OutlineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
