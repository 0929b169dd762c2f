//! Heading level assignment by one-dimensional font-size clustering.
//!
//! The classifier only needs two guarantees from a clustering backend:
//! identical input must produce identical assignments, and levels are driven
//! purely by per-cluster mean size (largest mean becomes H1). Everything else
//! is an implementation detail behind [`LevelAssigner`].

/// A deterministic 1-D clustering backend.
pub trait LevelAssigner {
    /// Partition `sizes` into at most `k` clusters.
    ///
    /// Returns one cluster index in `0..k` per input value. Must be
    /// deterministic: the same `sizes` and `k` always yield the same
    /// assignment.
    fn assign(&self, sizes: &[f32], k: usize) -> Vec<usize>;
}

/// Lloyd's k-means over one dimension, seeded deterministically.
///
/// Centers are initialized at evenly spaced quantiles of the sorted distinct
/// input values instead of random draws, so repeated runs agree. Nearest-
/// center ties break toward the lower cluster index.
#[derive(Debug, Clone)]
pub struct KMeansAssigner {
    /// Upper bound on refinement iterations
    pub max_iterations: usize,
}

impl KMeansAssigner {
    /// Create an assigner with the default iteration bound.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for KMeansAssigner {
    fn default() -> Self {
        Self { max_iterations: 50 }
    }
}

impl LevelAssigner for KMeansAssigner {
    fn assign(&self, sizes: &[f32], k: usize) -> Vec<usize> {
        if sizes.is_empty() || k == 0 {
            return Vec::new();
        }

        let mut distinct: Vec<f32> = sizes.to_vec();
        distinct.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        distinct.dedup();

        // More clusters than distinct values would leave empty clusters.
        let k = k.min(distinct.len());
        if k == 1 {
            return vec![0; sizes.len()];
        }

        // Quantile seeding over the distinct values: first and last distinct
        // sizes are always centers, interior centers spread evenly between.
        let mut centers: Vec<f32> = (0..k)
            .map(|i| distinct[i * (distinct.len() - 1) / (k - 1)])
            .collect();

        let mut assignments = vec![0usize; sizes.len()];

        for _ in 0..self.max_iterations {
            let mut changed = false;

            for (i, &size) in sizes.iter().enumerate() {
                let mut best = 0;
                let mut best_distance = f32::INFINITY;
                for (cluster, &center) in centers.iter().enumerate() {
                    let distance = (size - center).abs();
                    if distance < best_distance {
                        best_distance = distance;
                        best = cluster;
                    }
                }
                if assignments[i] != best {
                    assignments[i] = best;
                    changed = true;
                }
            }

            let mut sums = vec![0.0f64; k];
            let mut counts = vec![0usize; k];
            for (&size, &cluster) in sizes.iter().zip(&assignments) {
                sums[cluster] += size as f64;
                counts[cluster] += 1;
            }
            for cluster in 0..k {
                // An empty cluster keeps its previous center
                if counts[cluster] > 0 {
                    centers[cluster] = (sums[cluster] / counts[cluster] as f64) as f32;
                }
            }

            if !changed {
                break;
            }
        }

        assignments
    }
}

/// Mean size per cluster for a finished assignment.
///
/// Clusters with no members get `NEG_INFINITY` so they rank after every
/// populated cluster.
pub fn cluster_means(sizes: &[f32], assignments: &[usize], k: usize) -> Vec<f32> {
    let mut sums = vec![0.0f64; k];
    let mut counts = vec![0usize; k];
    for (&size, &cluster) in sizes.iter().zip(assignments) {
        if cluster < k {
            sums[cluster] += size as f64;
            counts[cluster] += 1;
        }
    }

    (0..k)
        .map(|cluster| {
            if counts[cluster] > 0 {
                (sums[cluster] / counts[cluster] as f64) as f32
            } else {
                f32::NEG_INFINITY
            }
        })
        .collect()
}
