//! Best-split selection
//!
//! Scores every candidate feature by the weighted impurity of the branches it
//! would produce and picks the lowest. The comparison is a strict `<`, so the
//! first feature in iteration order keeps a tied score — candidate order is
//! part of the reproducibility contract and must not be shuffled.

use crate::dataset::Sample;
use crate::error::Result;
use crate::feature::{Branch, Feature};
use crate::histogram::LabelHistogram;
use crate::impurity::Impurity;

/// Selects the feature whose split leaves the least label disorder behind.
#[derive(Debug, Clone, Copy)]
pub struct BestSplitFinder {
    impurity: Impurity,
}

impl BestSplitFinder {
    pub fn new(impurity: Impurity) -> Self {
        BestSplitFinder { impurity }
    }

    /// Split `samples` with every candidate and return the feature with the
    /// strictly smallest weighted impurity, or `None` for an empty candidate
    /// list.
    pub fn find_best_split<'f, S: Sample>(
        &self,
        samples: &[&S],
        features: &'f [Feature],
    ) -> Result<Option<&'f Feature>> {
        let mut lowest = f64::INFINITY;
        let mut best = None;

        for feature in features {
            let branches = feature.split(samples);
            let score = self.weighted_impurity(&branches)?;
            if score < lowest {
                lowest = score;
                best = Some(feature);
            }
        }

        Ok(best)
    }

    /// Impurity of a whole split: the impurity of each non-empty branch,
    /// weighted by the branch's share of all samples across every branch
    /// (empty branches count toward the total).
    pub fn weighted_impurity<S: Sample>(&self, branches: &[Branch<S>]) -> Result<f64> {
        let total: usize = branches.iter().map(|branch| branch.samples.len()).sum();

        let mut weighted = 0.0;
        for branch in branches.iter().filter(|branch| !branch.samples.is_empty()) {
            let histogram = LabelHistogram::from_samples(&branch.samples);
            let weight = branch.samples.len() as f64 / total as f64;
            weighted += weight * self.impurity.measure(&histogram)?;
        }
        Ok(weighted)
    }
}
