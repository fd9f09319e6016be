//! Impurity measures
//!
//! Scores the label disorder of a sample set during split selection: 0 means
//! pure (a single label), higher means more disorder, so the split finder
//! prefers the feature whose branches score lowest.

use crate::dataset::Label;
use crate::error::{Error, Result};
use crate::histogram::LabelHistogram;

/// The measure used to score candidate splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impurity {
    /// Expected information, in bits, conveyed by revealing the label of a
    /// randomly drawn sample: `sum(-p * log2(p))` over the labels present.
    Entropy,
    /// Expected error of labelling samples at random with the empirical label
    /// distribution: `sum(p * (1 - p))`.
    Gini,
    /// Square root of the Gini index. Grows faster near purity, which rewards
    /// splits that isolate a clean branch.
    SqrtGini,
    /// Share of the minority class, `min(p, 1 - p)` of the first observed
    /// label. Only meaningful for two-class data.
    MinorityClass,
}

impl Default for Impurity {
    fn default() -> Self {
        Impurity::Gini
    }
}

impl Impurity {
    /// Score the given label distribution.
    ///
    /// An empty histogram is a caller bug, not a data condition, and fails
    /// with [`Error::EmptySplit`].
    pub fn measure<L: Label>(self, histogram: &LabelHistogram<L>) -> Result<f64> {
        if histogram.is_empty() {
            return Err(Error::EmptySplit);
        }
        if histogram.len() == 1 {
            return Ok(0.0);
        }

        let value = match self {
            Impurity::Entropy => histogram
                .labels()
                .map(|label| {
                    let p = histogram.probability(label);
                    -p * p.log2()
                })
                .sum(),
            Impurity::Gini => gini(histogram),
            Impurity::SqrtGini => gini(histogram).sqrt(),
            Impurity::MinorityClass => {
                // first observed label carries p, everything else is 1 - p
                let p = match histogram.labels().next() {
                    Some(label) => histogram.probability(label),
                    None => return Err(Error::EmptySplit),
                };
                p.min(1.0 - p)
            }
        };
        Ok(value)
    }
}

fn gini<L: Label>(histogram: &LabelHistogram<L>) -> f64 {
    histogram
        .labels()
        .map(|label| {
            let p = histogram.probability(label);
            p * (1.0 - p)
        })
        .sum()
}
