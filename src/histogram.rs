//! Label histograms
//!
//! Every tree node keeps a count of the training labels that reached it, and
//! the ensemble vote is a histogram over per-tree predictions. Counts are kept
//! in first-seen order, which pins down the otherwise arbitrary winner of a
//! majority tie to "first label encountered" and keeps repeated runs over the
//! same input structurally identical.

use rayon::prelude::*;

use crate::dataset::{Label, Sample};

const PARALLEL_CHUNK: usize = 1024;

/// Label counts in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelHistogram<L: Label> {
    counts: Vec<(L, usize)>,
}

impl<L: Label> LabelHistogram<L> {
    pub fn new() -> Self {
        LabelHistogram { counts: Vec::new() }
    }

    /// Count all labels of `samples` sequentially.
    pub fn from_samples<S: Sample<Label = L>>(samples: &[&S]) -> Self {
        let mut histogram = LabelHistogram::new();
        for sample in samples {
            histogram.tally(sample.label());
        }
        histogram
    }

    /// Record one observation of `label`.
    pub fn tally(&mut self, label: &L) {
        match self.counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((label.clone(), 1)),
        }
    }

    /// Fold the counts of `other` into this histogram. Labels unseen so far
    /// are appended in the order `other` carries them.
    pub fn merge(&mut self, other: LabelHistogram<L>) {
        for (label, count) in other.counts {
            match self.counts.iter_mut().find(|(l, _)| *l == label) {
                Some((_, existing)) => *existing += count,
                None => self.counts.push((label, count)),
            }
        }
    }

    pub fn count(&self, label: &L) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Total number of observations.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Empirical probability of `label`: its count over the total.
    pub fn probability(&self, label: &L) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(label) as f64 / total as f64
    }

    /// The label with the highest count. Ties go to the label seen first.
    pub fn majority(&self) -> Option<&L> {
        let mut best: Option<(&L, usize)> = None;
        for (label, count) in &self.counts {
            match best {
                Some((_, best_count)) if best_count >= *count => {}
                _ => best = Some((label, *count)),
            }
        }
        best.map(|(label, _)| label)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&L, usize)> {
        self.counts.iter().map(|(label, count)| (label, *count))
    }

    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.counts.iter().map(|(label, _)| label)
    }
}

impl<L: Label> Default for LabelHistogram<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Count labels, switching to a chunked parallel count once `samples` grows
/// past `parallel_threshold`.
///
/// Chunk histograms are merged left to right, so the result (first-seen order
/// included) is identical to the sequential count no matter how rayon
/// schedules the chunks.
pub fn count_labels<S>(samples: &[&S], parallel_threshold: usize) -> LabelHistogram<S::Label>
where
    S: Sample + Sync,
    S::Label: Send,
{
    if samples.len() < parallel_threshold {
        return LabelHistogram::from_samples(samples);
    }

    samples
        .par_chunks(PARALLEL_CHUNK)
        .map(LabelHistogram::from_samples)
        .collect::<Vec<_>>()
        .into_iter()
        .fold(LabelHistogram::new(), |mut acc, chunk| {
            acc.merge(chunk);
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SimpleSample;

    fn samples(labels: &[bool]) -> Vec<SimpleSample<bool>> {
        labels.iter().map(|&l| SimpleSample::new(l)).collect()
    }

    #[test]
    fn counts_in_first_seen_order() {
        let data = samples(&[true, false, true, false, false]);
        let refs: Vec<_> = data.iter().collect();
        let histogram = LabelHistogram::from_samples(&refs);

        assert_eq!(histogram.count(&true), 2);
        assert_eq!(histogram.count(&false), 3);
        assert_eq!(histogram.total(), 5);
        assert_eq!(histogram.labels().collect::<Vec<_>>(), vec![&true, &false]);
    }

    #[test]
    fn majority_prefers_higher_count() {
        let data = samples(&[true, false, true, false, false]);
        let refs: Vec<_> = data.iter().collect();
        let histogram = LabelHistogram::from_samples(&refs);

        assert_eq!(histogram.majority(), Some(&false));
    }

    #[test]
    fn majority_tie_goes_to_first_seen() {
        let data = samples(&[true, false, true, false]);
        let refs: Vec<_> = data.iter().collect();
        let histogram = LabelHistogram::from_samples(&refs);

        assert_eq!(histogram.majority(), Some(&true));
    }

    #[test]
    fn majority_of_empty_is_none() {
        let histogram: LabelHistogram<bool> = LabelHistogram::new();
        assert_eq!(histogram.majority(), None);
    }

    #[test]
    fn probability_is_count_over_total() {
        let data = samples(&[true, true, true, false]);
        let refs: Vec<_> = data.iter().collect();
        let histogram = LabelHistogram::from_samples(&refs);

        assert!((histogram.probability(&true) - 0.75).abs() < 1e-12);
        assert!((histogram.probability(&false) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn parallel_count_matches_sequential() {
        let labels: Vec<usize> = (0..5000).map(|i| i % 7).collect();
        let data: Vec<_> = labels.iter().map(|&l| SimpleSample::new(l)).collect();
        let refs: Vec<_> = data.iter().collect();

        let sequential = count_labels(&refs, usize::MAX);
        let parallel = count_labels(&refs, 0);

        assert_eq!(sequential, parallel);
    }
}
