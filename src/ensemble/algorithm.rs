//! Random forest ensemble
//!
//! Trains a set of decision trees on bootstrapped, column-subsampled views of
//! the same data and classifies by majority vote.

use std::collections::HashSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::dataset::{Label, Record, Sample};
use crate::error::{Error, Result};
use crate::feature::Feature;
use crate::histogram::LabelHistogram;
use crate::param_guard::ParamGuard;
use crate::tree::DecisionTree;

use super::{RandomForestParams, RandomForestValidParams};

/// A fitted random forest classifier.
///
/// Each member tree was trained on its own bootstrap subset of the rows
/// (every row included independently with the bootstrap probability — note
/// that this is not sampling with replacement) and on the features whose
/// column survived an independent per-column draw. Classification collects
/// one vote per tree and answers with the most voted label; a tie goes to the
/// label voted first.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForest<L: Label> {
    trees: Vec<DecisionTree<L>>,
}

impl<L: Label> RandomForest<L> {
    /// Parameters for an ensemble of `num_trees` default-configured trees.
    #[allow(clippy::new_ret_no_self)]
    pub fn params(num_trees: usize) -> RandomForestParams {
        RandomForestParams::new(num_trees)
    }

    /// The fitted member trees, in training order.
    pub fn trees(&self) -> &[DecisionTree<L>] {
        &self.trees
    }

    /// Classify `record` by majority vote over all member trees.
    pub fn classify<R: Record + fmt::Debug>(&self, record: &R) -> Result<L> {
        let mut votes = LabelHistogram::new();
        for tree in &self.trees {
            votes.tally(&tree.classify(record)?);
        }
        votes
            .majority()
            .cloned()
            .ok_or_else(|| Error::Parameters("the forest has no trained trees".to_string()))
    }
}

impl RandomForestValidParams {
    /// Fit the ensemble, drawing randomness from a generator seeded with
    /// [`seed`](Self::seed). The same seed, data and features reproduce the
    /// forest exactly.
    pub fn train<S>(&self, samples: &[S], features: &[Feature]) -> Result<RandomForest<S::Label>>
    where
        S: Sample + Sync,
        S::Label: Send,
    {
        let mut rng = StdRng::seed_from_u64(self.seed());
        self.train_with_rng(samples, features, &mut rng)
    }

    /// Fit the ensemble with a caller-supplied generator.
    ///
    /// The generator is consumed tree by tree: first one inclusion draw per
    /// row, then one draw per distinct feature column in first-appearance
    /// order.
    pub fn train_with_rng<S, R>(
        &self,
        samples: &[S],
        features: &[Feature],
        rng: &mut R,
    ) -> Result<RandomForest<S::Label>>
    where
        S: Sample + Sync,
        S::Label: Send,
        R: Rng,
    {
        info!(
            num_trees = self.trees().len(),
            num_samples = samples.len(),
            num_features = features.len(),
            "training random forest"
        );

        let mut columns: Vec<&str> = Vec::new();
        for feature in features {
            if !columns.contains(&feature.column()) {
                columns.push(feature.column());
            }
        }

        let mut trees = Vec::with_capacity(self.trees().len());
        for params in self.trees() {
            let bootstrap: Vec<&S> = samples
                .iter()
                .filter(|_| rng.gen_bool(self.bootstrap_fraction()))
                .collect();

            let kept: HashSet<&str> = columns
                .iter()
                .copied()
                .filter(|_| rng.gen_bool(self.feature_fraction()))
                .collect();
            let subset: Vec<Feature> = features
                .iter()
                .filter(|feature| kept.contains(feature.column()))
                .cloned()
                .collect();

            trees.push(params.train(&bootstrap, &subset)?);
        }

        Ok(RandomForest { trees })
    }
}

impl RandomForestParams {
    /// Checks the hyperparameters and trains; see
    /// [`RandomForestValidParams::train`].
    pub fn train<S>(&self, samples: &[S], features: &[Feature]) -> Result<RandomForest<S::Label>>
    where
        S: Sample + Sync,
        S::Label: Send,
    {
        self.check_ref()?.train(samples, features)
    }
}
