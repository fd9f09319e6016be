use crate::error::{Error, Result};
use crate::param_guard::ParamGuard;
use crate::tree::DecisionTreeValidParams;

/// The set of hyperparameters that can be specified for fitting a
/// [random forest](crate::RandomForest).
///
/// Every tree carries its own [`DecisionTreeValidParams`], so members of the
/// ensemble may be configured independently.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForestValidParams {
    trees: Vec<DecisionTreeValidParams>,
    bootstrap_fraction: f64,
    feature_fraction: f64,
    seed: u64,
}

impl RandomForestValidParams {
    pub fn trees(&self) -> &[DecisionTreeValidParams] {
        &self.trees
    }

    pub fn bootstrap_fraction(&self) -> f64 {
        self.bootstrap_fraction
    }

    pub fn feature_fraction(&self) -> f64 {
        self.feature_fraction
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomForestParams(RandomForestValidParams);

impl RandomForestParams {
    /// An ensemble of `num_trees` default-configured trees.
    pub fn new(num_trees: usize) -> Self {
        Self(RandomForestValidParams {
            trees: vec![DecisionTreeValidParams::default(); num_trees],
            bootstrap_fraction: 0.8,
            feature_fraction: 0.2,
            seed: 42,
        })
    }

    /// Sets independently configured trees; the ensemble size becomes the
    /// length of the list
    pub fn trees(mut self, trees: Vec<DecisionTreeValidParams>) -> Self {
        self.0.trees = trees;
        self
    }

    /// Applies one tree configuration to every member of the ensemble
    pub fn tree_params(mut self, params: DecisionTreeValidParams) -> Self {
        for tree in &mut self.0.trees {
            *tree = params.clone();
        }
        self
    }

    /// Sets the probability in (0, 1) with which each training row joins a
    /// tree's bootstrap subset
    pub fn bootstrap_fraction(mut self, fraction: f64) -> Self {
        self.0.bootstrap_fraction = fraction;
        self
    }

    /// Sets the probability in (0, 1) with which each feature column stays
    /// available to a tree
    pub fn feature_fraction(mut self, fraction: f64) -> Self {
        self.0.feature_fraction = fraction;
        self
    }

    /// Sets the seed for the per-training-run random generator
    pub fn seed(mut self, seed: u64) -> Self {
        self.0.seed = seed;
        self
    }
}

impl ParamGuard for RandomForestParams {
    type Checked = RandomForestValidParams;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if !(self.0.bootstrap_fraction > 0.0 && self.0.bootstrap_fraction < 1.0) {
            Err(Error::Parameters(format!(
                "bootstrap fraction should be in (0, 1), but was {}",
                self.0.bootstrap_fraction
            )))
        } else if !(self.0.feature_fraction > 0.0 && self.0.feature_fraction < 1.0) {
            Err(Error::Parameters(format!(
                "feature fraction should be in (0, 1), but was {}",
                self.0.feature_fraction
            )))
        } else if self.0.trees.len() < 2 {
            Err(Error::Parameters(format!(
                "a forest needs at least 2 trees, but had {}",
                self.0.trees.len()
            )))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
