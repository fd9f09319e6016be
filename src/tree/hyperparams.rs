use crate::dataset::Label;
use crate::error::{Error, Result};
use crate::impurity::Impurity;
use crate::param_guard::ParamGuard;
use crate::tree::DecisionTree;

/// What classification does when a split node has no branch matching the
/// sample — an unseen categorical value, or a predicate group bin that never
/// occurred in training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingBranchPolicy {
    /// Stop at the deepest reachable node and answer with the majority label
    /// of its histogram. The default.
    MajorityLabel,
    /// Fail with [`Error::BranchNotFound`], naming the sample and the node.
    ///
    /// [`Error::BranchNotFound`]: crate::Error::BranchNotFound
    Fail,
}

impl Default for MissingBranchPolicy {
    fn default() -> Self {
        MissingBranchPolicy::MajorityLabel
    }
}

/// The set of hyperparameters that can be specified for fitting a
/// [decision tree](DecisionTree).
///
/// The parallelism threshold is a performance hint only; it never changes
/// what tree is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTreeValidParams {
    impurity: Impurity,
    homogeneity: f64,
    max_depth: usize,
    min_branches: usize,
    missing_branch: MissingBranchPolicy,
    parallel_count_threshold: usize,
}

impl DecisionTreeValidParams {
    pub fn impurity(&self) -> Impurity {
        self.impurity
    }

    pub fn homogeneity(&self) -> f64 {
        self.homogeneity
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn min_branches(&self) -> usize {
        self.min_branches
    }

    pub fn missing_branch(&self) -> MissingBranchPolicy {
        self.missing_branch
    }

    pub fn parallel_count_threshold(&self) -> usize {
        self.parallel_count_threshold
    }
}

impl Default for DecisionTreeValidParams {
    fn default() -> Self {
        DecisionTreeValidParams {
            impurity: Impurity::Gini,
            homogeneity: 0.95,
            max_depth: 100,
            min_branches: 2,
            missing_branch: MissingBranchPolicy::MajorityLabel,
            parallel_count_threshold: 100_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTreeParams(DecisionTreeValidParams);

impl DecisionTreeParams {
    pub fn new() -> Self {
        Self(DecisionTreeValidParams::default())
    }

    /// Sets the measure used to score candidate splits
    pub fn impurity(mut self, impurity: Impurity) -> Self {
        self.0.impurity = impurity;
        self
    }

    /// Sets the label share in (0, 1] at which a node is declared
    /// homogeneous and becomes a leaf without splitting further
    pub fn homogeneity(mut self, homogeneity: f64) -> Self {
        self.0.homogeneity = homogeneity;
        self
    }

    /// Sets the depth at which growth stops; the root is at depth 1
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.0.max_depth = max_depth;
        self
    }

    /// Sets the minimum number of branches a split has to produce to be
    /// worth keeping
    pub fn min_branches(mut self, min_branches: usize) -> Self {
        self.0.min_branches = min_branches;
        self
    }

    /// Sets what classification does when no branch matches a sample
    pub fn missing_branch(mut self, policy: MissingBranchPolicy) -> Self {
        self.0.missing_branch = policy;
        self
    }

    /// Sets the sample count above which label counting runs data-parallel
    pub fn parallel_count_threshold(mut self, threshold: usize) -> Self {
        self.0.parallel_count_threshold = threshold;
        self
    }
}

impl Default for DecisionTreeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> DecisionTree<L> {
    /// Defaults are provided if the optional parameters are not specified:
    /// * `impurity = Impurity::Gini`
    /// * `homogeneity = 0.95`
    /// * `max_depth = 100`
    /// * `min_branches = 2`
    /// * `missing_branch = MissingBranchPolicy::MajorityLabel`
    /// * `parallel_count_threshold = 100_000`
    // Violates the convention that new should return a value of type `Self`
    #[allow(clippy::new_ret_no_self)]
    pub fn params() -> DecisionTreeParams {
        DecisionTreeParams::new()
    }
}

impl ParamGuard for DecisionTreeParams {
    type Checked = DecisionTreeValidParams;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if !(self.0.homogeneity > 0.0 && self.0.homogeneity <= 1.0) {
            Err(Error::Parameters(format!(
                "homogeneity threshold should be in (0, 1], but was {}",
                self.0.homogeneity
            )))
        } else if self.0.max_depth == 0 {
            Err(Error::Parameters(
                "max depth should be at least 1".to_string(),
            ))
        } else if self.0.min_branches < 2 {
            Err(Error::Parameters(format!(
                "a useful split needs at least 2 branches, but the minimum was {}",
                self.0.min_branches
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
