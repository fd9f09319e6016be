//! Decision tree growth and classification
//!
use std::fmt;

use tracing::debug;

use crate::dataset::{Label, Record, Sample};
use crate::error::{Error, Result};
use crate::executor::{InlineExecutor, TaskExecutor};
use crate::feature::Feature;
use crate::histogram::{count_labels, LabelHistogram};
use crate::param_guard::ParamGuard;
use crate::split::BestSplitFinder;
use crate::tree::node::NodeKind;
use crate::tree::{
    DecisionTreeParams, DecisionTreeValidParams, MissingBranchPolicy, Node, NodeIter,
};

const ROOT_BRANCH: &str = "root";

/// A fitted decision tree model for classification.
///
/// ### Structure
///
/// The tree is n-ary: every split node holds a [`Feature`] and one child per
/// branch that feature produced on the training subset, each child tagged
/// with its branch value. Leaves hold the predicted label. Every node also
/// keeps the label histogram of the training samples that reached it, which
/// backs the majority-label fallback during classification.
///
/// ### Algorithm
///
/// Starting from the full training set, each node considers its samples and
/// the candidate features that are still unused on its path:
///
/// * If one label's share reaches the homogeneity threshold, the node is a
///   leaf predicting that label.
/// * If no candidate features remain, or the maximum depth is reached, the
///   node is a leaf predicting the majority label.
/// * Otherwise the feature with the lowest weighted impurity splits the node.
///   A split producing fewer branches than the configured minimum is
///   discarded in favor of a majority leaf. Each non-empty branch is grown
///   recursively with the chosen feature removed from its candidate set;
///   an empty branch (a declared category no sample had) becomes a leaf
///   predicting the parent's majority label.
///
/// ### Predictions
///
/// [`classify`](DecisionTree::classify) descends from the root, at each split
/// picking the child whose branch value matches the sample. When no child
/// matches, the configured [`MissingBranchPolicy`] applies. Fitted trees are
/// read-only and safe to share across threads for concurrent classification.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree<L: Label> {
    root: Node<L>,
    params: DecisionTreeValidParams,
}

impl DecisionTreeValidParams {
    /// Fit a decision tree on `samples`, choosing splits from `features`.
    pub fn train<S>(&self, samples: &[S], features: &[Feature]) -> Result<DecisionTree<S::Label>>
    where
        S: Sample + Sync,
        S::Label: Send,
    {
        self.train_with(samples, features, &InlineExecutor)
    }

    /// Fit a decision tree, handing each branch-growth task to `executor`.
    ///
    /// The executor is a performance knob only: any [`TaskExecutor`] produces
    /// the exact same tree as [`train`](Self::train).
    pub fn train_with<S, E>(
        &self,
        samples: &[S],
        features: &[Feature],
        executor: &E,
    ) -> Result<DecisionTree<S::Label>>
    where
        S: Sample + Sync,
        S::Label: Send,
        E: TaskExecutor,
    {
        if samples.is_empty() {
            return Err(Error::NotEnoughSamples);
        }
        let refs: Vec<&S> = samples.iter().collect();
        let root = grow_tree(self, &refs, features, 1, ROOT_BRANCH, executor)?;
        Ok(DecisionTree {
            root,
            params: self.clone(),
        })
    }
}

impl DecisionTreeParams {
    /// Checks the hyperparameters and trains; see
    /// [`DecisionTreeValidParams::train`].
    pub fn train<S>(&self, samples: &[S], features: &[Feature]) -> Result<DecisionTree<S::Label>>
    where
        S: Sample + Sync,
        S::Label: Send,
    {
        self.check_ref()?.train(samples, features)
    }

    /// Checks the hyperparameters and trains with an executor; see
    /// [`DecisionTreeValidParams::train_with`].
    pub fn train_with<S, E>(
        &self,
        samples: &[S],
        features: &[Feature],
        executor: &E,
    ) -> Result<DecisionTree<S::Label>>
    where
        S: Sample + Sync,
        S::Label: Send,
        E: TaskExecutor,
    {
        self.check_ref()?.train_with(samples, features, executor)
    }
}

impl<L: Label> DecisionTree<L> {
    /// Return the root node of the tree
    pub fn root(&self) -> &Node<L> {
        &self.root
    }

    /// Create a depth-first node iterator
    pub fn iter_nodes(&self) -> NodeIter<L> {
        NodeIter::new(vec![&self.root])
    }

    /// Distinct features used by the tree, in discovery order
    pub fn features(&self) -> Vec<&Feature> {
        let mut features: Vec<&Feature> = Vec::new();
        for node in self.iter_nodes() {
            if let Some(feature) = node.feature() {
                if !features.contains(&feature) {
                    features.push(feature);
                }
            }
        }
        features
    }

    /// Number of levels in the tree; a lone root counts as 1
    pub fn max_depth(&self) -> usize {
        depth_of(&self.root)
    }

    /// Number of leaves in the tree
    pub fn num_leaves(&self) -> usize {
        self.iter_nodes().filter(|node| node.is_leaf()).count()
    }

    /// Classify `record` by descending from the root to a leaf.
    ///
    /// When a split node has no branch matching the record, the configured
    /// [`MissingBranchPolicy`] decides between answering with the deepest
    /// reached node's majority label and failing.
    pub fn classify<R: Record + fmt::Debug>(&self, record: &R) -> Result<L> {
        let mut node = &self.root;
        loop {
            let (feature, children) = match &node.kind {
                NodeKind::Leaf { label } => return Ok(label.clone()),
                NodeKind::Split { feature, children } => (feature, children),
            };

            match matching_child(feature, children, record) {
                Some(child) => node = child,
                None => {
                    return match self.params.missing_branch() {
                        MissingBranchPolicy::MajorityLabel => majority_label(node.histogram()),
                        MissingBranchPolicy::Fail => Err(Error::BranchNotFound {
                            sample: format!("{:?}", record),
                            node: node.name().to_string(),
                        }),
                    }
                }
            }
        }
    }
}

/// Pick the child whose branch value matches `record` under `feature`.
fn matching_child<'a, L: Label, R: Record>(
    feature: &Feature,
    children: &'a [Node<L>],
    record: &R,
) -> Option<&'a Node<L>> {
    match feature {
        Feature::Predicate(predicate) => {
            let branch = if predicate.matches(record) {
                "true"
            } else {
                "false"
            };
            children.iter().find(|child| child.branch() == branch)
        }
        Feature::Categorical(categorical) => {
            let value = record.value(categorical.column())?.to_string();
            children.iter().find(|child| child.branch() == value)
        }
        Feature::Grouped(group) => {
            let predicate = group.matching_predicate(record)?;
            children
                .iter()
                .find(|child| child.branch() == predicate.name())
        }
    }
}

/// Grow one node from `samples`, recursing over the branches of the best
/// split.
fn grow_tree<S, E>(
    params: &DecisionTreeValidParams,
    samples: &[&S],
    features: &[Feature],
    depth: usize,
    branch: &str,
    executor: &E,
) -> Result<Node<S::Label>>
where
    S: Sample + Sync,
    S::Label: Send,
    E: TaskExecutor,
{
    let histogram = count_labels(samples, params.parallel_count_threshold());

    if let Some(label) = homogeneous_label(&histogram, params.homogeneity()) {
        let label = label.clone();
        debug!(branch, label = %label.name(), "leaf: samples are homogeneous");
        return Ok(Node::leaf(label, branch, histogram));
    }

    if features.is_empty() || depth >= params.max_depth() {
        let label = majority_label(&histogram)?;
        debug!(branch, label = %label.name(), "leaf: stopping criteria reached");
        return Ok(Node::leaf(label, branch, histogram));
    }

    let finder = BestSplitFinder::new(params.impurity());
    let best = finder
        .find_best_split(samples, features)?
        .ok_or(Error::NoSplitCandidate)?
        .clone();
    debug!(branch, feature = best.name(), "best split found");

    let branches = best.split(samples);
    if branches.len() < params.min_branches() {
        let label = majority_label(&histogram)?;
        debug!(branch, label = %label.name(), "leaf: split produced too few branches");
        return Ok(Node::leaf(label, branch, histogram));
    }

    // a feature is used at most once along any path
    let remaining: Vec<Feature> = features.iter().filter(|f| **f != best).cloned().collect();

    let parent_majority = majority_label(&histogram)?;
    let mut node = Node::split(best, branch, histogram);

    for subset in branches {
        let child = if subset.samples.is_empty() {
            // no training sample reached this declared branch; predict the
            // parent's majority and record that nothing was seen here
            Node::leaf(parent_majority.clone(), subset.name, LabelHistogram::new())
        } else {
            let child_samples = subset.samples;
            let child_branch = subset.name;
            executor.submit(|| {
                grow_tree(
                    params,
                    &child_samples,
                    &remaining,
                    depth + 1,
                    &child_branch,
                    executor,
                )
            })??
        };
        node.push_child(child);
    }

    Ok(node)
}

/// The first label whose share of `histogram` reaches `threshold`, if any.
fn homogeneous_label<L: Label>(histogram: &LabelHistogram<L>, threshold: f64) -> Option<&L> {
    let total = histogram.total();
    histogram
        .iter()
        .find(|(_, count)| *count as f64 / total as f64 >= threshold)
        .map(|(label, _)| label)
}

/// The most frequent label of `histogram`; ties go to the label seen first.
fn majority_label<L: Label>(histogram: &LabelHistogram<L>) -> Result<L> {
    histogram.majority().cloned().ok_or(Error::EmptySplit)
}

fn depth_of<L: Label>(node: &Node<L>) -> usize {
    1 + node
        .children()
        .iter()
        .map(depth_of)
        .max()
        .unwrap_or(0)
}
