//! Tree nodes

use crate::dataset::Label;
use crate::feature::Feature;
use crate::histogram::LabelHistogram;

const LEAF_NODE_NAME: &str = "Leaf";

/// A node of a fitted decision tree.
///
/// Every node remembers the branch value that led to it from its parent
/// (`"root"` for the root) and a histogram of the training labels that
/// reached it. A split node carries the feature it splits on and owns its
/// children; a leaf carries the predicted label instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<L: Label> {
    branch: String,
    histogram: LabelHistogram<L>,
    pub(crate) kind: NodeKind<L>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeKind<L: Label> {
    Split {
        feature: Feature,
        children: Vec<Node<L>>,
    },
    Leaf {
        label: L,
    },
}

impl<L: Label> Node<L> {
    pub(crate) fn split(
        feature: Feature,
        branch: impl Into<String>,
        histogram: LabelHistogram<L>,
    ) -> Self {
        Node {
            branch: branch.into(),
            histogram,
            kind: NodeKind::Split {
                feature,
                children: Vec::new(),
            },
        }
    }

    pub(crate) fn leaf(
        label: L,
        branch: impl Into<String>,
        histogram: LabelHistogram<L>,
    ) -> Self {
        Node {
            branch: branch.into(),
            histogram,
            kind: NodeKind::Leaf { label },
        }
    }

    pub(crate) fn push_child(&mut self, child: Node<L>) {
        match &mut self.kind {
            NodeKind::Split { children, .. } => children.push(child),
            NodeKind::Leaf { .. } => unreachable!("leaves have no children"),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// The predicted label, for leaves.
    pub fn label(&self) -> Option<&L> {
        match &self.kind {
            NodeKind::Leaf { label } => Some(label),
            NodeKind::Split { .. } => None,
        }
    }

    /// The splitting feature, for split nodes.
    pub fn feature(&self) -> Option<&Feature> {
        match &self.kind {
            NodeKind::Split { feature, .. } => Some(feature),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Children in branch order. Empty for leaves.
    pub fn children(&self) -> &[Node<L>] {
        match &self.kind {
            NodeKind::Split { children, .. } => children,
            NodeKind::Leaf { .. } => &[],
        }
    }

    /// The branch value that led here from the parent.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Training label counts seen by this node. Empty for leaves attached to
    /// branches that no training sample reached.
    pub fn histogram(&self) -> &LabelHistogram<L> {
        &self.histogram
    }

    /// The splitting feature's display name, or `"Leaf"`.
    pub fn name(&self) -> &str {
        match &self.kind {
            NodeKind::Split { feature, .. } => feature.name(),
            NodeKind::Leaf { .. } => LEAF_NODE_NAME,
        }
    }
}
