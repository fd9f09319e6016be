//! JSON tree export
//!
//! Serializes a fitted tree into the recursive self-describing document
//! understood by existing visualisation tooling. The exact byte layout —
//! field order, the space after each comma, the leaf's `label` field carrying
//! the *parent* split's name — is a compatibility contract and must not be
//! "cleaned up".

use crate::dataset::Label;
use crate::error::{Error, Result};
use crate::tree::node::NodeKind;
use crate::tree::{DecisionTree, Node};

impl<L: Label> DecisionTree<L> {
    /// Export the tree as a JSON string.
    ///
    /// Fails with [`Error::LeafRoot`] when the tree never split.
    pub fn export_json(&self) -> Result<String> {
        match self.root().kind {
            NodeKind::Leaf { .. } => Err(Error::LeafRoot),
            NodeKind::Split { .. } => Ok(format_split(self.root())),
        }
    }
}

fn format_split<L: Label>(node: &Node<L>) -> String {
    let mut out = format!(
        "{{\"error\":\"1.0\", \"value\":[\"{}\"], \"samples\":\"1\", \"label\":\"{}\", \"type\":\"split\"",
        node.branch(),
        node.name()
    );

    out.push_str(", \"children\": [");
    for (position, child) in node.children().iter().enumerate() {
        if position > 0 {
            out.push(',');
        }
        match &child.kind {
            NodeKind::Split { .. } => out.push_str(&format_split(child)),
            NodeKind::Leaf { label } => out.push_str(&format!(
                "{{\"error\":\"1.0\", \"value\":[{}], \"samples\":\"1\", \"label\":\"{}\", \"type\":\"leaf\"}}",
                label.print_value(),
                node.name()
            )),
        }
    }
    out.push_str("]}");
    out
}

#[cfg(test)]
mod tests {
    use crate::dataset::SimpleSample;
    use crate::error::Error;
    use crate::feature::Feature;
    use crate::tree::DecisionTree;

    #[test]
    fn export_reproduces_the_wire_format() {
        // x1 alone decides the label, so the tree is a single binary split
        let samples = vec![
            SimpleSample::new(true).with("x1", true),
            SimpleSample::new(true).with("x1", true),
            SimpleSample::new(false).with("x1", false),
            SimpleSample::new(false).with("x1", false),
        ];
        let features = vec![Feature::equals("x1", true)];
        let tree = DecisionTree::<bool>::params()
            .train(&samples, &features)
            .unwrap();

        assert_eq!(
            tree.export_json().unwrap(),
            "{\"error\":\"1.0\", \"value\":[\"root\"], \"samples\":\"1\", \"label\":\"x1 = true\", \"type\":\"split\", \"children\": [\
             {\"error\":\"1.0\", \"value\":[false], \"samples\":\"1\", \"label\":\"x1 = true\", \"type\":\"leaf\"},\
             {\"error\":\"1.0\", \"value\":[true], \"samples\":\"1\", \"label\":\"x1 = true\", \"type\":\"leaf\"}]}"
        );
    }

    #[test]
    fn nested_splits_are_recursive_documents() {
        // AND function: root splits on x1, the true branch splits on x2
        let samples = vec![
            SimpleSample::new(true).with("x1", true).with("x2", true),
            SimpleSample::new(false).with("x1", true).with("x2", false),
            SimpleSample::new(false).with("x1", false).with("x2", true),
            SimpleSample::new(false).with("x1", false).with("x2", false),
        ];
        let features = vec![Feature::equals("x1", true), Feature::equals("x2", true)];
        let tree = DecisionTree::<bool>::params()
            .train(&samples, &features)
            .unwrap();

        assert_eq!(
            tree.export_json().unwrap(),
            "{\"error\":\"1.0\", \"value\":[\"root\"], \"samples\":\"1\", \"label\":\"x1 = true\", \"type\":\"split\", \"children\": [\
             {\"error\":\"1.0\", \"value\":[false], \"samples\":\"1\", \"label\":\"x1 = true\", \"type\":\"leaf\"},\
             {\"error\":\"1.0\", \"value\":[\"true\"], \"samples\":\"1\", \"label\":\"x2 = true\", \"type\":\"split\", \"children\": [\
             {\"error\":\"1.0\", \"value\":[false], \"samples\":\"1\", \"label\":\"x2 = true\", \"type\":\"leaf\"},\
             {\"error\":\"1.0\", \"value\":[true], \"samples\":\"1\", \"label\":\"x2 = true\", \"type\":\"leaf\"}]}]}"
        );
    }

    #[test]
    fn leaf_root_cannot_be_exported() {
        let samples = vec![SimpleSample::new(true).with("x1", true)];
        let tree = DecisionTree::<bool>::params().train(&samples, &[]).unwrap();
        assert!(matches!(tree.export_json(), Err(Error::LeafRoot)));
    }
}
