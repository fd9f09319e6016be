use std::iter::Iterator;

use super::Node;
use crate::dataset::Label;

/// Depth-first iterator over the nodes of a decision tree
pub struct NodeIter<'a, L: Label> {
    queue: Vec<&'a Node<L>>,
}

impl<'a, L: Label> NodeIter<'a, L> {
    pub(crate) fn new(queue: Vec<&'a Node<L>>) -> Self {
        NodeIter { queue }
    }
}

impl<'a, L: Label> Iterator for NodeIter<'a, L> {
    type Item = &'a Node<L>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop().map(|node| {
            self.queue.extend(node.children().iter());
            node
        })
    }
}
