//! Huffman tree nodes.

use crate::error::{Error, Result};

/// A node of a Huffman tree.
///
/// Internal nodes own both children; there are no parent links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its weight.
    Leaf {
        /// The symbol this leaf codes for.
        symbol: char,
        /// Weight from the frequency table.
        weight: u64,
    },
    /// The merge of two subtrees.
    Internal {
        /// Sum of both children's weights.
        weight: u64,
        /// Subtree reached by bit 0.
        left: Box<Node>,
        /// Subtree reached by bit 1.
        right: Box<Node>,
    },
}

impl Node {
    /// Create a leaf.
    pub fn leaf(symbol: char, weight: u64) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Merge two nodes; `left` goes on the 0 edge.
    ///
    /// # Errors
    /// Returns `Error::WeightOverflow` if the summed weight exceeds `u64::MAX`.
    pub fn merge(left: Node, right: Node) -> Result<Self> {
        let (l, r) = (left.weight(), right.weight());
        let weight = l
            .checked_add(r)
            .ok_or(Error::WeightOverflow { left: l, right: r })?;
        Ok(Node::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Weight of this node.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Child for `bit` (`false` = left, `true` = right), `None` on leaves.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => {
                let next: &Node = if bit { right } else { left };
                Some(next)
            }
        }
    }

    /// Total nodes in this subtree.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Leaf symbols of this subtree, left to right.
    pub fn symbols(&self) -> Vec<char> {
        let mut out = Vec::new();
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols(&self, out: &mut Vec<char>) {
        match self {
            Node::Leaf { symbol, .. } => out.push(*symbol),
            Node::Internal { left, right, .. } => {
                left.collect_symbols(out);
                right.collect_symbols(out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sums_weights() {
        let n = Node::merge(Node::leaf('a', 3), Node::leaf('b', 4)).unwrap();
        assert_eq!(n.weight(), 7);
        assert!(!n.is_leaf());
        assert_eq!(n.node_count(), 3);
        assert_eq!(n.child(false), Some(&Node::leaf('a', 3)));
        assert_eq!(n.child(true), Some(&Node::leaf('b', 4)));
    }

    #[test]
    fn test_merge_overflow() {
        let err = Node::merge(Node::leaf('a', u64::MAX), Node::leaf('b', 1)).unwrap_err();
        assert!(matches!(
            err,
            Error::WeightOverflow {
                left: u64::MAX,
                right: 1
            }
        ));
    }

    #[test]
    fn test_leaf_has_no_children() {
        let n = Node::leaf('q', 1);
        assert!(n.child(false).is_none());
        assert!(n.child(true).is_none());
        assert_eq!(n.symbols(), vec!['q']);
    }
}
