//! Huffman tree construction, encoding and decoding.
//!
//! The build is the classic greedy merge: repeatedly take the two lightest
//! nodes and join them under a new internal node until one remains. Leaves
//! enter the queue in ascending symbol order and ties are broken by insertion
//! order, so a given table always yields the same tree.
//!
//! # Example
//!
//! ```
//! use huffcode::{FrequencyTable, HuffmanTree};
//!
//! let table = FrequencyTable::from_pairs([('A', 25), ('B', 10), ('C', 15), ('D', 30), ('E', 20)])?;
//! let tree = HuffmanTree::build(&table)?;
//! let bits = tree.encode("ACE")?;
//! assert_eq!(bits, "0110100");
//! assert_eq!(tree.decode(&bits)?, "ACE");
//! # Ok::<(), huffcode::Error>(())
//! ```

use tracing::debug;

use crate::code::EncodingMap;
use crate::error::{BitstreamFault, Error, Result};
use crate::frequency::FrequencyTable;
use crate::node::Node;
use crate::queue::PriorityQueue;

/// A built Huffman tree and its encoding map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
    codes: EncodingMap,
}

/// Shape of one node as reported by [`HuffmanTree::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A symbol leaf.
    Leaf {
        /// Leaf symbol.
        symbol: char,
        /// Leaf weight.
        weight: u64,
    },
    /// An internal node.
    Internal {
        /// Combined weight.
        weight: u64,
        /// Sorted concatenation of the subtree's leaf symbols.
        symbols: String,
    },
}

/// Which edge led to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The node is the root.
    Root,
    /// Reached by bit 0.
    Left,
    /// Reached by bit 1.
    Right,
}

/// A node in preorder, with its depth below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNode {
    /// Zero for the root.
    pub depth: usize,
    /// Edge from the parent.
    pub edge: Edge,
    /// Node contents.
    pub kind: NodeKind,
}

impl HuffmanTree {
    /// Build a tree from a frequency table.
    ///
    /// # Errors
    /// Returns `Error::EmptyFrequencyTable` if the table has no entries, or
    /// `Error::WeightOverflow` if merged weights exceed `u64::MAX`.
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::EmptyFrequencyTable);
        }

        let mut pq = PriorityQueue::new();
        for (symbol, weight) in table.iter() {
            pq.insert(Node::leaf(symbol, weight));
        }

        while pq.size() > 1 {
            let left = pq.extract_min()?;
            let right = pq.extract_min()?;
            pq.insert(Node::merge(left, right)?);
        }

        let root = pq.extract_min()?;
        let codes = EncodingMap::from_root(&root);
        debug!(
            symbols = table.len(),
            nodes = root.node_count(),
            "built huffman tree"
        );
        Ok(Self { root, codes })
    }

    /// Root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The derived symbol to code mapping.
    pub fn encoding_map(&self) -> &EncodingMap {
        &self.codes
    }

    /// Total nodes; `2k - 1` for `k` symbols.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Encode a phrase into a `'0'`/`'1'` string.
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` for the first symbol without a code.
    pub fn encode(&self, phrase: &str) -> Result<String> {
        let mut bits = String::new();
        for c in phrase.chars() {
            let code = self.codes.get(c).ok_or(Error::UnknownSymbol(c))?;
            bits.push_str(code);
        }
        Ok(bits)
    }

    /// Decode a `'0'`/`'1'` string back into text.
    ///
    /// A single-symbol tree emits its symbol once per bit, whatever the bit.
    ///
    /// # Errors
    /// Returns `Error::MalformedBitstream` on a character other than `'0'`
    /// or `'1'`, or if the input stops part way through a code.
    pub fn decode(&self, bits: &str) -> Result<String> {
        let mut out = String::new();
        let mut curr = &self.root;
        let mut dangling = 0;

        for (position, c) in bits.chars().enumerate() {
            let bit = match c {
                '0' => false,
                '1' => true,
                bit => return Err(BitstreamFault::InvalidBit { bit, position }.into()),
            };

            if let Node::Leaf { symbol, .. } = &self.root {
                out.push(*symbol);
                continue;
            }

            curr = match curr.child(bit) {
                Some(next) => next,
                // the cursor is reset on every leaf, so it only rests on internal nodes
                None => unreachable!("decode cursor parked on a leaf"),
            };
            dangling += 1;

            if let Node::Leaf { symbol, .. } = curr {
                out.push(*symbol);
                curr = &self.root;
                dangling = 0;
            }
        }

        if dangling > 0 {
            return Err(BitstreamFault::Incomplete { dangling }.into());
        }
        Ok(out)
    }

    /// Preorder listing of every node with its depth.
    pub fn render(&self) -> Vec<RenderedNode> {
        let mut out = Vec::with_capacity(self.node_count());
        Self::render_node(&self.root, 0, Edge::Root, &mut out);
        out
    }

    fn render_node(node: &Node, depth: usize, edge: Edge, out: &mut Vec<RenderedNode>) {
        let kind = match node {
            Node::Leaf { symbol, weight } => NodeKind::Leaf {
                symbol: *symbol,
                weight: *weight,
            },
            Node::Internal { weight, .. } => {
                let mut symbols = node.symbols();
                symbols.sort_unstable();
                NodeKind::Internal {
                    weight: *weight,
                    symbols: symbols.into_iter().collect(),
                }
            }
        };
        out.push(RenderedNode { depth, edge, kind });

        if let Node::Internal { left, right, .. } = node {
            Self::render_node(left, depth + 1, Edge::Left, out);
            Self::render_node(right, depth + 1, Edge::Right, out);
        }
    }
}
