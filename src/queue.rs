//! Min-priority queue of tree nodes.
//!
//! Nodes are ordered by weight, then by insertion order. Every insert stamps
//! a fresh sequence number, so two nodes never compare equal and the merge
//! order of the Huffman build is fully determined by its inputs.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::node::Node;

#[derive(Debug)]
struct Entry {
    weight: u64,
    seq: u64,
    node: Node,
}

impl Entry {
    fn key(&self) -> (u64, u64) {
        (self.weight, self.seq)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue yielding the lightest, then earliest inserted, node.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl PriorityQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. O(log n).
    pub fn insert(&mut self, node: Node) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            weight: node.weight(),
            seq,
            node,
        }));
    }

    /// Remove the node with the smallest `(weight, sequence)`.
    ///
    /// # Errors
    /// Returns `Error::EmptyQueue` if there is nothing to remove.
    pub fn extract_min(&mut self) -> Result<Node> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.node)
            .ok_or(Error::EmptyQueue)
    }

    /// Number of queued nodes.
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// True if no nodes are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
