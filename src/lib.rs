//! # Static Huffman Coding
//!
//! *Deterministic prefix codes for text, rendered as `'0'`/`'1'` strings.*
//!
//! ## Intuition First
//!
//! Give the most common symbols the shortest codes. Huffman's greedy rule does
//! exactly that: keep merging the two rarest things you have until one tree is
//! left. Each symbol's code is the path from the root to its leaf, left = 0 and
//! right = 1. Because every symbol sits on a leaf, no code is a prefix of
//! another and a bit string decodes without separators.
//!
//! ## The Problem
//!
//! Whenever two weights tie, the greedy rule allows several trees, all optimal
//! but with different codes. Reports and tests need one answer, so this crate
//! fixes the tie-break:
//!
//! - leaves enter the queue in ascending symbol order;
//! - among equal weights, the node inserted first comes out first;
//! - the first extracted node of each merge becomes the left child.
//!
//! ## Edge Cases
//!
//! 1. **One symbol**: the tree is a single leaf and its code is `"0"`. Decoding
//!    emits the symbol once per bit.
//! 2. **Unknown symbol**: encoding fails rather than skipping it.
//! 3. **Truncated or non-binary input**: decoding fails with the position or
//!    the number of dangling bits.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(k \log k)$ for $k$ distinct symbols.
//! - **Encode / decode**: $O(m)$ in phrase or bit-string length.
//!
//! ## Table Policies
//!
//! [`CodecDriver`] runs batches with a supplied table shared by everything, or
//! without one: a fresh table per phrase for encoding and the
//! [`standard`] table for decoding. With no table at all, phrases still
//! encode one by one and only decoding fails.
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod config;
pub mod driver;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod input;
pub mod node;
pub mod queue;
pub mod report;
pub mod standard;

pub use code::EncodingMap;
pub use config::{LabConfig, Normalization};
pub use driver::{CodecDriver, DecodeOutcome, EncodeOutcome, EncodingPolicy, TableSource};
pub use error::{BitstreamFault, Error, Result};
pub use frequency::FrequencyTable;
pub use huffman::HuffmanTree;
pub use node::Node;
pub use queue::PriorityQueue;
