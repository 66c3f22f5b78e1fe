//! Error types for Huffman coding.

use thiserror::Error;

/// Why a bit string could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitstreamFault {
    /// A character other than `'0'` or `'1'` appeared.
    #[error("invalid bit {bit:?} at position {position}")]
    InvalidBit {
        /// The offending character.
        bit: char,
        /// Zero-based character index in the input.
        position: usize,
    },

    /// The input ended part way down a path from the root.
    #[error("input ends mid-code ({dangling} trailing bits)")]
    Incomplete {
        /// Bits consumed since the last decoded symbol.
        dangling: usize,
    },
}

/// Error variants for Huffman operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A tree was requested from a table with no entries.
    #[error("frequency table is empty")]
    EmptyFrequencyTable,

    /// Symbol weights must be at least 1.
    #[error("invalid weight {weight} for symbol {symbol:?}")]
    InvalidWeight {
        /// Symbol the weight was given for.
        symbol: char,
        /// The rejected weight.
        weight: u64,
    },

    /// A phrase contains a symbol the tree has no code for.
    #[error("symbol {0:?} is not in the frequency table")]
    UnknownSymbol(char),

    /// A bit string could not be decoded.
    #[error("malformed bit string: {0}")]
    MalformedBitstream(#[from] BitstreamFault),

    /// Merged weights no longer fit in a `u64`.
    #[error("combined weight {left} + {right} overflows")]
    WeightOverflow {
        /// Weight of the left subtree.
        left: u64,
        /// Weight of the right subtree.
        right: u64,
    },

    /// The priority queue ran dry during construction.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// Neither a supplied nor a standard frequency table is available.
    #[error("no frequency table supplied and no standard table available")]
    NoFrequencyTable,

    /// The configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// An I/O error occurred while reading input or writing reports.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
