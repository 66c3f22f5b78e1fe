//! Plain-text reports for tree shape, encode results and decode results.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::code::EncodingMap;
use crate::driver::{DecodeOutcome, EncodeOutcome, EncodingPolicy, TableSource};
use crate::error::Result;
use crate::huffman::{Edge, HuffmanTree, NodeKind};

const PHRASE_SEPARATOR: &str =
    "===================================END OF PHRASE===================================";

/// Printable form of a symbol; whitespace and control characters are quoted.
fn show(symbol: char) -> String {
    if symbol.is_whitespace() || symbol.is_control() {
        format!("{symbol:?}")
    } else {
        symbol.to_string()
    }
}

/// Indented tree, two spaces per level.
pub fn indented_tree(tree: &HuffmanTree) -> String {
    let mut out = String::new();
    for node in tree.render() {
        let label = match node.edge {
            Edge::Root => "root",
            Edge::Left => "L",
            Edge::Right => "R",
        };
        let indent = "  ".repeat(node.depth);
        let line = match node.kind {
            NodeKind::Leaf { symbol, weight } => {
                format!("{indent}{label}: {} ({weight})\n", show(symbol))
            }
            NodeKind::Internal { weight, symbols } => {
                let symbols: String = symbols.chars().map(show).collect();
                format!("{indent}{label}: {symbols} ({weight})\n")
            }
        };
        out.push_str(&line);
    }
    out
}

/// Preorder listing such as `XYZ: 6, X: 3, YZ: 3, Y: 1, Z: 2`.
pub fn preorder_string(tree: &HuffmanTree) -> String {
    tree.render()
        .into_iter()
        .map(|node| match node.kind {
            NodeKind::Leaf { symbol, weight } => format!("{}: {weight}", show(symbol)),
            NodeKind::Internal { weight, symbols } => {
                let symbols: String = symbols.chars().map(show).collect();
                format!("{symbols}: {weight}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn map_lines(map: &EncodingMap, quoted: bool) -> String {
    map.iter()
        .map(|(symbol, code)| {
            if quoted {
                format!("'{symbol}': {code}\n")
            } else {
                format!("{}: {code}\n", show(symbol))
            }
        })
        .collect()
}

/// Tree structure, preorder listing and encoding map.
pub fn tree_report(tree: &HuffmanTree) -> String {
    let mut out = String::new();
    out.push_str("--- Huffman Tree Structure ---\n");
    out.push_str(&indented_tree(tree));
    out.push_str("\n--- Huffman Preorder Traversal String ---\n");
    out.push_str(&preorder_string(tree));
    out.push_str("\n\n--- Encoding Map ---\n");
    out.push_str(&map_lines(tree.encoding_map(), false));
    out
}

/// One block per phrase.
pub fn encode_report(outcomes: &[EncodeOutcome]) -> String {
    let mut blocks = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let mut block = format!("Original: {}\n", outcome.phrase);
        block.push_str(&match &outcome.result {
            Ok(encoded) => format!("Encoded:  {}\n", encoded.bits),
            Err(e) => format!("Error:    {e}\n"),
        });
        match outcome.policy {
            EncodingPolicy::Shared => {
                block.push_str(&format!("(Used {})\n", TableSource::Supplied.describe()));
            }
            EncodingPolicy::PerPhrase => {
                block.push_str("(Used unique frequency table)\n");
                if let Ok(Some(map)) = outcome.result.as_ref().map(|e| e.map.as_ref()) {
                    block.push_str("\n--- Encoding Map ---\n");
                    block.push_str(&map_lines(map, true));
                }
                block.push_str(PHRASE_SEPARATOR);
                block.push('\n');
            }
        }
        blocks.push(block);
    }
    blocks.join("\n")
}

/// One block per bit string.
pub fn decode_report(outcomes: &[DecodeOutcome]) -> String {
    let mut blocks = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let mut block = format!("Code:     {}\n", outcome.bits);
        block.push_str(&match &outcome.result {
            Ok(text) => format!("Decoded:  {text}\n"),
            Err(e) => format!("Error:    {e}\n"),
        });
        block.push_str(&format!("(Used {})\n", outcome.source.describe()));
        blocks.push(block);
    }
    blocks.join("\n")
}

/// Write a report to `path`.
pub fn write_report(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content)?;
    info!(path = %path.display(), bytes = content.len(), "wrote report");
    Ok(())
}
