//! Symbol to code mapping derived from a built tree.

use std::collections::BTreeMap;

use crate::node::Node;

/// Codes for every leaf of a tree, as `'0'`/`'1'` strings.
///
/// Iteration is sorted by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingMap {
    codes: BTreeMap<char, String>,
}

impl EncodingMap {
    /// Derive codes by walking root-to-leaf paths (left = 0, right = 1).
    ///
    /// A root that is itself a leaf gets the code `"0"`.
    pub fn from_root(root: &Node) -> Self {
        let mut codes = BTreeMap::new();
        Self::build_codes(root, String::new(), &mut codes);
        Self { codes }
    }

    fn build_codes(node: &Node, prefix: String, codes: &mut BTreeMap<char, String>) {
        match node {
            Node::Leaf { symbol, .. } => {
                let code = if prefix.is_empty() {
                    "0".to_string()
                } else {
                    prefix
                };
                codes.insert(*symbol, code);
            }
            Node::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push('0');
                Self::build_codes(left, left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push('1');
                Self::build_codes(right, right_prefix, codes);
            }
        }
    }

    /// Code for `symbol`.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no symbols are coded.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs sorted by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_str()))
    }

    /// True if no code is a prefix of another symbol's code.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        // after sorting, a prefix sorts directly before some code it prefixes
        codes.sort_unstable();
        codes.windows(2).all(|w| !w[1].starts_with(w[0]))
    }

    /// Weighted code length: sum of `weight * code length` over the leaves,
    /// or `None` if it does not fit in a `u64`.
    pub fn encoded_len(&self, weights: impl IntoIterator<Item = (char, u64)>) -> Option<u64> {
        weights
            .into_iter()
            .filter_map(|(s, w)| self.codes.get(&s).map(|c| (w, c.len() as u64)))
            .try_fold(0u64, |acc, (w, len)| acc.checked_add(w.checked_mul(len)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_leaf_gets_zero() {
        let map = EncodingMap::from_root(&Node::leaf('a', 9));
        assert_eq!(map.get('a'), Some("0"));
        assert_eq!(map.len(), 1);
        assert!(map.is_prefix_free());
    }

    #[test]
    fn test_paths_follow_edges() {
        let yz = Node::merge(Node::leaf('y', 1), Node::leaf('z', 1)).unwrap();
        let root = Node::merge(Node::leaf('x', 2), yz).unwrap();
        let map = EncodingMap::from_root(&root);
        let pairs: Vec<(char, &str)> = map.iter().collect();
        assert_eq!(pairs, vec![('x', "0"), ('y', "10"), ('z', "11")]);
        assert!(map.is_prefix_free());
        assert_eq!(map.encoded_len([('x', 2), ('y', 1), ('z', 1)]), Some(6));
        assert_eq!(map.encoded_len([('y', u64::MAX)]), None);
    }

    #[test]
    fn test_prefix_detection() {
        let mut map = EncodingMap::default();
        map.codes.insert('a', "01".to_string());
        map.codes.insert('b', "011".to_string());
        assert!(!map.is_prefix_free());
    }
}
