//! Run configuration, loaded from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// How phrases and table symbols are cleaned before coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalization {
    /// Upper-case every symbol.
    pub fold_case: bool,
    /// Drop everything that is not alphabetic.
    pub alphabetic_only: bool,
}

impl Normalization {
    /// Use phrases exactly as given.
    pub const VERBATIM: Normalization = Normalization {
        fold_case: false,
        alphabetic_only: false,
    };

    /// Apply to a phrase.
    pub fn apply(&self, text: &str) -> String {
        self.apply_keeping(text, |_| false)
    }

    /// Apply to a phrase, but never drop a folded symbol for which `keep`
    /// returns true.
    ///
    /// Lets a table that codes punctuation keep it under `alphabetic_only`.
    pub fn apply_keeping(&self, text: &str, keep: impl Fn(char) -> bool) -> String {
        text.chars()
            .map(|c| self.fold(c))
            .filter(|&c| !self.alphabetic_only || c.is_alphabetic() || keep(c))
            .collect()
    }

    /// Apply to a single table symbol; `None` if the symbol is filtered out.
    pub fn symbol(&self, c: char) -> Option<char> {
        if self.alphabetic_only && !c.is_alphabetic() {
            return None;
        }
        Some(self.fold(c))
    }

    fn fold(&self, c: char) -> char {
        if self.fold_case {
            // to_uppercase can expand (e.g. 'ß' -> "SS"); keep it one-to-one
            let mut upper = c.to_uppercase();
            if upper.len() == 1 {
                return upper.next().unwrap_or(c);
            }
        }
        c
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self {
            fold_case: true,
            alphabetic_only: true,
        }
    }
}

/// Settings for a lab run.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LabConfig {
    /// See [`Normalization::fold_case`].
    pub fold_case: bool,
    /// See [`Normalization::alphabetic_only`].
    pub alphabetic_only: bool,
    /// Fall back to the built-in table when the input has none.
    pub use_standard_table: bool,
    /// Tree report destination.
    pub tree_file: PathBuf,
    /// Encode report destination.
    pub encode_file: PathBuf,
    /// Decode report destination.
    pub decode_file: PathBuf,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            fold_case: true,
            alphabetic_only: true,
            use_standard_table: true,
            tree_file: PathBuf::from("tree_info.txt"),
            encode_file: PathBuf::from("encode_results.txt"),
            decode_file: PathBuf::from("decode_results.txt"),
        }
    }
}

impl LabConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The normalization these settings describe.
    pub fn normalization(&self) -> Normalization {
        Normalization {
            fold_case: self.fold_case,
            alphabetic_only: self.alphabetic_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_normalization_matches_lab_rules() {
        let n = Normalization::default();
        assert_eq!(n.apply("Sally sells, sea-shells!"), "SALLYSELLSSEASHELLS");
        assert_eq!(n.symbol('q'), Some('Q'));
        assert_eq!(n.symbol('.'), None);
    }

    #[test]
    fn test_apply_keeping_coded_punctuation() {
        let n = Normalization::default();
        assert_eq!(n.apply_keeping("a.b, c", |c| c == '.'), "A.BC");
    }

    #[test]
    fn test_verbatim() {
        let n = Normalization::VERBATIM;
        assert_eq!(n.apply("a B!"), "a B!");
        assert_eq!(n.symbol('q'), Some('q'));
        assert_eq!(n.symbol('.'), Some('.'));
    }

    #[test]
    fn test_fold_case_keeps_length() {
        let n = Normalization {
            fold_case: true,
            alphabetic_only: false,
        };
        assert_eq!(n.apply("straße"), "STRAßE");
    }

    #[test]
    fn test_partial_toml() {
        let cfg = LabConfig::from_toml_str("fold_case = false\ntree_file = \"t.txt\"\n").unwrap();
        assert!(!cfg.fold_case);
        assert!(cfg.alphabetic_only);
        assert!(cfg.use_standard_table);
        assert_eq!(cfg.tree_file, PathBuf::from("t.txt"));
        assert_eq!(cfg.encode_file, PathBuf::from("encode_results.txt"));
    }

    #[test]
    fn test_bad_toml() {
        let err = LabConfig::from_toml_str("fold_case = \"yes\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
