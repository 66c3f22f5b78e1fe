//! Batch encode/decode under the three table policies.
//!
//! - A supplied table builds one tree shared by every phrase and bit string.
//! - Without one, each phrase is encoded with a tree built from its own
//!   symbol counts, and bit strings are decoded with the standard table.
//! - With no standard table either, encoding still works per phrase and
//!   decoding fails with `Error::NoFrequencyTable`.
//!
//! Per-item failures are kept in the outcomes; the batch always runs to the end.

use tracing::{info, warn};

use crate::code::EncodingMap;
use crate::config::Normalization;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::huffman::HuffmanTree;

/// Where the decoding tree's table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    /// A table supplied by the caller.
    Supplied,
    /// The standard fallback table.
    Standard,
}

impl TableSource {
    /// Human-readable description for reports.
    pub fn describe(&self) -> &'static str {
        match self {
            TableSource::Supplied => "file's frequency table",
            TableSource::Standard => "standard frequency table",
        }
    }
}

/// How phrases are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingPolicy {
    /// One tree from the supplied table for every phrase.
    Shared,
    /// A fresh tree per phrase from the phrase's own counts.
    PerPhrase,
}

/// A successful encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The `'0'`/`'1'` result.
    pub bits: String,
    /// The phrase's own map, in per-phrase mode.
    pub map: Option<EncodingMap>,
}

/// Result of encoding one phrase.
#[derive(Debug)]
pub struct EncodeOutcome {
    /// The phrase as given.
    pub phrase: String,
    /// The phrase after normalization, as actually encoded.
    pub normalized: String,
    /// Policy that produced this outcome.
    pub policy: EncodingPolicy,
    /// Bits, or why encoding failed.
    pub result: Result<Encoded>,
}

/// Result of decoding one bit string.
#[derive(Debug)]
pub struct DecodeOutcome {
    /// The bit string as given.
    pub bits: String,
    /// Table behind the decoding tree.
    pub source: TableSource,
    /// Decoded text, or why decoding failed.
    pub result: Result<String>,
}

/// Chooses trees per policy and runs encode/decode batches.
#[derive(Debug, Clone)]
pub struct CodecDriver {
    /// Decoding tree and its table; `None` if no table was available.
    decoder: Option<(HuffmanTree, TableSource)>,
    normalization: Normalization,
}

impl CodecDriver {
    /// Build the decoding tree from `supplied`, or else from `standard`.
    ///
    /// With neither table the driver can still encode phrase by phrase;
    /// only decoding fails, with `Error::NoFrequencyTable`.
    ///
    /// # Errors
    /// Returns the build error if the chosen table is empty or its weights
    /// overflow.
    pub fn new(
        supplied: Option<FrequencyTable>,
        standard: Option<FrequencyTable>,
        normalization: Normalization,
    ) -> Result<Self> {
        let chosen = match (supplied, standard) {
            (Some(table), _) => Some((table, TableSource::Supplied)),
            (None, Some(table)) => Some((table, TableSource::Standard)),
            (None, None) => None,
        };
        let decoder = match chosen {
            Some((table, source)) => {
                info!(
                    source = source.describe(),
                    symbols = table.len(),
                    "selected decoding table"
                );
                Some((HuffmanTree::build(&table)?, source))
            }
            None => {
                warn!("no frequency table available; decoding is disabled");
                None
            }
        };
        Ok(Self {
            decoder,
            normalization,
        })
    }

    /// The tree used for decoding (and, in shared mode, encoding).
    ///
    /// # Errors
    /// Returns `Error::NoFrequencyTable` if no table was available.
    pub fn decoding_tree(&self) -> Result<&HuffmanTree> {
        self.decoder
            .as_ref()
            .map(|(tree, _)| tree)
            .ok_or(Error::NoFrequencyTable)
    }

    /// Where the decoding tree's table came from, if there is one.
    pub fn decoding_source(&self) -> Option<TableSource> {
        self.decoder.as_ref().map(|&(_, source)| source)
    }

    /// Policy applied by [`CodecDriver::encode_batch`].
    pub fn encoding_policy(&self) -> EncodingPolicy {
        match self.decoding_source() {
            Some(TableSource::Supplied) => EncodingPolicy::Shared,
            _ => EncodingPolicy::PerPhrase,
        }
    }

    /// Encode one phrase under the active policy.
    ///
    /// In shared mode, symbols the supplied table codes are never dropped by
    /// normalization.
    pub fn encode_phrase(&self, phrase: &str) -> EncodeOutcome {
        let policy = self.encoding_policy();
        let (normalized, result) = match (&self.decoder, policy) {
            (Some((tree, _)), EncodingPolicy::Shared) => {
                let map = tree.encoding_map();
                let normalized = self
                    .normalization
                    .apply_keeping(phrase, |c| map.get(c).is_some());
                let result = tree
                    .encode(&normalized)
                    .map(|bits| Encoded { bits, map: None });
                (normalized, result)
            }
            _ => {
                let normalized = self.normalization.apply(phrase);
                let result = Self::encode_with_own_table(&normalized);
                (normalized, result)
            }
        };
        if let Err(e) = &result {
            warn!(phrase, error = %e, "failed to encode phrase");
        }
        EncodeOutcome {
            phrase: phrase.to_string(),
            normalized,
            policy,
            result,
        }
    }

    fn encode_with_own_table(phrase: &str) -> Result<Encoded> {
        let tree = HuffmanTree::build(&FrequencyTable::from_text(phrase))?;
        let bits = tree.encode(phrase)?;
        Ok(Encoded {
            bits,
            map: Some(tree.encoding_map().clone()),
        })
    }

    /// Decode one bit string with the decoding tree.
    ///
    /// # Errors
    /// Returns `Error::NoFrequencyTable` if there is no decoding tree. Decode
    /// failures are reported in the outcome instead.
    pub fn decode_bits(&self, bits: &str) -> Result<DecodeOutcome> {
        let (tree, source) = self.decoder.as_ref().ok_or(Error::NoFrequencyTable)?;
        let result = tree.decode(bits);
        if let Err(e) = &result {
            warn!(bits, error = %e, "failed to decode bit string");
        }
        Ok(DecodeOutcome {
            bits: bits.to_string(),
            source: *source,
            result,
        })
    }

    /// Encode every phrase; failures do not stop the batch.
    pub fn encode_batch<S: AsRef<str>>(&self, phrases: &[S]) -> Vec<EncodeOutcome> {
        info!(
            count = phrases.len(),
            policy = ?self.encoding_policy(),
            "encoding phrases"
        );
        phrases
            .iter()
            .map(|p| self.encode_phrase(p.as_ref()))
            .collect()
    }

    /// Decode every bit string; failures do not stop the batch.
    ///
    /// # Errors
    /// Returns `Error::NoFrequencyTable` if there is no decoding tree, even
    /// for an empty batch.
    pub fn decode_batch<S: AsRef<str>>(&self, codes: &[S]) -> Result<Vec<DecodeOutcome>> {
        let source = self.decoding_source().ok_or(Error::NoFrequencyTable)?;
        info!(
            count = codes.len(),
            source = source.describe(),
            "decoding bit strings"
        );
        codes.iter().map(|c| self.decode_bits(c.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BitstreamFault;
    use crate::standard::standard_table;

    fn supplied() -> FrequencyTable {
        FrequencyTable::from_pairs([('A', 25), ('B', 10), ('C', 15), ('D', 30), ('E', 20)])
            .unwrap()
    }

    #[test]
    fn test_no_table_only_blocks_decoding() {
        let driver = CodecDriver::new(None, None, Normalization::default()).unwrap();
        assert_eq!(driver.decoding_source(), None);
        assert_eq!(driver.encoding_policy(), EncodingPolicy::PerPhrase);
        assert!(matches!(driver.decoding_tree(), Err(Error::NoFrequencyTable)));

        let out = driver.encode_batch(&["aab"]);
        assert_eq!(out[0].result.as_ref().unwrap().bits, "110");

        assert!(matches!(
            driver.decode_batch(&["01"]),
            Err(Error::NoFrequencyTable)
        ));
        assert!(matches!(
            driver.decode_batch::<&str>(&[]),
            Err(Error::NoFrequencyTable)
        ));
        assert!(matches!(driver.decode_bits("0"), Err(Error::NoFrequencyTable)));
    }

    #[test]
    fn test_overflowing_table() {
        let table = FrequencyTable::from_pairs([('A', u64::MAX), ('B', 1)]).unwrap();
        let err = CodecDriver::new(Some(table), None, Normalization::default()).unwrap_err();
        assert!(matches!(err, Error::WeightOverflow { .. }));
    }

    #[test]
    fn test_shared_mode_keeps_coded_punctuation() {
        let table = FrequencyTable::from_pairs([('A', 2), ('.', 1), ('B', 1)]).unwrap();
        let driver = CodecDriver::new(Some(table), None, Normalization::default()).unwrap();

        let out = driver.encode_phrase("a.b!");
        assert_eq!(out.normalized, "A.B");
        let bits = &out.result.as_ref().unwrap().bits;
        let decoded = driver.decode_bits(bits).unwrap();
        assert_eq!(decoded.result.unwrap(), "A.B");
    }

    #[test]
    fn test_empty_supplied_table() {
        let err = CodecDriver::new(
            Some(FrequencyTable::new()),
            Some(standard_table()),
            Normalization::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyFrequencyTable));
    }

    #[test]
    fn test_shared_mode() {
        let driver =
            CodecDriver::new(Some(supplied()), Some(standard_table()), Normalization::default())
                .unwrap();
        assert_eq!(driver.decoding_source(), Some(TableSource::Supplied));
        assert_eq!(driver.encoding_policy(), EncodingPolicy::Shared);
        assert_eq!(
            driver.decoding_tree().unwrap(),
            &HuffmanTree::build(&supplied()).unwrap()
        );

        let out = driver.encode_batch(&["ace", "a-x-e", "bad"]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].normalized, "ACE");
        assert_eq!(out[0].result.as_ref().unwrap().bits, "0110100");
        assert!(out[0].result.as_ref().unwrap().map.is_none());
        // X is not in the supplied table, and the batch carries on
        assert!(matches!(out[1].result, Err(Error::UnknownSymbol('X'))));
        assert_eq!(out[2].result.as_ref().unwrap().bits, "1000111");

        let out = driver.decode_batch(&["0110100", "011010", "01a"]).unwrap();
        assert_eq!(out[0].result.as_ref().unwrap(), "ACE");
        assert!(matches!(
            out[1].result,
            Err(Error::MalformedBitstream(BitstreamFault::Incomplete { .. }))
        ));
        assert!(matches!(
            out[2].result,
            Err(Error::MalformedBitstream(BitstreamFault::InvalidBit { bit: 'a', .. }))
        ));
        assert!(out.iter().all(|o| o.source == TableSource::Supplied));
    }

    #[test]
    fn test_per_phrase_and_standard_fallback() {
        let driver = CodecDriver::new(None, Some(standard_table()), Normalization::default())
            .unwrap();
        assert_eq!(driver.decoding_source(), Some(TableSource::Standard));
        assert_eq!(driver.encoding_policy(), EncodingPolicy::PerPhrase);
        assert_eq!(driver.decoding_tree().unwrap().encoding_map().len(), 26);

        let out = driver.encode_batch(&["aab", "zzz", "!!"]);
        let first = out[0].result.as_ref().unwrap();
        let map = first.map.as_ref().unwrap();
        assert_eq!(map.get('B'), Some("0"));
        assert_eq!(map.get('A'), Some("1"));
        assert_eq!(first.bits, "110");

        let second = out[1].result.as_ref().unwrap();
        assert_eq!(second.bits, "000");
        assert_eq!(second.map.as_ref().unwrap().get('Z'), Some("0"));

        // nothing left after normalization
        assert!(matches!(out[2].result, Err(Error::EmptyFrequencyTable)));

        let standard = HuffmanTree::build(&standard_table()).unwrap();
        let bits = standard.encode("HELLO").unwrap();
        let decoded = driver.decode_batch(&[bits]).unwrap();
        assert_eq!(decoded[0].result.as_ref().unwrap(), "HELLO");
        assert_eq!(decoded[0].source, TableSource::Standard);
    }

    #[test]
    fn test_verbatim_normalization() {
        let table = FrequencyTable::from_text("ab c");
        let driver = CodecDriver::new(Some(table), None, Normalization::VERBATIM).unwrap();
        let out = driver.encode_phrase("c ba");
        let bits = &out.result.as_ref().unwrap().bits;
        assert_eq!(driver.decoding_tree().unwrap().decode(bits).unwrap(), "c ba");
        assert!(matches!(
            driver.encode_phrase("C").result,
            Err(Error::UnknownSymbol('C'))
        ));
    }

    #[test]
    fn test_driver_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CodecDriver>();
        assert_send_sync::<HuffmanTree>();
    }
}
