use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Words that mark a cleaned item description as payment or tax noise
/// rather than a purchase. Lines whose description equals one of these
/// (case-insensitively) are discarded, not emitted as records.
///
/// This is an explicit configuration value so it can be overridden per
/// locale; see [`KeywordSet::from_toml_str`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    words: BTreeSet<String>,
}

#[derive(Debug, Error)]
#[error("invalid keyword file: {0}")]
pub struct KeywordError(#[from] toml::de::Error);

const DEFAULT_RESERVED: &[&str] = &[
    "total",
    "subtotal",
    "tax",
    "cash",
    "change",
    "credit",
    "debit",
    "visa",
    "mastercard",
    "american express",
    "discover",
];

impl Default for KeywordSet {
    fn default() -> Self {
        KeywordSet::new(DEFAULT_RESERVED.iter().copied())
    }
}

impl KeywordSet {
    /// Build a set from arbitrary words. Matching is case-insensitive,
    /// so everything is folded to lower case on the way in.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        KeywordSet {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Load an override set from a TOML document of the form
    /// `words = ["total", "summe", ...]`.
    pub fn from_toml_str(raw: &str) -> Result<Self, KeywordError> {
        let parsed: KeywordSet = toml::from_str(raw)?;
        Ok(KeywordSet::new(parsed.words))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_holds_payment_noise() {
        let kw = KeywordSet::default();
        for w in ["total", "subtotal", "tax", "american express"] {
            assert!(kw.contains(w), "missing '{w}'");
        }
        assert!(!kw.contains("bananas"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let kw = KeywordSet::default();
        assert!(kw.contains("TOTAL"));
        assert!(kw.contains("Visa"));
    }

    #[test]
    fn from_toml_replaces_defaults() {
        let kw = KeywordSet::from_toml_str("words = [\"Summe\", \"MwSt\"]").unwrap();
        assert!(kw.contains("summe"));
        assert!(kw.contains("mwst"));
        assert!(!kw.contains("total"));
    }

    #[test]
    fn from_toml_rejects_malformed_document() {
        assert!(KeywordSet::from_toml_str("words = \"total\"").is_err());
    }
}
