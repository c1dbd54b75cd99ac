use std::collections::HashSet;

use crate::analyze::tokenization::normalize_token;

/// Bundled English stop word list, one word per line
static BUNDLED_STOP_WORDS: &str = include_str!("stopwords.txt");

/// Immutable set of words excluded from candidacy.
///
/// Loaded once at startup and passed by reference into the analysis pipeline.
/// Every entry is pre-lowercased and run through the same normalization as
/// candidate tokens, so membership tests against lowercased candidates are
/// case-insensitive by construction.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Builds a set from an enumerable sequence of raw words.
    ///
    /// Each raw word is trimmed, lowercased, and normalized before insertion.
    /// Entries that normalize to the empty string are silently skipped.
    pub fn load<'a, I>(source: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut words = HashSet::new();

        for raw in source {
            let normalized = normalize_token(&raw.trim().to_lowercase());
            if !normalized.is_empty() {
                words.insert(normalized);
            }
        }

        StopWordSet { words }
    }

    /// Builds the set from the stop word list bundled with the crate
    pub fn bundled() -> Self {
        Self::load(BUNDLED_STOP_WORDS.split_whitespace())
    }

    /// Membership test against an already-lowercased word, O(1) expected
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
