use std::collections::HashMap;

use crate::analyze::stopwords::StopWordSet;
use crate::analyze::tokenization::{is_valid_word, normalize_token};

/// Mapping from normalized lowercase candidate word to occurrence count.
///
/// Entries remember the order in which words were first encountered, which
/// later decides the order of words inside a frequency tie group. Mutated only
/// during accumulation and read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct CandidateFrequency {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl CandidateFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of a word, inserting it on first sight
    fn record(&mut self, word: String) {
        match self.index.get(&word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push((word, 1));
            }
        }
    }

    /// Occurrence count for a word, if it was ever counted
    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct candidate words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates (word, count) pairs in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

/// Scans extracted page text and counts candidate word frequencies.
///
/// The text is split on ASCII whitespace. Each raw token is normalized, then
/// dropped if its lowercased form is a stop word, too short (a single
/// character), or fails the printable-word check. Survivors are counted under
/// their lowercased form. Empty or whitespace-only text yields an empty
/// mapping; there are no error paths.
pub fn accumulate_frequencies(text: &str, stop_words: &StopWordSet) -> CandidateFrequency {
    let debug_mode = std::env::var("DEBUG").unwrap_or_default() == "1";

    let mut frequencies = CandidateFrequency::new();

    for raw in text.split_ascii_whitespace() {
        let temp = normalize_token(raw);

        // Checking if the word is not a candidate word
        if stop_words.contains(&temp.to_lowercase()) {
            continue;
        }

        // Word length must be greater than 1 to avoid single letter words
        if is_valid_word(&temp) && temp.chars().count() > 1 {
            frequencies.record(temp.to_lowercase());
        }
    }

    if debug_mode {
        println!(
            "DEBUG: Accumulated {} distinct candidate words",
            frequencies.len()
        );
    }

    frequencies
}
