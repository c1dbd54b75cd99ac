use proptest::prelude::*;
use topic_words::analyze::{
    accumulate_frequencies, is_valid_word, normalize_token, rank_into_groups, StopWordSet,
};

proptest! {
    // Normalization is idempotent: running it twice changes nothing
    #[test]
    fn test_normalize_idempotent(s in "\\PC*") {
        let once = normalize_token(&s);
        let twice = normalize_token(&once);
        prop_assert_eq!(once, twice);
    }

    // The stripped character set never survives normalization
    #[test]
    fn test_normalize_removes_special_characters(s in "\\PC*") {
        let normalized = normalize_token(&s);
        for c in ['&', '!', '?', ':', '(', ')', '<', '>', '*', '#', ',', '"', '[', ']', '.', '='] {
            prop_assert!(!normalized.contains(c));
        }

        // The apostrophe rule guarantees no leading or trailing quote remains
        prop_assert!(!normalized.starts_with('\''));
        prop_assert!(!normalized.ends_with('\''));
    }

    // Accumulation never panics and every key satisfies the candidate invariants
    #[test]
    fn test_accumulate_key_invariants(s in "\\PC*") {
        let stop_words = StopWordSet::bundled();
        let frequencies = accumulate_frequencies(&s, &stop_words);

        for (word, count) in frequencies.iter() {
            prop_assert!(count >= 1);
            prop_assert!(word.chars().count() >= 2, "key too short: {word:?}");
            prop_assert!(is_valid_word(word), "invalid key: {word:?}");
            prop_assert!(!stop_words.contains(word), "stop word counted: {word:?}");

            let lowercased = word.to_lowercase();
            prop_assert_eq!(lowercased.as_str(), word, "key not lowercased: {:?}", word);

            let renormalized = normalize_token(word);
            prop_assert_eq!(renormalized.as_str(), word, "key not normalized: {:?}", word);
        }

        if s.trim().is_empty() {
            prop_assert!(frequencies.is_empty());
        }
    }

    // The group bound holds for any input and any requested count
    #[test]
    fn test_group_bound(s in "\\PC*", bound in 0usize..20) {
        let stop_words = StopWordSet::bundled();
        let frequencies = accumulate_frequencies(&s, &stop_words);
        let groups = rank_into_groups(&frequencies, bound);

        prop_assert!(groups.len() <= bound.clamp(1, 6));

        // Frequencies strictly decrease across groups and every group is
        // non-empty
        for pair in groups.windows(2) {
            prop_assert!(pair[0].frequency > pair[1].frequency);
        }
        for group in &groups {
            prop_assert!(!group.words.is_empty());
            prop_assert!(group.frequency >= 1);
        }
    }

    // Stop word loading never panics and never stores empty entries
    #[test]
    fn test_stop_word_load(words in prop::collection::vec("\\PC{0,12}", 0..30)) {
        let set = StopWordSet::load(words.iter().map(|w| w.as_str()));
        prop_assert!(!set.contains(""));
    }
}
