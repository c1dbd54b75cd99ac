use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Static set of characters deleted from every raw token before it is
/// considered as a candidate word
static SPECIAL_CHARACTERS: Lazy<HashSet<char>> = Lazy::new(|| {
    vec![
        '&', '!', '?', ':', '(', ')', '<', '>', '*', '#', ',', '"', '[', ']', '.', '=',
    ]
    .into_iter()
    .collect()
});

/// Strips the fixed special-character set from a raw token, preserving the
/// relative order of the remaining characters.
///
/// Apostrophes get a narrower rule: they are removed (all of them) only when
/// the stripped token starts or ends with one. A token like `don't` keeps its
/// apostrophe, while `'don't'` loses every one. This matches the long-standing
/// behavior of the reference word parser and callers rely on it, so it stays.
pub fn normalize_token(raw: &str) -> String {
    let mut word: String = raw
        .chars()
        .filter(|c| !SPECIAL_CHARACTERS.contains(c))
        .collect();

    if word.starts_with('\'') || word.ends_with('\'') {
        word.retain(|c| c != '\'');
    }

    word
}

/// Checks whether a normalized token still qualifies as a word.
///
/// A token qualifies when at least one of its characters is printable ASCII
/// other than the space character (code points 33..=126). A single qualifying
/// character anywhere validates the whole token even if the rest is
/// non-printable; this is deliberately not a per-character filter.
pub fn is_valid_word(s: &str) -> bool {
    s.chars().any(|c| {
        let code = c as u32;
        (33..=126).contains(&code)
    })
}
