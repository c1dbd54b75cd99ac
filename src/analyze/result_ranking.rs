use crate::analyze::frequency::CandidateFrequency;
use crate::models::FrequencyGroup;

/// Smallest number of frequency groups a caller may request
pub const MIN_DISPLAY_GROUPS: usize = 1;

/// Largest number of frequency groups a caller may request
pub const MAX_DISPLAY_GROUPS: usize = 6;

/// Ranks candidate words by frequency and groups ties for display.
///
/// Entries are stably sorted on frequency alone, descending, so words that
/// share a count keep their first-encounter order. Consecutive equal
/// frequencies collapse into one group, and the result is truncated once
/// `max_groups` groups have been produced. Callers pass a pre-validated bound
/// in [1,6]; out-of-range values are clamped rather than rejected.
///
/// Grouping runs over the sorted sequence as a whole, so the empty and
/// single-candidate cases need no special handling: one candidate word yields
/// one group, an empty mapping yields none.
pub fn rank_into_groups(
    frequencies: &CandidateFrequency,
    max_groups: usize,
) -> Vec<FrequencyGroup> {
    let debug_mode = std::env::var("DEBUG").unwrap_or_default() == "1";

    let max_groups = max_groups.clamp(MIN_DISPLAY_GROUPS, MAX_DISPLAY_GROUPS);

    let mut entries: Vec<(&str, usize)> = frequencies.iter().collect();
    // Stable sort keyed solely on frequency; first-encounter order survives
    // inside ties
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let groups: Vec<FrequencyGroup> = entries
        .chunk_by(|a, b| a.1 == b.1)
        .take(max_groups)
        .map(|group| FrequencyGroup {
            frequency: group[0].1,
            words: group.iter().map(|(word, _)| (*word).to_string()).collect(),
        })
        .collect();

    if debug_mode {
        println!(
            "DEBUG: Ranked {} candidate words into {} groups (bound {})",
            entries.len(),
            groups.len(),
            max_groups
        );
    }

    groups
}
