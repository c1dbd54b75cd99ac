use anyhow::Result;
use serde::Serialize;

use crate::analyze::frequency::CandidateFrequency;
use crate::analyze::result_ranking::rank_into_groups;
use crate::models::FrequencyGroup;

/// Renders one frequency group as a display line
pub fn format_frequency_group(group: &FrequencyGroup) -> String {
    format!(
        "{words} (Frequency : {frequency})",
        words = group.words.join(", "),
        frequency = group.frequency
    )
}

/// Ranks candidate frequencies and renders the top groups as display lines,
/// one line per group, at most `max_groups` of them
pub fn display_top(frequencies: &CandidateFrequency, max_groups: usize) -> Vec<String> {
    rank_into_groups(frequencies, max_groups)
        .iter()
        .map(format_frequency_group)
        .collect()
}

/// Function to format and print frequency groups according to the specified format
pub fn format_and_print_frequency_groups(groups: &[FrequencyGroup], format: &str) {
    match format {
        "json" => {
            if let Err(e) = format_and_print_json_groups(groups) {
                eprintln!("Error formatting JSON: {e}");
            }
        }
        _ => {
            // Default format (terminal)
            for group in groups {
                println!("{}", format_frequency_group(group));
            }
        }
    }
}

/// JSON-serializable view over a frequency group
#[derive(Serialize)]
struct JsonGroup<'a> {
    frequency: usize,
    words: &'a [String],
}

/// Format and print frequency groups in JSON format
fn format_and_print_json_groups(groups: &[FrequencyGroup]) -> Result<()> {
    let json_groups: Vec<JsonGroup> = groups
        .iter()
        .map(|group| JsonGroup {
            frequency: group.frequency,
            words: &group.words,
        })
        .collect();

    // Wrapper object with the groups and a summary
    let wrapper = serde_json::json!({
        "groups": json_groups,
        "summary": {
            "group_count": groups.len(),
            "word_count": groups.iter().map(|group| group.words.len()).sum::<usize>(),
        }
    });

    println!("{json}", json = serde_json::to_string_pretty(&wrapper)?);
    Ok(())
}
