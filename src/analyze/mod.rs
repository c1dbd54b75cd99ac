pub mod frequency;
pub mod result_ranking;
pub mod results_formatter;
pub mod stopwords;
pub mod tokenization;

// Public exports
pub use frequency::{accumulate_frequencies, CandidateFrequency};
pub use result_ranking::{rank_into_groups, MAX_DISPLAY_GROUPS, MIN_DISPLAY_GROUPS};
pub use results_formatter::{display_top, format_and_print_frequency_groups, format_frequency_group};
pub use stopwords::StopWordSet;
pub use tokenization::{is_valid_word, normalize_token};
