//! Topic-words extracts the most frequent candidate keywords from the visible
//! text of a web page: stop words are removed, the remaining tokens are
//! normalized and counted, and the top frequency groups are reported with
//! ties grouped on one line.
//!
//! This crate provides a library interface to the analysis pipeline, enabling
//! integration with other tools and testing.

pub mod analyze;
pub mod models;

// Re-export commonly used types for convenience
pub use analyze::{accumulate_frequencies, display_top, rank_into_groups, StopWordSet};
pub use models::FrequencyGroup;

// Tests are defined in their respective modules with #[cfg(test)]
