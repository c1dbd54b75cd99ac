// Structure to hold one frequency group for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyGroup {
    // Occurrence count shared by every word in the group
    pub frequency: usize,
    // Words with that count, in the order they were first encountered
    pub words: Vec<String>,
}
