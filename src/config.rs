// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SummaryConfig {
    /// Sentences kept after ranking.
    pub top_k: usize,
    /// Summaries longer than this (in characters) are cut at a word boundary.
    pub max_chars: usize,
    /// Accumulated length past which the cut happens.
    pub break_chars: usize,
    pub ellipsis: String,
    /// A summary whose first sentence sits beyond this index opens with the ellipsis.
    pub lead_index_threshold: usize,
}

impl SummaryConfig {
    pub fn v0() -> Self {
        Self {
            top_k: 3,
            max_chars: 500,
            break_chars: 480,
            ellipsis: "...".into(),
            lead_index_threshold: 1,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self::v0()
    }
}
