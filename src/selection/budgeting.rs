use crate::config::SummaryConfig;
use crate::document::SENTENCE_DELIMITER;
use crate::types::summary_bundle::RankedSentence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltSummary {
    pub text: String,
    pub leading_ellipsis: bool,
    pub truncated: bool,
}

/// Joins ranked sentences into the summary text and enforces the length budget.
pub struct SummaryBuilder {
    config: SummaryConfig,
}

impl Default for SummaryBuilder {
    fn default() -> Self {
        Self::new(SummaryConfig::v0())
    }
}

impl SummaryBuilder {
    pub fn new(config: SummaryConfig) -> Self {
        Self { config }
    }

    /// `ranked` must already be in reading order. An empty selection yields an empty summary.
    pub fn build(&self, ranked: &[RankedSentence]) -> BuiltSummary {
        let Some(first) = ranked.first() else {
            return BuiltSummary {
                text: String::new(),
                leading_ellipsis: false,
                truncated: false,
            };
        };

        let mut summary = String::new();

        let leading_ellipsis = first.index > self.config.lead_index_threshold;
        if leading_ellipsis {
            summary.push_str(&self.config.ellipsis);
        }

        for sentence in ranked {
            summary.push_str(sentence.text.trim());
            summary.push_str(SENTENCE_DELIMITER);
        }

        let mut truncated = false;
        if summary.chars().count() > self.config.max_chars {
            if let Some(cut) = self.break_at_word(&summary) {
                summary = cut;
                truncated = true;
            }
        }

        tracing::debug!(
            sentences = ranked.len(),
            chars = summary.chars().count(),
            leading_ellipsis,
            truncated,
            "built summary"
        );

        BuiltSummary {
            text: summary,
            leading_ellipsis,
            truncated,
        }
    }

    /// Re-join words with single spaces until the length passes `break_chars`, then close with the ellipsis.
    /// `None` when collapsing whitespace alone keeps the text under the break point.
    fn break_at_word(&self, summary: &str) -> Option<String> {
        let mut cut = String::new();
        let mut chars = 0;

        for word in summary.split_whitespace() {
            cut.push_str(word);
            chars += word.chars().count();
            if chars > self.config.break_chars {
                cut.push_str(&self.config.ellipsis);
                return Some(cut);
            }
            cut.push(' ');
            chars += 1;
        }

        None
    }
}
