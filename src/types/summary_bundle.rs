use serde::{Deserialize, Serialize};

use crate::document::DocumentError;
use crate::selection::similarity::normalize_words;

/// A query for query-focused summarization.
/// Normalization rules:
/// - Lowercase
/// - Split on whitespace
/// - ASCII punctuation stripped from each term
/// - Duplicate terms are kept, each one counts towards the query length
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub words: Vec<String>,
    pub terms: Vec<String>,
}

impl Query {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self::from_words(raw.as_ref().split_whitespace())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let terms = normalize_words(&words.join(" "));

        Self { words, terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Which scoring strategy ranks the sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// Generic salience features.
    #[default]
    Feature,
    /// Overlap with the caller's query.
    Query,
}

impl SummaryMode {
    pub fn from_query_flag(use_query_mode: bool) -> Self {
        if use_query_mode {
            SummaryMode::Query
        } else {
            SummaryMode::Feature
        }
    }
}

/// Internal: a sentence that has been scored but not yet selected.
/// Borrows its text from the flattened sentence list.
#[derive(Debug, Clone)]
pub struct ScoredSentence<'a> {
    pub score: f64,
    pub text: &'a str,
    pub index: usize,
}

/// A selected sentence, in reading order once it leaves the ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSentence {
    pub text: String,
    pub index: usize,
    pub score: f64,
}

/// Metadata describing how the summary was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMetadata {
    pub document_id: Option<String>,
    pub document_version: String,
    pub mode: SummaryMode,

    pub sentences_considered: usize,
    pub sentences_selected: usize,

    pub leading_ellipsis: bool,
    pub truncated: bool,
}

/// The final result of summarizing one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub summary: String,
    pub sentences: Vec<RankedSentence>,
    pub metadata: SummaryMetadata,
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("Query mode requires at least one query term")]
    EmptyQuery,

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
