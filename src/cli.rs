use std::path::PathBuf;

use clap::Parser;
use corpus_summary::types::{Query, SummaryMode};

#[derive(Debug, Clone, Parser)]
#[command(name = "corpus-summary")]
#[command(about = "Extractive summary of one document in a tagged corpus file", long_about = None)]
pub struct AppConfig {
    /// Corpus file holding `<DOC>` ... `</DOC>` documents.
    pub corpus: PathBuf,

    /// Byte offset of the document's `<DOC>` line.
    #[arg(long, default_value_t = 0)]
    pub offset: u64,

    /// JSON lexicon: word -> numeric record, frequency at index 2.
    #[arg(long, env = "CORPUS_SUMMARY_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Query words; repeat the flag or pass several values.
    #[arg(long = "query", num_args = 1..)]
    pub query: Vec<String>,

    /// Rank by query overlap instead of generic features.
    #[arg(long)]
    pub query_mode: bool,

    /// Print the full summary report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl AppConfig {
    pub fn from_env_and_args() -> Self {
        Self::parse()
    }

    pub fn query(&self) -> Query {
        Query::from_words(self.query.iter().cloned())
    }

    pub fn mode(&self) -> SummaryMode {
        SummaryMode::from_query_flag(self.query_mode)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.query_mode && self.query().is_empty() {
            return Err("--query-mode requires at least one --query word".into());
        }
        Ok(())
    }
}
