use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Position of the corpus frequency inside a lexicon record.
pub const FREQUENCY_FIELD: usize = 2;

/// Keyword band, both bounds exclusive.
pub const KEYWORD_MIN_FREQUENCY: f64 = 100.0;
pub const KEYWORD_MAX_FREQUENCY: f64 = 10_000.0;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Word to numeric record mapping, built elsewhere and only consumed here.
///
/// Lookups are exact: callers pass the token as it appears in the text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    inner: HashMap<String, Vec<f64>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Lexicon {
            inner: HashMap::new(),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, LexiconError> {
        let f = fs::File::open(path)?;
        let lexicon = Self::from_json_reader(std::io::BufReader::new(f))?;
        tracing::debug!(path = %path.display(), words = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    pub fn insert(&mut self, word: impl Into<String>, record: Vec<f64>) {
        self.inner.insert(word.into(), record);
    }

    pub fn get(&self, word: &str) -> Option<&[f64]> {
        self.inner.get(word).map(Vec::as_slice)
    }

    pub fn frequency(&self, word: &str) -> Option<f64> {
        self.get(word)
            .and_then(|record| record.get(FREQUENCY_FIELD))
            .copied()
    }

    /// Unknown words and short records are never keywords.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.frequency(word)
            .is_some_and(|f| f > KEYWORD_MIN_FREQUENCY && f < KEYWORD_MAX_FREQUENCY)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<f64>)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (S, Vec<f64>)>>(iter: I) -> Self {
        Lexicon {
            inner: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
