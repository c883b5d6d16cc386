use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Corpus document number, as carried by the `<DOCNO>` line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

#[derive(Debug, Error)]
pub enum DocumentIdError {
    #[error("Document number is empty")]
    Empty,
}

impl DocumentId {
    /// Create a DocumentId from the raw `<DOCNO>` line.
    ///
    /// Both the opening and closing tags are optional; surrounding whitespace is dropped.
    pub fn from_docno_line(line: &str) -> Result<Self, DocumentIdError> {
        let normalized = normalize_docno(line);
        if normalized.is_empty() {
            return Err(DocumentIdError::Empty);
        }
        Ok(DocumentId(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn normalize_docno(line: &str) -> String {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix("<DOCNO>").unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("</DOCNO>").unwrap_or(trimmed);
    trimmed.trim().to_string()
}

/// Content hash of every byte the parser consumed for one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        Self::from_hasher(hasher)
    }

    /// Finish an incrementally fed hasher, for callers that stream the input.
    pub fn from_hasher(hasher: Sha256) -> Self {
        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DocumentVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
