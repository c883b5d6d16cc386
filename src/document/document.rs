use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("IO error while scanning document: {0}")]
    Io(#[from] std::io::Error),
}

/// Sentence boundary used by the splitter. Abbreviations, decimals and quotes are not special-cased.
pub const SENTENCE_DELIMITER: &str = ". ";

/// Labeled region of a document. Declaration order is sentence numbering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Headline,
    Byline,
    Text,
    Graphic,
}

impl BlockKind {
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Headline,
        BlockKind::Byline,
        BlockKind::Text,
        BlockKind::Graphic,
    ];

    pub fn position(self) -> usize {
        match self {
            BlockKind::Headline => 0,
            BlockKind::Byline => 1,
            BlockKind::Text => 2,
            BlockKind::Graphic => 3,
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            BlockKind::Headline => "<HEADLINE>",
            BlockKind::Byline => "<BYLINE>",
            BlockKind::Text => "<TEXT>",
            BlockKind::Graphic => "<GRAPHIC>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            BlockKind::Headline => "</HEADLINE>",
            BlockKind::Byline => "</BYLINE>",
            BlockKind::Text => "</TEXT>",
            BlockKind::Graphic => "</GRAPHIC>",
        }
    }

    pub fn from_open_tag(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.open_tag() == line)
    }

    pub fn is_close_tag(line: &str) -> bool {
        Self::ALL.iter().any(|kind| kind.close_tag() == line)
    }
}

/// Captured text of one block, exactly as concatenated by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            text: String::new(),
        }
    }

    /// Split on `". "`. An empty block yields a single empty sentence.
    pub fn sentences(&self) -> Vec<String> {
        self.text
            .split(SENTENCE_DELIMITER)
            .map(str::to_string)
            .collect()
    }
}

/// One parsed corpus document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Option<DocumentId>,
    pub version: DocumentVersion,
    pub blocks: [Block; 4],
}

impl Document {
    pub fn block(&self, kind: BlockKind) -> &Block {
        &self.blocks[kind.position()]
    }

    /// Sentence lists per block, in block order.
    pub fn paragraphs(&self) -> Vec<Vec<String>> {
        self.blocks.iter().map(Block::sentences).collect()
    }

    pub fn header_sentences(&self) -> Vec<String> {
        self.block(BlockKind::Headline).sentences()
    }

    /// The flat sentence list. Index `n` is a sentence's canonical position.
    pub fn sentences(&self) -> Vec<String> {
        flatten(&self.paragraphs())
    }
}

pub fn flatten(paragraphs: &[Vec<String>]) -> Vec<String> {
    paragraphs.iter().flatten().cloned().collect()
}
