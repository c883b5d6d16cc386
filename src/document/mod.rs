pub mod document;
pub mod parser;

pub use crate::types::identifiers::{DocumentId, DocumentVersion};
pub use document::{flatten, Block, BlockKind, Document, DocumentError, SENTENCE_DELIMITER};
pub use parser::parse_document;
