use std::io::{BufRead, Seek, SeekFrom};

use sha2::{Digest, Sha256};

use super::document::{Block, BlockKind, Document, DocumentError};
use crate::types::identifiers::{DocumentId, DocumentVersion};

pub const DOC_CLOSE_TAG: &str = "</DOC>";
pub const DOCNO_TAG: &str = "<DOCNO>";
pub const PARAGRAPH_OPEN_TAG: &str = "<P>";
pub const PARAGRAPH_CLOSE_TAG: &str = "</P>";
pub const TABLE_MARKER: &str = "<TABLE";

/// Parse exactly one document starting at `offset`.
///
/// The line at `offset` is the `<DOC>` opener and is skipped. Scanning stops at
/// the first `</DOC>` line or at end of input. Unmatched tags are tolerated.
pub fn parse_document<R>(source: &mut R, offset: u64) -> Result<Document, DocumentError>
where
    R: BufRead + Seek,
{
    source.seek(SeekFrom::Start(offset))?;

    let mut hasher = Sha256::new();
    let mut blocks = BlockKind::ALL.map(Block::new);
    let mut id = None;

    let mut inside = false;
    let mut current = BlockKind::Headline;

    let mut buf = Vec::new();

    // Opening line
    if read_line(source, &mut buf, &mut hasher)? == 0 {
        return Ok(finish(id, hasher, blocks));
    }

    loop {
        if read_line(source, &mut buf, &mut hasher)? == 0 {
            break;
        }
        let decoded = String::from_utf8_lossy(&buf);
        let line = strip_line_ending(&decoded);

        if line == DOC_CLOSE_TAG {
            break;
        }

        if BlockKind::is_close_tag(line) {
            inside = false;
        }

        if inside && is_captured(line) {
            blocks[current.position()].text.push_str(line);
        }

        if let Some(kind) = BlockKind::from_open_tag(line) {
            inside = true;
            current = kind;
        } else if !inside && id.is_none() && line.starts_with(DOCNO_TAG) {
            id = DocumentId::from_docno_line(line).ok();
        }
    }

    let document = finish(id, hasher, blocks);
    tracing::debug!(
        offset,
        document_id = document.id.as_ref().map(DocumentId::as_str),
        headline_chars = document.block(BlockKind::Headline).text.len(),
        text_chars = document.block(BlockKind::Text).text.len(),
        "parsed document"
    );
    Ok(document)
}

fn read_line<R: BufRead>(
    source: &mut R,
    buf: &mut Vec<u8>,
    hasher: &mut Sha256,
) -> Result<usize, DocumentError> {
    buf.clear();
    let read = source.read_until(b'\n', buf)?;
    hasher.update(&buf[..]);
    Ok(read)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Paragraph markers and table lines are structure, not content.
fn is_captured(line: &str) -> bool {
    line != PARAGRAPH_OPEN_TAG && line != PARAGRAPH_CLOSE_TAG && !line.contains(TABLE_MARKER)
}

fn finish(id: Option<DocumentId>, hasher: Sha256, blocks: [Block; 4]) -> Document {
    Document {
        id,
        version: DocumentVersion::from_hasher(hasher),
        blocks,
    }
}
