use std::io::{BufRead, Seek, Write};

use crate::config::SummaryConfig;
use crate::document::parse_document;
use crate::lexicon::Lexicon;
use crate::selection::{FeatureScorer, QueryScorer, SentenceRanker, SummaryBuilder};
use crate::types::summary_bundle::{
    Query, SummaryError, SummaryMetadata, SummaryMode, SummaryReport,
};

/// Summarize the document starting at `offset` in `source`.
///
/// Query mode with an empty query fails before anything is read.
pub fn summarize<R>(
    source: &mut R,
    offset: u64,
    query: &Query,
    lexicon: &Lexicon,
    mode: SummaryMode,
    config: &SummaryConfig,
) -> Result<SummaryReport, SummaryError>
where
    R: BufRead + Seek,
{
    if mode == SummaryMode::Query && query.is_empty() {
        return Err(SummaryError::EmptyQuery);
    }

    let document = parse_document(source, offset)?;
    let paragraphs = document.paragraphs();
    let sentences_considered = paragraphs.iter().map(Vec::len).sum();

    let ranked = match mode {
        SummaryMode::Feature => {
            SentenceRanker::with_config(FeatureScorer, config).rank(&paragraphs, query, lexicon)?
        }
        SummaryMode::Query => {
            SentenceRanker::with_config(QueryScorer, config).rank(&paragraphs, query, lexicon)?
        }
    };

    let built = SummaryBuilder::new(config.clone()).build(&ranked);

    let metadata = SummaryMetadata {
        document_id: document.id.as_ref().map(|id| id.as_str().to_string()),
        document_version: document.version.as_str().to_string(),
        mode,
        sentences_considered,
        sentences_selected: ranked.len(),
        leading_ellipsis: built.leading_ellipsis,
        truncated: built.truncated,
    };

    Ok(SummaryReport {
        summary: built.text,
        sentences: ranked,
        metadata,
    })
}

/// Summarize with the default configuration and write the summary followed by a blank line.
pub fn print_summary<R, W>(
    source: &mut R,
    offset: u64,
    query: &Query,
    lexicon: &Lexicon,
    mode: SummaryMode,
    out: &mut W,
) -> Result<SummaryReport, SummaryError>
where
    R: BufRead + Seek,
    W: Write,
{
    let report = summarize(source, offset, query, lexicon, mode, &SummaryConfig::v0())?;

    writeln!(out, "{}", report.summary)?;
    writeln!(out)?;

    Ok(report)
}
