//! Deterministic extractive summarization of tagged corpus documents.
//!
//! `corpus-summary` parses one `<DOC>` from a corpus at a byte offset, splits
//! its headline, byline, text and graphic blocks into sentences, scores every
//! sentence (generic salience features, or overlap with a query), keeps the
//! best three in reading order and joins them into a length-bounded summary.
//! Identical inputs always produce identical summaries.

pub mod config;
pub mod document;
pub mod lexicon;
pub mod selection;
pub mod summarize;
pub mod types;

pub use summarize::{print_summary, summarize};
