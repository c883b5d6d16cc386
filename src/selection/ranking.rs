use std::collections::BTreeSet;

use crate::lexicon::Lexicon;
use crate::selection::lexical::{
    CUE_WORDS, CUE_WORD_BONUS, NOISE_CHARACTERS, NON_SUMMARY_CATEGORIES,
};
use crate::selection::similarity::{edit_ratio, jaccard, normalize_words, word_set};
use crate::types::summary_bundle::{Query, SummaryError};

/// Header similarity at or above this is headline repetition and earns nothing.
pub const HEADER_OVERLAP_CEILING: f64 = 0.7;
pub const NOISE_PENALTY_SCALE: f64 = 100.0;
pub const EMPTY_SENTENCE_PENALTY: f64 = 100.0;
pub const QUERY_MATCH_WEIGHT: f64 = 0.5;

/// Everything a scorer may look at for one document.
#[derive(Debug, Clone)]
pub struct ScoringContext<'a> {
    pub query: &'a Query,
    pub sentences: &'a [String],
    pub header_sentences: &'a [String],
    pub lexicon: &'a Lexicon,
    header_words: BTreeSet<String>,
}

impl<'a> ScoringContext<'a> {
    pub fn new(
        query: &'a Query,
        sentences: &'a [String],
        header_sentences: &'a [String],
        lexicon: &'a Lexicon,
    ) -> Self {
        // Header sentences are flattened on their own; they are not candidate sentences.
        let header_words = word_set(&header_sentences.join(" "));
        Self {
            query,
            sentences,
            header_sentences,
            lexicon,
            header_words,
        }
    }

    pub fn header_words(&self) -> &BTreeSet<String> {
        &self.header_words
    }
}

pub trait Scorer {
    /// Score the sentence at `index`. Panics if `index` is out of bounds.
    fn score(&self, ctx: &ScoringContext<'_>, index: usize) -> Result<f64, SummaryError>;

    fn name(&self) -> &'static str;
}

/// Per-term contributions of the feature score. Penalties are stored negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureBreakdown {
    pub position: f64,
    pub neighbor_overlap: f64,
    pub noise: f64,
    pub cue_word: f64,
    pub keyword_density: f64,
    pub header_overlap: f64,
    pub empty: f64,
    pub non_summary: f64,
}

impl FeatureBreakdown {
    pub fn total(&self) -> f64 {
        self.position
            + self.neighbor_overlap
            + self.noise
            + self.cue_word
            + self.keyword_density
            + self.header_overlap
            + self.empty
            + self.non_summary
    }
}

/// Generic salience scoring from position, context, and lexical cues.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureScorer;

impl FeatureScorer {
    pub fn breakdown(&self, ctx: &ScoringContext<'_>, index: usize) -> FeatureBreakdown {
        let sentence = ctx.sentences[index].as_str();
        let current = word_set(sentence);

        FeatureBreakdown {
            position: 1.0 / (index as f64 + 1.0),
            neighbor_overlap: -neighbor_overlap(ctx.sentences, index, &current),
            noise: -edit_ratio(sentence, NOISE_CHARACTERS) * NOISE_PENALTY_SCALE,
            cue_word: cue_word_bonus(sentence),
            keyword_density: keyword_density(sentence, ctx.lexicon),
            header_overlap: header_overlap(&current, ctx.header_words()),
            empty: if sentence.is_empty() {
                -EMPTY_SENTENCE_PENALTY
            } else {
                0.0
            },
            non_summary: -non_summary_penalty(sentence),
        }
    }
}

impl Scorer for FeatureScorer {
    fn score(&self, ctx: &ScoringContext<'_>, index: usize) -> Result<f64, SummaryError> {
        Ok(self.breakdown(ctx, index).total())
    }

    fn name(&self) -> &'static str {
        "feature"
    }
}

/// Overlap with the following sentence (only when it is not the last one) and the preceding one.
fn neighbor_overlap(sentences: &[String], index: usize, current: &BTreeSet<String>) -> f64 {
    let mut overlap = 0.0;
    if index + 2 < sentences.len() {
        overlap += jaccard(current, &word_set(&sentences[index + 1]));
    }
    if index > 0 {
        overlap += jaccard(current, &word_set(&sentences[index - 1]));
    }
    overlap
}

fn cue_word_bonus(sentence: &str) -> f64 {
    let lower = sentence.to_lowercase();
    if CUE_WORDS.iter().any(|cue| lower.contains(cue)) {
        CUE_WORD_BONUS
    } else {
        0.0
    }
}

/// Keyword count squared over character length. Tokens are looked up verbatim.
fn keyword_density(sentence: &str, lexicon: &Lexicon) -> f64 {
    let keywords = sentence
        .split_whitespace()
        .filter(|word| lexicon.is_keyword(word))
        .count() as f64;
    keywords.powi(2) / (sentence.chars().count() as f64 + 1.0)
}

fn header_overlap(current: &BTreeSet<String>, header: &BTreeSet<String>) -> f64 {
    let relation = jaccard(current, header);
    if relation < HEADER_OVERLAP_CEILING {
        relation
    } else {
        0.0
    }
}

/// Mean per-category penalty over raw lowercased tokens.
pub fn non_summary_penalty(sentence: &str) -> f64 {
    let total: f64 = sentence
        .split_whitespace()
        .map(str::to_lowercase)
        .map(|word| {
            NON_SUMMARY_CATEGORIES
                .iter()
                .filter(|category| category.contains(&word))
                .map(|category| category.weight)
                .sum::<f64>()
        })
        .sum();
    total / NON_SUMMARY_CATEGORIES.len() as f64
}

/// Query-focused scoring: `(0.5 * matched_terms)^2 / query_terms`.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryScorer;

impl Scorer for QueryScorer {
    fn score(&self, ctx: &ScoringContext<'_>, index: usize) -> Result<f64, SummaryError> {
        let terms = &ctx.query.terms;
        if terms.is_empty() {
            return Err(SummaryError::EmptyQuery);
        }

        let words = normalize_words(&ctx.sentences[index]);
        let matched = terms.iter().filter(|term| words.contains(term)).count() as f64;

        Ok((matched * QUERY_MATCH_WEIGHT).powi(2) / terms.len() as f64)
    }

    fn name(&self) -> &'static str {
        "query"
    }
}
