pub mod budgeting;
pub mod lexical;
pub mod ranking;
pub mod similarity;

use crate::config::SummaryConfig;
use crate::document::flatten;
use crate::lexicon::Lexicon;
use crate::types::summary_bundle::{Query, RankedSentence, ScoredSentence, SummaryError};
pub use budgeting::{BuiltSummary, SummaryBuilder};
pub use ranking::{FeatureBreakdown, FeatureScorer, QueryScorer, Scorer, ScoringContext};

pub struct SentenceRanker<S> {
	scorer: S,
	top_k: usize,
}

impl Default for SentenceRanker<FeatureScorer> {
	fn default() -> Self {
		Self::new(FeatureScorer)
	}
}

impl<S> SentenceRanker<S>
where
	S: Scorer,
{
	pub fn new(scorer: S) -> Self {
		Self::with_config(scorer, &SummaryConfig::v0())
	}

	pub fn with_config(scorer: S, config: &SummaryConfig) -> Self {
		Self {
			scorer,
			top_k: config.top_k,
		}
	}

	pub fn scorer(&self) -> &S {
		&self.scorer
	}

	/// Score every sentence of `paragraphs`, keep the best `top_k`, return them in reading order.
	///
	/// The first paragraph is the header block.
	pub fn rank(
		&self,
		paragraphs: &[Vec<String>],
		query: &Query,
		lexicon: &Lexicon,
	) -> Result<Vec<RankedSentence>, SummaryError> {
		// 1. Flatten in block order
		let sentences = flatten(paragraphs);
		let header: &[String] = paragraphs.first().map(Vec::as_slice).unwrap_or(&[]);
		let ctx = ScoringContext::new(query, &sentences, header, lexicon);

		// 2. Scoring Phase
		let mut scored = Vec::with_capacity(sentences.len());
		for (index, text) in sentences.iter().enumerate() {
			let score = self.scorer.score(&ctx, index)?;
			tracing::trace!(index, score, scorer = self.scorer.name(), "scored sentence");
			scored.push(ScoredSentence {
				score,
				text: text.as_str(),
				index,
			});
		}

		// 3. Ordering Phase
		// Sort by (score desc, index asc)
		scored.sort_by(|a, b| {
			b.score
				.total_cmp(&a.score)
				.then_with(|| a.index.cmp(&b.index))
		});

		// 4. Selection Phase, back to reading order
		scored.truncate(self.top_k);
		scored.sort_by_key(|s| s.index);

		debug_assert!(scored.windows(2).all(|w| w[0].index < w[1].index));

		let ranked: Vec<RankedSentence> = scored
			.into_iter()
			.map(|s| RankedSentence {
				text: s.text.to_string(),
				index: s.index,
				score: s.score,
			})
			.collect();

		tracing::debug!(
			scorer = self.scorer.name(),
			considered = sentences.len(),
			selected = ?ranked.iter().map(|r| r.index).collect::<Vec<_>>(),
			"ranked sentences"
		);

		Ok(ranked)
	}
}
