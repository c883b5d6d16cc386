use corpus_summary::lexicon::Lexicon;
use corpus_summary::selection::lexical::{category, NON_SUMMARY_CATEGORIES};
use corpus_summary::selection::ranking::non_summary_penalty;
use corpus_summary::selection::{FeatureScorer, Scorer, ScoringContext};
use corpus_summary::types::Query;

fn sentences(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn storm() -> (Vec<String>, Vec<String>) {
    let lines = sentences(&[
        "Storm Hits City.",
        "",
        "The storm caused damage",
        "Officials responded quickly",
        "Cleanup began today.",
        "",
    ]);
    let header = sentences(&["Storm Hits City."]);
    (lines, header)
}

#[test]
fn storm_example_per_term_scores() {
    let (lines, header) = storm();
    let query = Query::default();
    let lexicon = Lexicon::new();
    let ctx = ScoringContext::new(&query, &lines, &header, &lexicon);
    let scorer = FeatureScorer;

    // Headline: full position bonus, header overlap 3/4 is at the ceiling and earns nothing
    let head = scorer.breakdown(&ctx, 0);
    assert_close(head.position, 1.0);
    assert_close(head.header_overlap, 0.0);
    assert_close(head.neighbor_overlap, 0.0);
    assert_close(head.noise, 0.0);
    assert_close(head.total(), 1.0);

    // Empty byline fragment
    let byline = scorer.breakdown(&ctx, 1);
    assert_close(byline.empty, -100.0);
    assert_close(byline.total(), -99.5);

    // Shares "storm" with the header: 1 / (6 + 1)
    let first_text = scorer.breakdown(&ctx, 2);
    assert_close(first_text.position, 1.0 / 3.0);
    assert_close(first_text.header_overlap, 1.0 / 7.0);
    assert_close(first_text.total(), 1.0 / 3.0 + 1.0 / 7.0);

    assert_close(scorer.breakdown(&ctx, 3).total(), 0.25);
    assert_close(scorer.breakdown(&ctx, 4).total(), 0.2);

    for index in 0..lines.len() {
        assert_close(
            scorer.score(&ctx, index).unwrap(),
            scorer.breakdown(&ctx, index).total(),
        );
    }
}

#[test]
fn next_neighbor_is_skipped_before_the_last_sentence() {
    let lines = sentences(&["alpha beta", "alpha beta", "gamma", "delta"]);
    let query = Query::default();
    let lexicon = Lexicon::new();
    let ctx = ScoringContext::new(&query, &lines, &[], &lexicon);
    let scorer = FeatureScorer;

    // Previous sentence identical: 2 / (2 + 1)
    assert_close(scorer.breakdown(&ctx, 1).neighbor_overlap, -2.0 / 3.0);
    // The first sentence is compared with the following one only
    assert_close(scorer.breakdown(&ctx, 0).neighbor_overlap, -2.0 / 3.0);

    // The following sentence is skipped when it is the last one
    let tail = sentences(&["x", "same words", "same words"]);
    let ctx = ScoringContext::new(&query, &tail, &[], &lexicon);
    assert_close(scorer.breakdown(&ctx, 1).neighbor_overlap, 0.0);
}

#[test]
fn cue_word_bonus_is_substring_based_and_counted_once() {
    let lines = sentences(&["It is well known", "Then, finally, in summary", "Plain words"]);
    let query = Query::default();
    let lexicon = Lexicon::new();
    let ctx = ScoringContext::new(&query, &lines, &[], &lexicon);
    let scorer = FeatureScorer;

    assert_close(scorer.breakdown(&ctx, 0).cue_word, 0.3);
    assert_close(scorer.breakdown(&ctx, 1).cue_word, 0.3);
    assert_close(scorer.breakdown(&ctx, 2).cue_word, 0.0);
}

#[test]
fn keyword_density_uses_verbatim_tokens_and_character_length() {
    let lexicon: Lexicon = vec![
        ("Storm", vec![0.0, 0.0, 500.0]),
        ("rain", vec![0.0, 0.0, 100.0]),
        ("wind", vec![0.0, 0.0, 10_000.0]),
        ("hail", vec![7.0]),
    ]
    .into_iter()
    .collect();

    let lines = sentences(&["Storm Storm rain", "storm wind hail", "Storm"]);
    let query = Query::default();
    let ctx = ScoringContext::new(&query, &lines, &[], &lexicon);
    let scorer = FeatureScorer;

    assert_close(scorer.breakdown(&ctx, 0).keyword_density, 4.0 / 17.0);
    assert_close(scorer.breakdown(&ctx, 1).keyword_density, 0.0);
    assert_close(scorer.breakdown(&ctx, 2).keyword_density, 1.0 / 6.0);
}

#[test]
fn header_overlap_is_capped() {
    let header = sentences(&["Council approves budget"]);
    let lines = sentences(&["Council approves budget", "The council met"]);
    let query = Query::default();
    let lexicon = Lexicon::new();
    let ctx = ScoringContext::new(&query, &lines, &header, &lexicon);
    let scorer = FeatureScorer;

    // Identical to the header: 3 / 4 >= 0.7
    assert_close(scorer.breakdown(&ctx, 0).header_overlap, 0.0);
    // {the, council, met} vs {council, approves, budget}: 1 / 6
    assert_close(scorer.breakdown(&ctx, 1).header_overlap, 1.0 / 6.0);
}

#[test]
fn multiple_header_sentences_are_flattened_independently() {
    let header = sentences(&["Storm Hits City", "Thousands Evacuate"]);
    let lines = sentences(&["Thousands fled"]);
    let query = Query::default();
    let lexicon = Lexicon::new();
    let ctx = ScoringContext::new(&query, &lines, &header, &lexicon);

    assert_eq!(ctx.header_words().len(), 5);
    // {thousands, fled} vs 5 header words: 1 / (6 + 1)
    assert_close(FeatureScorer.breakdown(&ctx, 0).header_overlap, 1.0 / 7.0);
}

#[test]
fn non_summary_words_are_penalized_per_category() {
    assert_eq!(NON_SUMMARY_CATEGORIES.len(), 7);
    assert_eq!(category("honorific").map(|c| c.weight), Some(0.3));
    assert!(category("vague").is_some_and(|c| c.contains("several")));
    assert!(category("unknown").is_none());

    assert_close(
        non_summary_penalty("Mr Smith was here and THIS"),
        (0.3 + 0.5 + 0.01 + 0.01) / 7.0,
    );
    // Raw tokens: trailing punctuation prevents a match
    assert_close(non_summary_penalty("Dr. Who"), 0.0);

    let lines = sentences(&["Mr Smith was here and THIS"]);
    let query = Query::default();
    let lexicon = Lexicon::new();
    let ctx = ScoringContext::new(&query, &lines, &[], &lexicon);
    assert_close(
        FeatureScorer.breakdown(&ctx, 0).non_summary,
        -(0.3 + 0.5 + 0.01 + 0.01) / 7.0,
    );
}

#[test]
fn noisy_sentences_are_heavily_penalized() {
    let lines = sentences(&["%#@ abc ;:", "A clean sentence"]);
    let query = Query::default();
    let lexicon = Lexicon::new();
    let ctx = ScoringContext::new(&query, &lines, &[], &lexicon);
    let scorer = FeatureScorer;

    assert_close(scorer.breakdown(&ctx, 0).noise, -100.0 * 10.0 / 29.0);
    assert_close(scorer.breakdown(&ctx, 1).noise, 0.0);
    assert!(scorer.score(&ctx, 0).unwrap() < scorer.score(&ctx, 1).unwrap());
}

#[test]
fn scoring_is_idempotent() {
    let (lines, header) = storm();
    let query = Query::default();
    let lexicon = Lexicon::new();
    let ctx = ScoringContext::new(&query, &lines, &header, &lexicon);

    for index in 0..lines.len() {
        assert_eq!(
            FeatureScorer.breakdown(&ctx, index),
            FeatureScorer.breakdown(&ctx, index)
        );
    }
}
