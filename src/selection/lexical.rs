//! Static word tables used by the feature scorer.

/// Symbol run that sentences made of line noise resemble.
pub const NOISE_CHARACTERS: &str = r"_*&^%#@~`\][|}{;:><";

/// Discourse markers. Matched as substrings of the lowercased sentence.
pub const CUE_WORDS: &[&str] = &[
    "incidentally",
    "example",
    "anyway",
    "furthermore",
    "first",
    "second",
    "then",
    "now",
    "thus",
    "moreover",
    "therefore",
    "hence",
    "lastly",
    "finally",
    "summary",
];

pub const CUE_WORD_BONUS: f64 = 0.3;

/// Words that rarely belong in a summary, grouped with a per-occurrence weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonSummaryCategory {
    pub name: &'static str,
    pub words: &'static [&'static str],
    pub weight: f64,
}

impl NonSummaryCategory {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word)
    }
}

// Goldstein et al. 1999
pub const NON_SUMMARY_CATEGORIES: &[NonSummaryCategory] = &[
    NonSummaryCategory {
        name: "anaphoric",
        words: &["these", "this", "those"],
        weight: 0.01,
    },
    NonSummaryCategory {
        name: "honorific",
        words: &["dr", "mr", "mrs"],
        weight: 0.3,
    },
    NonSummaryCategory {
        name: "negation",
        words: &["no", "dont", "never"],
        weight: 0.1,
    },
    NonSummaryCategory {
        name: "auxiliary",
        words: &["was", "could", "did"],
        weight: 0.5,
    },
    NonSummaryCategory {
        name: "vague",
        words: &["often", "about", "significant", "some", "several"],
        weight: 0.5,
    },
    NonSummaryCategory {
        name: "conjunction",
        words: &["and", "or", "but", "so", "although", "however"],
        weight: 0.01,
    },
    NonSummaryCategory {
        name: "preposition",
        words: &["at", "by", "for", "of", "in", "to", "with"],
        weight: 0.001,
    },
];

pub fn category(name: &str) -> Option<&'static NonSummaryCategory> {
    NON_SUMMARY_CATEGORIES.iter().find(|c| c.name == name)
}
