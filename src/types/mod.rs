pub mod identifiers;
pub mod summary_bundle;

pub use identifiers::{DocumentId, DocumentIdError, DocumentVersion};
pub use summary_bundle::{
    Query, RankedSentence, ScoredSentence, SummaryError, SummaryMetadata, SummaryMode,
    SummaryReport,
};
