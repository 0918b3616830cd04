//! Vocabulary analysis core
//!
//! Two pure functions over plain data: `VocabularyAnalyzer` turns a tagged
//! token sequence into category counts, `FeedbackGenerator` turns counts
//! into canned assessment strings via threshold bands. Neither has failure
//! modes; empty input yields all-zero counts and lowest-band feedback.

mod feedback;
mod vocabulary;

pub use feedback::{FeedbackGenerator, FeedbackReport};
pub use vocabulary::{VocabularyAnalyzer, VocabularyCounts};
