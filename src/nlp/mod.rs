//! Tokenization, part-of-speech tagging, and sentiment scoring
//!
//! Both capabilities are trait seams so the analysis core can be exercised
//! without a real NLP service. The bundled implementations are rule-based:
//! a Penn Treebank tagger driven by a closed-class lexicon plus suffix
//! heuristics, and a signed word-list sentiment lexicon.

mod sentiment;
mod tagger;

pub use sentiment::{LexiconSentiment, Sentiment, SentimentModel};
pub use tagger::{tokenize, RuleTagger, TaggedToken, Tagger};
