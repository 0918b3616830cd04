use serde::{Deserialize, Serialize};

use crate::nlp::TaggedToken;

/// Part-of-speech category counts for a tagged token sequence
///
/// Invariant: the sum of category counts never exceeds `total_words`;
/// tokens with unrecognized tags stay uncounted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyCounts {
    pub nouns: usize,
    pub verbs: usize,
    pub adjectives: usize,
    pub adverbs: usize,
    pub pronouns: usize,
    pub prepositions: usize,
    pub total_words: usize,
}

impl VocabularyCounts {
    /// Sum of all category counts (excludes uncounted tokens)
    pub fn categorized(&self) -> usize {
        self.nouns
            + self.verbs
            + self.adjectives
            + self.adverbs
            + self.pronouns
            + self.prepositions
    }
}

/// Classifies tagged tokens into part-of-speech category counts
pub struct VocabularyAnalyzer;

impl VocabularyAnalyzer {
    /// Count part-of-speech categories in a tagged token sequence
    ///
    /// Classification is by tag prefix or exact match, first match wins:
    /// NN* noun, VB* verb, JJ* adjective, RB* adverb, PRP/PRP$ pronoun,
    /// IN preposition, anything else uncounted. Pure and idempotent;
    /// an empty sequence yields all-zero counts.
    pub fn analyze(tokens: &[TaggedToken]) -> VocabularyCounts {
        let mut counts = VocabularyCounts {
            total_words: tokens.len(),
            ..Default::default()
        };

        for token in tokens {
            let tag = token.tag.as_str();

            if tag.starts_with("NN") {
                counts.nouns += 1;
            } else if tag.starts_with("VB") {
                counts.verbs += 1;
            } else if tag.starts_with("JJ") {
                counts.adjectives += 1;
            } else if tag.starts_with("RB") {
                counts.adverbs += 1;
            } else if tag == "PRP" || tag == "PRP$" {
                counts.pronouns += 1;
            } else if tag == "IN" {
                counts.prepositions += 1;
            }
        }

        counts
    }
}
