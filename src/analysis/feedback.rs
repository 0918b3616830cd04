use serde::{Deserialize, Serialize};

use super::vocabulary::VocabularyCounts;

/// Ordered feedback lines: one per category plus an overall-volume line
///
/// Created fresh per analysis and discarded after display; reports carry
/// no identity and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub lines: Vec<String>,
}

/// Maps category counts to canned assessment strings via threshold bands
///
/// Bands are strict comparisons on raw counts: nouns and verbs use
/// >8 / 6-8 / <=5, adjectives and adverbs >5 / 4-5 / <=3, pronouns and
/// prepositions >3 / <=3, overall volume >50 / <=50.
pub struct FeedbackGenerator;

impl FeedbackGenerator {
    /// Generate the feedback report for a set of counts
    ///
    /// Line order is fixed: nouns, verbs, adjectives, adverbs, pronouns,
    /// prepositions, then the overall message.
    pub fn generate(counts: &VocabularyCounts) -> FeedbackReport {
        let lines = vec![
            Self::noun_feedback(counts.nouns).to_string(),
            Self::verb_feedback(counts.verbs).to_string(),
            Self::adjective_feedback(counts.adjectives).to_string(),
            Self::adverb_feedback(counts.adverbs).to_string(),
            Self::pronoun_feedback(counts.pronouns).to_string(),
            Self::preposition_feedback(counts.prepositions).to_string(),
            Self::overall_feedback(counts.total_words).to_string(),
        ];

        FeedbackReport { lines }
    }

    fn noun_feedback(count: usize) -> &'static str {
        if count > 8 {
            "Excellent vocabulary usage with a wide range of nouns!"
        } else if count > 5 {
            "Good vocabulary with a decent variety of nouns."
        } else {
            "Try to use a wider variety of nouns."
        }
    }

    fn verb_feedback(count: usize) -> &'static str {
        if count > 8 {
            "Outstanding use of verbs! You effectively express action and movement."
        } else if count > 5 {
            "Well done! Try adding more dynamic verbs."
        } else {
            "Consider using more action verbs."
        }
    }

    fn adjective_feedback(count: usize) -> &'static str {
        if count > 5 {
            "Great job using adjectives!"
        } else if count > 3 {
            "Good use of adjectives. Add more to enhance descriptions."
        } else {
            "Try using more adjectives to describe things."
        }
    }

    fn adverb_feedback(count: usize) -> &'static str {
        if count > 5 {
            "Your use of adverbs is great!"
        } else if count > 3 {
            "You're using adverbs well. Consider adding more."
        } else {
            "Adverbs can add depth to your descriptions. Try incorporating more."
        }
    }

    fn pronoun_feedback(count: usize) -> &'static str {
        if count > 3 {
            "You've used pronouns effectively."
        } else {
            "Try using pronouns to avoid repetition."
        }
    }

    fn preposition_feedback(count: usize) -> &'static str {
        if count > 3 {
            "Your use of prepositions is good."
        } else {
            "Consider using more prepositions to clarify relationships."
        }
    }

    fn overall_feedback(total_words: usize) -> &'static str {
        if total_words > 50 {
            "You're using a rich vocabulary overall!"
        } else {
            "Keep working on expanding your vocabulary."
        }
    }
}
