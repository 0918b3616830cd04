use serde::{Deserialize, Serialize};

use super::tagger::tokenize;

/// Sentiment classification derived from the sign of a polarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Classify a signed polarity score by its sign
    pub fn from_polarity(score: f32) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

/// Sentiment-polarity capability
pub trait SentimentModel: Send + Sync {
    /// Signed polarity score for a text (positive sign = positive sentiment)
    fn polarity(&self, text: &str) -> f32;

    /// Get model name for logging
    fn name(&self) -> &str;
}

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic",
    "love", "loved", "like", "liked", "enjoy", "enjoyed", "happy", "glad",
    "best", "better", "nice", "beautiful", "awesome", "brilliant", "perfect",
    "pleasant", "delightful", "impressive", "fun", "exciting", "interesting",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worst", "worse", "hate",
    "hated", "dislike", "disliked", "sad", "angry", "upset", "annoying",
    "boring", "poor", "ugly", "disappointing", "disappointed", "dreadful",
    "unpleasant", "painful", "wrong", "difficult", "problem", "fail",
    "failed",
];

/// Word-list sentiment model
///
/// Polarity is the signed balance of positive and negative word hits,
/// normalized to [-1, 1] by the number of hits. Texts with no hits score 0.
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for LexiconSentiment {
    fn polarity(&self, text: &str) -> f32 {
        let mut positive = 0i32;
        let mut negative = 0i32;

        for token in tokenize(text) {
            let lower = token.to_lowercase();
            if POSITIVE_WORDS.contains(&lower.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&lower.as_str()) {
                negative += 1;
            }
        }

        let hits = positive + negative;
        if hits == 0 {
            return 0.0;
        }

        (positive - negative) as f32 / hits as f32
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
