use serde::{Deserialize, Serialize};

/// A word paired with its Penn Treebank part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// Part-of-speech tagging capability
pub trait Tagger: Send + Sync {
    /// Tokenize and tag a text
    fn tag(&self, text: &str) -> Vec<TaggedToken>;

    /// Get tagger name for logging
    fn name(&self) -> &str;
}

/// Split text into word and punctuation tokens
///
/// Words keep internal apostrophes ("don't" is one token); every punctuation
/// character is its own token, matching the convention of treebank-style
/// tokenizers where punctuation still counts toward the token total.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() || (ch == '\'' && !word.is_empty()) {
            word.push(ch);
        } else {
            if !word.is_empty() {
                tokens.push(std::mem::take(&mut word));
            }
            if !ch.is_whitespace() {
                tokens.push(ch.to_string());
            }
        }
    }

    if !word.is_empty() {
        tokens.push(word);
    }

    tokens
}

// Closed-class word lists. Lookup is on the lowercased token.

const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
    "them", "myself", "yourself", "himself", "herself", "itself", "ourselves",
    "themselves",
];

const POSSESSIVE_PRONOUNS: &[&str] = &[
    "my", "your", "his", "its", "our", "their", "mine", "yours", "hers",
    "theirs",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above",
    "below", "from", "over", "under", "near", "without", "within",
];

const DETERMINERS: &[&str] = &["the", "a", "an", "this", "that", "these", "those"];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "so", "yet"];

const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

const ADVERBS: &[&str] = &[
    "not", "very", "too", "also", "just", "never", "always", "often",
    "really", "quite", "well", "here", "there", "now", "then", "soon",
];

/// Irregular verb forms the suffix rules cannot reach
const VERB_FORMS: &[(&str, &str)] = &[
    ("am", "VBP"),
    ("is", "VBZ"),
    ("are", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("go", "VB"),
    ("went", "VBD"),
    ("gone", "VBN"),
    ("say", "VB"),
    ("said", "VBD"),
    ("get", "VB"),
    ("got", "VBD"),
    ("make", "VB"),
    ("made", "VBD"),
    ("know", "VB"),
    ("knew", "VBD"),
    ("think", "VB"),
    ("thought", "VBD"),
    ("see", "VB"),
    ("saw", "VBD"),
    ("want", "VB"),
    ("like", "VB"),
];

/// Rule-based Penn Treebank tagger
///
/// Priority: punctuation, numerals, closed-class lexicon, suffix heuristics,
/// noun fallback. Coverage is deliberately heuristic; the analysis layer
/// tolerates mistags and simply leaves unrecognized tags uncounted.
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    fn tag_word(word: &str) -> String {
        let lower = word.to_lowercase();

        if word.chars().all(|c| !c.is_alphanumeric()) {
            return word.to_string(); // punctuation tags as itself
        }

        if word.chars().all(|c| c.is_ascii_digit()) {
            return "CD".to_string();
        }

        if PERSONAL_PRONOUNS.contains(&lower.as_str()) {
            return "PRP".to_string();
        }
        if POSSESSIVE_PRONOUNS.contains(&lower.as_str()) {
            return "PRP$".to_string();
        }
        if lower == "to" {
            return "TO".to_string();
        }
        if PREPOSITIONS.contains(&lower.as_str()) {
            return "IN".to_string();
        }
        if DETERMINERS.contains(&lower.as_str()) {
            return "DT".to_string();
        }
        if CONJUNCTIONS.contains(&lower.as_str()) {
            return "CC".to_string();
        }
        if MODALS.contains(&lower.as_str()) {
            return "MD".to_string();
        }
        if ADVERBS.contains(&lower.as_str()) {
            return "RB".to_string();
        }
        if let Some((_, tag)) = VERB_FORMS.iter().find(|(w, _)| *w == lower) {
            return tag.to_string();
        }

        Self::tag_by_suffix(&lower)
    }

    fn tag_by_suffix(lower: &str) -> String {
        if lower.len() > 3 && lower.ends_with("ly") {
            return "RB".to_string();
        }
        if lower.len() > 4 && lower.ends_with("ing") {
            return "VBG".to_string();
        }
        if lower.len() > 3 && lower.ends_with("ed") {
            return "VBD".to_string();
        }
        if lower.len() > 4 && lower.ends_with("est") {
            return "JJS".to_string();
        }

        const ADJECTIVE_SUFFIXES: &[&str] =
            &["ous", "ful", "ive", "able", "ible", "ish", "less", "ic"];
        if lower.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return "JJ".to_string();
        }

        if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
            return "NNS".to_string();
        }

        "NN".to_string()
    }
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        tokenize(text)
            .into_iter()
            .map(|word| {
                let tag = Self::tag_word(&word);
                TaggedToken { word, tag }
            })
            .collect()
    }

    fn name(&self) -> &str {
        "rule"
    }
}
