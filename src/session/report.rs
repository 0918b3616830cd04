use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{FeedbackReport, VocabularyCounts};
use crate::nlp::Sentiment;

/// The result of analyzing one spoken (or typed) input
///
/// Assembled fresh per analysis and returned to the caller; nothing is
/// persisted between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Identifier for this analysis
    pub report_id: String,

    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,

    /// The transcript that was analyzed
    pub transcript: String,

    /// Signed sentiment polarity score
    pub polarity: f32,

    /// Positive / Negative / Neutral, from the sign of the polarity
    pub sentiment: Sentiment,

    /// Part-of-speech category counts
    pub counts: VocabularyCounts,

    /// Canned per-category feedback plus the overall-volume message
    pub feedback: FeedbackReport,
}
