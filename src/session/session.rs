use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use super::config::SessionConfig;
use super::report::SessionReport;
use crate::analysis::{FeedbackGenerator, VocabularyAnalyzer};
use crate::audio::{AudioBackendConfig, AudioBackendFactory, AudioSource};
use crate::nlp::{LexiconSentiment, RuleTagger, Sentiment, SentimentModel, Tagger};
use crate::stt::Transcriber;

/// An analysis session wiring the injected capabilities together
///
/// Tagging and sentiment default to the bundled rule-based implementations;
/// a transcriber must be attached before file analysis is available.
pub struct AnalysisSession {
    /// Session configuration
    config: SessionConfig,

    /// Speech-to-text capability (None = text-only analysis)
    transcriber: Option<Arc<dyn Transcriber>>,

    /// Tokenization and POS tagging capability
    tagger: Arc<dyn Tagger>,

    /// Sentiment polarity capability
    sentiment: Arc<dyn SentimentModel>,
}

impl AnalysisSession {
    /// Create a session with the bundled rule-based tagger and sentiment model
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            transcriber: None,
            tagger: Arc::new(RuleTagger::new()),
            sentiment: Arc::new(LexiconSentiment::new()),
        }
    }

    /// Attach a transcription capability, enabling file analysis
    pub fn with_transcriber(mut self, transcriber: Arc<dyn Transcriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    /// Replace the tagging capability
    pub fn with_tagger(mut self, tagger: Arc<dyn Tagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Replace the sentiment capability
    pub fn with_sentiment(mut self, sentiment: Arc<dyn SentimentModel>) -> Self {
        self.sentiment = sentiment;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether file analysis is available
    pub fn has_transcriber(&self) -> bool {
        self.transcriber.is_some()
    }

    /// Analyze a transcript directly (no audio involved)
    ///
    /// Blank input is rejected up front as "no input available" so the
    /// counting core is never invoked with empty text.
    pub fn analyze_text(&self, text: &str) -> Result<SessionReport> {
        let text = text.trim();
        if text.is_empty() {
            anyhow::bail!("No input available: transcript is empty");
        }

        let tokens = self.tagger.tag(text);
        let counts = VocabularyAnalyzer::analyze(&tokens);
        let feedback = FeedbackGenerator::generate(&counts);

        let polarity = self.sentiment.polarity(text);
        let sentiment = Sentiment::from_polarity(polarity);

        info!(
            "Analyzed {} tokens ({} categorized), sentiment {}",
            counts.total_words,
            counts.categorized(),
            sentiment.label()
        );

        Ok(SessionReport {
            report_id: format!("report-{}", uuid::Uuid::new_v4()),
            analyzed_at: Utc::now(),
            transcript: text.to_string(),
            polarity,
            sentiment,
            counts,
            feedback,
        })
    }

    /// Transcribe a recorded WAV file and analyze the result
    pub async fn analyze_file(&self, path: &str) -> Result<SessionReport> {
        let transcriber = self
            .transcriber
            .as_ref()
            .context("No transcriber configured; file analysis requires the STT service")?;

        info!("Analyzing recording: {}", path);

        let backend_config = AudioBackendConfig {
            target_sample_rate: self.config.sample_rate,
            target_channels: self.config.channels,
            frame_duration_ms: self.config.frame_duration_ms,
        };

        let mut backend =
            AudioBackendFactory::create(AudioSource::File(path.to_string()), backend_config)
                .context("Failed to create audio backend")?;

        let frames = backend
            .start()
            .await
            .context("Failed to start audio streaming")?;

        let transcript = transcriber
            .transcribe(frames)
            .await
            .context("Transcription failed")?;

        backend.stop().await?;

        info!("Transcript: \"{}\"", transcript.text);

        self.analyze_text(&transcript.text)
    }
}
