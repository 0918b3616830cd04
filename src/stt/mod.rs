//! Speech-to-text capability
//!
//! Transcription is delegated to an external STT service. The `Transcriber`
//! trait is the seam: the production implementation publishes PCM audio over
//! NATS and collects transcript segments, while tests inject a mock.

pub mod messages;
pub mod nats;

pub use messages::{AudioFrameMessage, TranscriptMessage};
pub use nats::NatsTranscriber;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::audio::AudioFrame;

/// A completed transcription of a spoken recording
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Transcribed text (never empty; absence of speech is an error)
    pub text: String,

    /// Confidence score (0.0 to 1.0), if the service reports one
    pub confidence: Option<f32>,
}

/// Transcription capability
///
/// Consumes a stream of audio frames and produces the recognized text.
/// Unintelligible audio or service failure surfaces as an error, never as
/// an empty transcript.
#[async_trait::async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe a stream of audio frames into text
    async fn transcribe(&self, frames: mpsc::Receiver<AudioFrame>) -> Result<Transcript>;

    /// Get transcriber name for logging
    fn name(&self) -> &str;
}
