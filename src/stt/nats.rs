use anyhow::{Context, Result};
use async_nats::Client;
use base64::Engine;
use futures::stream::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::messages::TranscriptMessage;
use super::{Transcriber, Transcript};
use crate::audio::AudioFrame;

/// Transcriber backed by an external STT service over NATS
///
/// Audio frames are published to `audio.frame.session-{id}` and the service
/// answers on `stt.text.partial` / `stt.text.final`, filtered by session id.
pub struct NatsTranscriber {
    client: Client,
    session_id: String,
    transcript_timeout: Duration,
}

impl NatsTranscriber {
    /// Connect to the NATS server
    pub async fn connect(
        url: &str,
        session_id: String,
        transcript_timeout: Duration,
    ) -> Result<Self> {
        info!("Connecting to NATS at {}", url);

        let client = async_nats::connect(url)
            .await
            .context("Failed to connect to NATS")?;

        info!("Connected to NATS successfully");

        Ok(Self {
            client,
            session_id,
            transcript_timeout,
        })
    }

    /// Publish one PCM audio frame to the STT service
    async fn publish_frame(
        &self,
        pcm_bytes: &[u8],
        sample_rate: u32,
        channels: u16,
        sequence: u32,
        is_final: bool,
    ) -> Result<()> {
        let subject = format!("audio.frame.session-{}", self.session_id);

        let message = super::messages::AudioFrameMessage {
            session_id: self.session_id.clone(),
            sequence,
            pcm: base64::engine::general_purpose::STANDARD.encode(pcm_bytes),
            sample_rate,
            channels,
            timestamp: chrono::Utc::now().to_rfc3339(),
            final_frame: is_final,
        };

        let payload = serde_json::to_vec(&message)?;

        self.client.publish(subject.clone(), payload.into())
            .await
            .context("Failed to publish audio frame")?;

        debug!(
            "Published audio frame to {} (seq={}, bytes={}, final={})",
            subject, sequence, pcm_bytes.len(), is_final
        );

        Ok(())
    }
}

#[async_trait::async_trait]
impl Transcriber for NatsTranscriber {
    async fn transcribe(&self, mut frames: mpsc::Receiver<AudioFrame>) -> Result<Transcript> {
        // Subscribe before publishing so no segments are missed
        let mut subscriber = self.client.subscribe("stt.text.>")
            .await
            .context("Failed to subscribe to transcripts")?;

        let mut sequence = 0u32;
        let mut sample_rate = 16000;
        let mut channels = 1;

        while let Some(frame) = frames.recv().await {
            sample_rate = frame.sample_rate;
            channels = frame.channels;

            let pcm_bytes: Vec<u8> = frame
                .samples
                .iter()
                .flat_map(|s| s.to_le_bytes())
                .collect();

            self.publish_frame(&pcm_bytes, sample_rate, channels, sequence, false)
                .await?;

            sequence += 1;
        }

        // Final marker tells the service the recording is complete
        self.publish_frame(&[], sample_rate, channels, sequence, true)
            .await?;

        info!("Published {} audio frames, waiting for transcript", sequence);

        // Collect final segments until the service goes quiet
        let mut segments: Vec<String> = Vec::new();
        let mut confidence = None;

        loop {
            let msg = match tokio::time::timeout(self.transcript_timeout, subscriber.next()).await
            {
                Ok(Some(msg)) => msg,
                Ok(None) => break,
                Err(_) => break, // idle timeout
            };

            match serde_json::from_slice::<TranscriptMessage>(&msg.payload) {
                Ok(transcript) => {
                    if transcript.session_id != self.session_id {
                        continue;
                    }

                    if transcript.partial {
                        debug!("Partial transcript: {}", transcript.text);
                        continue;
                    }

                    let text = transcript.text.trim();
                    if !text.is_empty() {
                        segments.push(text.to_string());
                        confidence = Some(transcript.confidence);
                    }
                }
                Err(e) => {
                    warn!("Failed to parse transcript message: {}", e);
                }
            }
        }

        subscriber.unsubscribe().await.ok();

        let text = segments.join(" ");
        if text.is_empty() {
            anyhow::bail!("No speech detected in audio input");
        }

        Ok(Transcript { text, confidence })
    }

    fn name(&self) -> &str {
        "nats"
    }
}
