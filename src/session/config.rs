use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for an analysis session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (used for STT message routing)
    pub session_id: String,

    /// Sample rate for audio sent to the STT service (16kHz expected)
    pub sample_rate: u32,

    /// Number of audio channels (1 = mono, 2 = stereo)
    pub channels: u16,

    /// Frame size in milliseconds for audio streaming
    pub frame_duration_ms: u64,

    /// How long to wait for the STT service to go quiet
    pub transcript_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("session-{}", uuid::Uuid::new_v4()),
            sample_rate: 16000,
            channels: 1,
            frame_duration_ms: 100,
            transcript_timeout: Duration::from_secs(10),
        }
    }
}
