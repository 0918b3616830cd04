use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub audio: AudioConfig,
    pub stt: SttConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channels: u16,
    pub frame_duration_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct SttConfig {
    pub nats_url: String,
    pub transcript_timeout_secs: u64,
}

impl Config {
    /// Load configuration from an optional file layered over built-in defaults
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "speech-coach")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 3030_i64)?
            .set_default("audio.sample_rate", 16000_i64)?
            .set_default("audio.channels", 1_i64)?
            .set_default("audio.frame_duration_ms", 100_i64)?
            .set_default("stt.nats_url", "nats://localhost:4222")?
            .set_default("stt.transcript_timeout_secs", 10_i64)?
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
