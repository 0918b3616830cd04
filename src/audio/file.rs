use anyhow::{Context, Result};
use hound::WavReader;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

use super::backend::{AudioBackend, AudioBackendConfig, AudioFrame};

pub struct AudioFile {
    pub path: String,
    pub duration_seconds: f64,
    pub sample_rate: u32,
    pub channels: u16,
    pub samples: Vec<i16>,
}

impl AudioFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening audio file: {}", path.display());

        let reader = WavReader::open(path)
            .context("Failed to open WAV file")?;

        let spec = reader.spec();
        let samples: Vec<i16> = reader
            .into_samples::<i16>()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read audio samples")?;

        let duration_seconds = samples.len() as f64 /
            (spec.sample_rate as f64 * spec.channels as f64);

        info!(
            "Audio file loaded: {:.1}s, {}Hz, {} channels, {} samples",
            duration_seconds,
            spec.sample_rate,
            spec.channels,
            samples.len()
        );

        Ok(Self {
            path: path.display().to_string(),
            duration_seconds,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            samples,
        })
    }

    /// Fold interleaved channels down to mono by summing with clipping
    pub fn to_mono(&self) -> Vec<i16> {
        if self.channels == 1 {
            return self.samples.clone();
        }

        let channels = self.channels as usize;
        let mut mono = Vec::with_capacity(self.samples.len() / channels);

        for chunk in self.samples.chunks_exact(channels) {
            let sum: i32 = chunk.iter().map(|&s| s as i32).sum();
            mono.push(sum.clamp(i16::MIN as i32, i16::MAX as i32) as i16);
        }

        mono
    }

    /// Downsample mono samples to the target rate by decimation
    ///
    /// Only integer ratios are supported; upsampling returns the input unchanged.
    pub fn decimate(samples: Vec<i16>, source_rate: u32, target_rate: u32) -> Vec<i16> {
        if source_rate <= target_rate || target_rate == 0 {
            return samples;
        }

        let ratio = (source_rate / target_rate) as usize;
        if ratio <= 1 {
            return samples;
        }

        samples.into_iter().step_by(ratio).collect()
    }
}

/// Audio backend that streams frames from a recorded WAV file
///
/// Samples are folded to mono and decimated to the target rate before
/// being split into fixed-duration frames.
pub struct FileBackend {
    path: String,
    config: AudioBackendConfig,
    capturing: Arc<AtomicBool>,
}

impl FileBackend {
    pub fn new(path: String, config: AudioBackendConfig) -> Self {
        Self {
            path,
            config,
            capturing: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait::async_trait]
impl AudioBackend for FileBackend {
    async fn start(&mut self) -> Result<mpsc::Receiver<AudioFrame>> {
        let audio = AudioFile::open(&self.path)?;

        let samples = AudioFile::decimate(
            audio.to_mono(),
            audio.sample_rate,
            self.config.target_sample_rate,
        );

        let sample_rate = self.config.target_sample_rate.min(audio.sample_rate);
        let frame_len =
            ((sample_rate as u64 * self.config.frame_duration_ms) / 1000).max(1) as usize;
        let frame_duration_ms = self.config.frame_duration_ms;

        let (tx, rx) = mpsc::channel(16);

        self.capturing.store(true, Ordering::SeqCst);
        let capturing = Arc::clone(&self.capturing);

        tokio::spawn(async move {
            let mut timestamp_ms = 0u64;

            for chunk in samples.chunks(frame_len) {
                if !capturing.load(Ordering::SeqCst) {
                    break;
                }

                let frame = AudioFrame {
                    samples: chunk.to_vec(),
                    sample_rate,
                    channels: 1,
                    timestamp_ms,
                };

                if tx.send(frame).await.is_err() {
                    break;
                }

                timestamp_ms += frame_duration_ms;
            }

            capturing.store(false, Ordering::SeqCst);
        });

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        self.capturing.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.capturing.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "file"
    }
}
