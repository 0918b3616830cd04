// Integration tests for audio file loading and the file-based backend

use anyhow::Result;
use speech_coach::audio::{AudioBackend, AudioBackendConfig, AudioFile, FileBackend};
use std::path::PathBuf;

/// Write a short WAV file and return its path
fn write_test_wav(
    dir: &tempfile::TempDir,
    name: &str,
    sample_rate: u32,
    channels: u16,
    frames: usize,
) -> Result<PathBuf> {
    let path = dir.path().join(name);

    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(&path, spec)?;
    for i in 0..frames {
        for _ in 0..channels {
            writer.write_sample((i % 100) as i16)?;
        }
    }
    writer.finalize()?;

    Ok(path)
}

#[test]
fn test_audio_file_open() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_test_wav(&dir, "speech.wav", 16000, 1, 16000)?;

    let audio = AudioFile::open(&path)?;

    assert_eq!(audio.sample_rate, 16000);
    assert_eq!(audio.channels, 1);
    assert_eq!(audio.samples.len(), 16000);
    assert!((audio.duration_seconds - 1.0).abs() < 0.01);
    assert!(audio.path.contains("speech.wav"));

    Ok(())
}

#[test]
fn test_audio_file_nonexistent() {
    let result = AudioFile::open("/nonexistent/path/to/audio.wav");
    assert!(result.is_err(), "Opening nonexistent file should fail");
}

#[test]
fn test_stereo_folds_to_mono() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_test_wav(&dir, "stereo.wav", 16000, 2, 1000)?;

    let audio = AudioFile::open(&path)?;
    assert_eq!(audio.channels, 2);
    assert_eq!(audio.samples.len(), 2000);

    let mono = audio.to_mono();
    assert_eq!(mono.len(), 1000);

    // Both channels carry the same value, so the fold doubles it
    assert_eq!(mono[1], audio.samples[2] + audio.samples[3]);

    Ok(())
}

#[test]
fn test_decimate_halves_sample_count() {
    let samples: Vec<i16> = (0..100).collect();
    let decimated = AudioFile::decimate(samples, 32000, 16000);

    assert_eq!(decimated.len(), 50);
    assert_eq!(decimated[0], 0);
    assert_eq!(decimated[1], 2);
}

#[test]
fn test_decimate_never_upsamples() {
    let samples: Vec<i16> = (0..100).collect();
    let unchanged = AudioFile::decimate(samples.clone(), 8000, 16000);

    assert_eq!(unchanged, samples);
}

#[tokio::test]
async fn test_file_backend_streams_frames() -> Result<()> {
    let dir = tempfile::tempdir()?;
    // One second at 16kHz mono
    let path = write_test_wav(&dir, "frames.wav", 16000, 1, 16000)?;

    let config = AudioBackendConfig::default();
    let mut backend = FileBackend::new(path.display().to_string(), config);

    let mut rx = backend.start().await?;

    let mut frames = Vec::new();
    while let Some(frame) = rx.recv().await {
        frames.push(frame);
    }

    // 100ms frames over one second
    assert_eq!(frames.len(), 10);
    assert_eq!(frames[0].samples.len(), 1600);
    assert_eq!(frames[0].sample_rate, 16000);
    assert_eq!(frames[0].channels, 1);

    // Timestamps advance by the frame duration
    assert_eq!(frames[0].timestamp_ms, 0);
    assert_eq!(frames[1].timestamp_ms, 100);

    assert!(!backend.is_capturing(), "Backend should stop after draining");

    Ok(())
}

#[tokio::test]
async fn test_file_backend_downsamples_to_target() -> Result<()> {
    let dir = tempfile::tempdir()?;
    // Half a second at 48kHz stereo
    let path = write_test_wav(&dir, "hires.wav", 48000, 2, 24000)?;

    let config = AudioBackendConfig::default(); // 16kHz mono target
    let mut backend = FileBackend::new(path.display().to_string(), config);

    let mut rx = backend.start().await?;

    let mut total_samples = 0;
    while let Some(frame) = rx.recv().await {
        assert_eq!(frame.sample_rate, 16000);
        assert_eq!(frame.channels, 1);
        total_samples += frame.samples.len();
    }

    // 24000 mono samples decimated 3:1
    assert_eq!(total_samples, 8000);

    Ok(())
}

#[tokio::test]
async fn test_file_backend_missing_file_errors() {
    let config = AudioBackendConfig::default();
    let mut backend = FileBackend::new("/nonexistent/audio.wav".to_string(), config);

    assert!(backend.start().await.is_err());
}
