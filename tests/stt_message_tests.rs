use base64::Engine;
use speech_coach::stt::messages::{AudioFrameMessage, TranscriptMessage};

#[test]
fn test_audio_frame_serialization() {
    let msg = AudioFrameMessage {
        session_id: "test-session".to_string(),
        sequence: 0,
        pcm: base64::engine::general_purpose::STANDARD.encode([0u8; 100]),
        sample_rate: 16000,
        channels: 1,
        timestamp: "2026-08-28T14:30:00Z".to_string(),
        final_frame: false,
    };

    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("test-session"));
    assert!(json.contains("16000"));
    assert!(json.contains("\"final\":false"));
    assert!(json.contains("\"sequence\":0"));

    let deserialized: AudioFrameMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.session_id, "test-session");
    assert_eq!(deserialized.sample_rate, 16000);
    assert_eq!(deserialized.channels, 1);
    assert_eq!(deserialized.sequence, 0);
    assert!(!deserialized.final_frame);
}

#[test]
fn test_audio_frame_final_marker() {
    let msg = AudioFrameMessage {
        session_id: "test-session".to_string(),
        sequence: 10,
        pcm: String::new(), // Empty for final marker
        sample_rate: 16000,
        channels: 1,
        timestamp: "2026-08-28T14:30:00Z".to_string(),
        final_frame: true,
    };

    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("\"final\":true"));

    let deserialized: AudioFrameMessage = serde_json::from_str(&json).unwrap();
    assert!(deserialized.final_frame);
    assert!(deserialized.pcm.is_empty());
}

#[test]
fn test_transcript_message_deserialization() {
    let json = r#"{
        "session_id": "test-session",
        "text": "hello world",
        "partial": false,
        "timestamp": "2026-08-28T14:30:05Z",
        "confidence": 0.92
    }"#;

    let msg: TranscriptMessage = serde_json::from_str(json).unwrap();
    assert_eq!(msg.session_id, "test-session");
    assert_eq!(msg.text, "hello world");
    assert!(!msg.partial);
    assert!((msg.confidence - 0.92).abs() < f32::EPSILON);
}

#[test]
fn test_pcm_roundtrip_through_base64() {
    let samples: Vec<i16> = vec![0, 100, -100, i16::MAX, i16::MIN];
    let pcm_bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();

    let encoded = base64::engine::general_purpose::STANDARD.encode(&pcm_bytes);
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(&encoded)
        .unwrap();

    assert_eq!(decoded, pcm_bytes);
}
