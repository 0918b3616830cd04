pub mod analysis;
pub mod audio;
pub mod config;
pub mod http;
pub mod nlp;
pub mod session;
pub mod stt;

pub use analysis::{FeedbackGenerator, FeedbackReport, VocabularyAnalyzer, VocabularyCounts};
pub use audio::{
    AudioBackend, AudioBackendConfig, AudioBackendFactory, AudioFile, AudioFrame, AudioSource,
};
pub use config::Config;
pub use http::{create_router, AppState};
pub use nlp::{
    LexiconSentiment, RuleTagger, Sentiment, SentimentModel, TaggedToken, Tagger,
};
pub use session::{AnalysisSession, SessionConfig, SessionReport};
pub use stt::{AudioFrameMessage, NatsTranscriber, Transcriber, Transcript, TranscriptMessage};
