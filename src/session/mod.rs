//! Analysis session management
//!
//! This module provides the `AnalysisSession` abstraction that ties the
//! capabilities together:
//! - Audio input from recorded WAV files
//! - Transcription via the configured STT service
//! - Sentiment classification from polarity
//! - Vocabulary counting and feedback generation
//! - Report assembly

mod config;
mod report;
mod session;

pub use config::SessionConfig;
pub use report::SessionReport;
pub use session::AnalysisSession;
