//! HTTP API server for external clients
//!
//! This module provides a REST API over the analysis session:
//! - POST /analyze/text - Analyze a transcript directly
//! - POST /analyze/file - Transcribe a recorded WAV file and analyze it
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
