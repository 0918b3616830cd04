use super::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    /// Transcript text to analyze
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeFileRequest {
    /// Path to a recorded WAV file on the server
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /analyze/text
/// Analyze a transcript directly
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> impl IntoResponse {
    info!("Analyzing text input ({} bytes)", req.text.len());

    match state.session.analyze_text(&req.text) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            error!("Text analysis failed: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: format!("{}", e),
                }),
            )
                .into_response()
        }
    }
}

/// POST /analyze/file
/// Transcribe a recorded WAV file and analyze the transcript
pub async fn analyze_file(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeFileRequest>,
) -> impl IntoResponse {
    info!("Analyzing recording: {}", req.path);

    if !state.session.has_transcriber() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "STT service unavailable; only text analysis is supported".to_string(),
            }),
        )
            .into_response();
    }

    match state.session.analyze_file(&req.path).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            error!("File analysis failed: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: format!("{:#}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
