use crate::session::AnalysisSession;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The analysis session serving all requests
    pub session: Arc<AnalysisSession>,
}

impl AppState {
    pub fn new(session: Arc<AnalysisSession>) -> Self {
        Self { session }
    }
}
