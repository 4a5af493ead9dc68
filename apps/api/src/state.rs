use std::sync::Arc;

use crate::llm_client::Completion;
use crate::voice::{ListenSettings, SpeechRecognizer};

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn Completion>,
    pub speech: Arc<dyn SpeechRecognizer>,
    /// Ambient calibration and phrase detection for recorded interview answers.
    pub listen: ListenSettings,
}
