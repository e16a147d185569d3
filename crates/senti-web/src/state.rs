//! Application state.

use senti_core::{PageSettings, SentimentBackend, Settings};
use std::sync::Arc;

/// Application state shared across handlers.
///
/// Holds configuration only; every request builds its own orchestrator.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn SentimentBackend>,
    pub page: PageSettings,
    pub busy_message: String,
}

impl AppState {
    pub fn new(backend: Arc<dyn SentimentBackend>, settings: &Settings) -> Self {
        Self {
            backend,
            page: settings.page.clone(),
            busy_message: settings.busy_message(),
        }
    }
}
