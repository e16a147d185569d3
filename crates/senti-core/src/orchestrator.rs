//! Trigger cycle: validate, call the backend, render.
//!
//! ```text
//! Idle --blank text--> Idle (warning, no call)
//! Idle --text--------> Pending --result--> Done
//! Done --trigger-----> (same as Idle)
//! ```

use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::client::SentimentBackend;
use crate::model::{AnalysisRequest, AnalysisResult};
use crate::presentation::{present, SentimentDisplay, CONNECTIVITY_NOTICE, EMPTY_INPUT_WARNING};

/// Where the orchestrator is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
    Done,
}

/// What a shell should show at the end of a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    /// Input was rejected locally; nothing was sent.
    Warning(String),
    /// Color-coded label.
    Sentiment(SentimentDisplay),
    /// Plain failure notice, shown without a colored box.
    Failure(String),
}

/// The UI a cycle renders into.
pub trait PresentationShell {
    /// A backend call is about to start.
    fn begin_busy(&mut self, _message: &str) {}

    /// The backend call finished.
    fn end_busy(&mut self) {}

    fn render(&mut self, rendering: &Rendering);
}

/// Runs trigger cycles against a backend.
pub struct Orchestrator<B> {
    backend: B,
    busy_message: String,
    phase: Phase,
}

impl<B: SentimentBackend> Orchestrator<B> {
    pub fn new(backend: B, busy_message: impl Into<String>) -> Self {
        Self {
            backend,
            busy_message: busy_message.into(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run one cycle for `text` and render the outcome into `shell`.
    pub async fn trigger<S>(&mut self, text: &str, shell: &mut S) -> Rendering
    where
        S: PresentationShell + ?Sized,
    {
        let cycle_id = Uuid::new_v4();
        let span = info_span!("trigger", cycle = %cycle_id);

        let request = match AnalysisRequest::new(text) {
            Ok(request) => request,
            Err(_) => {
                span.in_scope(|| debug!("Blank input, nothing sent"));
                let rendering = Rendering::Warning(EMPTY_INPUT_WARNING.to_string());
                self.phase = Phase::Idle;
                shell.render(&rendering);
                return rendering;
            }
        };

        self.phase = Phase::Pending;
        shell.begin_busy(&self.busy_message);
        let result = self.backend.analyze(&request).instrument(span.clone()).await;
        shell.end_busy();

        let rendering = match &result {
            AnalysisResult::Success { .. } => Rendering::Sentiment(present(&result)),
            AnalysisResult::BackendError { .. } | AnalysisResult::ConnectivityError { .. } => {
                Rendering::Failure(CONNECTIVITY_NOTICE.to_string())
            }
        };

        span.in_scope(|| info!(success = result.is_success(), "Trigger cycle complete"));

        self.phase = Phase::Done;
        shell.render(&rendering);
        rendering
    }
}
