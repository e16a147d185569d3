//! Analyzer page handlers.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;
use tracing::debug;

use crate::state::AppState;
use senti_core::presentation::{RESULT_HEADING, SUCCESS_NOTICE};
use senti_core::{Orchestrator, PresentationShell, Rendering};

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    title: &'a str,
    caption: &'a str,
    busy_message: &'a str,
    text: &'a str,
    warning: Option<&'a str>,
    failure: Option<&'a str>,
    result: Option<ResultView>,
}

/// View model for the colored result box.
struct ResultView {
    notice: &'static str,
    heading: &'static str,
    label: String,
    color: &'static str,
}

// ============================================================
// REQUEST TYPES
// ============================================================

#[derive(Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub text: String,
}

// ============================================================
// SHELL
// ============================================================

/// Captures the outcome of a cycle for the page render.
#[derive(Default)]
struct PageShell {
    rendering: Option<Rendering>,
}

impl PresentationShell for PageShell {
    fn begin_busy(&mut self, message: &str) {
        debug!(message = %message, "Waiting for sentiment backend");
    }

    fn render(&mut self, rendering: &Rendering) {
        self.rendering = Some(rendering.clone());
    }
}

// ============================================================
// HANDLERS
// ============================================================

/// GET / - Empty analyzer page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, String)> {
    render_page(&state, "", None)
}

/// POST / - Run one trigger cycle and render its outcome.
pub async fn analyze(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut orchestrator = Orchestrator::new(state.backend.clone(), state.busy_message.clone());
    let mut shell = PageShell::default();

    orchestrator.trigger(&form.text, &mut shell).await;

    render_page(&state, &form.text, shell.rendering.as_ref())
}

fn render_page(
    state: &AppState,
    text: &str,
    rendering: Option<&Rendering>,
) -> Result<Html<String>, (StatusCode, String)> {
    let (warning, failure, result) = match rendering {
        Some(Rendering::Warning(msg)) => (Some(msg.as_str()), None, None),
        Some(Rendering::Failure(msg)) => (None, Some(msg.as_str()), None),
        Some(Rendering::Sentiment(display)) => (
            None,
            None,
            Some(ResultView {
                notice: SUCCESS_NOTICE,
                heading: RESULT_HEADING,
                label: display.label.clone(),
                color: display.color(),
            }),
        ),
        None => (None, None, None),
    };

    let template = IndexTemplate {
        title: &state.page.title,
        caption: &state.page.caption,
        busy_message: &state.busy_message,
        text,
        warning,
        failure,
        result,
    };

    template
        .render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}
