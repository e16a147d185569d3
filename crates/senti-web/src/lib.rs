//! Senti Web Shell
//!
//! Axum server rendering the analyzer page. Each form POST runs one
//! trigger cycle and renders its outcome.

pub mod routes;
pub mod state;

use axum::{
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::page::index).post(routes::page::analyze))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use senti_core::{AnalysisRequest, AnalysisResult, SentimentBackend, Settings};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubBackend {
        calls: AtomicUsize,
        result: AnalysisResult,
    }

    #[async_trait]
    impl SentimentBackend for StubBackend {
        async fn analyze(&self, _request: &AnalysisRequest) -> AnalysisResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn app(result: AnalysisResult) -> (Router, Arc<StubBackend>) {
        let backend = Arc::new(StubBackend {
            calls: AtomicUsize::new(0),
            result,
        });
        let state = AppState::new(backend.clone(), &Settings::default());
        (create_router(state), backend)
    }

    async fn post_text(router: Router, body: &'static str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_renders_empty_form() {
        let (router, backend) = app(AnalysisResult::success("positive"));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<h1>Sentiment Analyzer (Mistral)</h1>"));
        assert!(html.contains("Built with FastAPI + Ollama + Rust"));
        assert!(!html.contains("class=\"sentiment-box\""));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_positive_result_is_green() {
        let (router, backend) = app(AnalysisResult::success("positive"));
        let (status, html) = post_text(router, "text=I+love+this%21").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Prediction Complete!"));
        assert!(html.contains("style=\"color: #28a745;\">positive</div>"));
        assert!(html.contains("name=\"text\">\nI love this!</textarea>"));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_whitespace_only_warns_without_calling_backend() {
        let (router, backend) = app(AnalysisResult::success("positive"));
        let (status, html) = post_text(router, "text=+++").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Please enter text to analyze."));
        assert!(!html.contains("class=\"sentiment-box\""));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_text_field_warns() {
        let (router, backend) = app(AnalysisResult::success("positive"));
        let (_, html) = post_text(router, "").await;

        assert!(html.contains("Please enter text to analyze."));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unreachable_backend_shows_plain_notice() {
        let (router, _) = app(AnalysisResult::ConnectivityError {
            detail: "connection refused".to_string(),
        });
        let (status, html) = post_text(router, "text=test").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Could not connect to the FastAPI backend."));
        assert!(!html.contains("class=\"sentiment-box\""));
        assert!(!html.contains("Prediction Complete!"));
    }

    #[tokio::test]
    async fn test_missing_label_renders_gray_error() {
        let (router, _) = app(AnalysisResult::success("Error"));
        let (_, html) = post_text(router, "text=test").await;

        assert!(html.contains("style=\"color: #6c757d;\">Error</div>"));
    }

    #[tokio::test]
    async fn test_label_is_escaped() {
        let (router, _) = app(AnalysisResult::success("<b>mixed</b>"));
        let (_, html) = post_text(router, "text=test").await;

        assert!(!html.contains("<b>mixed</b>"));
        assert!(html.contains("style=\"color: #6c757d;\">"));
    }

    #[tokio::test]
    async fn test_leading_newline_survives_refill() {
        let (router, _) = app(AnalysisResult::success("neutral"));
        let (_, html) = post_text(router, "text=%0Ahello").await;

        // The parser drops the first newline after <textarea>, keeping the user's.
        assert!(html.contains("name=\"text\">\n\nhello</textarea>"));
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _) = app(AnalysisResult::success("positive"));
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
