//! Route handlers.

pub mod page;

/// GET /health - Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
