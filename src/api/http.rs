//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{ingest, metrics, seed};
use super::state::AppState;

/// Diagnostic test form served at the root path
///
/// The ingest form is converted to a JSON POST in the browser since the API
/// accepts JSON bodies only.
const TEST_FORM: &str = r#"<!DOCTYPE html>
<html>
<body>
<h2>Factory API Tester</h2>

<form method="POST" action="/api/seed">
  <button type="submit">Seed Database</button>
</form>

<br/>

<form id="ingest">
  <input name="timestamp" placeholder="timestamp (2026-01-05T08:00:00Z)" />
  <input name="worker_id" placeholder="worker_id (W1)" />
  <input name="workstation_id" placeholder="workstation_id (S1)" />
  <input name="event_type" placeholder="event_type (working)" />
  <input name="count" placeholder="count" />
  <button type="submit">Send Event</button>
</form>

<pre id="out"></pre>

<script>
document.getElementById('ingest').addEventListener('submit', async (e) => {
  e.preventDefault();
  const form = new FormData(e.target);
  const body = {};
  for (const [key, value] of form.entries()) {
    if (value === '') continue;
    body[key] = key === 'count' ? Number(value) : value;
  }
  const res = await fetch('/api/ingest', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(body),
  });
  document.getElementById('out').textContent = await res.text();
});
</script>
</body>
</html>
"#;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Diagnostic test form
        .route("/", get(test_form))
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/seed", post(seed::seed_database))
        .route("/api/ingest", post(ingest::ingest_event))
        .route("/api/metrics", get(metrics::get_metrics))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn test_form() -> Html<&'static str> {
    Html(TEST_FORM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricsConfig;
    use crate::store::FactoryStore;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn test_app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factory.jsonl");
        let store = Arc::new(
            FactoryStore::with_file_path(path.to_string_lossy().to_string()).unwrap(),
        );
        let state = Arc::new(AppState::new(store, MetricsConfig::default()));
        (create_router(state), dir)
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _dir) = test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_root_serves_form() {
        let (app, _dir) = test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }
}
