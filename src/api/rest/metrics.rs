//! Metrics endpoint

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::api::state::AppState;
use crate::metrics::compute_metrics;

/// GET /api/metrics - Recompute worker, station, and factory-wide metrics
/// over the entire event history
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.store.snapshot();
    let report = compute_metrics(&snapshot, &state.metrics);
    Json(report)
}
