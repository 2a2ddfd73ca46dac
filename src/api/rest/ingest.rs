//! Event ingestion endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use super::ApiError;
use crate::api::state::AppState;
use crate::types::{Event, StoredEvent};

/// Response body for a successful ingest, echoing the post-upsert record
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub status: &'static str,
    pub data: StoredEvent,
}

/// POST /api/ingest - Upsert one sensing event
///
/// Malformed bodies (missing timestamp, unknown event_type) are rejected
/// here with a 400 before any store interaction.
pub async fn ingest_event(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Event>, JsonRejection>,
) -> impl IntoResponse {
    let Json(event) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError::bad_request(rejection.body_text())),
            )
                .into_response();
        }
    };

    match state.store.upsert_event(event) {
        Ok(stored) => {
            tracing::debug!(seq = stored.seq, event_type = stored.event.event_type.as_str(), "event upserted");
            (
                StatusCode::CREATED,
                Json(IngestResponse {
                    status: "success",
                    data: stored,
                }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "event upsert failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::internal(err.to_string())),
            )
                .into_response()
        }
    }
}
