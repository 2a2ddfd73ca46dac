//! Seed endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::ApiError;
use crate::api::state::AppState;

/// Response body for a successful seed
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
}

/// POST /api/seed - Clear all collections and repopulate the fixed
/// worker and station registries
pub async fn seed_database(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.seed() {
        Ok(()) => {
            tracing::info!("database seeded with fixed registries");
            (
                StatusCode::OK,
                Json(SeedResponse {
                    message: "Database seeded successfully",
                }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "seed failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::internal(err.to_string())),
            )
                .into_response()
        }
    }
}
