//! REST API module for HTTP endpoints
//!
//! Provides the service's three operations:
//! - `POST /api/seed` - Administrative reset with fixed registries
//! - `POST /api/ingest` - Upsert one sensing event
//! - `GET /api/metrics` - Recompute the full metrics report

pub mod ingest;
pub mod metrics;
pub mod seed;

use serde::Serialize;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}
