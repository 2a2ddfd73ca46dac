//! Factory Metrics Service
//!
//! Ingests discrete worker/workstation status events from a factory floor
//! sensing pipeline and derives rolled-up productivity metrics (utilization,
//! throughput, per-station status) on demand.
//!
//! # Modules
//!
//! - `types`: Core data structures (Event, Worker, Station, metric shapes)
//! - `store`: Lock-guarded collections with JSONL persistence and
//!   upsert-based ingestion
//! - `metrics`: Pure aggregation engine over a store snapshot
//! - `api`: Axum REST transport (seed, ingest, metrics endpoints)
//! - `error`: Store error taxonomy
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use factory_metrics::api::http::create_router;
//! use factory_metrics::api::state::AppState;
//! use factory_metrics::error::StoreResult;
//! use factory_metrics::metrics::MetricsConfig;
//! use factory_metrics::store::FactoryStore;
//!
//! fn main() -> StoreResult<()> {
//!     let store = Arc::new(FactoryStore::new()?);
//!     let state = Arc::new(AppState::new(store, MetricsConfig::default()));
//!     let app = create_router(state);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod metrics;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{StoreError, StoreResult};
pub use metrics::{compute_metrics, MetricsConfig};
pub use store::{FactorySnapshot, FactoryStore};
pub use types::{
    Event, EventType, FactorySummary, MetricsReport, Station, StationMetric, StoredEvent, Worker,
    WorkerMetric,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
