//! Data types for the factory metrics service
//!
//! This module contains all the core data structures used throughout the
//! application.

mod event;
mod metrics;
mod station;
mod worker;

pub use event::{Event, EventType, StoredEvent};
pub use metrics::{FactorySummary, MetricsReport, StationMetric, WorkerMetric};
pub use station::Station;
pub use worker::Worker;
