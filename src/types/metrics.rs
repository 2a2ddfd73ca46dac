//! Derived metric shapes, recomputed fresh on every aggregation request

use serde::{Deserialize, Serialize};

use super::EventType;

/// Per-worker roll-up over the full event history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerMetric {
    pub id: String,
    pub name: String,
    /// Integer percent, 0..=100
    pub utilization: u32,
    /// Total produced units attributed to this worker
    pub units: i64,
    /// Units per hour, formatted to exactly 2 decimal places
    pub uph: String,
}

/// Per-station roll-up over the full event history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationMetric {
    pub station_id: String,
    /// Composed as `"{station_id}: {type}"`
    pub name: String,
    /// Last-observed event type for the station, `idle` when none
    pub status: EventType,
    pub units: i64,
}

/// Factory-wide summary, derived purely from the worker metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorySummary {
    #[serde(rename = "totalProduction")]
    pub total_production: i64,
    #[serde(rename = "avgUtilization")]
    pub avg_utilization: u32,
    #[serde(rename = "activeWorkers")]
    pub active_workers: usize,
}

/// Full payload returned by the metrics endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    pub factory: FactorySummary,
    pub workers: Vec<WorkerMetric>,
    pub stations: Vec<StationMetric>,
}
