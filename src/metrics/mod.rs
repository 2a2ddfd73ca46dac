//! Aggregation engine - derives productivity metrics from stored events
//!
//! Pure computation over a store snapshot: no store access, no caching, the
//! full event history is re-scanned on every call. Each `working` or `idle`
//! status event is assumed to represent one fixed-length observation slot;
//! actual wall-clock gaps between events are not used.

use std::env;

use crate::store::FactorySnapshot;
use crate::types::{
    EventType, FactorySummary, MetricsReport, Station, StationMetric, StoredEvent, Worker,
    WorkerMetric,
};

/// Aggregation parameters
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Minutes of activity each status event represents
    pub slot_minutes: u32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { slot_minutes: 10 }
    }
}

impl MetricsConfig {
    /// Read the slot length from `SLOT_MINUTES`, falling back to the default
    pub fn from_env() -> Self {
        let slot_minutes = env::var("SLOT_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&m| m > 0)
            .unwrap_or_else(|| Self::default().slot_minutes);

        Self { slot_minutes }
    }
}

/// Compute worker, station, and factory-wide metrics over the full history
///
/// Expects `snapshot.events` sorted ascending by (timestamp, seq); the last
/// matching event in that order determines a station's status.
pub fn compute_metrics(snapshot: &FactorySnapshot, config: &MetricsConfig) -> MetricsReport {
    let workers: Vec<WorkerMetric> = snapshot
        .workers
        .iter()
        .map(|w| worker_metric(w, &snapshot.events, config))
        .collect();

    let stations: Vec<StationMetric> = snapshot
        .stations
        .iter()
        .map(|s| station_metric(s, &snapshot.events))
        .collect();

    let total_production = workers.iter().map(|w| w.units).sum();
    let avg_utilization = if workers.is_empty() {
        0
    } else {
        let sum: u32 = workers.iter().map(|w| w.utilization).sum();
        (f64::from(sum) / workers.len() as f64).round() as u32
    };
    let active_workers = workers.iter().filter(|w| w.utilization > 0).count();

    MetricsReport {
        factory: FactorySummary {
            total_production,
            avg_utilization,
            active_workers,
        },
        workers,
        stations,
    }
}

fn worker_metric(worker: &Worker, events: &[StoredEvent], config: &MetricsConfig) -> WorkerMetric {
    let mut working_slots: u64 = 0;
    let mut idle_slots: u64 = 0;
    let mut units: i64 = 0;

    for stored in events
        .iter()
        .filter(|s| s.event.worker_id.as_deref() == Some(worker.worker_id.as_str()))
    {
        match stored.event.event_type {
            EventType::Working => working_slots += 1,
            EventType::Idle => idle_slots += 1,
            EventType::ProductCount => units += stored.event.count,
            // Absence is not measured time and stays out of the denominator.
            EventType::Absent => {}
        }
    }

    let slot = u64::from(config.slot_minutes);
    let working_minutes = working_slots * slot;
    let total_minutes = working_minutes + idle_slots * slot;

    let (utilization, uph) = if total_minutes > 0 {
        let utilization =
            (working_minutes as f64 / total_minutes as f64 * 100.0).round() as u32;
        let uph = units as f64 / total_minutes as f64 * 60.0;
        (utilization, format!("{uph:.2}"))
    } else {
        (0, "0.00".to_string())
    };

    WorkerMetric {
        id: worker.worker_id.clone(),
        name: worker.name.clone(),
        utilization,
        units,
        uph,
    }
}

fn station_metric(station: &Station, events: &[StoredEvent]) -> StationMetric {
    let mut units: i64 = 0;
    let mut status = EventType::Idle;

    for stored in events
        .iter()
        .filter(|s| s.event.workstation_id.as_deref() == Some(station.station_id.as_str()))
    {
        if stored.event.event_type == EventType::ProductCount {
            units += stored.event.count;
        }
        // Events arrive timestamp-ascending, so the last assignment wins.
        status = stored.event.event_type;
    }

    StationMetric {
        station_id: station.station_id.clone(),
        name: station.display_name(),
        status,
        units,
    }
}
