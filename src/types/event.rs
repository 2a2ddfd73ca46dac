//! Event types for the factory floor sensing pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of event types emitted by the sensing pipeline
///
/// Unknown strings are rejected at deserialization time, before any
/// store interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Working,
    Idle,
    Absent,
    ProductCount,
}

impl EventType {
    /// Wire-format name of the event type
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Working => "working",
            EventType::Idle => "idle",
            EventType::Absent => "absent",
            EventType::ProductCount => "product_count",
        }
    }
}

/// One observed status sample or production count at a point in time
///
/// `worker_id` and `workstation_id` are both optional: a single record can
/// describe a worker observation, a station observation, or both at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workstation_id: Option<String>,
    pub event_type: EventType,
    /// Upstream sensing confidence, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Produced quantity, meaningful only for `product_count` events
    #[serde(default)]
    pub count: i64,
}

impl Event {
    /// Whether `other` shares this event's natural dedup key
    /// (timestamp, worker_id, event_type)
    pub fn same_key(&self, other: &Event) -> bool {
        self.timestamp == other.timestamp
            && self.worker_id == other.worker_id
            && self.event_type == other.event_type
    }
}

/// Event as persisted, tagged with its insertion sequence number
///
/// `seq` is the deterministic tie-break for events sharing a timestamp.
/// A replaced event keeps its original `seq`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEvent {
    #[serde(flatten)]
    pub event: Event,
    pub seq: u64,
}
