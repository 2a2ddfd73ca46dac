//! Administrative reset and fixed registry seeding

use crate::error::StoreResult;
use crate::types::{Station, Worker};

use super::FactoryStore;

/// Built-in worker registry (id, display name)
const SEED_WORKERS: &[(&str, &str)] = &[
    ("W1", "Alice"),
    ("W2", "Bob"),
    ("W3", "Charlie"),
    ("W4", "David"),
    ("W5", "Eve"),
    ("W6", "Frank"),
];

/// Built-in station registry (id, station type)
const SEED_STATIONS: &[(&str, &str)] = &[
    ("S1", "Assembly"),
    ("S2", "Welding"),
    ("S3", "Quality"),
    ("S4", "Packaging"),
    ("S5", "Painting"),
    ("S6", "Machining"),
];

/// Clear all three collections, repopulate the registries, and persist
/// (thread-safe: holds the write lock during the entire operation)
pub fn seed(store: &FactoryStore) -> StoreResult<()> {
    let mut data = store.data.write();

    data.workers = SEED_WORKERS
        .iter()
        .map(|(id, name)| Worker::new(*id, *name))
        .collect();
    data.stations = SEED_STATIONS
        .iter()
        .map(|(id, station_type)| Station::new(*id, *station_type))
        .collect();
    data.events.clear();
    data.next_seq = 0;

    store.persist(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Event, EventType};
    use chrono::TimeZone;

    fn temp_store() -> (FactoryStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factory.jsonl");
        let store = FactoryStore::with_file_path(path.to_string_lossy().to_string()).unwrap();
        (store, dir)
    }

    #[test]
    fn test_seed_populates_fixed_registries() {
        let (store, _dir) = temp_store();
        store.seed().unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.workers.len(), 6);
        assert_eq!(snapshot.stations.len(), 6);
        assert!(snapshot.events.is_empty());

        let ids: Vec<&str> = snapshot.workers.iter().map(|w| w.worker_id.as_str()).collect();
        assert_eq!(ids, vec!["W1", "W2", "W3", "W4", "W5", "W6"]);

        let types: Vec<&str> = snapshot
            .stations
            .iter()
            .map(|s| s.station_type.as_str())
            .collect();
        assert_eq!(
            types,
            vec!["Assembly", "Welding", "Quality", "Packaging", "Painting", "Machining"]
        );
    }

    #[test]
    fn test_seed_clears_events_and_sequence() {
        let (store, _dir) = temp_store();
        store
            .upsert_event(Event {
                timestamp: chrono::Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap(),
                worker_id: Some("W1".to_string()),
                workstation_id: None,
                event_type: EventType::Working,
                confidence: None,
                count: 0,
            })
            .unwrap();

        store.seed().unwrap();

        assert!(store.snapshot().events.is_empty());
        let stored = store
            .upsert_event(Event {
                timestamp: chrono::Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap(),
                worker_id: Some("W1".to_string()),
                workstation_id: None,
                event_type: EventType::Idle,
                confidence: None,
                count: 0,
            })
            .unwrap();
        assert_eq!(stored.seq, 0);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let (store, _dir) = temp_store();
        store.seed().unwrap();
        store.seed().unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.workers.len(), 6);
        assert_eq!(snapshot.stations.len(), 6);
    }
}
