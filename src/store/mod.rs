//! Factory store - Event collection and entity registries
//!
//! The store keeps workers, stations, and events in memory behind a single
//! read-write lock and persists the whole state to a JSONL file (one JSON
//! object per line) on every mutation. Startup loads the file if present.
//!
//! Holding the write lock across an entire upsert is what makes concurrent
//! ingestions of the same (timestamp, worker_id, event_type) key serialize
//! to a single deterministic winner.

mod ingest;
mod seed;

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use parking_lot::RwLock;

use crate::error::StoreResult;
use crate::types::{Event, Station, StoredEvent, Worker};

/// Collections guarded by the store lock
#[derive(Debug, Default)]
pub(crate) struct FactoryData {
    pub workers: Vec<Worker>,
    pub stations: Vec<Station>,
    pub events: Vec<StoredEvent>,
    /// Next insertion sequence number, monotonically increasing
    pub next_seq: u64,
}

/// Point-in-time view of the store, the aggregation engine's sole input
#[derive(Debug, Clone)]
pub struct FactorySnapshot {
    pub workers: Vec<Worker>,
    pub stations: Vec<Station>,
    /// Sorted ascending by (timestamp, seq)
    pub events: Vec<StoredEvent>,
}

/// Durable store for the event collection and entity registries
pub struct FactoryStore {
    data_file_path: String,
    pub(crate) data: RwLock<FactoryData>,
}

impl FactoryStore {
    /// Create a store using `FACTORY_DATA_PATH` or `factory.jsonl` in the
    /// current directory
    ///
    /// Fails if an existing data file cannot be read; a missing file starts
    /// the store empty.
    pub fn new() -> StoreResult<Self> {
        let current_dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        let default_path = current_dir.join("factory.jsonl");

        let data_file_path = match env::var("FACTORY_DATA_PATH") {
            Ok(path) => {
                if Path::new(&path).is_absolute() {
                    path
                } else {
                    current_dir.join(path).to_string_lossy().to_string()
                }
            }
            Err(_) => default_path.to_string_lossy().to_string(),
        };

        Self::with_file_path(data_file_path)
    }

    /// Create a store backed by an explicit data file path
    ///
    /// An unreadable data file is a startup failure, not an empty store:
    /// swallowing the error here would let the first mutation overwrite the
    /// original file.
    pub fn with_file_path(file_path: impl Into<String>) -> StoreResult<Self> {
        let data_file_path = file_path.into();
        let data = Self::load_from_file(&data_file_path)?;

        Ok(Self {
            data_file_path,
            data: RwLock::new(data),
        })
    }

    /// Load collections from a JSONL file (static helper for initialization)
    ///
    /// Lines are distinguished by try-parse: stored events carry a timestamp
    /// and sequence number, workers a name, stations a type. Unparseable
    /// lines are skipped.
    fn load_from_file(file_path: &str) -> StoreResult<FactoryData> {
        if !Path::new(file_path).exists() {
            return Ok(FactoryData::default());
        }

        let content = fs::read_to_string(file_path)?;
        let mut data = FactoryData::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Ok(event) = serde_json::from_str::<StoredEvent>(line) {
                data.next_seq = data.next_seq.max(event.seq + 1);
                data.events.push(event);
                continue;
            }

            if let Ok(worker) = serde_json::from_str::<Worker>(line) {
                if !worker.worker_id.is_empty() {
                    data.workers.push(worker);
                    continue;
                }
            }

            if let Ok(station) = serde_json::from_str::<Station>(line) {
                if !station.station_id.is_empty() {
                    data.stations.push(station);
                }
            }
        }

        Ok(data)
    }

    /// Persist the full state to the data file (expects caller to hold the
    /// write lock)
    ///
    /// Writes to a temp file, syncs, then renames over the final path so the
    /// file is never observed half-written.
    pub(crate) fn persist(&self, data: &FactoryData) -> StoreResult<()> {
        let path = Path::new(&self.data_file_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::new();
        for worker in &data.workers {
            content.push_str(&serde_json::to_string(worker)?);
            content.push('\n');
        }
        for station in &data.stations {
            content.push_str(&serde_json::to_string(station)?);
            content.push('\n');
        }
        for event in &data.events {
            content.push_str(&serde_json::to_string(event)?);
            content.push('\n');
        }

        let temp_path = path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Take a consistent snapshot of all three collections, with events
    /// ordered ascending by (timestamp, seq)
    pub fn snapshot(&self) -> FactorySnapshot {
        let data = self.data.read();
        let mut events = data.events.clone();
        events.sort_by(|a, b| {
            a.event
                .timestamp
                .cmp(&b.event.timestamp)
                .then(a.seq.cmp(&b.seq))
        });

        FactorySnapshot {
            workers: data.workers.clone(),
            stations: data.stations.clone(),
            events,
        }
    }

    /// Administrative reset: clear everything and repopulate the fixed
    /// worker and station registries
    pub fn seed(&self) -> StoreResult<()> {
        seed::seed(self)
    }

    /// Upsert one event on its (timestamp, worker_id, event_type) key
    pub fn upsert_event(&self, event: Event) -> StoreResult<StoredEvent> {
        ingest::upsert_event(self, event)
    }

    /// Path of the backing data file
    pub fn file_path(&self) -> &str {
        &self.data_file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventType;
    use chrono::TimeZone;

    fn temp_store() -> (FactoryStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factory.jsonl");
        let store = FactoryStore::with_file_path(path.to_string_lossy().to_string()).unwrap();
        (store, dir)
    }

    fn sample_event(hour: u32, worker: &str, event_type: EventType) -> Event {
        Event {
            timestamp: chrono::Utc.with_ymd_and_hms(2026, 1, 5, hour, 0, 0).unwrap(),
            worker_id: Some(worker.to_string()),
            workstation_id: Some("S1".to_string()),
            event_type,
            confidence: None,
            count: 0,
        }
    }

    #[test]
    fn test_persistence_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factory.jsonl").to_string_lossy().to_string();

        let store = FactoryStore::with_file_path(path.clone()).unwrap();
        store.seed().unwrap();
        store
            .upsert_event(sample_event(8, "W1", EventType::Working))
            .unwrap();

        let reloaded = FactoryStore::with_file_path(path).unwrap();
        let snapshot = reloaded.snapshot();
        assert_eq!(snapshot.workers.len(), 6);
        assert_eq!(snapshot.stations.len(), 6);
        assert_eq!(snapshot.events.len(), 1);
        assert_eq!(snapshot.events[0].event.event_type, EventType::Working);
    }

    #[test]
    fn test_reload_continues_sequence_numbering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factory.jsonl").to_string_lossy().to_string();

        let store = FactoryStore::with_file_path(path.clone()).unwrap();
        store
            .upsert_event(sample_event(8, "W1", EventType::Working))
            .unwrap();
        store
            .upsert_event(sample_event(9, "W1", EventType::Idle))
            .unwrap();

        let reloaded = FactoryStore::with_file_path(path).unwrap();
        let stored = reloaded
            .upsert_event(sample_event(10, "W1", EventType::Working))
            .unwrap();
        assert_eq!(stored.seq, 2);
    }

    #[test]
    fn test_snapshot_orders_by_timestamp_then_seq() {
        let (store, _dir) = temp_store();

        // Ingest out of timestamp order, plus two distinct events sharing
        // a timestamp.
        store
            .upsert_event(sample_event(10, "W2", EventType::Idle))
            .unwrap();
        store
            .upsert_event(sample_event(8, "W1", EventType::Working))
            .unwrap();
        store
            .upsert_event(sample_event(10, "W2", EventType::Working))
            .unwrap();

        let events = store.snapshot().events;
        assert_eq!(events[0].event.event_type, EventType::Working);
        assert_eq!(events[0].event.worker_id.as_deref(), Some("W1"));
        // Same timestamp: insertion sequence breaks the tie.
        assert_eq!(events[1].seq, 0);
        assert_eq!(events[2].seq, 2);
    }

    #[test]
    fn test_unreadable_file_fails_open_and_preserves_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factory.jsonl");
        let garbage = [0xFF, 0xFE, 0x00, b'{'];
        fs::write(&path, garbage).unwrap();

        let result = FactoryStore::with_file_path(path.to_string_lossy().to_string());
        assert!(result.is_err());

        // A failed open must leave the original bytes in place.
        assert_eq!(fs::read(&path).unwrap(), garbage.to_vec());
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.jsonl").to_string_lossy().to_string();
        let store = FactoryStore::with_file_path(path).unwrap();
        let snapshot = store.snapshot();
        assert!(snapshot.workers.is_empty());
        assert!(snapshot.stations.is_empty());
        assert!(snapshot.events.is_empty());
    }
}
