//! Upsert-based event ingestion
//!
//! Sensing pipelines may resend the same slot's reading on retry, so
//! ingestion is idempotent per (timestamp, worker_id, event_type) key:
//! a duplicate key replaces the stored record's full field set instead of
//! accumulating rows that would double-count units or utilization.

use crate::error::StoreResult;
use crate::types::{Event, StoredEvent};

use super::FactoryStore;

/// Insert or replace one event on its natural key
/// (thread-safe: holds the write lock during the entire operation)
///
/// Last-write-wins on the full record, not a field-level merge. A replaced
/// event keeps its original insertion sequence number.
pub fn upsert_event(store: &FactoryStore, event: Event) -> StoreResult<StoredEvent> {
    let mut data = store.data.write();

    let stored = match data.events.iter().position(|s| s.event.same_key(&event)) {
        Some(i) => {
            data.events[i].event = event;
            data.events[i].clone()
        }
        None => {
            let stored = StoredEvent {
                event,
                seq: data.next_seq,
            };
            data.next_seq += 1;
            data.events.push(stored.clone());
            stored
        }
    };

    store.persist(&data)?;
    Ok(stored)
}
