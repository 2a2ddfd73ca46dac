//! Worker registry record

use serde::{Deserialize, Serialize};

/// Worker identity record, created only by seeding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub worker_id: String,
    pub name: String,
}

impl Worker {
    pub fn new(worker_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            worker_id: worker_id.into(),
            name: name.into(),
        }
    }
}
