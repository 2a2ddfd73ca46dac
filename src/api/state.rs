//! Shared application state

use std::sync::Arc;

use crate::metrics::MetricsConfig;
use crate::store::FactoryStore;

/// State shared by all request handlers
pub struct AppState {
    /// The factory store
    pub store: Arc<FactoryStore>,
    /// Aggregation parameters, fixed for the process lifetime
    pub metrics: MetricsConfig,
}

impl AppState {
    pub fn new(store: Arc<FactoryStore>, metrics: MetricsConfig) -> Self {
        Self { store, metrics }
    }
}
