use std::sync::Arc;

use crate::matching::store::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable posting source. Default: `SqliteJobStore`.
    pub store: Arc<dyn JobStore>,
}
