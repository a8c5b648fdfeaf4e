//! Shared application state for the API server.

use std::sync::Arc;

use opsdrill::store::MissionStore;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The mission engine: catalog plus live sessions.
    pub store: Arc<MissionStore>,
}

impl AppState {
    pub fn new(store: MissionStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
