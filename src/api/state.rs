//! API server state

use std::sync::Arc;

use crate::fixture::FixtureStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Fixture file locations, injected at startup
    pub fixtures: Arc<FixtureStore>,
}

impl AppState {
    pub fn new(fixtures: FixtureStore) -> Self {
        Self {
            fixtures: Arc::new(fixtures),
        }
    }
}
