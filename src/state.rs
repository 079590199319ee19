//! Shared application state for all routes.

use crate::service::StudentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected record store; PostgreSQL in production, in-memory in tests.
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    pub fn new<S: StudentStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
