use std::sync::Arc;

use storage::RunnerStore;

use crate::events::EventPublisher;

/// Shared handler state. The store is the only shared mutable resource; the
/// service itself is stateless across requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RunnerStore>,
    pub publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(store: Arc<dyn RunnerStore>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self { store, publisher }
    }
}
