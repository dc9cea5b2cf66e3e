use hb_core::AccountBackend;

use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn AccountBackend>,
}

impl AppState {
    pub fn new<B: AccountBackend + 'static>(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}
