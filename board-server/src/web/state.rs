//! Application state for the web layer.

use std::sync::Arc;

use crate::comuline::ComulineClient;

/// Shared application state.
///
/// Holds the upstream client; there is deliberately no cache here, so
/// every page load re-fetches from the API.
#[derive(Clone)]
pub struct AppState {
    /// Comuline API client
    pub comuline: Arc<ComulineClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(comuline: ComulineClient) -> Self {
        Self {
            comuline: Arc::new(comuline),
        }
    }
}
