//! Shared application state for the web server.

use std::sync::Arc;

use medirisk_serving::PredictionService;

/// Shared state injected into every Axum handler. The prediction service
/// owns the read-only domain registry, so handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    pub service: PredictionService,
}

impl AppState {
    pub fn new(service: PredictionService) -> Self {
        AppState { service }
    }
}

pub type SharedState = Arc<AppState>;
