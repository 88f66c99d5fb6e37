use std::sync::Arc;

use crate::advisor::engine::AdvisoryEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless advisory engine, shared across requests. Classification is
    /// pure, so no coordination is needed.
    pub engine: Arc<AdvisoryEngine>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            engine: Arc::new(AdvisoryEngine::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
