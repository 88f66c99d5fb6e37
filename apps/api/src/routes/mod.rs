pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Advisory API
        .route("/api/v1/chat", post(handlers::handle_chat))
        // Compatibility alias for older clients; forwards unchanged
        .route(
            "/api/v1/counsellor/chat",
            post(handlers::handle_counsellor_chat),
        )
        .with_state(state)
}
