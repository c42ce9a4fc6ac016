//! HTTP surface: router, shared state, and request handlers.

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::edit::EditOrchestrator;

/// Shared application state. The orchestrator is stateless per request, so a
/// single instance serves all connections.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<EditOrchestrator>,
}

impl AppState {
    pub fn new(orchestrator: Arc<EditOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

/// Create the relay router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::liveness))
        .route(
            "/api/edit-image-with-prompt",
            post(handlers::edit_image_with_prompt),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
