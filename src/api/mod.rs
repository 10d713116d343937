//! HTTP API server

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest(
            "/api",
            // Mock routes are method-agnostic: the request is never inspected
            Router::new()
                .route("/numbers", any(handlers::numbers))
                .route("/transactions", any(handlers::transactions))
                .route("/water-measurements", any(handlers::water_measurements)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
