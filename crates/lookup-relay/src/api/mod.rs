//! HTTP API for the lookup relay.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::{cors_middleware, logging_middleware};
pub use types::*;

use crate::provider::NumverifyClient;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use lookup_client::LOOKUP_PATH;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Validation provider client
    pub provider: Arc<NumverifyClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(provider: NumverifyClient) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

/// Create the API router.
///
/// The lookup function is served both at its function path and at `/`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            LOOKUP_PATH,
            post(handlers::phone_lookup).options(handlers::preflight),
        )
        .route(
            "/",
            post(handlers::phone_lookup).options(handlers::preflight),
        )
        .layer(axum_middleware::from_fn(cors_middleware))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
