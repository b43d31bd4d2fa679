//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Place search (v1)
        .route("/v1/places/search", get(handlers::places::search_places))
        .route("/v1/places/locate", get(handlers::places::locate_place))
        // Route resolution (v1)
        .route("/v1/routes", get(handlers::routes::resolve_route))
        // Recommendations (v1)
        .route(
            "/v1/recommendations",
            get(handlers::recommendations::recommend),
        )
        // Attach state
        .with_state(state)
}
