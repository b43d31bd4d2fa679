//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod directions_adapter;
mod place_search_adapter;
mod recommendation_adapter;
mod render_set_map;

use application::error::ApplicationError;
pub use directions_adapter::DirectionsAdapter;
use integration_places::PlacesError;
pub use place_search_adapter::PlaceSearchAdapter;
pub use recommendation_adapter::RecommendationAdapter;
pub use render_set_map::{BoundsFit, RenderSet, RenderSetMap};
use tracing::warn;

fn map_places_error(error: PlacesError) -> ApplicationError {
    match error {
        PlacesError::InvalidRequest(msg) => ApplicationError::InvalidInput(msg),
        PlacesError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        other => {
            warn!(retryable = other.is_retryable(), error = %other, "Places provider failed");
            ApplicationError::ExternalService(other.to_string())
        },
    }
}
