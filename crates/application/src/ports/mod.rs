//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod directions_port;
mod map_port;
mod place_search_port;
mod recommendation_port;

#[cfg(test)]
pub use directions_port::MockDirectionsPort;
pub use directions_port::{CandidateLeg, DirectionsPort, RouteCandidate};
#[cfg(test)]
pub use map_port::MockMapPort;
pub use map_port::{
    DEFAULT_ZOOM, MapPort, MapView, Marker, MarkerKind, Padding, Polyline, StrokeStyle,
};
#[cfg(test)]
pub use place_search_port::MockPlaceSearchPort;
pub use place_search_port::PlaceSearchPort;
#[cfg(test)]
pub use recommendation_port::MockRecommendationPort;
pub use recommendation_port::{RecommendationPort, RecommendationQuery};
