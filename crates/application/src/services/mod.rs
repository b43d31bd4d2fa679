//! Application services - Use case implementations

mod map_presenter;
mod place_service;
mod recommendation_service;
pub mod route_path;
mod route_resolver;

pub use map_presenter::MapPresenter;
pub use place_service::PlaceService;
pub use recommendation_service::RecommendationService;
pub use route_path::{DEFAULT_CONNECTOR_MAX_METERS, RoutePath, assemble_route_path};
pub use route_resolver::{
    DEFAULT_WALKING_SPEED_METERS_PER_MINUTE, DEFAULT_WALKING_THRESHOLD_METERS, RouteResolver,
    RouteResolverConfig,
};
