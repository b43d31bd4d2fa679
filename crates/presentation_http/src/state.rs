//! Application state shared across handlers

use std::sync::Arc;

use application::{PlaceService, RecommendationService, RouteResolver};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Route resolver, `None` when no directions provider is configured
    pub route_resolver: Option<Arc<RouteResolver>>,
    /// Place search, `None` when no search provider is configured
    pub place_service: Option<Arc<PlaceService>>,
    /// Nearby recommendations
    pub recommendation_service: Arc<RecommendationService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
