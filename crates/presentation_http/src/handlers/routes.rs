//! Route resolution handlers

use std::sync::Arc;

use application::MapPresenter;
use axum::{
    Json,
    extract::{Query, State},
};
use domain::Itinerary;
use infrastructure::{RenderSet, RenderSetMap};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::point_or_unset;
use crate::{error::ApiError, state::AppState};

/// Query parameters for route resolution
#[derive(Debug, Deserialize)]
pub struct RouteParams {
    pub origin_lat: Option<f64>,
    pub origin_lon: Option<f64>,
    pub dest_lat: Option<f64>,
    pub dest_lon: Option<f64>,
    /// Name shown for the destination
    #[serde(default)]
    pub dest_label: String,
    /// Index of the itinerary to draw (default: fastest)
    #[serde(default)]
    pub selected: usize,
}

/// Outcome of a route request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    /// At least one itinerary was found
    Ok,
    /// The provider found no route
    NoRoute,
}

/// One itinerary with a one-line summary
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub summary: String,
    #[serde(flatten)]
    pub itinerary: Itinerary,
}

/// Response for route resolution
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub status: RouteStatus,
    /// Itineraries, fastest first
    pub itineraries: Vec<ItineraryResponse>,
    /// Index of the drawn itinerary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
    /// Map showing the selected itinerary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<RenderSet>,
}

/// Resolve itineraries between two points and draw the selected one
#[instrument(skip(state))]
pub async fn resolve_route(
    State(state): State<AppState>,
    Query(params): Query<RouteParams>,
) -> Result<Json<RouteResponse>, ApiError> {
    let resolver = state.route_resolver.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("Directions are not configured".to_string())
    })?;

    let origin = point_or_unset(params.origin_lat, params.origin_lon);
    let destination = point_or_unset(params.dest_lat, params.dest_lon);

    let itineraries = resolver
        .resolve_route(origin, destination, &params.dest_label)
        .await?;

    if itineraries.is_empty() {
        debug!("No route found");
        return Ok(Json(RouteResponse {
            status: RouteStatus::NoRoute,
            itineraries: Vec::new(),
            selected: None,
            scene: None,
        }));
    }

    let selected = itineraries.get(params.selected).ok_or_else(|| {
        ApiError::BadRequest(format!(
            "Selected itinerary {} out of range (0..{})",
            params.selected,
            itineraries.len()
        ))
    })?;

    let map = Arc::new(RenderSetMap::new());
    MapPresenter::new(map.clone())
        .with_connector_max_meters(state.config.routing.connector_max_meters)
        .show_itinerary(origin, destination, selected);

    Ok(Json(RouteResponse {
        status: RouteStatus::Ok,
        selected: Some(params.selected),
        scene: Some(map.take()),
        itineraries: itineraries
            .into_iter()
            .map(|itinerary| ItineraryResponse {
                summary: itinerary.format_summary(),
                itinerary,
            })
            .collect(),
    }))
}
