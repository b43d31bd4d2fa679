//! Place search handlers

use std::sync::Arc;

use application::{MapPresenter, PlaceService};
use axum::{
    Json,
    extract::{Query, State},
};
use domain::Place;
use infrastructure::{RenderSet, RenderSetMap};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters for place lookups
#[derive(Debug, Deserialize)]
pub struct PlaceQuery {
    /// Free-text query
    #[serde(default)]
    pub query: String,
}

/// Response for place search
#[derive(Debug, Serialize)]
pub struct PlacesResponse {
    pub places: Vec<Place>,
}

/// Response for a single place lookup
#[derive(Debug, Serialize)]
pub struct LocateResponse {
    pub place: Place,
    /// Map showing the place
    pub scene: RenderSet,
}

fn place_service(state: &AppState) -> Result<&Arc<PlaceService>, ApiError> {
    state
        .place_service
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable("Place search is not configured".to_string()))
}

/// Search places matching a query
#[instrument(skip(state))]
pub async fn search_places(
    State(state): State<AppState>,
    Query(params): Query<PlaceQuery>,
) -> Result<Json<PlacesResponse>, ApiError> {
    let places = place_service(&state)?.search(&params.query).await?;
    Ok(Json(PlacesResponse { places }))
}

/// Resolve a query to its best match and draw it
#[instrument(skip(state))]
pub async fn locate_place(
    State(state): State<AppState>,
    Query(params): Query<PlaceQuery>,
) -> Result<Json<LocateResponse>, ApiError> {
    let place = place_service(&state)?.locate(&params.query).await?;

    let map = Arc::new(RenderSetMap::new());
    MapPresenter::new(map.clone()).show_location(place.location, Some(&place.name));

    Ok(Json(LocateResponse {
        place,
        scene: map.take(),
    }))
}
