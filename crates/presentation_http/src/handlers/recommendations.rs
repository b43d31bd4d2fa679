//! Recommendation handlers

use std::sync::Arc;

use application::{MapPresenter, RecommendationQuery};
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveTime;
use domain::{PlaceCategory, Spot};
use infrastructure::{RenderSet, RenderSetMap};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::point_or_unset;
use crate::{error::ApiError, state::AppState};

/// Visit time assumed when the request names none
const DEFAULT_VISIT_TIME: (u32, u32, u32) = (13, 30, 0);

/// Query parameters for recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Visit time as `HH:MM` or `HH:MM:SS`
    pub time: Option<String>,
    /// Content type id (e.g. 39 for restaurants)
    pub category: Option<u16>,
}

/// Response for recommendations
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// Spots, nearest first
    pub spots: Vec<Spot>,
    /// Map showing the spots
    pub scene: RenderSet,
}

fn parse_time(value: Option<&str>) -> Result<NaiveTime, ApiError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        let (h, m, s) = DEFAULT_VISIT_TIME;
        return NaiveTime::from_hms_opt(h, m, s)
            .ok_or_else(|| ApiError::Internal("Invalid default visit time".to_string()));
    };

    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| ApiError::BadRequest(format!("Invalid time: {value}")))
}

fn parse_category(value: Option<u16>) -> Result<Option<PlaceCategory>, ApiError> {
    value
        .map(|id| {
            PlaceCategory::from_content_type_id(id)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown category: {id}")))
        })
        .transpose()
}

/// Recommend spots near a location
#[instrument(skip(state))]
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let location = point_or_unset(params.lat, params.lon);
    let query = RecommendationQuery {
        location,
        time: parse_time(params.time.as_deref())?,
        category: parse_category(params.category)?,
    };

    let spots = state.recommendation_service.nearby(&query).await?;

    let map = Arc::new(RenderSetMap::new());
    MapPresenter::new(map.clone()).show_recommendations(location, &spots);

    Ok(Json(RecommendationsResponse {
        spots,
        scene: map.take(),
    }))
}
