//! Recommendation backend client
//!
//! Fetches nearby points of interest for a location and time of day from
//! `GET /api/recommend/list3`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveTime;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::RecommendationConfig;
use crate::error::PlacesError;
use crate::models::RecommendedSpot;

/// Maximum number of body characters kept in error messages
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Parameters of a spot lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotQuery {
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
    /// Planned time of day
    pub time: NaiveTime,
    /// Content type filter (e.g. 12 for attractions)
    pub content_type_id: Option<u16>,
}

/// Trait for recommendation backend clients
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    /// Fetch recommended spots; order is whatever the backend returns
    async fn fetch_spots(&self, query: &SpotQuery) -> Result<Vec<RecommendedSpot>, PlacesError>;
}

/// HTTP client for the recommendation backend
#[derive(Debug)]
pub struct BackendRecommendationClient {
    client: Client,
    config: RecommendationConfig,
}

impl BackendRecommendationClient {
    /// Create a new recommendation backend client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &RecommendationConfig) -> Result<Self, PlacesError> {
        config.validate().map_err(PlacesError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("tripmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlacesError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn parse_spots_response(body: &str) -> Result<Vec<RecommendedSpot>, PlacesError> {
        let raw: Vec<RawSpot> =
            serde_json::from_str(body).map_err(|e| PlacesError::ParseError(e.to_string()))?;

        Ok(raw
            .into_iter()
            .map(|spot| RecommendedSpot {
                content_id: lenient_string(spot.content_id.as_ref()).unwrap_or_default(),
                title: spot.title,
                address: spot.addr1,
                image_url: spot.first_image.filter(|url| !url.trim().is_empty()),
                distance_meters: lenient_f64(spot.distance_meters.as_ref()).unwrap_or_default(),
                x: lenient_f64(spot.mapx.as_ref()),
                y: lenient_f64(spot.mapy.as_ref()),
            })
            .collect())
    }
}

#[async_trait]
impl RecommendationClient for BackendRecommendationClient {
    #[instrument(skip(self))]
    async fn fetch_spots(&self, query: &SpotQuery) -> Result<Vec<RecommendedSpot>, PlacesError> {
        let url = format!("{}/api/recommend/list3", self.config.base_url);

        let mut params = vec![
            ("lat", format!("{:.6}", query.latitude)),
            ("lon", format!("{:.6}", query.longitude)),
            ("time", query.time.format("%H:%M:%S").to_string()),
        ];
        if let Some(content_type_id) = query.content_type_id {
            params.push(("contentTypeId", content_type_id.to_string()));
        }

        debug!("Fetching recommended spots");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| PlacesError::from_send(&e, self.config.timeout_secs))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::ParseError(e.to_string()))?;

        if !status.is_success() {
            return Err(PlacesError::RequestFailed {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let spots = Self::parse_spots_response(&body)?;
        debug!(count = spots.len(), "Recommended spots fetched");
        Ok(spots)
    }
}

/// Read a JSON number or numeric string
fn lenient_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a JSON string or number as a string
fn lenient_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Raw backend spot; numeric fields arrive as numbers or strings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSpot {
    content_id: Option<Value>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    addr1: String,
    #[serde(alias = "firstimage")]
    first_image: Option<String>,
    distance_meters: Option<Value>,
    mapx: Option<Value>,
    mapy: Option<Value>,
}
