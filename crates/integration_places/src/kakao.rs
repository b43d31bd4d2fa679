//! Kakao Local keyword search client
//!
//! Resolves free-text queries to places with coordinates using the
//! `v2/local/search/keyword.json` endpoint. Results are cached per
//! normalised query.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::KakaoConfig;
use crate::error::PlacesError;
use crate::models::KeywordPlace;

/// Maximum number of cached queries
const CACHE_CAPACITY: u64 = 1_000;

/// Maximum number of body characters kept in error messages
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Trait for place search clients
#[async_trait]
pub trait PlaceSearchClient: Send + Sync {
    /// Search places by keyword, best match first
    async fn search_keyword(&self, query: &str) -> Result<Vec<KeywordPlace>, PlacesError>;
}

/// Kakao Local keyword search client with result caching
#[derive(Debug)]
pub struct KakaoPlaceClient {
    client: Client,
    config: KakaoConfig,
    cache: Option<Cache<String, Vec<KeywordPlace>>>,
}

impl KakaoPlaceClient {
    /// Create a new Kakao keyword search client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &KakaoConfig) -> Result<Self, PlacesError> {
        config.validate().map_err(PlacesError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("tripmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlacesError::ConnectionFailed(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(Duration::from_secs(config.cache_ttl_minutes * 60))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
        })
    }

    /// Parse a keyword search response, skipping documents without usable coordinates
    fn parse_keyword_response(body: &str) -> Result<Vec<KeywordPlace>, PlacesError> {
        let raw: RawKeywordResponse =
            serde_json::from_str(body).map_err(|e| PlacesError::ParseError(e.to_string()))?;

        Ok(raw
            .documents
            .into_iter()
            .filter_map(|doc| {
                let (Ok(x), Ok(y)) = (doc.x.trim().parse::<f64>(), doc.y.trim().parse::<f64>())
                else {
                    warn!(id = %doc.id, "Skipping place with unparseable coordinates");
                    return None;
                };
                Some(KeywordPlace {
                    id: doc.id,
                    name: doc.place_name,
                    category: non_empty(doc.category_name),
                    road_address: non_empty(doc.road_address_name),
                    address: non_empty(doc.address_name),
                    x,
                    y,
                })
            })
            .collect())
    }
}

#[async_trait]
impl PlaceSearchClient for KakaoPlaceClient {
    #[instrument(skip(self))]
    async fn search_keyword(&self, query: &str) -> Result<Vec<KeywordPlace>, PlacesError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(PlacesError::InvalidRequest(
                "Query must not be empty".to_string(),
            ));
        }

        let cache_key = query.to_lowercase();
        if let Some(cache) = &self.cache {
            if let Some(places) = cache.get(&cache_key).await {
                debug!(%query, "Place search cache hit");
                return Ok(places);
            }
        }

        let url = format!("{}/v2/local/search/keyword.json", self.config.base_url);
        let params = [
            ("query", query.to_string()),
            ("size", self.config.max_results.to_string()),
        ];

        debug!(%query, "Searching places");

        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("KakaoAK {}", self.config.rest_api_key),
            )
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

        let places = Self::parse_keyword_response(&body)?;

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, places.clone()).await;
        }

        debug!(count = places.len(), "Places found");
        Ok(places)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Raw Kakao keyword search response
#[derive(Debug, Deserialize)]
struct RawKeywordResponse {
    #[serde(default)]
    documents: Vec<RawDocument>,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    id: String,
    #[serde(default)]
    place_name: String,
    category_name: Option<String>,
    road_address_name: Option<String>,
    address_name: Option<String>,
    #[serde(default)]
    x: String,
    #[serde(default)]
    y: String,
}
