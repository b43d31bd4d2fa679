//! Place search adapter - Implements PlaceSearchPort using Kakao keyword search

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::PlaceSearchPort;
use async_trait::async_trait;
use domain::{GeoPoint, Place};
use integration_places::{KakaoConfig, KakaoPlaceClient, KeywordPlace, PlaceSearchClient};
use tracing::{debug, instrument};

use super::map_places_error;

/// Adapter for free-text place search backed by Kakao Local
pub struct PlaceSearchAdapter {
    client: Arc<dyn PlaceSearchClient>,
}

impl std::fmt::Debug for PlaceSearchAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceSearchAdapter")
            .field("client", &"PlaceSearchClient")
            .finish()
    }
}

impl PlaceSearchAdapter {
    /// Create an adapter from a Kakao configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &KakaoConfig) -> Result<Self, ApplicationError> {
        let client = KakaoPlaceClient::new(config).map_err(map_places_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn PlaceSearchClient>) -> Self {
        Self { client }
    }

    fn convert_place(place: KeywordPlace) -> Place {
        Place {
            id: place.id,
            name: place.name,
            road_address: place.road_address.filter(|a| !a.trim().is_empty()),
            jibun_address: place.address.filter(|a| !a.trim().is_empty()),
            category: place.category,
            location: GeoPoint::from_xy(place.x, place.y),
        }
    }
}

#[async_trait]
impl PlaceSearchPort for PlaceSearchAdapter {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<Place>, ApplicationError> {
        let places = self
            .client
            .search_keyword(query)
            .await
            .map_err(map_places_error)?;

        debug!(count = places.len(), "Place search completed");
        Ok(places.into_iter().map(Self::convert_place).collect())
    }
}
