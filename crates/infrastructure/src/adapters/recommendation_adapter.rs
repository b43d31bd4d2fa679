//! Recommendation adapter - Implements RecommendationPort using the
//! recommendation backend client

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{RecommendationPort, RecommendationQuery};
use async_trait::async_trait;
use domain::{GeoPoint, Spot};
use integration_places::{
    BackendRecommendationClient, RecommendationClient, RecommendationConfig, RecommendedSpot,
    SpotQuery,
};
use tracing::{debug, instrument};

use super::map_places_error;

/// Adapter for nearby spot recommendations
pub struct RecommendationAdapter {
    client: Arc<dyn RecommendationClient>,
}

impl std::fmt::Debug for RecommendationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationAdapter")
            .field("client", &"RecommendationClient")
            .finish()
    }
}

impl RecommendationAdapter {
    /// Create an adapter from a backend configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &RecommendationConfig) -> Result<Self, ApplicationError> {
        let client = BackendRecommendationClient::new(config).map_err(map_places_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn RecommendationClient>) -> Self {
        Self { client }
    }

    fn convert_query(query: &RecommendationQuery) -> SpotQuery {
        SpotQuery {
            latitude: query.location.latitude(),
            longitude: query.location.longitude(),
            time: query.time,
            content_type_id: query.category.map(|c| c.content_type_id()),
        }
    }

    fn convert_spot(spot: RecommendedSpot) -> Spot {
        let location = match (spot.x, spot.y) {
            (Some(x), Some(y)) => {
                Some(GeoPoint::from_xy(x, y)).filter(GeoPoint::is_in_service_region)
            },
            _ => None,
        };

        Spot {
            content_id: spot.content_id,
            title: spot.title,
            address: spot.address,
            image_url: spot.image_url,
            distance_meters: spot.distance_meters,
            location,
        }
    }
}

#[async_trait]
impl RecommendationPort for RecommendationAdapter {
    #[instrument(skip(self))]
    async fn recommend(&self, query: &RecommendationQuery) -> Result<Vec<Spot>, ApplicationError> {
        let spots = self
            .client
            .fetch_spots(&Self::convert_query(query))
            .await
            .map_err(map_places_error)?;

        debug!(count = spots.len(), "Recommendations fetched");
        Ok(spots.into_iter().map(Self::convert_spot).collect())
    }
}
