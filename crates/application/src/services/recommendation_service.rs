//! Nearby recommendation service

use std::sync::Arc;

use domain::Spot;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{RecommendationPort, RecommendationQuery};

/// Recommends spots near a location, nearest first
pub struct RecommendationService {
    recommendations: Arc<dyn RecommendationPort>,
}

impl std::fmt::Debug for RecommendationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationService").finish_non_exhaustive()
    }
}

impl RecommendationService {
    /// Create a new recommendation service
    pub fn new(recommendations: Arc<dyn RecommendationPort>) -> Self {
        Self { recommendations }
    }

    /// Fetch spots for `query`, sorted ascending by distance
    ///
    /// # Errors
    ///
    /// Returns a domain error for an unset or invalid location and
    /// `ExternalService` if the backend fails.
    #[instrument(skip(self), fields(location = %query.location))]
    pub async fn nearby(&self, query: &RecommendationQuery) -> Result<Vec<Spot>, ApplicationError> {
        if query.location.is_unset() {
            return Err(domain::DomainError::missing_location("location").into());
        }
        if !query.location.is_valid() {
            return Err(domain::DomainError::InvalidCoordinates(domain::InvalidCoordinates).into());
        }

        let mut spots = self.recommendations.recommend(query).await?;
        spots.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));

        debug!(count = spots.len(), "Recommendations fetched");
        Ok(spots)
    }
}
