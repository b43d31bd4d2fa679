//! Recommendation port
//!
//! Nearby point-of-interest recommendations for a location and time of day.

use async_trait::async_trait;
use chrono::NaiveTime;
use domain::{GeoPoint, PlaceCategory, Spot};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Parameters of a recommendation request
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    /// Location to recommend around
    pub location: GeoPoint,
    /// Time of day the visit is planned for
    pub time: NaiveTime,
    /// Restrict to one category
    pub category: Option<PlaceCategory>,
}

impl RecommendationQuery {
    /// Create a query for any category
    #[must_use]
    pub const fn new(location: GeoPoint, time: NaiveTime) -> Self {
        Self {
            location,
            time,
            category: None,
        }
    }

    /// Restrict the query to one category
    #[must_use]
    pub const fn with_category(mut self, category: PlaceCategory) -> Self {
        self.category = Some(category);
        self
    }
}

/// Port for recommendation lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecommendationPort: Send + Sync {
    /// Fetch recommended spots; order is not guaranteed
    async fn recommend(&self, query: &RecommendationQuery) -> Result<Vec<Spot>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RecommendationPort>();
    }

    #[test]
    fn query_builder() {
        let time = NaiveTime::from_hms_opt(13, 30, 0).unwrap();
        let query = RecommendationQuery::new(GeoPoint::seoul_station(), time)
            .with_category(PlaceCategory::Restaurant);
        assert_eq!(query.category, Some(PlaceCategory::Restaurant));
        assert_eq!(query.time, time);
    }
}
