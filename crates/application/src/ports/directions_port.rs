//! Transit directions port
//!
//! Defines the interface for requesting multi-step transit itineraries.
//! Adapters in the infrastructure layer implement this port using a
//! directions provider and hand back provider-neutral candidates, which
//! the route resolver normalises into itineraries.

use async_trait::async_trait;
use domain::{DetailGeometry, GeoPoint, TravelMode};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// One leg of a raw provider candidate
///
/// Endpoints are optional because providers commonly omit coordinates on
/// walking legs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateLeg {
    /// Travel mode
    pub mode: TravelMode,
    /// Start coordinates, if reported
    pub start: Option<GeoPoint>,
    /// End coordinates, if reported
    pub end: Option<GeoPoint>,
    /// Start stop name
    pub start_label: Option<String>,
    /// End stop name
    pub end_label: Option<String>,
    /// Leg duration in minutes
    pub duration_minutes: u32,
    /// Leg distance in meters
    pub distance_meters: Option<f64>,
    /// Bus number or rail line name
    pub line_name: Option<String>,
}

impl CandidateLeg {
    /// A leg with only a mode and a duration
    #[must_use]
    pub const fn new(mode: TravelMode, duration_minutes: u32) -> Self {
        Self {
            mode,
            start: None,
            end: None,
            start_label: None,
            end_label: None,
            duration_minutes,
            distance_meters: None,
            line_name: None,
        }
    }

    /// Set both endpoints
    #[must_use]
    pub const fn between(mut self, start: GeoPoint, end: GeoPoint) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Set the line name
    #[must_use]
    pub fn on_line(mut self, line_name: impl Into<String>) -> Self {
        self.line_name = Some(line_name.into());
        self
    }
}

/// A raw candidate route as returned by a directions provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    /// Total travel time in minutes
    pub total_time_minutes: u32,
    /// Total distance in meters
    pub total_distance_meters: Option<f64>,
    /// Fare in won
    pub payment: Option<u32>,
    /// Number of bus rides
    pub bus_transit_count: u32,
    /// Number of subway rides
    pub subway_transit_count: u32,
    /// Ordered legs
    pub legs: Vec<CandidateLeg>,
    /// Detailed drawing geometry, when the provider supplied one
    pub geometry: Option<DetailGeometry>,
}

impl RouteCandidate {
    /// A candidate with a total time and no legs
    #[must_use]
    pub const fn new(total_time_minutes: u32) -> Self {
        Self {
            total_time_minutes,
            total_distance_meters: None,
            payment: None,
            bus_transit_count: 0,
            subway_transit_count: 0,
            legs: Vec::new(),
            geometry: None,
        }
    }
}

/// Port for transit directions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Request candidate transit routes between two points
    ///
    /// An empty list means the provider found no route; failures (transport,
    /// HTTP status, provider-reported errors) are returned as errors.
    async fn search_routes(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
    ) -> Result<Vec<RouteCandidate>, ApplicationError>;

    /// Check if the directions provider is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn DirectionsPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn DirectionsPort>();
    }

    #[test]
    fn candidate_leg_builder() {
        let start = GeoPoint::seoul_station();
        let end = GeoPoint::seoul_city_hall();
        let leg = CandidateLeg::new(TravelMode::Rail, 3)
            .between(start, end)
            .on_line("1호선");

        assert_eq!(leg.start, Some(start));
        assert_eq!(leg.end, Some(end));
        assert_eq!(leg.line_name.as_deref(), Some("1호선"));
        assert_eq!(leg.duration_minutes, 3);
    }

    #[test]
    fn route_candidate_new_is_empty() {
        let candidate = RouteCandidate::new(25);
        assert_eq!(candidate.total_time_minutes, 25);
        assert!(candidate.legs.is_empty());
        assert!(candidate.geometry.is_none());
    }
}
