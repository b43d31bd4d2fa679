//! Route resolver
//!
//! Decides between a locally synthesised walking itinerary and a provider
//! transit search, normalises provider candidates into itineraries and ranks
//! them by total travel time. Stateless: every call builds a fresh list.

use std::sync::Arc;

use domain::{DomainError, GeoPoint, Itinerary, Segment, distance};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{CandidateLeg, DirectionsPort, RouteCandidate};

/// Below this distance a walking itinerary is synthesised locally
pub const DEFAULT_WALKING_THRESHOLD_METERS: f64 = 700.0;

/// Assumed average walking pace
pub const DEFAULT_WALKING_SPEED_METERS_PER_MINUTE: f64 = 80.0;

/// Tuning knobs for the resolver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteResolverConfig {
    /// Distances strictly below this are walked without asking the provider
    #[serde(default = "default_walking_threshold")]
    pub walking_threshold_meters: f64,

    /// Walking pace used for synthesised itineraries
    #[serde(default = "default_walking_speed")]
    pub walking_speed_meters_per_minute: f64,
}

const fn default_walking_threshold() -> f64 {
    DEFAULT_WALKING_THRESHOLD_METERS
}

const fn default_walking_speed() -> f64 {
    DEFAULT_WALKING_SPEED_METERS_PER_MINUTE
}

impl Default for RouteResolverConfig {
    fn default() -> Self {
        Self {
            walking_threshold_meters: default_walking_threshold(),
            walking_speed_meters_per_minute: default_walking_speed(),
        }
    }
}

impl RouteResolverConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is negative or the speed is not positive.
    pub fn validate(&self) -> Result<(), String> {
        if !self.walking_threshold_meters.is_finite() || self.walking_threshold_meters < 0.0 {
            return Err("walking_threshold_meters must be a non-negative number".to_string());
        }

        if !self.walking_speed_meters_per_minute.is_finite()
            || self.walking_speed_meters_per_minute <= 0.0
        {
            return Err("walking_speed_meters_per_minute must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Resolves a point-to-point route into ranked itineraries
pub struct RouteResolver {
    directions: Arc<dyn DirectionsPort>,
    config: RouteResolverConfig,
}

impl std::fmt::Debug for RouteResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteResolver")
            .field("directions", &"<DirectionsPort>")
            .field("config", &self.config)
            .finish()
    }
}

impl RouteResolver {
    /// Create a resolver with the default thresholds
    pub fn new(directions: Arc<dyn DirectionsPort>) -> Self {
        Self::with_config(directions, RouteResolverConfig::default())
    }

    /// Create a resolver with custom thresholds
    pub fn with_config(directions: Arc<dyn DirectionsPort>, config: RouteResolverConfig) -> Self {
        Self { directions, config }
    }

    /// Current configuration
    #[must_use]
    pub const fn config(&self) -> &RouteResolverConfig {
        &self.config
    }

    /// Whether the directions provider is reachable
    pub async fn directions_available(&self) -> bool {
        self.directions.is_available().await
    }

    /// Resolve a route from `origin` to `destination`
    ///
    /// Returns itineraries sorted ascending by total time (ties keep provider
    /// order). An empty list means no route was found.
    ///
    /// # Errors
    ///
    /// Returns a domain error if either point is unset or out of range, and
    /// `ApplicationError::ExternalService` if the directions provider fails.
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    pub async fn resolve_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        destination_label: &str,
    ) -> Result<Vec<Itinerary>, ApplicationError> {
        ensure_located(&origin, "origin")?;
        ensure_located(&destination, "destination")?;

        let label = Some(destination_label.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        let meters = distance(&origin, &destination);

        if meters < self.config.walking_threshold_meters {
            debug!(meters, "Short distance, synthesising walking itinerary");
            return Ok(vec![Itinerary::walking(
                origin,
                destination,
                label,
                meters,
                self.config.walking_speed_meters_per_minute,
            )]);
        }

        debug!(meters, "Requesting transit routes");
        let candidates = self
            .directions
            .search_routes(&origin, &destination)
            .await?;

        let mut itineraries: Vec<Itinerary> = candidates
            .into_iter()
            .map(|c| normalize_candidate(c, origin, destination, label.as_deref()))
            .collect();
        itineraries.sort_by_key(|i| i.total_time_minutes);

        info!(count = itineraries.len(), "Routes resolved");
        Ok(itineraries)
    }
}

fn ensure_located(point: &GeoPoint, role: &str) -> Result<(), DomainError> {
    if point.is_unset() {
        return Err(DomainError::missing_location(role));
    }
    if !point.is_valid() {
        return Err(DomainError::InvalidCoordinates(domain::InvalidCoordinates));
    }
    Ok(())
}

fn usable(point: Option<GeoPoint>) -> Option<GeoPoint> {
    point.filter(|p| !p.is_unset() && p.is_valid())
}

/// Convert a provider candidate into an itinerary
///
/// Legs without coordinates are anchored to their neighbours: a leg starts
/// where the previous one ended (the origin for the first leg) and ends where
/// the next one starts (the destination for the last leg).
fn normalize_candidate(
    candidate: RouteCandidate,
    origin: GeoPoint,
    destination: GeoPoint,
    destination_label: Option<&str>,
) -> Itinerary {
    let next_starts: Vec<Option<GeoPoint>> = candidate
        .legs
        .iter()
        .skip(1)
        .map(|leg| usable(leg.start))
        .chain(std::iter::once(Some(destination)))
        .collect();

    let last = candidate.legs.len().saturating_sub(1);
    let mut previous_end = origin;
    let mut segments = Vec::with_capacity(candidate.legs.len());

    for (index, leg) in candidate.legs.into_iter().enumerate() {
        let CandidateLeg {
            mode,
            start,
            end,
            start_label,
            end_label,
            duration_minutes,
            distance_meters,
            line_name,
        } = leg;

        let start_point = usable(start).unwrap_or(previous_end);
        let end_point = usable(end)
            .or(next_starts[index])
            .unwrap_or(destination);
        let end_label = if index == last {
            end_label.or_else(|| destination_label.map(str::to_string))
        } else {
            end_label
        };

        previous_end = end_point;
        segments.push(Segment {
            mode,
            start_point,
            end_point,
            start_label,
            end_label,
            duration_minutes,
            distance_meters,
            line_name,
        });
    }

    Itinerary {
        total_time_minutes: candidate.total_time_minutes,
        total_distance_meters: candidate.total_distance_meters,
        payment: candidate.payment,
        bus_transit_count: candidate.bus_transit_count,
        subway_transit_count: candidate.subway_transit_count,
        segments,
        detail_geometry: candidate.geometry,
    }
}
