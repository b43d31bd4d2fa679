//! Route path assembly
//!
//! Turns a chosen itinerary into the ordered point list a map widget draws,
//! plus an optional short connector from the origin to the start of the
//! provider path.

use domain::{GeoPoint, Itinerary, TravelMode, distance};
use serde::{Deserialize, Serialize};

/// Maximum origin-to-path distance for which a connector is drawn
pub const DEFAULT_CONNECTOR_MAX_METERS: f64 = 2_000.0;

/// Drawable path of an itinerary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    /// Ordered points without consecutive duplicates
    pub points: Vec<GeoPoint>,
    /// Short line from the origin to the first provider path point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<(GeoPoint, GeoPoint)>,
}

/// Assemble the drawable path of `itinerary`
///
/// Points are collected in order: the origin, every detail geometry point,
/// the endpoints of every walking segment, then the destination. Each source
/// is restricted to the service region so provider sentinels (such as zero
/// latitudes) never reach the map.
#[must_use]
pub fn assemble_route_path(
    origin: GeoPoint,
    destination: GeoPoint,
    itinerary: &Itinerary,
    connector_max_meters: f64,
) -> RoutePath {
    let geometry_points = itinerary
        .detail_geometry
        .iter()
        .flat_map(|geometry| geometry.points().copied());

    let walk_points = itinerary
        .segments
        .iter()
        .filter(|segment| segment.mode == TravelMode::Walk)
        .flat_map(|segment| [segment.start_point, segment.end_point]);

    let mut points: Vec<GeoPoint> = std::iter::once(origin)
        .chain(geometry_points)
        .chain(walk_points)
        .chain(std::iter::once(destination))
        .filter(GeoPoint::is_in_service_region)
        .collect();
    points.dedup();

    let connector = itinerary
        .detail_geometry
        .as_ref()
        .and_then(|geometry| geometry.points().find(|p| p.is_in_service_region()).copied())
        .filter(|_| origin.is_in_service_region())
        .filter(|first| distance(&origin, first) < connector_max_meters)
        .map(|first| (origin, first));

    RoutePath { points, connector }
}
