//! Geographic point value object and haversine distance

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean earth radius used by the haversine formula, in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Latitude range of the service region (inclusive)
const REGION_LATITUDE: (f64, f64) = (33.0, 39.0);

/// Longitude range of the service region (inclusive)
const REGION_LONGITUDE: (f64, f64) = (124.0, 132.0);

/// A geographic point with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCoordinates;

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180"
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

impl GeoPoint {
    /// Create a new point with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        let point = Self::new_unchecked(latitude, longitude);
        if point.is_valid() {
            Ok(point)
        } else {
            Err(InvalidCoordinates)
        }
    }

    /// Create a point without validation
    ///
    /// Used for raw provider coordinates, which may carry sentinel values
    /// and are filtered later with [`GeoPoint::is_in_service_region`].
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a point from provider `x`/`y` values (x = longitude, y = latitude)
    #[must_use]
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self::new_unchecked(y, x)
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether both coordinates are inside the global valid range
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Whether either coordinate is zero or not a finite number ("no location")
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_unset(&self) -> bool {
        self.latitude == 0.0
            || self.longitude == 0.0
            || !self.latitude.is_finite()
            || !self.longitude.is_finite()
    }

    /// Whether the point lies inside the service region
    ///
    /// Points outside are treated as sentinel values rather than real
    /// coordinates when assembling route paths.
    #[must_use]
    pub fn is_in_service_region(&self) -> bool {
        (REGION_LATITUDE.0..=REGION_LATITUDE.1).contains(&self.latitude)
            && (REGION_LONGITUDE.0..=REGION_LONGITUDE.1).contains(&self.longitude)
    }

    /// Great-circle distance to another point in meters
    #[must_use]
    pub fn distance_meters(&self, other: &Self) -> f64 {
        distance(self, other)
    }
}

/// Haversine distance between two points in meters
///
/// Returns 0 when either point has a zero or non-finite coordinate, so an unset location
/// never produces a spurious distance. Callers that need to tell "no
/// location" from "same location" check [`GeoPoint::is_unset`] first.
#[must_use]
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    if a.is_unset() || b.is_unset() {
        return 0.0;
    }

    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
        (delta_lon / 2.0).sin().powi(2),
        (delta_lat / 2.0).sin().powi(2),
    )
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Well-known points
impl GeoPoint {
    /// Seoul City Hall, the default map center
    #[must_use]
    pub const fn seoul_city_hall() -> Self {
        Self::new_unchecked(37.5665, 126.9780)
    }

    /// Seoul Station
    #[must_use]
    pub const fn seoul_station() -> Self {
        Self::new_unchecked(37.5557, 126.9730)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let point = GeoPoint::new(37.5665, 126.978).expect("valid coordinates");
        assert!((point.latitude() - 37.5665).abs() < f64::EPSILON);
        assert!((point.longitude() - 126.978).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(-91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 181.0).is_err());
        assert!(GeoPoint::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_from_xy_swaps_axes() {
        let point = GeoPoint::from_xy(126.978, 37.5665);
        assert!((point.latitude() - 37.5665).abs() < f64::EPSILON);
        assert!((point.longitude() - 126.978).abs() < f64::EPSILON);
    }

    #[test]
    fn test_service_region() {
        assert!(GeoPoint::seoul_city_hall().is_in_service_region());
        assert!(GeoPoint::new_unchecked(33.0, 124.0).is_in_service_region());
        assert!(GeoPoint::new_unchecked(39.0, 132.0).is_in_service_region());
        assert!(!GeoPoint::new_unchecked(0.0, 126.978).is_in_service_region());
        assert!(!GeoPoint::new_unchecked(37.5, 0.0).is_in_service_region());
        assert!(!GeoPoint::new_unchecked(52.52, 13.405).is_in_service_region());
    }

    #[test]
    fn test_unset() {
        assert!(GeoPoint::new_unchecked(0.0, 126.9).is_unset());
        assert!(GeoPoint::new_unchecked(37.5, 0.0).is_unset());
        assert!(!GeoPoint::seoul_station().is_unset());
    }

    #[test]
    fn test_display() {
        let point = GeoPoint::new(37.5665, 126.978).expect("valid");
        assert_eq!(point.to_string(), "37.566500, 126.978000");
    }

    #[test]
    fn test_distance_same_point() {
        let point = GeoPoint::seoul_city_hall();
        assert!(distance(&point, &point).abs() < 1e-6);
    }

    #[test]
    fn test_distance_unset_is_zero() {
        let unset = GeoPoint::new_unchecked(0.0, 0.0);
        assert!(distance(&unset, &GeoPoint::seoul_station()).abs() < f64::EPSILON);
        assert!(distance(&GeoPoint::seoul_station(), &unset).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distance_non_finite_is_zero() {
        let nan = GeoPoint::new_unchecked(f64::NAN, 127.0);
        let inf = GeoPoint::new_unchecked(37.5, f64::INFINITY);
        let point = GeoPoint::new_unchecked(37.5, 127.0);
        assert!(nan.is_unset());
        assert!(inf.is_unset());
        assert!(distance(&nan, &point).abs() < f64::EPSILON);
        assert!(distance(&point, &inf).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distance_along_meridian() {
        // 0.7 degrees of latitude on a sphere of radius 6_371_000 m
        let a = GeoPoint::new_unchecked(37.0, 127.0);
        let b = GeoPoint::new_unchecked(37.7, 127.0);
        let expected = EARTH_RADIUS_METERS * 0.7_f64.to_radians();
        assert!((distance(&a, &b) - expected).abs() < 1.0);
        assert!((distance(&a, &b) - 77_837.0).abs() < 100.0);
    }

    #[test]
    fn test_distance_city_scale() {
        // Seoul City Hall to Seoul Station is a little over 1.2 km
        let meters = GeoPoint::seoul_city_hall().distance_meters(&GeoPoint::seoul_station());
        assert!((1_100.0..1_400.0).contains(&meters));
    }

    #[test]
    fn test_serialization() {
        let point = GeoPoint::new(37.5665, 126.978).expect("valid");
        let json = serde_json::to_string(&point).expect("serialize");
        assert!(json.contains("latitude"));
        assert!(json.contains("126.978"));

        let deserialized: GeoPoint = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(point, deserialized);
    }
}
