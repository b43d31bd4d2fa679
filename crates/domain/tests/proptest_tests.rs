//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{BoundingBox, EARTH_RADIUS_METERS, GeoPoint, distance};
use domain::{Itinerary, TravelMode};
use proptest::prelude::*;

// ============================================================================
// GeoPoint Property Tests
// ============================================================================

mod geo_point_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_point(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoPoint::new(lat, lon);
            prop_assert!(result.is_ok());

            let point = result.unwrap();
            prop_assert!((point.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((point.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoPoint::new(lat, lon).is_err());
        }

        #[test]
        fn region_points_are_valid(
            lat in 33.0f64..=39.0f64,
            lon in 124.0f64..=132.0f64
        ) {
            let point = GeoPoint::new_unchecked(lat, lon);
            prop_assert!(point.is_in_service_region());
            prop_assert!(point.is_valid());
            prop_assert!(!point.is_unset());
        }
    }
}

// ============================================================================
// Distance Property Tests
// ============================================================================

mod distance_tests {
    use super::*;

    proptest! {
        #[test]
        fn distance_to_self_is_zero(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let point = GeoPoint::new_unchecked(lat, lon);
            prop_assert!(distance(&point, &point).abs() < 1e-6);
        }

        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0f64,
            lon1 in -180.0f64..=180.0f64,
            lat2 in -90.0f64..=90.0f64,
            lon2 in -180.0f64..=180.0f64
        ) {
            let a = GeoPoint::new_unchecked(lat1, lon1);
            let b = GeoPoint::new_unchecked(lat2, lon2);
            prop_assert!((distance(&a, &b) - distance(&b, &a)).abs() < 1e-6);
        }

        #[test]
        fn distance_is_bounded_by_half_circumference(
            lat1 in -90.0f64..=90.0f64,
            lon1 in -180.0f64..=180.0f64,
            lat2 in -90.0f64..=90.0f64,
            lon2 in -180.0f64..=180.0f64
        ) {
            let a = GeoPoint::new_unchecked(lat1, lon1);
            let b = GeoPoint::new_unchecked(lat2, lon2);
            let d = distance(&a, &b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_METERS + 1.0);
        }

        #[test]
        fn distance_grows_with_latitude_separation(
            lat in 33.0f64..38.0f64,
            lon in 124.0f64..132.0f64,
            near in 0.001f64..0.5f64,
            extra in 0.001f64..0.5f64
        ) {
            let origin = GeoPoint::new_unchecked(lat, lon);
            let closer = GeoPoint::new_unchecked(lat + near, lon);
            let farther = GeoPoint::new_unchecked(lat + near + extra, lon);
            prop_assert!(distance(&origin, &closer) < distance(&origin, &farther));
        }
    }
}

// ============================================================================
// Itinerary / BoundingBox Property Tests
// ============================================================================

mod itinerary_tests {
    use super::*;

    proptest! {
        #[test]
        fn walking_duration_is_rounded_distance_over_speed(meters in 0.0f64..700.0f64) {
            let itinerary = Itinerary::walking(
                GeoPoint::seoul_station(),
                GeoPoint::seoul_city_hall(),
                None,
                meters,
                80.0,
            );
            let expected = (meters / 80.0).round();
            prop_assert!((f64::from(itinerary.total_time_minutes) - expected).abs() < f64::EPSILON);
            prop_assert_eq!(itinerary.segments.len(), 1);
            prop_assert_eq!(itinerary.segments[0].mode, TravelMode::Walk);
        }

        #[test]
        fn bounding_box_contains_all_points(
            coords in prop::collection::vec((33.0f64..39.0f64, 124.0f64..132.0f64), 1..20)
        ) {
            let points: Vec<GeoPoint> = coords
                .iter()
                .map(|&(lat, lon)| GeoPoint::new_unchecked(lat, lon))
                .collect();
            let bounds = BoundingBox::from_points(&points).unwrap();
            let all_in_bounds = points.iter().all(|p| {
                (bounds.bottom..=bounds.top).contains(&p.latitude())
                    && (bounds.left..=bounds.right).contains(&p.longitude())
            });
            prop_assert!(all_in_bounds);
        }
    }
}
