//! HTTP request handlers

pub mod health;
pub mod places;
pub mod recommendations;
pub mod routes;

use domain::GeoPoint;

/// Point from optional query coordinates; missing values yield the unset
/// point so the services report a missing location
fn point_or_unset(latitude: Option<f64>, longitude: Option<f64>) -> GeoPoint {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => GeoPoint::new_unchecked(lat, lon),
        _ => GeoPoint::new_unchecked(0.0, 0.0),
    }
}
