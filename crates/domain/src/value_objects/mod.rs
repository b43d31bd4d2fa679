//! Value Objects - Immutable, identity-less domain primitives

mod bounding_box;
mod geo_point;
mod place_category;

pub use bounding_box::BoundingBox;
pub use geo_point::{EARTH_RADIUS_METERS, GeoPoint, InvalidCoordinates, distance};
pub use place_category::PlaceCategory;
