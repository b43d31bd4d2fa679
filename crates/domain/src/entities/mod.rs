//! Entities - route and place models

mod itinerary;
mod place;

pub use itinerary::{DetailGeometry, Itinerary, Lane, PathSection, Segment, TravelMode};
pub use place::{Place, Spot};
