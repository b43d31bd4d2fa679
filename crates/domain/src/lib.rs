//! Domain layer for tripmap
//!
//! Contains the geographic value objects, the haversine distance estimator,
//! and the itinerary and place entities shared by every other crate.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
