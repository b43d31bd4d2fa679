//! Application layer - Use cases and orchestration
//!
//! Contains the route resolver, route path assembly, the map presenter and
//! the place/recommendation services, together with the port definitions
//! that infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
