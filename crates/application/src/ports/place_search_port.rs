//! Place search port
//!
//! Free-text place/keyword search returning candidate places with
//! coordinates.

use async_trait::async_trait;
use domain::Place;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place search operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaceSearchPort: Send + Sync {
    /// Search places matching a free-text query, best match first
    async fn search(&self, query: &str) -> Result<Vec<Place>, ApplicationError>;
}
