//! Public transit directions integration for tripmap
//!
//! Provides public transit path search via the [ODsay](https://lab.odsay.com)
//! API, covering bus and subway services in South Korea.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`DirectionsClient`] defines the interface for path
//! search and lane geometry, implemented by [`OdsayClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_transit::{DirectionsClient, OdsayClient, OdsayConfig};
//!
//! let config = OdsayConfig::with_api_key("...");
//! let client = OdsayClient::new(&config)?;
//!
//! let paths = client.search_paths(
//!     37.5665, 126.9780, // Seoul City Hall
//!     37.5133, 127.1002, // Jamsil
//! ).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DirectionsClient, OdsayClient};
pub use config::OdsayConfig;
pub use error::TransitError;
pub use models::{
    Boundary, Coordinate, GraphLane, GraphSection, LaneGeometry, LineInfo, PathInfo, SubPath,
    TrafficType, TransitPath,
};
