//! tripmap HTTP presentation layer
//!
//! Thin JSON API over the route resolver, place search and recommendation
//! services. Map drawing is returned as a `scene` for the browser widget.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
