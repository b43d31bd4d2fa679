//! Place search and recommendation integration for tripmap
//!
//! Provides free-text place search via the
//! [Kakao Local](https://developers.kakao.com/docs/latest/ko/local/dev-guide)
//! keyword API and nearby point-of-interest recommendations from the
//! recommendation backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_places::{KakaoConfig, KakaoPlaceClient, PlaceSearchClient};
//!
//! let client = KakaoPlaceClient::new(&KakaoConfig::with_api_key("..."))?;
//! let places = client.search_keyword("서울시청").await?;
//! ```

mod config;
mod error;
mod kakao;
mod models;
mod recommendation;

pub use config::{KakaoConfig, RecommendationConfig};
pub use error::PlacesError;
pub use kakao::{KakaoPlaceClient, PlaceSearchClient};
pub use models::{KeywordPlace, RecommendedSpot};
pub use recommendation::{BackendRecommendationClient, RecommendationClient, SpotQuery};
