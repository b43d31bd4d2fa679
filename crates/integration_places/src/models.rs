//! Place and recommendation models
//!
//! Coordinates follow the provider convention: `x` is the longitude and
//! `y` the latitude.

use serde::{Deserialize, Serialize};

/// A place returned by keyword search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordPlace {
    /// Provider place id
    pub id: String,
    /// Place name
    pub name: String,
    /// Category path (e.g. "여행 > 관광,명소 > 고궁")
    pub category: Option<String>,
    /// Road-name address
    pub road_address: Option<String>,
    /// Lot-number (jibun) address
    pub address: Option<String>,
    /// Longitude
    pub x: f64,
    /// Latitude
    pub y: f64,
}

/// A recommended spot from the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedSpot {
    /// Content id
    pub content_id: String,
    /// Title
    pub title: String,
    /// Street address
    pub address: String,
    /// Representative image URL
    pub image_url: Option<String>,
    /// Distance from the queried location in meters
    pub distance_meters: f64,
    /// Longitude, when supplied
    pub x: Option<f64>,
    /// Latitude, when supplied
    pub y: Option<f64>,
}
