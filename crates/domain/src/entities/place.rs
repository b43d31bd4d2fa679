//! Places returned by search and recommended spots

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoPoint;

/// A place found by free-text search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    /// Provider place identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Road-name address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_address: Option<String>,
    /// Lot-number (jibun) address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jibun_address: Option<String>,
    /// Provider category path (e.g. "여행 > 관광,명소 > 고궁")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Coordinates
    pub location: GeoPoint,
}

impl Place {
    /// Preferred address for display: road address, then jibun address
    #[must_use]
    pub fn display_address(&self) -> Option<&str> {
        self.road_address
            .as_deref()
            .filter(|a| !a.is_empty())
            .or_else(|| self.jibun_address.as_deref().filter(|a| !a.is_empty()))
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_address() {
            Some(address) => write!(f, "{} ({address})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A recommended point of interest near a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Spot {
    /// Backend content identifier
    pub content_id: String,
    /// Display title
    pub title: String,
    /// Street address
    pub address: String,
    /// Representative image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Distance from the queried location in meters
    pub distance_meters: f64,
    /// Coordinates, when the backend supplies valid ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl Spot {
    /// Distance formatted as kilometers with one decimal, e.g. "약 1.2km"
    #[must_use]
    pub fn format_distance(&self) -> String {
        format!("약 {:.1}km", self.distance_meters / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_place() -> Place {
        Place {
            id: "18619781".to_string(),
            name: "경복궁".to_string(),
            road_address: Some("서울 종로구 사직로 161".to_string()),
            jibun_address: Some("서울 종로구 세종로 1-91".to_string()),
            category: None,
            location: GeoPoint::new_unchecked(37.579617, 126.977041),
        }
    }

    #[test]
    fn test_display_address_prefers_road() {
        let place = sample_place();
        assert_eq!(place.display_address(), Some("서울 종로구 사직로 161"));
    }

    #[test]
    fn test_display_address_falls_back_to_jibun() {
        let mut place = sample_place();
        place.road_address = Some(String::new());
        assert_eq!(place.display_address(), Some("서울 종로구 세종로 1-91"));

        place.jibun_address = None;
        assert_eq!(place.display_address(), None);
        assert_eq!(place.to_string(), "경복궁");
    }

    #[test]
    fn test_spot_format_distance() {
        let spot = Spot {
            content_id: "126508".to_string(),
            title: "경복궁".to_string(),
            address: "서울 종로구 사직로 161".to_string(),
            image_url: None,
            distance_meters: 1_234.0,
            location: None,
        };
        assert_eq!(spot.format_distance(), "약 1.2km");
    }
}
