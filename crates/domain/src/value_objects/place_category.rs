//! Recommendation content categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a recommended place, keyed by the tourism content type id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    /// Tourist attraction
    Attraction,
    /// Cultural facility
    Culture,
    /// Festival, performance or event
    Festival,
    /// Travel course
    Course,
    /// Leisure sports
    Leisure,
    /// Lodging
    Lodging,
    /// Shopping
    Shopping,
    /// Restaurant
    Restaurant,
}

impl PlaceCategory {
    /// Every category, in display order
    pub const ALL: [Self; 8] = [
        Self::Attraction,
        Self::Culture,
        Self::Festival,
        Self::Course,
        Self::Leisure,
        Self::Lodging,
        Self::Shopping,
        Self::Restaurant,
    ];

    /// Content type id used by the recommendation backend
    #[must_use]
    pub const fn content_type_id(&self) -> u16 {
        match self {
            Self::Attraction => 12,
            Self::Culture => 14,
            Self::Festival => 15,
            Self::Course => 25,
            Self::Leisure => 28,
            Self::Lodging => 32,
            Self::Shopping => 38,
            Self::Restaurant => 39,
        }
    }

    /// Map a content type id back to a category
    #[must_use]
    pub fn from_content_type_id(id: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.content_type_id() == id)
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Attraction => "관광지",
            Self::Culture => "문화시설",
            Self::Festival => "행사/공연/축제",
            Self::Course => "여행코스",
            Self::Leisure => "레포츠",
            Self::Lodging => "숙박",
            Self::Shopping => "쇼핑",
            Self::Restaurant => "음식점",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
