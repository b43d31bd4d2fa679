//! Transit data models
//!
//! Typed representations of ODsay path search results and lane geometry.
//! Coordinates follow the provider convention: `x` is the longitude and
//! `y` the latitude.

use serde::{Deserialize, Serialize};

/// Kind of a path sub-section as reported by the provider's `trafficType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficType {
    /// Subway (1)
    Subway,
    /// City bus (2)
    Bus,
    /// Walking (3)
    Walk,
    /// Train (4)
    Train,
    /// Express bus (5)
    ExpressBus,
    /// Intercity bus (6)
    IntercityBus,
    /// Any code this client does not know
    Unknown(i64),
}

impl TrafficType {
    /// Map a raw `trafficType` code
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Subway,
            2 => Self::Bus,
            3 => Self::Walk,
            4 => Self::Train,
            5 => Self::ExpressBus,
            6 => Self::IntercityBus,
            other => Self::Unknown(other),
        }
    }

    /// Whether this is a bus of any kind
    #[must_use]
    pub const fn is_bus(&self) -> bool {
        matches!(self, Self::Bus | Self::ExpressBus | Self::IntercityBus)
    }

    /// Whether this is a rail service (subway or train)
    #[must_use]
    pub const fn is_rail(&self) -> bool {
        matches!(self, Self::Subway | Self::Train)
    }
}

/// A coordinate pair in provider convention
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude
    pub x: f64,
    /// Latitude
    pub y: f64,
}

/// Summary of a candidate path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathInfo {
    /// Total travel time in minutes
    pub total_time: u32,
    /// Total distance in meters
    pub total_distance: Option<f64>,
    /// Fare in won
    pub payment: Option<u32>,
    /// Number of bus rides
    pub bus_transit_count: u32,
    /// Number of subway rides
    pub subway_transit_count: u32,
    /// Opaque key used to request the lane geometry
    pub map_obj: Option<String>,
}

/// A line serving a transit sub-path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInfo {
    /// Subway line name (e.g. "수도권 2호선")
    pub name: Option<String>,
    /// Bus number (e.g. "472")
    pub bus_no: Option<String>,
}

impl LineInfo {
    /// Display name: bus number first, then the line name
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.bus_no
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.is_empty()))
    }
}

/// One mode-homogeneous section of a candidate path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubPath {
    /// Section kind
    pub traffic_type: TrafficType,
    /// Section time in minutes
    pub section_time: u32,
    /// Section distance in meters
    pub distance: Option<f64>,
    /// Boarding stop or station name
    pub start_name: Option<String>,
    /// Alighting stop or station name
    pub end_name: Option<String>,
    /// Boarding coordinates (often absent on walking sections)
    pub start: Option<Coordinate>,
    /// Alighting coordinates (often absent on walking sections)
    pub end: Option<Coordinate>,
    /// Lines serving this section, first is preferred
    pub lines: Vec<LineInfo>,
}

/// One section of a lane's drawn path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSection {
    /// Ordered coordinates
    pub points: Vec<Coordinate>,
}

/// Drawn path of one line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphLane {
    /// Lane class (1 bus, 2 subway)
    pub class: Option<i64>,
    /// Lane type (bus type or subway line code)
    pub lane_type: Option<i64>,
    /// Ordered sections
    pub sections: Vec<GraphSection>,
}

/// Bounding box reported with lane geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    /// Max latitude
    pub top: f64,
    /// Min longitude
    pub left: f64,
    /// Min latitude
    pub bottom: f64,
    /// Max longitude
    pub right: f64,
}

/// Lane geometry of a candidate path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaneGeometry {
    /// Lanes in travel order
    pub lanes: Vec<GraphLane>,
    /// Bounds of the whole path
    pub boundary: Option<Boundary>,
}

impl LaneGeometry {
    /// Total number of coordinates across every lane
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.lanes
            .iter()
            .flat_map(|lane| lane.sections.iter())
            .map(|section| section.points.len())
            .sum()
    }
}

/// A candidate path with its optional geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitPath {
    /// Path summary
    pub info: PathInfo,
    /// Ordered sections
    pub sub_paths: Vec<SubPath>,
    /// Lane geometry; `None` when it was not requested or could not be loaded
    pub geometry: Option<LaneGeometry>,
}
