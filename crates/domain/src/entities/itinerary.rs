//! Itinerary entities
//!
//! An [`Itinerary`] is one complete candidate route from an origin to a
//! destination, made of mode-homogeneous [`Segment`]s. Transit itineraries
//! may carry provider-supplied [`DetailGeometry`] used only for drawing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::{BoundingBox, GeoPoint};

/// Travel mode of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TravelMode {
    /// On foot
    Walk,
    /// Any bus service
    Bus,
    /// Subway or train
    Rail,
}

impl TravelMode {
    /// Emoji representation for compact summaries
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Walk => "🚶",
            Self::Bus => "🚌",
            Self::Rail => "🚇",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Walk => "Walk",
            Self::Bus => "Bus",
            Self::Rail => "Rail",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One leg of an itinerary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    /// Travel mode
    pub mode: TravelMode,
    /// Where the leg starts
    pub start_point: GeoPoint,
    /// Where the leg ends
    pub end_point: GeoPoint,
    /// Name of the start (stop or station)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_label: Option<String>,
    /// Name of the end (stop or station)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_label: Option<String>,
    /// Leg duration in minutes
    pub duration_minutes: u32,
    /// Leg distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    /// Bus number or rail line name (transit legs only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_name: Option<String>,
}

impl Segment {
    /// Format this segment as a detail line
    #[must_use]
    pub fn format_detail(&self) -> String {
        let emoji = self.mode.emoji();
        let minutes = self.duration_minutes;

        if self.mode == TravelMode::Walk {
            #[allow(clippy::cast_possible_truncation)]
            let dist = self
                .distance_meters
                .map(|d| format!(" ({}m)", d.round() as i64))
                .unwrap_or_default();
            return format!("{emoji} Walk {minutes}min{dist}");
        }

        let line = self.line_name.as_deref().unwrap_or("?");
        let from = self.start_label.as_deref().unwrap_or("?");
        let to = self.end_label.as_deref().unwrap_or("?");
        format!("{emoji} *{line}* {from} → {to} ({minutes}min)")
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_detail())
    }
}

/// A contiguous run of a lane's drawn path
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathSection {
    /// Raw coordinate points, possibly including sentinel values
    pub points: Vec<GeoPoint>,
}

/// The drawn path of one transit line used by an itinerary
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Lane {
    /// Line name, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Mode of the line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TravelMode>,
    /// Ordered path sections
    pub sections: Vec<PathSection>,
}

/// Fine-grained provider path used purely for map rendering
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetailGeometry {
    /// Named lanes in travel order
    pub lanes: Vec<Lane>,
    /// Provider-reported bounds of the whole path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<BoundingBox>,
}

impl DetailGeometry {
    /// Every raw point of every section of every lane, in order
    pub fn points(&self) -> impl Iterator<Item = &GeoPoint> {
        self.lanes
            .iter()
            .flat_map(|lane| lane.sections.iter())
            .flat_map(|section| section.points.iter())
    }

    /// First raw point of the geometry
    #[must_use]
    pub fn first_point(&self) -> Option<GeoPoint> {
        self.points().next().copied()
    }

    /// Whether the geometry carries no points at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points().next().is_none()
    }
}

/// One complete candidate route between an origin and a destination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    /// Total travel time in minutes
    pub total_time_minutes: u32,
    /// Total travel distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance_meters: Option<f64>,
    /// Fare in won, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<u32>,
    /// Number of bus rides
    #[serde(default)]
    pub bus_transit_count: u32,
    /// Number of subway rides
    #[serde(default)]
    pub subway_transit_count: u32,
    /// Ordered legs
    pub segments: Vec<Segment>,
    /// Provider path for drawing (transit itineraries only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_geometry: Option<DetailGeometry>,
}

impl Itinerary {
    /// Build a single-leg walking itinerary
    ///
    /// The duration is `distance / speed` rounded to the nearest minute.
    #[must_use]
    pub fn walking(
        origin: GeoPoint,
        destination: GeoPoint,
        destination_label: Option<String>,
        distance_meters: f64,
        speed_meters_per_minute: f64,
    ) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let minutes = (distance_meters / speed_meters_per_minute).round().max(0.0) as u32;

        Self {
            total_time_minutes: minutes,
            total_distance_meters: Some(distance_meters),
            payment: None,
            bus_transit_count: 0,
            subway_transit_count: 0,
            segments: vec![Segment {
                mode: TravelMode::Walk,
                start_point: origin,
                end_point: destination,
                start_label: None,
                end_label: destination_label,
                duration_minutes: minutes,
                distance_meters: Some(distance_meters),
                line_name: None,
            }],
            detail_geometry: None,
        }
    }

    /// Whether this is a pure walk
    ///
    /// An itinerary without legs is not a walk; neither is one that reports
    /// rides or carries transit geometry.
    #[must_use]
    pub fn is_walking_only(&self) -> bool {
        !self.segments.is_empty()
            && self.segments.iter().all(|s| s.mode == TravelMode::Walk)
            && self.bus_transit_count == 0
            && self.subway_transit_count == 0
            && self.detail_geometry.is_none()
    }

    /// Number of transfers between transit legs
    #[must_use]
    pub fn transfers(&self) -> u32 {
        let rides = self
            .segments
            .iter()
            .filter(|s| s.mode != TravelMode::Walk)
            .count();
        u32::try_from(rides.saturating_sub(1)).unwrap_or(u32::MAX)
    }

    /// Format as a compact one-line summary
    #[must_use]
    pub fn format_summary(&self) -> String {
        let minutes = self.total_time_minutes;

        if self.is_walking_only() {
            return format!("🚶 {minutes}min walk");
        }

        let lines: Vec<&str> = self
            .segments
            .iter()
            .filter(|s| s.mode != TravelMode::Walk)
            .filter_map(|s| s.line_name.as_deref())
            .collect();
        let route = lines.join(" → ");
        let fare = self
            .payment
            .map(|p| format!(", {p}원"))
            .unwrap_or_default();
        let transfers = self.transfers();

        format!("{minutes}min ({transfers}x 환승{fare}) {route}")
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_summary())
    }
}
