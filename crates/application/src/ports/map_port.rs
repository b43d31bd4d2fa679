//! Map rendering port
//!
//! The map widget is an external collaborator. Services draw through this
//! port instead of touching a global map object, so route drawing can be
//! exercised without a real widget.

use domain::{BoundingBox, GeoPoint};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Default zoom level when centering on a single location
pub const DEFAULT_ZOOM: u8 = 12;

/// Camera position for a fresh render
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// Center of the map
    pub center: GeoPoint,
    /// Zoom level
    pub zoom: u8,
}

impl MapView {
    /// View centered on `center` at the default zoom
    #[must_use]
    pub const fn centered(center: GeoPoint) -> Self {
        Self {
            center,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::centered(GeoPoint::seoul_city_hall())
    }
}

/// What a marker stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// The searched or selected location
    Selected,
    /// Route origin
    Origin,
    /// Route destination
    Destination,
    /// A recommended spot
    Spot,
}

/// A marker placement request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Marker position
    pub position: GeoPoint,
    /// Marker role
    pub kind: MarkerKind,
    /// Tooltip/title text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Custom icon content (HTML), default icon when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_html: Option<String>,
}

impl Marker {
    /// A marker with the default icon
    #[must_use]
    pub const fn new(position: GeoPoint, kind: MarkerKind) -> Self {
        Self {
            position,
            kind,
            title: None,
            icon_html: None,
        }
    }

    /// Set the title
    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set custom icon content
    #[must_use]
    pub fn with_icon(mut self, icon_html: impl Into<String>) -> Self {
        self.icon_html = Some(icon_html.into());
        self
    }
}

/// Stroke style of a polyline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// CSS color
    pub color: String,
    /// Stroke width in pixels
    pub weight: u8,
    /// Opacity between 0 and 1
    pub opacity: f32,
    /// Dashed instead of solid
    pub dashed: bool,
}

impl StrokeStyle {
    /// Solid line used for transit paths
    #[must_use]
    pub fn transit() -> Self {
        Self {
            color: "#2563eb".to_string(),
            weight: 6,
            opacity: 0.85,
            dashed: false,
        }
    }

    /// Line used for walking-only routes
    #[must_use]
    pub fn walking() -> Self {
        Self {
            color: "#16a34a".to_string(),
            weight: 5,
            opacity: 0.85,
            dashed: true,
        }
    }

    /// Thin dashed connector between the origin and the first transit stop
    #[must_use]
    pub fn connector() -> Self {
        Self {
            color: "#6b7280".to_string(),
            weight: 3,
            opacity: 0.7,
            dashed: true,
        }
    }
}

/// A polyline drawing request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    /// Ordered points
    pub path: Vec<GeoPoint>,
    /// Stroke style
    pub style: StrokeStyle,
}

/// Pixel padding kept free on each side when fitting bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    /// Top padding in pixels
    pub top: u32,
    /// Right padding in pixels
    pub right: u32,
    /// Bottom padding in pixels
    pub bottom: u32,
    /// Left padding in pixels
    pub left: u32,
}

impl Padding {
    /// Same padding on every side
    #[must_use]
    pub const fn uniform(pixels: u32) -> Self {
        Self {
            top: pixels,
            right: pixels,
            bottom: pixels,
            left: pixels,
        }
    }

    /// Padding that leaves room for the recommendation side panel on the right
    #[must_use]
    pub const fn side_panel() -> Self {
        Self {
            top: 100,
            right: 400,
            bottom: 100,
            left: 100,
        }
    }
}

/// Port for the map rendering collaborator
///
/// `render` starts a new render set: everything drawn before it is
/// discarded wholesale.
#[cfg_attr(test, automock)]
pub trait MapPort: Send + Sync {
    /// Start a new render set centered on the given view
    fn render(&self, view: MapView);

    /// Place a marker
    fn add_marker(&self, marker: Marker);

    /// Draw a polyline
    fn add_polyline(&self, polyline: Polyline);

    /// Pan/zoom so that `bounds` is visible, keeping `padding` free
    fn fit_bounds(&self, bounds: BoundingBox, padding: Padding);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn MapPort>();
    }

    #[test]
    fn default_view_is_seoul() {
        let view = MapView::default();
        assert_eq!(view.center, GeoPoint::seoul_city_hall());
        assert_eq!(view.zoom, 12);
    }

    #[test]
    fn marker_builder() {
        let marker = Marker::new(GeoPoint::seoul_station(), MarkerKind::Origin)
            .titled("서울역")
            .with_icon("<div></div>");
        assert_eq!(marker.title.as_deref(), Some("서울역"));
        assert!(marker.icon_html.is_some());
    }

    #[test]
    fn marker_kind_serialization() {
        let json = serde_json::to_string(&MarkerKind::Destination).unwrap();
        assert_eq!(json, "\"destination\"");
    }

    #[test]
    fn side_panel_padding() {
        let padding = Padding::side_panel();
        assert_eq!(padding.right, 400);
        assert_eq!(Padding::uniform(50).left, 50);
    }
}
