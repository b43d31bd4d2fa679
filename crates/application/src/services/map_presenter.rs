//! Map presenter
//!
//! Draws locations, recommendations and itineraries through a [`MapPort`].
//! Every `show_*` call starts a new render set.

use std::sync::Arc;

use domain::{BoundingBox, GeoPoint, Itinerary, Spot};
use tracing::{debug, instrument};

use super::route_path::{DEFAULT_CONNECTOR_MAX_METERS, RoutePath, assemble_route_path};
use crate::ports::{MapPort, MapView, Marker, MarkerKind, Padding, Polyline, StrokeStyle};

/// Icon used for the selected location marker
const SELECTED_ICON_HTML: &str = r#"<div style="width:18px;height:18px;border-radius:50%;background:#ef4444;border:3px solid #ffffff;box-shadow:0 0 6px rgba(0,0,0,0.4)"></div>"#;

/// Drives the map collaborator
pub struct MapPresenter {
    map: Arc<dyn MapPort>,
    connector_max_meters: f64,
}

impl std::fmt::Debug for MapPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapPresenter")
            .field("connector_max_meters", &self.connector_max_meters)
            .finish_non_exhaustive()
    }
}

impl MapPresenter {
    /// Create a presenter drawing onto `map`
    pub fn new(map: Arc<dyn MapPort>) -> Self {
        Self {
            map,
            connector_max_meters: DEFAULT_CONNECTOR_MAX_METERS,
        }
    }

    /// Override the maximum connector length
    #[must_use]
    pub const fn with_connector_max_meters(mut self, meters: f64) -> Self {
        self.connector_max_meters = meters;
        self
    }

    /// Center on a single location and highlight it
    #[instrument(skip(self))]
    pub fn show_location(&self, point: GeoPoint, title: Option<&str>) {
        self.map.render(MapView::centered(point));

        let mut marker = Marker::new(point, MarkerKind::Selected).with_icon(SELECTED_ICON_HTML);
        if let Some(title) = title {
            marker = marker.titled(title);
        }
        self.map.add_marker(marker);
    }

    /// Draw recommended spots around `center`
    ///
    /// Bounds are fitted over the center and every located spot, leaving
    /// room for the side panel. With no located spots the view stays
    /// centered.
    #[instrument(skip(self, spots), fields(spots = spots.len()))]
    pub fn show_recommendations(&self, center: GeoPoint, spots: &[Spot]) {
        self.map.render(MapView::centered(center));
        self.map
            .add_marker(Marker::new(center, MarkerKind::Selected).with_icon(SELECTED_ICON_HTML));

        let located: Vec<(GeoPoint, &Spot)> = spots
            .iter()
            .filter_map(|spot| spot.location.map(|location| (location, spot)))
            .collect();

        for (location, spot) in &located {
            self.map
                .add_marker(Marker::new(*location, MarkerKind::Spot).titled(spot.title.clone()));
        }

        if located.is_empty() {
            debug!("No located spots, skipping bounds fit");
            return;
        }

        let mut bounds = BoundingBox::around(center);
        for (location, _) in &located {
            bounds.extend(location);
        }
        self.map.fit_bounds(bounds, Padding::side_panel());
    }

    /// Draw an itinerary between `origin` and `destination`
    ///
    /// Returns the assembled path so callers can reuse it.
    #[instrument(skip(self, itinerary), fields(minutes = itinerary.total_time_minutes))]
    pub fn show_itinerary(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        itinerary: &Itinerary,
    ) -> RoutePath {
        let path = assemble_route_path(origin, destination, itinerary, self.connector_max_meters);

        self.map.render(MapView::centered(origin));
        self.map.add_marker(Marker::new(origin, MarkerKind::Origin));
        self.map
            .add_marker(Marker::new(destination, MarkerKind::Destination));

        let style = if itinerary.is_walking_only() {
            StrokeStyle::walking()
        } else {
            StrokeStyle::transit()
        };
        if path.points.len() >= 2 {
            self.map.add_polyline(Polyline {
                path: path.points.clone(),
                style,
            });
        }

        if let Some((from, to)) = path.connector {
            self.map.add_polyline(Polyline {
                path: vec![from, to],
                style: StrokeStyle::connector(),
            });
        }

        if let Some(bounds) = BoundingBox::from_points(&path.points) {
            self.map.fit_bounds(bounds, Padding::uniform(60));
        }

        debug!(points = path.points.len(), "Itinerary drawn");
        path
    }
}
