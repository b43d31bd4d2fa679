//! Directions adapter - Implements DirectionsPort using the ODsay client

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{CandidateLeg, DirectionsPort, RouteCandidate};
use async_trait::async_trait;
use domain::{BoundingBox, DetailGeometry, GeoPoint, Lane, PathSection, TravelMode};
use integration_transit::{
    Coordinate, DirectionsClient, LaneGeometry, OdsayClient, OdsayConfig, SubPath, TrafficType,
    TransitError, TransitPath,
};
use tracing::{debug, instrument, warn};

/// ODsay lane class for bus lines
const LANE_CLASS_BUS: i64 = 1;
/// ODsay lane class for subway lines
const LANE_CLASS_SUBWAY: i64 = 2;

/// Adapter for transit directions backed by ODsay
pub struct DirectionsAdapter {
    client: Arc<dyn DirectionsClient>,
}

impl std::fmt::Debug for DirectionsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsAdapter")
            .field("client", &"DirectionsClient")
            .finish()
    }
}

impl DirectionsAdapter {
    /// Create an adapter from an ODsay configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &OdsayConfig) -> Result<Self, ApplicationError> {
        let client = OdsayClient::new(config).map_err(map_transit_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn DirectionsClient>) -> Self {
        Self { client }
    }

    fn convert_mode(traffic_type: TrafficType) -> Option<TravelMode> {
        match traffic_type {
            TrafficType::Walk => Some(TravelMode::Walk),
            t if t.is_bus() => Some(TravelMode::Bus),
            t if t.is_rail() => Some(TravelMode::Rail),
            _ => None,
        }
    }

    fn convert_point(coordinate: &Coordinate) -> GeoPoint {
        GeoPoint::from_xy(coordinate.x, coordinate.y)
    }

    fn convert_leg(sub_path: &SubPath) -> Option<CandidateLeg> {
        let Some(mode) = Self::convert_mode(sub_path.traffic_type) else {
            warn!(traffic_type = ?sub_path.traffic_type, "Skipping leg with unknown traffic type");
            return None;
        };

        Some(CandidateLeg {
            mode,
            start: sub_path.start.as_ref().map(Self::convert_point),
            end: sub_path.end.as_ref().map(Self::convert_point),
            start_label: sub_path.start_name.clone(),
            end_label: sub_path.end_name.clone(),
            duration_minutes: sub_path.section_time,
            distance_meters: sub_path.distance,
            line_name: sub_path
                .lines
                .iter()
                .find_map(|line| line.display_name())
                .map(str::to_string),
        })
    }

    fn convert_geometry(geometry: &LaneGeometry) -> DetailGeometry {
        DetailGeometry {
            lanes: geometry
                .lanes
                .iter()
                .map(|lane| Lane {
                    name: None,
                    mode: match lane.class {
                        Some(LANE_CLASS_BUS) => Some(TravelMode::Bus),
                        Some(LANE_CLASS_SUBWAY) => Some(TravelMode::Rail),
                        _ => None,
                    },
                    sections: lane
                        .sections
                        .iter()
                        .map(|section| PathSection {
                            points: section.points.iter().map(Self::convert_point).collect(),
                        })
                        .collect(),
                })
                .collect(),
            boundary: geometry.boundary.as_ref().map(|b| BoundingBox {
                top: b.top,
                left: b.left,
                bottom: b.bottom,
                right: b.right,
            }),
        }
    }

    fn convert_path(path: &TransitPath) -> RouteCandidate {
        RouteCandidate {
            total_time_minutes: path.info.total_time,
            total_distance_meters: path.info.total_distance,
            payment: path.info.payment,
            bus_transit_count: path.info.bus_transit_count,
            subway_transit_count: path.info.subway_transit_count,
            legs: path.sub_paths.iter().filter_map(Self::convert_leg).collect(),
            geometry: path.geometry.as_ref().map(Self::convert_geometry),
        }
    }
}

fn map_transit_error(error: TransitError) -> ApplicationError {
    match error {
        TransitError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        other => {
            warn!(retryable = other.is_retryable(), error = %other, "Transit provider failed");
            ApplicationError::ExternalService(format!("Transit search failed: {other}"))
        },
    }
}

#[async_trait]
impl DirectionsPort for DirectionsAdapter {
    #[instrument(skip(self))]
    async fn search_routes(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
    ) -> Result<Vec<RouteCandidate>, ApplicationError> {
        let paths = self
            .client
            .search_paths(
                origin.latitude(),
                origin.longitude(),
                destination.latitude(),
                destination.longitude(),
            )
            .await
            .map_err(map_transit_error)?;

        debug!(count = paths.len(), "Converting transit paths");
        Ok(paths.iter().map(Self::convert_path).collect())
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
