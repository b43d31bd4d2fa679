//! ODsay transit directions client
//!
//! Searches candidate public transit paths with `searchPubTransPathT` and
//! fetches the drawable lane geometry of each candidate with `loadLane`.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::OdsayConfig;
use crate::error::TransitError;
use crate::models::{
    Boundary, Coordinate, GraphLane, GraphSection, LaneGeometry, LineInfo, PathInfo, SubPath,
    TrafficType, TransitPath,
};

/// Provider codes meaning "no route between these points"
const NO_RESULT_CODES: [&str; 2] = ["-98", "-99"];

/// Maximum number of body characters kept in error messages
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Trait for transit directions clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Search candidate paths between two coordinate pairs
    ///
    /// An empty list means the provider found no route.
    async fn search_paths(
        &self,
        origin_lat: f64,
        origin_lon: f64,
        dest_lat: f64,
        dest_lon: f64,
    ) -> Result<Vec<TransitPath>, TransitError>;

    /// Load the lane geometry identified by a path's `mapObj`
    async fn load_lane(&self, map_obj: &str) -> Result<LaneGeometry, TransitError>;

    /// Check if the directions service is reachable
    async fn is_healthy(&self) -> bool;
}

/// ODsay-based directions client
#[derive(Debug)]
pub struct OdsayClient {
    client: Client,
    config: OdsayConfig,
}

impl OdsayClient {
    /// Create a new ODsay client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &OdsayConfig) -> Result<Self, TransitError> {
        config.validate().map_err(TransitError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("tripmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Issue a GET request and return the JSON body
    ///
    /// Provider logic errors embedded in a success response are surfaced as
    /// [`TransitError::ProviderError`].
    async fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, TransitError> {
        let url = format!("{}/{endpoint}", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransitError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TransitError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransitError::ParseError(e.to_string()))?;

        if !status.is_success() {
            return Err(TransitError::RequestFailed {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|e| TransitError::ParseError(e.to_string()))?;

        if let Some(err) = provider_error(&value) {
            return Err(err);
        }

        Ok(value)
    }

    /// Attach lane geometry to every path that has a `mapObj`
    ///
    /// Lane requests run concurrently. A failed request leaves that path
    /// without geometry.
    async fn attach_geometry(&self, paths: &mut [TransitPath]) {
        let requests = paths.iter().map(|path| async move {
            let map_obj = path.info.map_obj.as_deref()?;
            match self.load_lane(map_obj).await {
                Ok(geometry) => Some(geometry),
                Err(e) => {
                    warn!(map_obj, error = %e, "Failed to load lane geometry");
                    None
                },
            }
        });

        let geometries = join_all(requests).await;
        for (path, geometry) in paths.iter_mut().zip(geometries) {
            path.geometry = geometry;
        }
    }

    /// Parse a `searchPubTransPathT` result into typed paths
    fn parse_search_response(value: Value) -> Result<Vec<TransitPath>, TransitError> {
        let raw: RawSearchResponse =
            serde_json::from_value(value).map_err(|e| TransitError::ParseError(e.to_string()))?;

        let Some(result) = raw.result else {
            return Ok(Vec::new());
        };

        Ok(result.path.into_iter().filter_map(Self::convert_path).collect())
    }

    /// Paths without a total time cannot be ranked and are dropped
    fn convert_path(raw: RawPath) -> Option<TransitPath> {
        let Some(total_time) = raw.info.total_time else {
            warn!("Skipping transit path without total time");
            return None;
        };

        let info = PathInfo {
            total_time,
            total_distance: raw.info.total_distance,
            payment: raw.info.payment,
            bus_transit_count: raw.info.bus_transit_count.unwrap_or_default(),
            subway_transit_count: raw.info.subway_transit_count.unwrap_or_default(),
            map_obj: raw.info.map_obj.filter(|m| !m.is_empty()),
        };

        Some(TransitPath {
            info,
            sub_paths: raw.sub_path.into_iter().map(Self::convert_sub_path).collect(),
            geometry: None,
        })
    }

    fn convert_sub_path(raw: RawSubPath) -> SubPath {
        SubPath {
            traffic_type: TrafficType::from_code(raw.traffic_type),
            section_time: raw.section_time.unwrap_or_default(),
            distance: raw.distance,
            start_name: raw.start_name,
            end_name: raw.end_name,
            start: coordinate(raw.start_x, raw.start_y),
            end: coordinate(raw.end_x, raw.end_y),
            lines: raw
                .lane
                .into_iter()
                .map(|lane| LineInfo {
                    name: lane.name,
                    bus_no: lane.bus_no,
                })
                .collect(),
        }
    }

    /// Parse a `loadLane` result into lane geometry
    fn parse_lane_response(value: Value) -> Result<LaneGeometry, TransitError> {
        let raw: RawLaneResponse =
            serde_json::from_value(value).map_err(|e| TransitError::ParseError(e.to_string()))?;

        let result = raw
            .result
            .ok_or_else(|| TransitError::ParseError("loadLane response has no result".to_string()))?;

        let lanes = result
            .lane
            .into_iter()
            .map(|lane| GraphLane {
                class: lane.class,
                lane_type: lane.lane_type,
                sections: lane
                    .section
                    .into_iter()
                    .map(|section| GraphSection {
                        points: section
                            .graph_pos
                            .into_iter()
                            .map(|pos| Coordinate { x: pos.x, y: pos.y })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Ok(LaneGeometry {
            lanes,
            boundary: result.boundary.map(|b| Boundary {
                top: b.top,
                left: b.left,
                bottom: b.bottom,
                right: b.right,
            }),
        })
    }
}

#[async_trait]
impl DirectionsClient for OdsayClient {
    #[instrument(skip(self))]
    async fn search_paths(
        &self,
        origin_lat: f64,
        origin_lon: f64,
        dest_lat: f64,
        dest_lon: f64,
    ) -> Result<Vec<TransitPath>, TransitError> {
        let params = [
            ("SX", format!("{origin_lon:.6}")),
            ("SY", format!("{origin_lat:.6}")),
            ("EX", format!("{dest_lon:.6}")),
            ("EY", format!("{dest_lat:.6}")),
        ];

        debug!("Searching transit paths");

        let value = match self.get_json("searchPubTransPathT", &params).await {
            Ok(value) => value,
            Err(TransitError::ProviderError { code, message })
                if NO_RESULT_CODES.contains(&code.as_str()) =>
            {
                debug!(%code, %message, "Provider found no route");
                return Ok(Vec::new());
            },
            Err(e) => return Err(e),
        };

        let mut paths = Self::parse_search_response(value)?;

        if paths.is_empty() {
            warn!("No transit paths found");
        } else if self.config.load_lanes {
            self.attach_geometry(&mut paths).await;
        }

        debug!(count = paths.len(), "Transit paths found");
        Ok(paths)
    }

    #[instrument(skip(self))]
    async fn load_lane(&self, map_obj: &str) -> Result<LaneGeometry, TransitError> {
        let params = [("mapObject", format!("0:0@{map_obj}"))];
        let value = self.get_json("loadLane", &params).await?;
        let geometry = Self::parse_lane_response(value)?;
        debug!(points = geometry.point_count(), "Lane geometry loaded");
        Ok(geometry)
    }

    async fn is_healthy(&self) -> bool {
        self.client.get(&self.config.base_url).send().await.is_ok()
    }
}

/// Extract a provider error from a response body, if present
///
/// The provider reports errors either as an object or as an array of
/// objects, with the text under `message` or `msg`.
fn provider_error(value: &Value) -> Option<TransitError> {
    let error = value.get("error")?;
    let entry = match error {
        Value::Array(items) => items.first().unwrap_or(&Value::Null),
        other => other,
    };

    let code = match entry.get("code") {
        Some(Value::String(code)) => code.clone(),
        Some(Value::Number(code)) => code.to_string(),
        _ => String::new(),
    };
    let message = entry
        .get("message")
        .or_else(|| entry.get("msg"))
        .and_then(Value::as_str)
        .unwrap_or("unknown provider error")
        .to_string();

    Some(TransitError::ProviderError { code, message })
}

fn coordinate(x: Option<f64>, y: Option<f64>) -> Option<Coordinate> {
    match (x, y) {
        (Some(x), Some(y)) => Some(Coordinate { x, y }),
        _ => None,
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    result: Option<RawSearchResult>,
}

#[derive(Debug, Deserialize)]
struct RawSearchResult {
    #[serde(default)]
    path: Vec<RawPath>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPath {
    #[serde(default)]
    info: RawInfo,
    #[serde(default)]
    sub_path: Vec<RawSubPath>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInfo {
    total_time: Option<u32>,
    total_distance: Option<f64>,
    payment: Option<u32>,
    bus_transit_count: Option<u32>,
    subway_transit_count: Option<u32>,
    map_obj: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSubPath {
    traffic_type: i64,
    section_time: Option<u32>,
    distance: Option<f64>,
    start_name: Option<String>,
    end_name: Option<String>,
    start_x: Option<f64>,
    start_y: Option<f64>,
    end_x: Option<f64>,
    end_y: Option<f64>,
    #[serde(default)]
    lane: Vec<RawLine>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLine {
    name: Option<String>,
    bus_no: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLaneResponse {
    result: Option<RawLaneResult>,
}

#[derive(Debug, Deserialize)]
struct RawLaneResult {
    #[serde(default)]
    lane: Vec<RawGraphLane>,
    boundary: Option<RawBoundary>,
}

#[derive(Debug, Deserialize)]
struct RawGraphLane {
    class: Option<i64>,
    #[serde(rename = "type")]
    lane_type: Option<i64>,
    #[serde(default)]
    section: Vec<RawGraphSection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGraphSection {
    #[serde(default)]
    graph_pos: Vec<RawGraphPos>,
}

#[derive(Debug, Deserialize)]
struct RawGraphPos {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct RawBoundary {
    top: f64,
    left: f64,
    bottom: f64,
    right: f64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_search_response() {
        let value = json!({
            "result": {
                "path": [{
                    "pathType": 1,
                    "info": {
                        "totalTime": 32,
                        "totalDistance": 8123.0,
                        "payment": 1400,
                        "busTransitCount": 0,
                        "subwayTransitCount": 1,
                        "mapObj": "2:2:328:335"
                    },
                    "subPath": [
                        { "trafficType": 3, "sectionTime": 4, "distance": 310 },
                        {
                            "trafficType": 1,
                            "sectionTime": 24,
                            "distance": 7500,
                            "startName": "시청",
                            "endName": "강남",
                            "startX": 126.977, "startY": 37.5657,
                            "endX": 127.0276, "endY": 37.4979,
                            "lane": [{ "name": "수도권 2호선", "subwayCode": 2 }]
                        },
                        { "trafficType": 3, "sectionTime": 4, "distance": 250 }
                    ]
                }]
            }
        });

        let paths = OdsayClient::parse_search_response(value).unwrap();
        assert_eq!(paths.len(), 1);

        let path = &paths[0];
        assert_eq!(path.info.total_time, 32);
        assert_eq!(path.info.payment, Some(1400));
        assert_eq!(path.info.map_obj.as_deref(), Some("2:2:328:335"));
        assert_eq!(path.sub_paths.len(), 3);

        let walk = &path.sub_paths[0];
        assert_eq!(walk.traffic_type, TrafficType::Walk);
        assert!(walk.start.is_none());

        let ride = &path.sub_paths[1];
        assert_eq!(ride.traffic_type, TrafficType::Subway);
        assert_eq!(ride.start_name.as_deref(), Some("시청"));
        assert_eq!(ride.lines[0].display_name(), Some("수도권 2호선"));
        assert!((ride.end.unwrap().y - 37.4979).abs() < 1e-9);
        assert!(path.geometry.is_none());
    }

    #[test]
    fn test_parse_search_drops_paths_without_total_time() {
        let value = json!({
            "result": {
                "path": [
                    { "info": { "payment": 1400 }, "subPath": [] },
                    { "info": { "totalTime": 27 }, "subPath": [] }
                ]
            }
        });

        let paths = OdsayClient::parse_search_response(value).unwrap();
        let times: Vec<u32> = paths.iter().map(|p| p.info.total_time).collect();
        assert_eq!(times, vec![27]);
    }

    #[test]
    fn test_parse_search_without_result() {
        let paths = OdsayClient::parse_search_response(json!({})).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_parse_lane_response() {
        let value = json!({
            "result": {
                "lane": [{
                    "class": 2,
                    "type": 2,
                    "section": [{
                        "graphPos": [
                            { "x": 126.977, "y": 37.5657 },
                            { "x": 127.0, "y": 37.53 },
                            { "x": 127.0276, "y": 37.4979 }
                        ]
                    }]
                }],
                "boundary": { "top": 37.5657, "left": 126.977, "bottom": 37.4979, "right": 127.0276 }
            }
        });

        let geometry = OdsayClient::parse_lane_response(value).unwrap();
        assert_eq!(geometry.lanes.len(), 1);
        assert_eq!(geometry.lanes[0].class, Some(2));
        assert_eq!(geometry.point_count(), 3);
        assert!((geometry.boundary.unwrap().right - 127.0276).abs() < 1e-9);
    }

    #[test]
    fn test_parse_lane_without_result() {
        assert!(OdsayClient::parse_lane_response(json!({})).is_err());
    }

    #[test]
    fn test_provider_error_object() {
        let err = provider_error(&json!({"error": {"code": "-99", "message": "검색결과가 없습니다."}}));
        match err {
            Some(TransitError::ProviderError { code, message }) => {
                assert_eq!(code, "-99");
                assert_eq!(message, "검색결과가 없습니다.");
            },
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_provider_error_array_with_msg() {
        let err = provider_error(&json!({"error": [{"code": 500, "msg": "ApiKeyAuthFailed"}]}));
        match err {
            Some(TransitError::ProviderError { code, message }) => {
                assert_eq!(code, "500");
                assert_eq!(message, "ApiKeyAuthFailed");
            },
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_no_provider_error() {
        assert!(provider_error(&json!({"result": {}})).is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = OdsayClient::new(&OdsayConfig::default());
        assert!(matches!(result, Err(TransitError::ConfigurationError(_))));
    }

    #[test]
    fn test_coordinate_requires_both_axes() {
        assert!(coordinate(Some(127.0), None).is_none());
        assert_eq!(
            coordinate(Some(127.0), Some(37.5)),
            Some(Coordinate { x: 127.0, y: 37.5 })
        );
    }
}
