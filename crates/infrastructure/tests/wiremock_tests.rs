//! End-to-end adapter tests against mocked providers (wiremock-based)

use std::sync::Arc;

use application::ports::{MarkerKind, RecommendationPort};
use application::{
    ApplicationError, MapPresenter, PlaceService, RecommendationQuery, RecommendationService,
    RouteResolver,
};
use chrono::NaiveTime;
use domain::{GeoPoint, PlaceCategory, TravelMode};
use infrastructure::{DirectionsAdapter, PlaceSearchAdapter, RecommendationAdapter, RenderSetMap};
use integration_places::{KakaoConfig, RecommendationConfig};
use integration_transit::OdsayConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_JSON: &str = r#"{
    "result": {
        "path": [
            {
                "info": {
                    "totalTime": 31, "totalDistance": 9800, "payment": 1400,
                    "busTransitCount": 0, "subwayTransitCount": 1, "mapObj": "subway"
                },
                "subPath": [
                    { "trafficType": 3, "sectionTime": 4, "distance": 300 },
                    {
                        "trafficType": 1, "sectionTime": 27, "distance": 9500,
                        "startName": "시청", "endName": "잠실",
                        "startX": 126.977, "startY": 37.5657,
                        "endX": 127.1002, "endY": 37.5133,
                        "lane": [{ "name": "수도권 2호선" }]
                    }
                ]
            },
            {
                "info": {
                    "totalTime": 24, "totalDistance": 9100, "payment": 1500,
                    "busTransitCount": 1, "subwayTransitCount": 0
                },
                "subPath": [
                    {
                        "trafficType": 2, "sectionTime": 24, "distance": 9100,
                        "startName": "시청앞", "endName": "잠실역",
                        "startX": 126.978, "startY": 37.5660,
                        "endX": 127.1000, "endY": 37.5130,
                        "lane": [{ "busNo": "2415" }]
                    }
                ]
            }
        ]
    }
}"#;

const LANE_JSON: &str = r#"{
    "result": {
        "lane": [{
            "class": 2,
            "type": 2,
            "section": [{
                "graphPos": [
                    { "x": 126.977, "y": 37.5657 },
                    { "x": 0.0, "y": 0.0 },
                    { "x": 127.05, "y": 37.54 },
                    { "x": 127.1002, "y": 37.5133 }
                ]
            }]
        }],
        "boundary": { "top": 37.5657, "left": 126.977, "bottom": 37.5133, "right": 127.1002 }
    }
}"#;

fn origin() -> GeoPoint {
    GeoPoint::new(37.5665, 126.978).unwrap()
}

fn jamsil() -> GeoPoint {
    GeoPoint::new(37.5132, 127.1001).unwrap()
}

async fn odsay_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searchPubTransPathT"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_JSON))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/loadLane"))
        .and(query_param("mapObject", "0:0@subway"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LANE_JSON))
        .mount(&server)
        .await;

    server
}

fn directions(server: &MockServer) -> Arc<DirectionsAdapter> {
    let config = OdsayConfig {
        base_url: server.uri(),
        ..OdsayConfig::for_testing()
    };
    Arc::new(DirectionsAdapter::new(&config).unwrap())
}

#[tokio::test]
async fn resolves_and_ranks_transit_itineraries() {
    let server = odsay_server().await;
    let resolver = RouteResolver::new(directions(&server));

    let itineraries = resolver.resolve_route(origin(), jamsil(), "롯데월드").await.unwrap();

    assert_eq!(itineraries.len(), 2);
    assert_eq!(itineraries[0].total_time_minutes, 24);
    assert_eq!(itineraries[1].total_time_minutes, 31);

    let bus = &itineraries[0];
    assert_eq!(bus.segments.len(), 1);
    assert_eq!(bus.segments[0].mode, TravelMode::Bus);
    assert_eq!(bus.segments[0].line_name.as_deref(), Some("2415"));
    assert!(bus.detail_geometry.is_none());

    let subway = &itineraries[1];
    assert_eq!(subway.segments[0].mode, TravelMode::Walk);
    assert_eq!(subway.segments[0].start_point, origin());
    assert_eq!(subway.segments[0].end_point, subway.segments[1].start_point);
    assert_eq!(subway.segments[1].end_label.as_deref(), Some("잠실"));
    assert_eq!(subway.detail_geometry.as_ref().unwrap().points().count(), 4);
}

#[tokio::test]
async fn short_trip_walks_without_calling_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = RouteResolver::new(directions(&server));
    let destination = GeoPoint::new(37.5685, 126.978).unwrap();

    let itineraries = resolver.resolve_route(origin(), destination, "").await.unwrap();
    assert_eq!(itineraries.len(), 1);
    assert!(itineraries[0].is_walking_only());
}

#[tokio::test]
async fn provider_failure_surfaces_as_external_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/searchPubTransPathT"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let resolver = RouteResolver::new(directions(&server));
    let err = resolver.resolve_route(origin(), jamsil(), "").await.unwrap_err();

    assert!(matches!(err, ApplicationError::ExternalService(_)));
    assert!(!err.is_input_error());
}

#[tokio::test]
async fn draws_itinerary_without_sentinel_points() {
    let server = odsay_server().await;
    let resolver = RouteResolver::new(directions(&server));
    let itineraries = resolver.resolve_route(origin(), jamsil(), "").await.unwrap();

    let map = Arc::new(RenderSetMap::new());
    let presenter = MapPresenter::new(map.clone());
    let path = presenter.show_itinerary(origin(), jamsil(), &itineraries[1]);

    assert!(path.points.iter().all(GeoPoint::is_in_service_region));
    assert_eq!(path.points.first(), Some(&origin()));
    assert_eq!(path.points.last(), Some(&jamsil()));
    assert!(path.connector.is_some());

    let set = map.take();
    assert_eq!(set.markers.len(), 2);
    assert_eq!(set.markers[0].kind, MarkerKind::Origin);
    assert_eq!(set.polylines.len(), 2);
    assert_eq!(set.polylines[0].path, path.points);
    assert!(set.fit.is_some());
}

#[tokio::test]
async fn place_search_through_kakao() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/local/search/keyword.json"))
        .and(query_param("query", "잠실역"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
                "documents": [
                    {
                        "id": "21160803", "place_name": "잠실역 2호선",
                        "category_name": "교통,수송 > 지하철,전철",
                        "road_address_name": "서울 송파구 올림픽로 지하 265",
                        "address_name": "서울 송파구 잠실동 178-1",
                        "x": "127.100168", "y": "37.513261"
                    }
                ]
            }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let config = KakaoConfig {
        base_url: server.uri(),
        ..KakaoConfig::for_testing()
    };
    let service = PlaceService::new(Arc::new(PlaceSearchAdapter::new(&config).unwrap()));

    let place = service.locate(" 잠실역 ").await.unwrap();
    assert_eq!(place.name, "잠실역 2호선");
    assert!((place.location.latitude() - 37.513_261).abs() < 1e-9);
    assert_eq!(place.jibun_address.as_deref(), Some("서울 송파구 잠실동 178-1"));
}

#[tokio::test]
async fn recommendations_sorted_by_distance() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recommend/list3"))
        .and(query_param("time", "13:30:00"))
        .and(query_param("contentTypeId", "39"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[
                {"contentId": "1", "title": "먼 식당", "addr1": "a", "distanceMeters": 1200,
                 "mapx": "126.99", "mapy": "37.56"},
                {"contentId": "2", "title": "가까운 식당", "addr1": "b", "distanceMeters": "150.5",
                 "mapx": "126.973", "mapy": "37.556"},
                {"contentId": "3", "title": "좌표 없음", "addr1": "c", "distanceMeters": 600}
            ]"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let config = RecommendationConfig {
        base_url: server.uri(),
        ..RecommendationConfig::default()
    };
    let adapter: Arc<dyn RecommendationPort> =
        Arc::new(RecommendationAdapter::new(&config).unwrap());
    let service = RecommendationService::new(adapter);

    let time = NaiveTime::from_hms_opt(13, 30, 0).unwrap();
    let query = RecommendationQuery::new(GeoPoint::seoul_station(), time)
        .with_category(PlaceCategory::Restaurant);
    let spots = service.nearby(&query).await.unwrap();

    let titles: Vec<&str> = spots.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["가까운 식당", "좌표 없음", "먼 식당"]);
    assert!(spots[1].location.is_none());

    let map = Arc::new(RenderSetMap::new());
    MapPresenter::new(map.clone()).show_recommendations(GeoPoint::seoul_station(), &spots);
    let set = map.take();
    assert_eq!(set.markers.len(), 3);
    assert!(set.fit.is_some());
}
