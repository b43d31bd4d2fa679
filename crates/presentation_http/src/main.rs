//! tripmap HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{PlaceService, RecommendationService, RouteResolver};
use infrastructure::{
    AppConfig, DirectionsAdapter, LogFormat, PlaceSearchAdapter, RecommendationAdapter,
    init_tracing,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so the log format can be honored
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(LogFormat::from_config(&config.server.log_format))?;

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!("🗺️ tripmap v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        "Configuration loaded"
    );

    // Directions
    let route_resolver = match config.odsay.to_odsay_config() {
        Some(odsay) => {
            let adapter = DirectionsAdapter::new(&odsay)
                .map_err(|e| anyhow::anyhow!("Failed to initialize directions: {e}"))?;
            Some(Arc::new(RouteResolver::with_config(
                Arc::new(adapter),
                config.routing.to_resolver_config(),
            )))
        },
        None => {
            warn!("odsay.api_key not set, route resolution disabled");
            None
        },
    };

    // Place search
    let place_service = match config.kakao.to_kakao_config() {
        Some(kakao) => {
            let adapter = PlaceSearchAdapter::new(&kakao)
                .map_err(|e| anyhow::anyhow!("Failed to initialize place search: {e}"))?;
            Some(Arc::new(PlaceService::new(Arc::new(adapter))))
        },
        None => {
            warn!("kakao.rest_api_key not set, place search disabled");
            None
        },
    };

    // Recommendations
    let recommendation_adapter =
        RecommendationAdapter::new(&config.recommendation.to_recommendation_config())
            .map_err(|e| anyhow::anyhow!("Failed to initialize recommendations: {e}"))?;

    let config = Arc::new(config);
    let state = AppState {
        route_resolver,
        place_service,
        recommendation_service: Arc::new(RecommendationService::new(Arc::new(
            recommendation_adapter,
        ))),
        config: Arc::clone(&config),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    };

    let app = app.layer(TraceLayer::new_for_http());
    let app = if config.server.cors_enabled {
        app.layer(cors_layer)
    } else {
        app
    };

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
