//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the ODsay and Kakao
//! clients, records map drawing into render sets, and owns configuration
//! loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, KakaoAppConfig, OdsayAppConfig, RecommendationAppConfig, RoutingAppConfig,
    ServerConfig,
};
pub use telemetry::{LogFormat, TelemetryError, init_tracing};
