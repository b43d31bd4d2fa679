//! Application configuration
//!
//! Configuration is layered: built-in defaults, then an optional
//! `config.toml` in the working directory, then `TRIPMAP_*` environment
//! variables (nested keys use `__`, e.g. `TRIPMAP_ODSAY__API_KEY`).

mod integrations;
mod routing;
mod server;

pub use integrations::{KakaoAppConfig, OdsayAppConfig, RecommendationAppConfig};
pub use routing::RoutingAppConfig;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TRIPMAP";

pub(crate) const fn default_true() -> bool {
    true
}

/// Root application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Route resolution and drawing
    #[serde(default)]
    pub routing: RoutingAppConfig,

    /// ODsay transit directions
    #[serde(default)]
    pub odsay: OdsayAppConfig,

    /// Kakao place search
    #[serde(default)]
    pub kakao: KakaoAppConfig,

    /// Recommendation backend
    #[serde(default)]
    pub recommendation: RecommendationAppConfig,
}

impl AppConfig {
    /// Load configuration from defaults, `config.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the merged values do
    /// not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration using a specific file name (extension optional)
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the merged values do
    /// not deserialize.
    pub fn load_from(file_name: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(config::File::with_name(file_name).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.routing.validate()?;

        if let Some(odsay) = self.odsay.to_odsay_config() {
            odsay.validate()?;
        }
        if let Some(kakao) = self.kakao.to_kakao_config() {
            kakao.validate()?;
        }
        self.recommendation.to_recommendation_config().validate()?;

        Ok(())
    }
}
