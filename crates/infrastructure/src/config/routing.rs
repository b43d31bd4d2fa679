//! Route resolution and drawing configuration.

use application::{
    DEFAULT_CONNECTOR_MAX_METERS, DEFAULT_WALKING_SPEED_METERS_PER_MINUTE,
    DEFAULT_WALKING_THRESHOLD_METERS, RouteResolverConfig,
};
use serde::{Deserialize, Serialize};

/// Routing configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingAppConfig {
    /// Distances below this are walked without a provider call (default: 700)
    #[serde(default = "default_walking_threshold")]
    pub walking_threshold_meters: f64,

    /// Walking pace in meters per minute (default: 80)
    #[serde(default = "default_walking_speed")]
    pub walking_speed_meters_per_minute: f64,

    /// Maximum origin-to-path connector length in meters (default: 2000)
    #[serde(default = "default_connector_max")]
    pub connector_max_meters: f64,
}

const fn default_walking_threshold() -> f64 {
    DEFAULT_WALKING_THRESHOLD_METERS
}

const fn default_walking_speed() -> f64 {
    DEFAULT_WALKING_SPEED_METERS_PER_MINUTE
}

const fn default_connector_max() -> f64 {
    DEFAULT_CONNECTOR_MAX_METERS
}

impl Default for RoutingAppConfig {
    fn default() -> Self {
        Self {
            walking_threshold_meters: default_walking_threshold(),
            walking_speed_meters_per_minute: default_walking_speed(),
            connector_max_meters: default_connector_max(),
        }
    }
}

impl RoutingAppConfig {
    /// Convert to the resolver configuration
    #[must_use]
    pub const fn to_resolver_config(&self) -> RouteResolverConfig {
        RouteResolverConfig {
            walking_threshold_meters: self.walking_threshold_meters,
            walking_speed_meters_per_minute: self.walking_speed_meters_per_minute,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.to_resolver_config().validate()?;

        if !self.connector_max_meters.is_finite() || self.connector_max_meters < 0.0 {
            return Err("connector_max_meters must be a non-negative number".to_string());
        }

        Ok(())
    }
}
