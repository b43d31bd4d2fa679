//! ODsay client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the ODsay public transit directions API
#[derive(Clone, Serialize, Deserialize)]
pub struct OdsayConfig {
    /// Base URL of the ODsay API (without trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// ODsay API key
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Fetch the detailed lane geometry of every candidate path
    #[serde(default = "default_load_lanes")]
    pub load_lanes: bool,
}

impl std::fmt::Debug for OdsayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdsayConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("load_lanes", &self.load_lanes)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.odsay.com/v1/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_load_lanes() -> bool {
    true
}

impl Default for OdsayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            load_lanes: default_load_lanes(),
        }
    }
}

impl OdsayConfig {
    /// Create a configuration with the given API key and default settings
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
