//! Places configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Kakao Local keyword search API
#[derive(Clone, Serialize, Deserialize)]
pub struct KakaoConfig {
    /// Base URL of the Kakao API
    #[serde(default = "default_kakao_base_url")]
    pub base_url: String,

    /// Kakao REST API key
    #[serde(default)]
    pub rest_api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Cache TTL in minutes (0 to disable)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,

    /// Maximum number of results per query (1-15)
    #[serde(default = "default_max_results")]
    pub max_results: u8,
}

impl std::fmt::Debug for KakaoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KakaoConfig")
            .field("base_url", &self.base_url)
            .field("rest_api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("cache_ttl_minutes", &self.cache_ttl_minutes)
            .field("max_results", &self.max_results)
            .finish()
    }
}

fn default_kakao_base_url() -> String {
    "https://dapi.kakao.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_cache_ttl_minutes() -> u64 {
    60
}

const fn default_max_results() -> u8 {
    15
}

impl Default for KakaoConfig {
    fn default() -> Self {
        Self {
            base_url: default_kakao_base_url(),
            rest_api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
            max_results: default_max_results(),
        }
    }
}

impl KakaoConfig {
    /// Create a configuration with the given REST API key
    #[must_use]
    pub fn with_api_key(rest_api_key: impl Into<String>) -> Self {
        Self {
            rest_api_key: rest_api_key.into(),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            rest_api_key: "test-key".to_string(),
            cache_ttl_minutes: 0,
            ..Default::default()
        }
    }

    /// Check if caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
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

        if self.rest_api_key.trim().is_empty() {
            return Err("rest_api_key must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if !(1..=15).contains(&self.max_results) {
            return Err("max_results must be between 1 and 15".to_string());
        }

        Ok(())
    }
}

/// Configuration for the recommendation backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Base URL of the recommendation backend
    #[serde(default = "default_recommendation_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_recommendation_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            base_url: default_recommendation_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RecommendationConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kakao_defaults() {
        let config = KakaoConfig::default();
        assert_eq!(config.base_url, "https://dapi.kakao.com");
        assert_eq!(config.max_results, 15);
        assert!(config.caching_enabled());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_kakao_testing_config() {
        let config = KakaoConfig::for_testing();
        assert!(!config.caching_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_kakao_max_results_range() {
        let config = KakaoConfig {
            max_results: 16,
            ..KakaoConfig::for_testing()
        };
        assert!(config.validate().is_err());

        let config = KakaoConfig {
            max_results: 0,
            ..KakaoConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_kakao_debug_redacts_key() {
        let debug = format!("{:?}", KakaoConfig::with_api_key("kakao-secret"));
        assert!(!debug.contains("kakao-secret"));
    }

    #[test]
    fn test_recommendation_defaults() {
        let config = RecommendationConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.validate().is_ok());

        let config = RecommendationConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
