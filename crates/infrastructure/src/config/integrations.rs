//! Integration configurations: ODsay directions, Kakao place search,
//! recommendation backend.

use integration_places::{KakaoConfig, RecommendationConfig};
use integration_transit::OdsayConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::default_true;

// ==============================
// ODsay Configuration
// ==============================

/// ODsay public transit directions configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OdsayAppConfig {
    /// Base URL of the ODsay API
    #[serde(default = "default_odsay_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_odsay_timeout")]
    pub timeout_secs: u64,

    /// Load lane geometry for every candidate path (default: true)
    #[serde(default = "default_true")]
    pub load_lanes: bool,
}

fn default_odsay_base_url() -> String {
    "https://api.odsay.com/v1/api".to_string()
}

const fn default_odsay_timeout() -> u64 {
    10
}

impl Default for OdsayAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_odsay_base_url(),
            api_key: None,
            timeout_secs: default_odsay_timeout(),
            load_lanes: true,
        }
    }
}

impl OdsayAppConfig {
    /// Convert to `integration_transit::OdsayConfig`
    ///
    /// Returns `None` when no API key is configured.
    #[must_use]
    pub fn to_odsay_config(&self) -> Option<OdsayConfig> {
        let api_key = self.api_key.as_ref()?.expose_secret().to_string();
        Some(OdsayConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout_secs: self.timeout_secs,
            load_lanes: self.load_lanes,
        })
    }
}

// ==============================
// Kakao Configuration
// ==============================

/// Kakao Local keyword search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KakaoAppConfig {
    /// Base URL of the Kakao API
    #[serde(default = "default_kakao_base_url")]
    pub base_url: String,

    /// REST API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub rest_api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 5)
    #[serde(default = "default_kakao_timeout")]
    pub timeout_secs: u64,

    /// Cache TTL in minutes (default: 60, 0 disables caching)
    #[serde(default = "default_kakao_cache_ttl")]
    pub cache_ttl_minutes: u64,

    /// Maximum results per query (default: 15)
    #[serde(default = "default_kakao_max_results")]
    pub max_results: u8,
}

fn default_kakao_base_url() -> String {
    "https://dapi.kakao.com".to_string()
}

const fn default_kakao_timeout() -> u64 {
    5
}

const fn default_kakao_cache_ttl() -> u64 {
    60
}

const fn default_kakao_max_results() -> u8 {
    15
}

impl Default for KakaoAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_kakao_base_url(),
            rest_api_key: None,
            timeout_secs: default_kakao_timeout(),
            cache_ttl_minutes: default_kakao_cache_ttl(),
            max_results: default_kakao_max_results(),
        }
    }
}

impl KakaoAppConfig {
    /// Convert to `integration_places::KakaoConfig`
    ///
    /// Returns `None` when no REST API key is configured.
    #[must_use]
    pub fn to_kakao_config(&self) -> Option<KakaoConfig> {
        let rest_api_key = self.rest_api_key.as_ref()?.expose_secret().to_string();
        Some(KakaoConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            rest_api_key,
            timeout_secs: self.timeout_secs,
            cache_ttl_minutes: self.cache_ttl_minutes,
            max_results: self.max_results,
        })
    }
}

// ==============================
// Recommendation Backend Configuration
// ==============================

/// Recommendation backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationAppConfig {
    /// Base URL of the recommendation backend
    #[serde(default = "default_recommendation_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 5)
    #[serde(default = "default_recommendation_timeout")]
    pub timeout_secs: u64,
}

fn default_recommendation_base_url() -> String {
    "http://localhost:8080".to_string()
}

const fn default_recommendation_timeout() -> u64 {
    5
}

impl Default for RecommendationAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_recommendation_base_url(),
            timeout_secs: default_recommendation_timeout(),
        }
    }
}

impl RecommendationAppConfig {
    /// Convert to `integration_places::RecommendationConfig`
    #[must_use]
    pub fn to_recommendation_config(&self) -> RecommendationConfig {
        RecommendationConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            timeout_secs: self.timeout_secs,
        }
    }
}
