use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_SECS, GEOCODING_API_BASE, OPEN_METEO_API_BASE,
};

/// Endpoints and transport settings for the Open-Meteo client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language for geocoding result names
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_geocoding_base_url() -> String {
    GEOCODING_API_BASE.to_string()
}

fn default_forecast_base_url() -> String {
    OPEN_METEO_API_BASE.to_string()
}

const fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_secs: default_timeout(),
            language: default_language(),
        }
    }
}
