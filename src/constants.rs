/// User agent string for HTTP requests
pub const USER_AGENT: &str = "open-meteo-weather/0.1.0";

/// Open-Meteo geocoding API base URL
pub const GEOCODING_API_BASE: &str = "https://geocoding-api.open-meteo.com/v1";

/// Open-Meteo forecast API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Daily fields requested from the forecast endpoint
pub const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,wind_speed_10m_max";

/// Longest forecast window Open-Meteo serves
pub const MAX_FORECAST_DAYS: usize = 16;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LANGUAGE: &str = "en";

pub const DEFAULT_CITY: &str = "Chennai";
pub const DEFAULT_DAY_OFFSET: i64 = 1;
