//! Open-Meteo weather lookup
//!
//! Resolves a city name with the Open-Meteo geocoding API, fetches the daily
//! forecast for its coordinates and renders one day as a single sentence.
//! No API key is required.

pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod service;
pub mod weather_code;

pub use config::WeatherConfig;
pub use error::WeatherError;
pub use formatters::{day_label, format_current_report, format_report};
pub use models::{CurrentConditions, DailyForecast, DayRecord, Location};
pub use service::{select_day, ForecastFetcher, Geocoder, OpenMeteoClient, WeatherService};
pub use weather_code::{describe_code, WeatherCode};

/// Forecast sentence for `city`, `day_offset` days from today (1 = tomorrow),
/// using the public Open-Meteo endpoints.
pub async fn get_open_meteo_weather(city: &str, day_offset: i64) -> Result<String, WeatherError> {
    get_open_meteo_weather_with_config(WeatherConfig::default(), city, day_offset).await
}

/// Same as [`get_open_meteo_weather`] against the endpoints in `config`.
pub async fn get_open_meteo_weather_with_config(
    config: WeatherConfig,
    city: &str,
    day_offset: i64,
) -> Result<String, WeatherError> {
    WeatherService::open_meteo(config)?
        .forecast_report(city, day_offset)
        .await
}
