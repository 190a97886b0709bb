use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::config::WeatherConfig;
use crate::constants::{DAILY_FIELDS, MAX_FORECAST_DAYS, USER_AGENT};
use crate::error::WeatherError;
use crate::formatters::{format_current_report, format_report};
use crate::models::{
    CurrentConditions, DailyForecast, DayRecord, GeocodingResponse, Location, OpenMeteoResponse,
};
use crate::weather_code::describe_code;

/// Resolves a free-text city name to coordinates
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve_city(&self, name: &str) -> Result<Location, WeatherError>;
}

/// Fetches forecast data for a location
#[async_trait]
pub trait ForecastFetcher: Send + Sync {
    /// Requests at least `days` daily records starting today
    async fn fetch_daily_forecast(
        &self,
        location: &Location,
        days: usize,
    ) -> Result<DailyForecast, WeatherError>;

    async fn fetch_current(&self, location: &Location) -> Result<CurrentConditions, WeatherError>;
}

/// Open-Meteo HTTP client for both geocoding and forecasts
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Creates a new client instance
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Network(format!(
                "request failed with status: {status}"
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| WeatherError::MalformedResponse(e.to_string()))
    }

    fn coordinate_query(location: &Location) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", format!("{:.4}", location.latitude)),
            ("longitude", format!("{:.4}", location.longitude)),
            ("timezone", "auto".to_string()),
        ]
    }
}

#[async_trait]
impl Geocoder for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn resolve_city(&self, name: &str) -> Result<Location, WeatherError> {
        let query = name.trim();
        if query.is_empty() {
            return Err(WeatherError::NotFound("empty city name".to_string()));
        }

        let url = format!("{}/search", self.config.geocoding_base_url);
        debug!(url = %url, "Geocoding city");

        let response: GeocodingResponse = self
            .make_request(
                &url,
                &[
                    ("name", query.to_string()),
                    ("count", "1".to_string()),
                    ("language", self.config.language.clone()),
                ],
            )
            .await?;

        let best = response
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| WeatherError::NotFound(query.to_string()))?;

        debug!(country = ?best.country, "Best geocoding match");
        let location = best.into_location(query)?;
        info!(
            "Resolved {} to {} ({:.4}, {:.4})",
            query, location.display_name, location.latitude, location.longitude
        );
        Ok(location)
    }
}

#[async_trait]
impl ForecastFetcher for OpenMeteoClient {
    #[instrument(skip(self, location), fields(lat = %location.latitude, lon = %location.longitude))]
    async fn fetch_daily_forecast(
        &self,
        location: &Location,
        days: usize,
    ) -> Result<DailyForecast, WeatherError> {
        let days = days.clamp(1, MAX_FORECAST_DAYS);
        let url = format!("{}/forecast", self.config.forecast_base_url);
        debug!(url = %url, days, "Fetching daily forecast");

        let mut query = Self::coordinate_query(location);
        query.push(("forecast_days", days.to_string()));
        query.push(("daily", DAILY_FIELDS.to_string()));

        let response: OpenMeteoResponse = self.make_request(&url, &query).await?;
        let daily = response.daily.ok_or_else(|| {
            WeatherError::MalformedResponse("no daily forecast data in response".to_string())
        })?;

        DailyForecast::try_from(daily)
    }

    #[instrument(skip(self, location), fields(lat = %location.latitude, lon = %location.longitude))]
    async fn fetch_current(&self, location: &Location) -> Result<CurrentConditions, WeatherError> {
        let url = format!("{}/forecast", self.config.forecast_base_url);
        debug!(url = %url, "Fetching current weather");

        let mut query = Self::coordinate_query(location);
        query.push(("forecast_days", "1".to_string()));
        query.push(("current_weather", "true".to_string()));

        let response: OpenMeteoResponse = self.make_request(&url, &query).await?;
        let current = response.current_weather.ok_or_else(|| {
            WeatherError::MalformedResponse("no current weather data in response".to_string())
        })?;

        CurrentConditions::try_from(current)
    }
}

/// Picks the record `offset` days after the first day of the forecast
pub fn select_day(forecast: &DailyForecast, offset: i64) -> Result<&DayRecord, WeatherError> {
    let out_of_range = || WeatherError::OutOfRange {
        offset,
        horizon: Some(forecast.horizon()),
    };

    let index = usize::try_from(offset).map_err(|_| out_of_range())?;
    forecast.days.get(index).ok_or_else(out_of_range)
}

/// Geocode, fetch, select and format in one linear pass
pub struct WeatherService<G, F> {
    geocoder: G,
    fetcher: F,
}

impl WeatherService<OpenMeteoClient, OpenMeteoClient> {
    /// Service backed by a single Open-Meteo client
    pub fn open_meteo(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = OpenMeteoClient::new(config)?;
        Ok(Self::new(client.clone(), client))
    }
}

impl<G: Geocoder, F: ForecastFetcher> WeatherService<G, F> {
    pub fn new(geocoder: G, fetcher: F) -> Self {
        Self { geocoder, fetcher }
    }

    /// Forecast sentence for `city`, `day_offset` days from today
    pub async fn forecast_report(&self, city: &str, day_offset: i64) -> Result<String, WeatherError> {
        if day_offset < 0 {
            return Err(WeatherError::OutOfRange {
                offset: day_offset,
                horizon: None,
            });
        }

        let location = self.geocoder.resolve_city(city).await?;

        let days = usize::try_from(day_offset)
            .unwrap_or(usize::MAX)
            .saturating_add(1);
        let forecast = self.fetcher.fetch_daily_forecast(&location, days).await?;

        let day = select_day(&forecast, day_offset)?;
        let description = describe_code(day.weather_code);
        Ok(format_report(
            &location.display_name,
            day_offset,
            day,
            &description,
        ))
    }

    /// Current conditions sentence for `city`
    pub async fn current_report(&self, city: &str) -> Result<String, WeatherError> {
        let location = self.geocoder.resolve_city(city).await?;
        let current = self.fetcher.fetch_current(&location).await?;
        let description = describe_code(current.weather_code);
        Ok(format_current_report(
            &location.display_name,
            &current,
            &description,
        ))
    }
}
