use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::WeatherError;

// ============================================================================
// Domain Models
// ============================================================================

/// A geocoded place
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One day of forecast data
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub weather_code: i64,
    pub temperature_max_c: f64,
    pub temperature_min_c: f64,
    pub wind_speed_max_kmh: f64,
}

/// Daily records ordered by date, starting from the current day
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyForecast {
    pub days: Vec<DayRecord>,
}

impl DailyForecast {
    pub fn new(days: Vec<DayRecord>) -> Self {
        Self { days }
    }

    /// Number of days covered
    pub fn horizon(&self) -> usize {
        self.days.len()
    }
}

/// Conditions at the time of the request
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i64,
}

// ============================================================================
// Open-Meteo Geocoding API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
}

impl GeocodingResult {
    /// Validates the match and falls back to `query` when the name is blank.
    pub fn into_location(self, query: &str) -> Result<Location, WeatherError> {
        let latitude = self.latitude.ok_or_else(|| {
            WeatherError::MalformedResponse("geocoding result has no latitude".to_string())
        })?;
        let longitude = self.longitude.ok_or_else(|| {
            WeatherError::MalformedResponse("geocoding result has no longitude".to_string())
        })?;

        let display_name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| query.to_string());

        Ok(Location {
            display_name,
            latitude,
            longitude,
        })
    }
}

// ============================================================================
// Open-Meteo Forecast API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenMeteoResponse {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub daily: Option<DailyData>,
    pub current_weather: Option<CurrentWeatherData>,
}

/// Parallel arrays as returned by the `daily` block.
///
/// Every field is optional so that absence surfaces as
/// [`WeatherError::MalformedResponse`] instead of a decode failure.
#[derive(Debug, Deserialize)]
pub struct DailyData {
    pub time: Option<Vec<Option<String>>>,
    #[serde(alias = "weathercode")]
    pub weather_code: Option<Vec<Option<i64>>>,
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    #[serde(alias = "windspeed_10m_max")]
    pub wind_speed_10m_max: Option<Vec<Option<f64>>>,
}

fn require<T>(field: Option<T>, name: &str) -> Result<T, WeatherError> {
    field.ok_or_else(|| WeatherError::MalformedResponse(format!("missing field `{name}`")))
}

fn value_at<T: Copy>(values: &[Option<T>], index: usize, name: &str) -> Result<T, WeatherError> {
    values
        .get(index)
        .copied()
        .flatten()
        .ok_or_else(|| WeatherError::MalformedResponse(format!("`{name}` has no value for day {index}")))
}

impl TryFrom<DailyData> for DailyForecast {
    type Error = WeatherError;

    fn try_from(daily: DailyData) -> Result<Self, Self::Error> {
        let time = require(daily.time, "daily.time")?;
        let codes = require(daily.weather_code, "daily.weather_code")?;
        let temps_max = require(daily.temperature_2m_max, "daily.temperature_2m_max")?;
        let temps_min = require(daily.temperature_2m_min, "daily.temperature_2m_min")?;
        let winds = require(daily.wind_speed_10m_max, "daily.wind_speed_10m_max")?;

        let len = time.len();
        if [codes.len(), temps_max.len(), temps_min.len(), winds.len()]
            .iter()
            .any(|&n| n != len)
        {
            return Err(WeatherError::MalformedResponse(
                "daily arrays have mismatched lengths".to_string(),
            ));
        }

        let mut days = Vec::with_capacity(len);
        for (i, raw_date) in time.into_iter().enumerate() {
            let raw_date = raw_date.ok_or_else(|| {
                WeatherError::MalformedResponse(format!("`daily.time` has no value for day {i}"))
            })?;
            let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d").map_err(|e| {
                WeatherError::MalformedResponse(format!("invalid date {raw_date:?}: {e}"))
            })?;

            days.push(DayRecord {
                date,
                weather_code: value_at(&codes, i, "daily.weather_code")?,
                temperature_max_c: value_at(&temps_max, i, "daily.temperature_2m_max")?,
                temperature_min_c: value_at(&temps_min, i, "daily.temperature_2m_min")?,
                wind_speed_max_kmh: value_at(&winds, i, "daily.wind_speed_10m_max")?,
            });
        }

        Ok(DailyForecast::new(days))
    }
}

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherData {
    pub temperature: Option<f64>,
    #[serde(alias = "wind_speed")]
    pub windspeed: Option<f64>,
    #[serde(alias = "weather_code")]
    pub weathercode: Option<i64>,
}

impl TryFrom<CurrentWeatherData> for CurrentConditions {
    type Error = WeatherError;

    fn try_from(current: CurrentWeatherData) -> Result<Self, Self::Error> {
        Ok(Self {
            temperature_c: require(current.temperature, "current_weather.temperature")?,
            wind_speed_kmh: require(current.windspeed, "current_weather.windspeed")?,
            weather_code: require(current.weathercode, "current_weather.weathercode")?,
        })
    }
}
