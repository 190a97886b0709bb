use thiserror::Error;

/// Errors produced by a weather lookup
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The geocoder returned no match for the city
    #[error("City not found: {0}")]
    NotFound(String),

    /// Transport failure or non-success HTTP status
    #[error("Could not retrieve weather data: {0}")]
    Network(String),

    /// The response was not JSON or lacked expected fields
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The requested day lies outside the forecast horizon.
    ///
    /// `horizon` is `None` when the offset was rejected before any forecast
    /// was fetched.
    #[error("Day offset {offset} is out of range ({})", horizon_note(.horizon))]
    OutOfRange {
        offset: i64,
        horizon: Option<usize>,
    },
}

fn horizon_note(horizon: &Option<usize>) -> String {
    match horizon {
        Some(days) => format!("forecast covers {days} days"),
        None => "must be 0 or greater".to_string(),
    }
}

/// Any failure inside reqwest (connect, timeout, status, body read) is a
/// transport failure; JSON parsing happens separately.
impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
