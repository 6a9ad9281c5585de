use thiserror::Error;

pub const MSG_EMPTY_CITY: &str = "Please enter a city name";
pub const MSG_NOT_FOUND: &str = "City not found. Please check the spelling and try again.";
pub const MSG_RETRY_LATER: &str = "Failed to fetch weather data. Please try again later.";

/// Failures surfaced by a weather lookup. All of them are recoverable: the
/// user can correct the input or simply search again.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// City name empty after trimming. Raised before any network call.
    #[error("city name must not be empty")]
    Validation,

    /// Provider answered 404 for the city.
    #[error("city not found: {city}")]
    NotFound { city: String },

    /// Any other non-success HTTP status.
    #[error("weather provider returned status {status}: {body}")]
    Provider { status: u16, body: String },

    /// Timeout, DNS failure, connection refused, ...
    #[error("failed to reach weather provider: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response body did not have the expected shape.
    #[error("failed to parse weather provider response: {0}")]
    Parse(String),
}

impl WeatherError {
    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Validation => MSG_EMPTY_CITY,
            WeatherError::NotFound { .. } => MSG_NOT_FOUND,
            WeatherError::Provider { .. } | WeatherError::Transport(_) | WeatherError::Parse(_) => {
                MSG_RETRY_LATER
            }
        }
    }
}
