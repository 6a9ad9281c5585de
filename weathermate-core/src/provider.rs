use crate::{Config, WeatherError, WeatherRecord, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current conditions, looked up by city name.
///
/// One call issues at most one outbound request; nothing is cached or retried.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherRecord, WeatherError>;
}

/// Trim `input` and reject it if nothing is left.
pub fn validate_city(input: &str) -> Result<&str, WeatherError> {
    let city = input.trim();
    if city.is_empty() {
        return Err(WeatherError::Validation);
    }
    Ok(city)
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.require_api_key()?;
    OpenWeatherProvider::new(api_key.to_owned(), config.base_url.clone(), config.timeout())
}
