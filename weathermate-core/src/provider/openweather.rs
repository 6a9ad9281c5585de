use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    WeatherError,
    model::{Observation, WeatherRecord},
};

use super::{WeatherProvider, validate_city};

/// Client for the OpenWeather current-conditions endpoint (metric units).
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { api_key, base_url, http })
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        debug!(city, url = %self.base_url, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(WeatherError::Transport)?;

        debug!(city, %status, "OpenWeather responded");

        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::NotFound { city: city.to_string() });
        }

        if !status.is_success() {
            warn!(city, %status, "OpenWeather request failed");
            return Err(WeatherError::Provider {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let observation = parse_current(&body)?;
        Ok(WeatherRecord::from_observation(observation))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    name: String,
    #[serde(default)]
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    #[serde(default)]
    sys: OwSys,
}

fn parse_current(body: &str) -> Result<Observation, WeatherError> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Parse(e.to_string()))?;

    let weather = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Parse("response contained no weather descriptor".into()))?;

    Ok(Observation {
        city: parsed.name,
        country_code: parsed.sys.country.unwrap_or_default(),
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        condition_main: weather.main,
        condition_description: weather.description,
        condition_icon_code: weather.icon,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        observed_at: parsed.dt.and_then(unix_to_utc),
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        let city = validate_city(city)?;
        self.fetch_current(city).await
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
