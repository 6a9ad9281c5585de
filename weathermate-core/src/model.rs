use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, TemperatureBand, classify, suggest_activities};

/// Condition glyph derived from the provider icon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionIcon {
    Clear,
    Clouds,
    Rain,
    Snow,
    Other,
}

impl ConditionIcon {
    /// Match on the two-digit code, ignoring the day/night suffix.
    pub fn from_icon_code(code: &str) -> Self {
        let has = |needle: &str| code.contains(needle);

        if has("01") {
            ConditionIcon::Clear
        } else if has("02") || has("03") || has("04") {
            ConditionIcon::Clouds
        } else if has("09") || has("10") {
            ConditionIcon::Rain
        } else if has("13") {
            ConditionIcon::Snow
        } else {
            ConditionIcon::Other
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ConditionIcon::Clear => "☀",
            ConditionIcon::Clouds => "☁",
            ConditionIcon::Rain => "🌧",
            ConditionIcon::Snow => "🌨",
            ConditionIcon::Other => "🌬",
        }
    }
}

/// Raw observation as normalized from a provider, before derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub city: String,
    pub country_code: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub condition_main: String,
    pub condition_description: String,
    pub condition_icon_code: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub observed_at: Option<DateTime<Utc>>,
}

/// One successful lookup plus everything derived from its temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    pub country_code: String,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub condition_main: String,
    pub condition_description: String,
    pub condition_icon_code: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: i32,
    pub temperature_category: Category,
    pub activities: Vec<String>,
    pub observed_at: DateTime<Utc>,
}

impl WeatherRecord {
    pub fn from_observation(obs: Observation) -> Self {
        let temperature_c = round_to_int(obs.temperature_c);

        Self {
            city: obs.city,
            country_code: obs.country_code,
            temperature_c,
            feels_like_c: round_to_int(obs.feels_like_c),
            condition_main: obs.condition_main,
            condition_description: obs.condition_description,
            condition_icon_code: obs.condition_icon_code,
            humidity_pct: obs.humidity_pct.min(100),
            wind_speed_mps: round_to_int(obs.wind_speed_mps),
            temperature_category: classify(temperature_c),
            activities: suggest_activities(temperature_c).iter().map(|a| a.to_string()).collect(),
            observed_at: obs.observed_at.unwrap_or_else(Utc::now),
        }
    }

    pub fn temperature_band(&self) -> TemperatureBand {
        self.temperature_category.band()
    }

    pub fn condition_icon(&self) -> ConditionIcon {
        ConditionIcon::from_icon_code(&self.condition_icon_code)
    }
}

/// Round half away from zero, saturating at the `i32` range. NaN maps to 0.
pub fn round_to_int(value: f64) -> i32 {
    // `as` saturates and maps NaN to 0.
    value.round() as i32
}
