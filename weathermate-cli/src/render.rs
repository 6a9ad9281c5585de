use std::fmt::Write;

use weathermate_core::{ViewController, ViewState, WeatherRecord};

pub fn format_record(record: &WeatherRecord) -> String {
    let mut out = String::new();

    let location = if record.country_code.is_empty() {
        record.city.clone()
    } else {
        format!("{}, {}", record.city, record.country_code)
    };

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{location}  [{}]", record.temperature_category);
    let _ = writeln!(
        out,
        "{} {}  {}°C (feels like {}°C)",
        record.condition_icon().symbol(),
        record.condition_description,
        record.temperature_c,
        record.feels_like_c,
    );
    let _ = writeln!(
        out,
        "{} Humidity {}%  Wind {} m/s",
        record.temperature_band().symbol(),
        record.humidity_pct,
        record.wind_speed_mps,
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Perfect activities for {}°C weather in {}:",
        record.temperature_c, record.city
    );
    for (i, activity) in record.activities.iter().enumerate() {
        let _ = writeln!(out, "  {}. {activity}", i + 1);
    }

    out
}

pub fn format_view(view: &ViewController) -> String {
    if let Some(msg) = view.error_message() {
        return format!("{msg}\n");
    }

    match view.state() {
        ViewState::Idle => String::new(),
        ViewState::Loading { city } => format!("Loading weather for {city}...\n"),
        ViewState::Success(record) => format_record(record),
        ViewState::Failed(msg) => format!("{msg}\n"),
    }
}
