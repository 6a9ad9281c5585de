//! Core library for the `weathermate` CLI.
//!
//! This crate defines:
//! - Temperature categories and activity suggestions
//! - The OpenWeather client and its error taxonomy
//! - Configuration & credentials handling
//! - The view state machine behind a search form
//!
//! It is used by `weathermate-cli`, but can also be reused by other binaries or services.

pub mod category;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod provider;
pub mod session;

pub use category::{Category, TemperatureBand, classify, suggest_activities, temperature_band};
pub use config::Config;
pub use controller::{Submission, Ticket, ViewController, ViewState};
pub use error::WeatherError;
pub use model::{ConditionIcon, Observation, WeatherRecord};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use session::{SearchOutcome, SearchSession};
