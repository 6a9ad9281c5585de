use anyhow::{Context, anyhow, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::info;
use weathermate_core::{Config, OpenWeatherProvider, SearchSession, ViewState, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathermate", version, about = "Current weather and activity ideas for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show weather and suggested activities for a city.
    Show {
        /// City name, e.g. "London" or "Paris,FR".
        city: String,

        /// Print the record as JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },

    /// Search repeatedly from a prompt until cancelled.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => show(&city, json).await,
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let path = Config::config_file_path()?;
    // Read the file alone so environment overrides are not persisted.
    let mut config = Config::load_from(&path)?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(api_key.to_string());
    config.save_to(&path)?;

    info!(path = %path.display(), "saved configuration");
    println!("Saved API key to {}", path.display());
    Ok(())
}

fn session_from_config() -> anyhow::Result<SearchSession<OpenWeatherProvider>> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    Ok(SearchSession::new(provider))
}

async fn show(city: &str, json: bool) -> anyhow::Result<()> {
    let session = session_from_config()?;
    session.search(city).await;

    let view = session.view().await;
    if let Some(msg) = view.error_message() {
        return Err(anyhow!("{msg}"));
    }

    match view.state() {
        ViewState::Success(record) if json => {
            let out = serde_json::to_string_pretty(record).context("Failed to serialize record")?;
            println!("{out}");
        }
        ViewState::Success(record) => print!("{}", render::format_record(record)),
        other => bail!("Unexpected state after search: {other:?}"),
    }

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let session = session_from_config()?;

    loop {
        let input = Text::new("City:").with_placeholder("Enter city name...").prompt();

        let input = match input {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city name"),
        };

        session.search(&input).await;
        print!("{}", render::format_view(&session.view().await));
    }

    Ok(())
}
