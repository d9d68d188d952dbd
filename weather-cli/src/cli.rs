use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use tracing::debug;
use weather_core::{Config, SearchRequest, WeatherLookupService};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-lookup", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Madrid".
        city: String,

        /// ISO country code, e.g. "ES".
        country: String,

        /// Print the final lookup state as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, country, json } => show(SearchRequest::new(city, country), json).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    cfg.set_api_key(api_key.trim().to_string());
    let path = cfg.save()?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}

async fn show(request: SearchRequest, json: bool) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let client = cfg.client()?;
    debug!(base_url = client.base_url(), "Using OpenWeather endpoint");

    let service = WeatherLookupService::new(client);
    let outcome = service.lookup(&request).await;
    let state = service.state();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&state).context("Failed to serialize lookup state")?
        );
    } else {
        println!("{}", render::outcome(&request, &outcome, &state));
    }

    Ok(())
}
