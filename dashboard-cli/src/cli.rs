use anyhow::Context;
use clap::{Parser, Subcommand};
use dashboard_core::{Config, Dashboard, provider_from_config, render};
use inquire::{InquireError, Text};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Weather dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Fetch and display current weather and the 5-day forecast once.
    Show {
        /// City name, e.g. "London".
        city: String,
    },

    /// Interactive dashboard: enter city names, get weather, repeat.
    Dashboard,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => {
                let mut dashboard = dashboard_from_config()?;
                dashboard.set_city(city);
                dashboard.refresh().await;
                print!("{}", render(dashboard.state()));
                Ok(())
            }
            Command::Dashboard => run_dashboard().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeather API key:")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_owned());
    config.save()?;

    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

fn dashboard_from_config() -> anyhow::Result<Dashboard> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    Ok(Dashboard::new(provider))
}

async fn run_dashboard() -> anyhow::Result<()> {
    let mut dashboard = dashboard_from_config()?;

    loop {
        let city = match Text::new("Enter city name (empty to quit):").prompt() {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city name"),
        };

        if city.trim().is_empty() {
            break;
        }

        dashboard.set_city(city);
        dashboard.refresh().await;

        print!("{}", render(dashboard.state()));
        println!("Fetched at {}\n", chrono::Local::now().format("%H:%M:%S"));
    }

    // Any response still in flight must not touch the state we are leaving.
    dashboard.invalidate();

    Ok(())
}
