use anyhow::Context;
use chrono::Local;
use clap::{ArgAction, Parser, Subcommand};
use flyover_core::{Address, Config, PassTracker};
use std::path::PathBuf;
use tracing::{Level, info};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "flyover", version, about = "Upcoming space station passes over your location")]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the next passes over your current location (default).
    Passes,

    /// Show your public IP address.
    Ip,

    /// Show the coordinates of an IP address.
    Locate {
        /// Address to locate; defaults to your own public IP.
        ip: Option<String>,
    },

    /// Store a geolocation API key in the config file.
    Configure,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path(),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config_path = self.config_path()?;
        let config = Config::load_from(&config_path)?;
        info!("Loaded configuration from {}", config_path.display());

        match self.command.unwrap_or(Command::Passes) {
            Command::Passes => {
                let tracker = PassTracker::new(config)?;
                let report = tracker.next_passes_report(&Local).await?;
                if report.is_empty() {
                    println!("No upcoming passes reported.");
                } else {
                    print!("{report}");
                }
            }
            Command::Ip => {
                let tracker = PassTracker::new(config)?;
                println!("{}", tracker.fetch_my_ip().await?);
            }
            Command::Locate { ip } => {
                let tracker = PassTracker::new(config)?;
                let address = match ip {
                    Some(ip) => Address::new(ip),
                    None => tracker.fetch_my_ip().await?,
                };
                let coords = tracker.fetch_coords_by_ip(&address).await?;
                println!("{coords}");
            }
            Command::Configure => configure(config, &config_path)?,
        }

        Ok(())
    }
}

fn configure(mut config: Config, path: &std::path::Path) -> anyhow::Result<()> {
    let key = inquire::Text::new("Geolocation API key:")
        .with_default(&config.geo_api_key)
        .prompt()
        .context("Failed to read API key")?;

    config.geo_api_key = key.trim().to_string();
    config.save_to(path)?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}
