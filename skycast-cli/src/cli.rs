use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use skycast_core::{
    AppState, Config, ProviderId, TemperatureUnit, lookup, provider::provider_for, render,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{output, session};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Terminal weather viewer")]
pub struct Cli {
    /// Verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current conditions and the five-day forecast for a city.
    Show {
        /// City name.
        city: String,

        /// Display unit: "celsius" (c) or "fahrenheit" (f).
        #[arg(short, long, default_value = "celsius")]
        unit: String,

        /// Provider short name, e.g. "mock".
        #[arg(long)]
        provider: Option<String>,
    },

    /// Interactive session: search, toggle units, repeat.
    Interactive,

    /// Set the default city and provider.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        init_tracing(self.verbose);

        let config = Config::load()?;

        match self.command {
            Some(Command::Show { city, unit, provider }) => {
                show(&config, &city, &unit, provider.as_deref()).await
            }
            Some(Command::Configure) => configure(config),
            Some(Command::Interactive) | None => session::run(&config).await,
        }
    }
}

/// One lookup, one rendered frame.
async fn show(
    config: &Config,
    city: &str,
    unit: &str,
    provider: Option<&str>,
) -> anyhow::Result<()> {
    let unit = TemperatureUnit::try_from(unit)?;
    let id = match provider {
        Some(p) => ProviderId::try_from(p)?,
        None => config.default_provider_id()?,
    };
    let provider = provider_for(id);

    let mut state = AppState::new();
    state.set_unit(unit);

    let snapshot = lookup(provider.as_ref(), city).await?;
    state.set_snapshot(snapshot);

    if let Some(frame) = render(&state) {
        output::print_frame(&frame);
    }

    Ok(())
}

/// Interactive editing of the stored defaults.
fn configure(mut config: Config) -> anyhow::Result<()> {
    let city = Text::new("Default city:")
        .with_initial_value(&config.default_city)
        .prompt()?;

    let provider = Select::new("Default provider:", ProviderId::all().to_vec()).prompt()?;

    config.set_default_city(city.trim());
    config.set_default_provider(provider);
    config.save()?;

    println!("Saved {}", Config::config_file_path()?.display());
    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "warn,skycast_core=debug,skycast=debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
