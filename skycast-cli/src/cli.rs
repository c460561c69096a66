use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use skycast_core::{Config, HttpBackend, Query, Unit, ViewController};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Terminal client for the local weather API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and print the weather for a city once.
    Show {
        /// City name; falls back to the configured default city.
        city: Option<String>,

        /// Unit system for this request; falls back to the configured
        /// default unit.
        #[arg(long, value_enum)]
        unit: Option<UnitArg>,
    },

    /// Interactive session: search cities and toggle units from a menu.
    Interactive,

    /// Edit the stored configuration (base URL, default city and unit).
    Configure,
}

/// Command-line spelling of the unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Metric,
    Imperial,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Metric => Unit::Metric,
            UnitArg::Imperial => Unit::Imperial,
        }
    }
}

fn resolve_unit(arg: Option<UnitArg>, default: Unit) -> Unit {
    arg.map_or(default, Unit::from)
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Show { city, unit } => show(city, unit).await,
            Command::Interactive => interactive().await,
            Command::Configure => configure(),
        }
    }
}

fn build_controller(config: &Config, query: Query) -> ViewController {
    tracing::debug!(base_url = %config.base_url, "using weather API");
    let backend = Arc::new(HttpBackend::new(&config.base_url));
    ViewController::new(backend, query)
}

async fn show(city: Option<String>, unit: Option<UnitArg>) -> Result<()> {
    let config = Config::load()?;
    let unit = resolve_unit(unit, config.default_unit);
    let city = city.unwrap_or_else(|| config.default_city.clone());

    let controller = build_controller(&config, Query::new(city, unit));
    controller.init().await;

    println!("{}", render::view(&controller.view()));
    Ok(())
}

async fn interactive() -> Result<()> {
    let config = Config::load()?;
    let controller = build_controller(&config, config.default_query());

    controller.init().await;

    loop {
        println!("{}", render::view(&controller.view()));

        // One toggle entry is enough since either unit control performs the
        // same flip; the label names the unit it would switch to.
        let toggle_label = format!(
            "Switch to {}",
            controller.query().unit.toggle().degrees_label()
        );
        let options = vec!["Search city", toggle_label.as_str(), "Refresh", "Quit"];

        match inquire::Select::new("skycast", options).prompt()? {
            "Search city" => {
                let raw = inquire::Text::new("City:").prompt()?;
                controller.on_search_submit(&raw).await;
            }
            "Refresh" => {
                let query = controller.query();
                controller.refresh(query).await;
            }
            "Quit" => break,
            _ => controller.on_toggle_unit().await,
        }
    }

    Ok(())
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    config.base_url = inquire::Text::new("API base URL:")
        .with_initial_value(&config.base_url)
        .prompt()?;
    config.default_city = inquire::Text::new("Default city:")
        .with_initial_value(&config.default_city)
        .prompt()?;
    let metric = inquire::Confirm::new("Use metric units by default?")
        .with_default(config.default_unit == Unit::Metric)
        .prompt()?;
    config.default_unit = if metric { Unit::Metric } else { Unit::Imperial };

    config.save()?;
    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}
