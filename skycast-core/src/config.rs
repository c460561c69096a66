use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::{Query, Unit};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_CITY: &str = "Nairobi";

/// On-disk settings, all optional in the file:
///
/// ```toml
/// base_url = "http://127.0.0.1:8080"
/// default_city = "Nairobi"
/// default_unit = "metric"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the weather API.
    pub base_url: String,

    /// City loaded on startup when none is given on the command line.
    pub default_city: String,

    /// Unit system loaded on startup.
    pub default_unit: Unit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_city: DEFAULT_CITY.to_string(),
            default_unit: Unit::Metric,
        }
    }
}

impl Config {
    /// The query the controller starts with.
    pub fn default_query(&self) -> Query {
        Query::new(&self.default_city, self.default_unit)
    }

    /// Read the config file, falling back to the defaults when none exists
    /// yet (first run is not an error).
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("could not read {}", path.display()))?;

        toml::from_str(&contents).with_context(|| format!("invalid TOML in {}", path.display()))
    }

    /// Persist the configuration, creating the config directory on first use.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("could not create {}", dir.display()))?;
        }

        let rendered = toml::to_string_pretty(self).context("configuration is not valid TOML")?;
        fs::write(&path, rendered)
            .with_context(|| format!("could not write {}", path.display()))?;

        Ok(())
    }

    /// Where the config lives: `config.toml` under the platform config
    /// directory for skycast.
    pub fn config_file_path() -> Result<PathBuf> {
        ProjectDirs::from("dev", "skycast", "skycast")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or_else(|| anyhow!("no platform config directory available"))
    }
}
