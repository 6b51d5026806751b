//! Configuration management for costeo
//!
//! Config stored at: ~/.config/costeo/config.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::constants::TariffTable;
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Diesel price per gallon (COP). The only editable tariff field.
    #[serde(default = "default_fuel_price")]
    pub fuel_price: f64,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Data directory override
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_fuel_price() -> f64 {
    TariffTable::default().fuel_price_per_gallon
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fuel_price: default_fuel_price(),
            output_format: OutputFormat::default(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("costeo");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the data directory path (stores live here)
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir().ok_or(ConfigError::NotFound)?.join("costeo");
        Ok(data_dir)
    }

    /// The tariff table with the configured fuel price applied
    pub fn tariff(&self) -> TariffTable {
        TariffTable::default().with_fuel_price(self.fuel_price)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Costeo Configuration")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(f, "Fuel price:     {} COP/gal", self.fuel_price)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Data dir:       {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
