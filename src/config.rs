//! App Configuration
//!
//! Catalog, confetti options and log level, embedded at compile time.

use log::LevelFilter;
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::celebrate::ConfettiOptions;
use crate::error::ConfigError;

const EMBEDDED_CONFIG: &str = include_str!("../config/shopping.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    pub catalog: Catalog,
    pub confetti: ConfettiOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            catalog: Catalog::default(),
            confetti: ConfettiOptions::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.catalog.validate()?;
        Ok(config)
    }

    /// The configuration shipped in config/shopping.json
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CONFIG)
    }
}
