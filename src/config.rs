//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use crate::error::Result;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Directory holding the mapping tables and corpus files
    pub data_dir: PathBuf,
}

impl Config {
    /// Build a configuration pointing at an explicit data directory.
    #[must_use]
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self { data_dir, ..Self::default() }
    }

    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Data dir: env var override, or ./data, or the platform data dir
        if let Ok(dir) = env::var("VERSEFINDER_DATA_DIR") {
            config.data_dir = PathBuf::from(shellexpand::tilde(&dir).to_string());
        } else if !config.data_dir.is_dir() {
            if let Some(dir) = dirs::data_dir()
                .map(|d| d.join("versefinder"))
                .filter(|p| p.is_dir())
            {
                config.data_dir = dir;
            }
        }

        Ok(config)
    }
}
