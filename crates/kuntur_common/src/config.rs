//! Daemon configuration.
//!
//! Read from `kuntur.toml` in the working directory, overridable with
//! $KUNTUR_CONFIG. Every field has a deployment default, so running
//! without a config file is fine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default config file location
pub const CONFIG_PATH: &str = "kuntur.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "KUNTUR_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KunturConfig {
    /// Bind address for the HTTP API
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the persisted case document
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_data_file() -> String {
    "static/data/casos.json".to_string()
}

impl Default for KunturConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
        }
    }
}

impl KunturConfig {
    /// Load from $KUNTUR_CONFIG or the default location. A missing or
    /// unparsable file falls back to defaults.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Invalid config {}, using defaults: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Cannot read config {}, using defaults: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
