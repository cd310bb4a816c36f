//! Configuration management for tarefas.
//!
//! This module handles the `tarefas.yaml` file which stores the serving
//! port, the serving root, and whether request logging is enabled. The
//! `PORT` environment variable overrides the configured port, as the
//! original server honors it.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name, looked up relative to the working directory.
pub const CONFIG_FILE_PATH: &str = "tarefas.yaml";

/// Default serving port.
pub const DEFAULT_PORT: u16 = 5500;

/// Server and application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Port for the static file server.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Root directory to serve files from.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Whether to append a JSONL line per request to the data directory.
    #[serde(default)]
    pub request_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, root: default_root(), request_logging: false }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Load config from the working directory, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(Path::new("."))
    }

    /// Load config from a specific base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(base_dir: &Path) -> Result<Option<Self>> {
        let config_path = base_dir.join(CONFIG_FILE_PATH);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Save config to a specific base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, base_dir: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(base_dir.join(CONFIG_FILE_PATH), content)?;
        Ok(())
    }

    /// Read a port override from the `PORT` environment variable.
    ///
    /// Unset or unparseable values are ignored.
    #[must_use]
    pub fn port_from_env() -> Option<u16> {
        parse_port(std::env::var("PORT").ok())
    }
}

/// Parse a port value from an environment variable lookup.
fn parse_port(var: Option<String>) -> Option<u16> {
    var?.trim().parse().ok()
}
