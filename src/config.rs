//! Configuration module
//!
//! Loads server settings from an optional `trackflow.toml` file, the process
//! environment, and built-in defaults, in that order of precedence. The
//! deployment contract only requires the `PORT` environment variable; the
//! remaining keys exist for local overrides.

use serde::Deserialize;
use std::net::SocketAddr;

/// Server configuration, immutable after startup
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory containing the built web client
    pub build_dir: String,
    /// SPA entry document served for client-side routes
    pub index_file: String,
    pub access_log: bool,
    /// Access log format (`common` or `combined`)
    pub access_log_format: String,
}

impl Config {
    /// Load configuration from `trackflow.toml` (if present), the environment,
    /// and defaults
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("trackflow")
    }

    /// Load configuration from the specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::default())
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("build_dir", "build")?
            .set_default("index_file", "index.html")?
            .set_default("access_log", true)?
            .set_default("access_log_format", "common")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
