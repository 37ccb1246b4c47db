//! Configuration loading and management
//!
//! Server settings come from an optional YAML file (path in
//! `LOADBOARD_CONFIG`), with `LOADBOARD_HOST` / `LOADBOARD_PORT` overriding
//! individual values. Missing settings fall back to defaults, so the binary
//! starts with no configuration at all.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("Failed to parse config")?;
        Ok(config)
    }

    /// Resolve configuration from the environment: the file named by
    /// `LOADBOARD_CONFIG` if set, then per-field env overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var("LOADBOARD_CONFIG") {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(host) = std::env::var("LOADBOARD_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("LOADBOARD_PORT") {
            config.port = port
                .parse()
                .context("LOADBOARD_PORT must be a port number")?;
        }

        Ok(config)
    }

    /// Bind address in `host:port` form
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
