//! Application configuration loaded from `config.yaml` and the environment.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Which backing store serves content.
///
/// The original site chose its data source by which module got imported;
/// here the strategy is explicit configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ContentSource {
    /// SQLite-backed live store, read-write.
    Live { database_url: String },
    /// Bundled JSON fixtures, read-only.
    Static { data_dir: PathBuf },
}

/// Configuration options for the OVE Foods content service.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub content: ContentSource,
}

impl AppConfig {
    /// Load configuration from `config.yaml` (optional) with `OVE__`-prefixed
    /// environment variables taking precedence.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("OVE").separator("__"))
            .build()?
            .try_deserialize()
    }
}
