//! Server configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `TODO_API_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use todo_domain::value_objects::CategoryRegistry;

/// Prefix for environment overrides, e.g. `TODO_API_PORT=8080`
pub const ENV_PREFIX: &str = "TODO_API";

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "todo-api.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or parsed
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are not usable
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Insert the sample item at startup
    pub seed_sample_data: bool,
    /// Valid category names, in display order
    pub categories: Vec<String>,
    /// Maximum log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            seed_sample_data: true,
            categories: CategoryRegistry::DEFAULT_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration
    ///
    /// An explicit `path` must exist; otherwise `todo-api.toml` is read if
    /// present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path.to_path_buf()).required(true),
            None => File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(env_prefix)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("categories"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validate and build the category registry
    pub fn validate(&self) -> Result<CategoryRegistry, ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Validation(
                "Port must be greater than 0".to_string(),
            ));
        }

        self.log_level()?;

        CategoryRegistry::new(self.categories.iter().cloned())
            .map_err(|e| ConfigError::Validation(e.reason()))
    }

    /// Parsed log level
    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level.parse().map_err(|_| {
            ConfigError::Validation(format!("Unknown log level '{}'", self.log_level))
        })
    }

    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
