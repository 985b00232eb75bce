use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::EBILET_SOURCE;
use crate::error::{MapperError, Result};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "EVENT_MAPPER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub mapping: MappingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: String,
    pub file_name: String,
    /// Filter directive used when RUST_LOG is unset
    pub filter: String,
    pub file_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            file_name: "mapper.log".to_string(),
            filter: "event_mapper=debug,info".to_string(),
            file_output: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    pub default_source: String,
    pub pretty: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            default_source: EBILET_SOURCE.to_string(),
            pretty: false,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Lookup order: `explicit`, then `EVENT_MAPPER_CONFIG`, then
    /// `./config.toml` if it exists. With none of them, defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from);

        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_file(&path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            MapperError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}
