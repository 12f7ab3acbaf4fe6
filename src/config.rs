use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root paths to scan, in order
    pub paths: Vec<String>,
}

impl Config {
    /// Load configuration from `path`, or from `config.yaml` in the working directory.
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as YAML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path.extension().is_some_and(|ext| ext == "toml");
        let config = if is_toml {
            toml::from_str(&contents).map_err(|source| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            Self::parse_yaml(&contents).map_err(|source| ConfigError::ParseYaml {
                path: path.to_path_buf(),
                source,
            })?
        };

        Self::validate(config)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config = Self::parse_yaml(contents).map_err(|source| ConfigError::ParseYaml {
            path: PathBuf::from("<string>"),
            source,
        })?;
        Self::validate(config)
    }

    /// Parse TOML configuration from a string.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
            path: PathBuf::from("<string>"),
            source,
        })?;
        Self::validate(config)
    }

    /// Root paths as filesystem paths.
    pub fn root_paths(&self) -> Vec<PathBuf> {
        self.paths.iter().map(PathBuf::from).collect()
    }

    // An empty document deserializes to `null`, which means "no settings".
    fn parse_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        let config: Option<Self> = serde_yaml::from_str(contents)?;
        Ok(config.unwrap_or_default())
    }

    fn validate(config: Self) -> Result<Self, ConfigError> {
        if let Some(idx) = config.paths.iter().position(|p| p.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("paths[{}] is empty", idx)));
        }
        Ok(config)
    }
}
