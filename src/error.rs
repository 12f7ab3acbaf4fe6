use std::path::{Path, PathBuf};
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to serialize results: {0}")]
    Output(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// A directory or root path that was skipped during a scan.
///
/// These never abort a scan; they are handed to the caller's error callback.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Traversal error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ScanError {
    /// Path of the entry that could not be scanned, if known.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ScanError::ReadDir { path, .. } => Some(path.as_path()),
            ScanError::Walk(err) => err.path(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScannerError>;
