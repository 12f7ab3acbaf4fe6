//! Project Scanner - find software projects under a set of directories
//!
//! This crate provides functionality for:
//! - Classifying a directory by its immediate contents against an ordered rule table
//! - Walking root paths and reporting each project directory once, without entering it
//! - Loading root paths from a configuration file and formatting results

pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod output;
pub mod project;
pub mod scanner;

// Re-export commonly used types
pub use config::Config;
pub use detector::{DirectorySnapshot, Rule, RuleTable};
pub use error::{ConfigError, Result, ScanError, ScannerError};
pub use project::Project;
pub use scanner::{scan_projects, ProjectScanner, Visit};
