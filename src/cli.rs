use clap::Parser;
use std::path::PathBuf;

/// Project Scanner - Find software projects under a set of directories
#[derive(Parser, Debug)]
#[command(name = "project-scanner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directories to scan (overrides the config file)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH", env = "PROJECT_SCANNER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
