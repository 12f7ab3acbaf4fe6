use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use project_scanner::cli::Cli;
use project_scanner::config::Config;
use project_scanner::output::{format_json, format_lines};
use project_scanner::scanner::ProjectScanner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    let roots: Vec<PathBuf> = if cli.paths.is_empty() {
        let config = Config::load(cli.config.as_deref())?;
        tracing::debug!(?config, "Loaded configuration");
        config.root_paths()
    } else {
        cli.paths.clone()
    };

    tracing::info!(roots = roots.len(), "Scanning for projects");

    let scanner = ProjectScanner::default();
    let projects = scanner.scan_with(&roots, |err| {
        tracing::warn!("Skipping: {}", err);
    });

    tracing::info!(found = projects.len(), "Scan complete");

    let output = if cli.json {
        let mut json = format_json(&projects, true)?;
        json.push('\n');
        json
    } else {
        format_lines(&projects)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("project_scanner={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
