//! Rootscan CLI - find roots of single-variable equations.
//!
//! # Usage
//!
//! ```bash
//! # Bisect a bracket
//! rootscan bisection -f "x**2 - 4" -a 0 -b 3
//!
//! # Newton-Raphson search around a guess
//! rootscan newton -f "x**3 - 2*x - 5" --x0 2 --format json
//!
//! # Secant search from two points
//! rootscan secant -f "cos(x) - x" --x0 0 --x1 1
//!
//! # Tabulate a function
//! rootscan evaluate -f "sin(x)" --from 0 --to 3.14 --points 5
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use rootscan_api::{RootService, ServiceConfig};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

/// Configuration file picked up from the working directory.
const LOCAL_CONFIG: &str = "rootscan.toml";

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let (config, source) = load_config(cli.config.as_deref())?;
    let ctx = Context {
        service: RootService::new(config),
        config_source: source,
        format: cli.format,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Bisection(args) => commands::bisection::execute(args, &ctx)?,
        Commands::Newton(args) => commands::newton::execute(args, &ctx)?,
        Commands::Secant(args) => commands::secant::execute(args, &ctx)?,
        Commands::Evaluate(args) => commands::evaluate::execute(args, &ctx)?,
        Commands::Functions => commands::functions::execute(&ctx)?,
        Commands::Config => commands::config::execute(&ctx)?,
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Explicit path first, then `./rootscan.toml`, then built-in defaults.
fn load_config(explicit: Option<&Path>) -> Result<(ServiceConfig, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(LOCAL_CONFIG)).filter(|p| p.exists()),
    };

    match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let config = ServiceConfig::from_file(&path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            Ok((config, Some(path)))
        }
        None => {
            debug!("Using default configuration");
            Ok((ServiceConfig::default(), None))
        }
    }
}
