//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{BisectionArgs, EvaluateArgs, NewtonArgs, SecantArgs};

/// Rootscan - root finding for single-variable equations
#[derive(Parser)]
#[command(name = "rootscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (TOML). Defaults to ./rootscan.toml when present.
    #[arg(short, long, global = true, env = "ROOTSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Find a root inside a sign-changing bracket
    Bisection(BisectionArgs),

    /// Search for roots with Newton-Raphson around a guess
    Newton(NewtonArgs),

    /// Search for roots with the secant method from two points
    Secant(SecantArgs),

    /// Evaluate an equation at a range or list of points
    Evaluate(EvaluateArgs),

    /// List supported functions, constants and example equations
    Functions,

    /// Print the effective configuration
    Config,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
