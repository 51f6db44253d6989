//! Secant command.

use anyhow::Result;
use clap::Args;
use rootscan_api::dto::{SecantRequest, SecantResponse, SecantRow};
use tabled::Tabled;

use super::{report_failure, Context};
use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{
    fmt_error, fmt_flag, fmt_roots, fmt_value, print_csv, print_header, print_json, print_lines,
    print_table, KeyValue,
};

/// Arguments for the secant command.
#[derive(Args, Debug)]
pub struct SecantArgs {
    /// Equation in x, e.g. "cos(x) - x"
    #[arg(short, long)]
    pub function: String,

    /// First starting point
    #[arg(long, allow_negative_numbers = true)]
    pub x0: f64,

    /// Second starting point
    #[arg(long, allow_negative_numbers = true)]
    pub x1: f64,

    /// Stop once successive iterates differ by less than this
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Iteration budget per starting pair
    #[arg(short = 'n', long)]
    pub max_iterations: Option<u32>,
}

#[derive(Tabled)]
pub(crate) struct SecantTableRow {
    #[tabled(rename = "Iteration")]
    iteration: u32,
    #[tabled(rename = "x0")]
    x0: String,
    #[tabled(rename = "x1")]
    x1: String,
    #[tabled(rename = "x2")]
    x2: String,
    #[tabled(rename = "Error")]
    error: String,
}

fn table_rows(rows: &[SecantRow]) -> Vec<SecantTableRow> {
    rows.iter()
        .map(|r| SecantTableRow {
            iteration: r.iteration,
            x0: fmt_value(r.x0),
            x1: fmt_value(r.x1),
            x2: fmt_value(r.x2),
            error: fmt_error(r.error),
        })
        .collect()
}

/// Execute the secant command.
pub fn execute(args: SecantArgs, ctx: &Context) -> Result<()> {
    let mut request = SecantRequest::new(&args.function, args.x0, args.x1);
    request.tolerance = args.tolerance;
    request.max_iterations = args.max_iterations;

    let response = ctx
        .service
        .secant(&request)
        .map_err(|err| report_failure(err, ctx))?;

    match ctx.format {
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Csv => print_csv(&response.data)?,
        OutputFormat::Minimal => print_lines(&response.roots),
        OutputFormat::Table => print_summary(&args, &response, ctx.quiet)?,
    }

    if !response.success {
        return Err(CliError::NoRoots(format!(
            "No roots found starting from x0 = {}, x1 = {}",
            args.x0, args.x1
        ))
        .into());
    }
    Ok(())
}

fn print_summary(args: &SecantArgs, response: &SecantResponse, quiet: bool) -> Result<()> {
    let summary = vec![
        KeyValue::new("Function", &args.function),
        KeyValue::new("Start", format!("x0 = {}, x1 = {}", args.x0, args.x1)),
        KeyValue::new(
            "Root",
            response.root.map_or_else(|| "none".to_string(), fmt_value),
        ),
        KeyValue::new("Roots found", response.num_roots.to_string()),
        KeyValue::new("All roots", fmt_roots(&response.roots)),
        KeyValue::new(
            "Error",
            response.error.map_or_else(|| "-".to_string(), fmt_error),
        ),
        KeyValue::new("Iterations", response.iterations.to_string()),
        KeyValue::new("Multiple roots", fmt_flag(response.multiple_roots)),
    ];

    if !quiet {
        print_header("Secant");
    }
    print_table(&summary);

    if !quiet {
        print_header("Iterations");
    }
    print_table(&table_rows(&response.data));
    Ok(())
}
