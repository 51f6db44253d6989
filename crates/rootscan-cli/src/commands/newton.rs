//! Newton-Raphson command.

use anyhow::Result;
use clap::Args;
use rootscan_api::dto::{NewtonRequest, NewtonResponse, NewtonRow};
use tabled::Tabled;

use super::{report_failure, Context};
use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{
    fmt_error, fmt_flag, fmt_roots, fmt_value, print_csv, print_header, print_json, print_lines,
    print_success, print_table, KeyValue,
};

/// Arguments for the Newton-Raphson command.
#[derive(Args, Debug)]
pub struct NewtonArgs {
    /// Equation in x, e.g. "x**3 - 2*x - 5"
    #[arg(short, long)]
    pub function: String,

    /// Initial guess
    #[arg(long, allow_negative_numbers = true)]
    pub x0: f64,

    /// Stop once successive iterates differ by less than this
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Iteration budget per starting point
    #[arg(short = 'n', long)]
    pub max_iterations: Option<u32>,

    /// Half-width of the interval probed around the guess
    #[arg(long)]
    pub search_range: Option<f64>,

    /// Number of probe starting points
    #[arg(long)]
    pub points: Option<usize>,
}

#[derive(Tabled)]
pub(crate) struct NewtonTableRow {
    #[tabled(rename = "Iteration")]
    iteration: u32,
    #[tabled(rename = "x")]
    x: String,
    #[tabled(rename = "f(x)")]
    fx: String,
    #[tabled(rename = "f'(x)")]
    dfx: String,
    #[tabled(rename = "Error")]
    error: String,
}

fn table_rows(rows: &[NewtonRow]) -> Vec<NewtonTableRow> {
    rows.iter()
        .map(|r| NewtonTableRow {
            iteration: r.iteration,
            x: fmt_value(r.x_value),
            fx: fmt_error(r.f_x),
            dfx: fmt_value(r.f_prime_x),
            error: fmt_error(r.error),
        })
        .collect()
}

/// Execute the Newton-Raphson command.
pub fn execute(args: NewtonArgs, ctx: &Context) -> Result<()> {
    let mut request = NewtonRequest::new(&args.function, args.x0);
    request.tolerance = args.tolerance;
    request.max_iterations = args.max_iterations;
    request.search_range = args.search_range;
    request.num_search_points = args.points;

    let response = ctx
        .service
        .newton(&request)
        .map_err(|err| report_failure(err, ctx))?;

    match ctx.format {
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Csv => print_csv(&response.iterations_data)?,
        OutputFormat::Minimal => print_lines(&response.roots),
        OutputFormat::Table => print_summary(&args, &response, ctx.quiet)?,
    }

    if !response.converged {
        return Err(CliError::NoRoots(response.message).into());
    }
    Ok(())
}

fn print_summary(args: &NewtonArgs, response: &NewtonResponse, quiet: bool) -> Result<()> {
    let summary = vec![
        KeyValue::new("Equation", &args.function),
        KeyValue::new("Derivative", &response.derivative),
        KeyValue::new("Initial guess", args.x0.to_string()),
        KeyValue::new(
            "Root",
            response.root.map_or_else(|| "none".to_string(), fmt_value),
        ),
        KeyValue::new("All roots", fmt_roots(&response.roots)),
        KeyValue::new("Residual", fmt_error(response.final_error)),
        KeyValue::new("Iterations", response.iterations_count.to_string()),
        KeyValue::new("Converged", fmt_flag(response.converged)),
    ];

    if !quiet {
        print_header("Newton-Raphson");
    }
    print_table(&summary);

    if !quiet {
        print_header("Iterations");
    }
    print_table(&table_rows(&response.iterations_data));

    if !quiet && response.converged {
        print_success(&response.message);
    }
    Ok(())
}
