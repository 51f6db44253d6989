//! Bisection command.

use anyhow::Result;
use clap::Args;
use rootscan_api::dto::{BisectionRequest, BisectionResponse, BisectionRow};
use rootscan_api::RootService;
use tabled::Tabled;

use super::{report_failure, Context};
use crate::cli::OutputFormat;
use crate::output::{
    fmt_error, fmt_flag, fmt_value, print_csv, print_header, print_json, print_table, KeyValue,
};

/// Arguments for the bisection command.
#[derive(Args, Debug)]
pub struct BisectionArgs {
    /// Equation in x, e.g. "x**2 - 4"
    #[arg(short, long)]
    pub function: String,

    /// Left end of the bracket
    #[arg(short, allow_negative_numbers = true)]
    pub a: f64,

    /// Right end of the bracket
    #[arg(short, allow_negative_numbers = true)]
    pub b: f64,

    /// Stop once the half-width falls below this
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Iteration budget
    #[arg(short = 'n', long)]
    pub max_iterations: Option<u32>,

    /// Number of plot samples to include (overrides the configuration)
    #[arg(long)]
    pub samples: Option<usize>,
}

#[derive(Tabled)]
pub(crate) struct BisectionTableRow {
    #[tabled(rename = "Iteration")]
    iteration: u32,
    #[tabled(rename = "c")]
    c: String,
    #[tabled(rename = "f(c)")]
    fc: String,
    #[tabled(rename = "Error")]
    error: String,
}

pub(crate) fn table_rows(rows: &[BisectionRow]) -> Vec<BisectionTableRow> {
    rows.iter()
        .map(|r| BisectionTableRow {
            iteration: r.iteration,
            c: fmt_value(r.c),
            fc: fmt_error(r.fc),
            error: fmt_error(r.error),
        })
        .collect()
}

pub(crate) fn print_trace(rows: &[BisectionRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(rows),
        OutputFormat::Csv => print_csv(rows),
        OutputFormat::Table | OutputFormat::Minimal => {
            print_table(&table_rows(rows));
            Ok(())
        }
    }
}

/// Execute the bisection command.
pub fn execute(args: BisectionArgs, ctx: &Context) -> Result<()> {
    let service = match args.samples {
        Some(samples) => {
            let mut config = ctx.service.config().clone();
            config.plot.samples = samples;
            RootService::new(config)
        }
        None => ctx.service.clone(),
    };

    let mut request = BisectionRequest::new(&args.function, args.a, args.b);
    request.tolerance = args.tolerance;
    request.max_iterations = args.max_iterations;

    let response = service
        .bisection(&request)
        .map_err(|err| report_failure(err, ctx))?;

    match ctx.format {
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Csv => print_csv(&response.history)?,
        OutputFormat::Minimal => println!("{}", response.root),
        OutputFormat::Table => print_summary(&args, &response, ctx.quiet),
    }

    Ok(())
}

fn print_summary(args: &BisectionArgs, response: &BisectionResponse, quiet: bool) {
    let plotted = response.samples.ys.iter().filter(|y| y.is_some()).count();
    let summary = vec![
        KeyValue::new("Function", &args.function),
        KeyValue::new("Bracket", format!("[{}, {}]", args.a, args.b)),
        KeyValue::new("Root", fmt_value(response.root)),
        KeyValue::new("Iterations", response.iterations.to_string()),
        KeyValue::new("Error", fmt_error(response.error)),
        KeyValue::new("Converged", fmt_flag(response.converged)),
        KeyValue::new(
            "Plot samples",
            format!("{plotted} of {}", response.samples.len()),
        ),
    ];

    if !quiet {
        print_header("Bisection");
    }
    print_table(&summary);

    if !quiet {
        print_header("Iterations");
    }
    print_table(&table_rows(&response.history));
}
