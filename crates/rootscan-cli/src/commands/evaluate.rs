//! Evaluate command.

use anyhow::Result;
use clap::Args;
use rootscan_api::dto::EvaluateRequest;
use rootscan_math::sampling::linspace;
use tabled::Tabled;

use super::{report_failure, Context};
use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{
    fmt_value, print_csv, print_header, print_json, print_lines, print_table, print_warning,
};

/// Arguments for the evaluate command.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Equation in x, e.g. "sin(x)"
    #[arg(short, long)]
    pub function: String,

    /// Points to evaluate at (repeatable)
    #[arg(
        long = "x",
        allow_negative_numbers = true,
        conflicts_with_all = ["from", "to"]
    )]
    pub x_values: Vec<f64>,

    /// Start of an evenly spaced range
    #[arg(long, allow_negative_numbers = true, requires = "to")]
    pub from: Option<f64>,

    /// End of an evenly spaced range
    #[arg(long, allow_negative_numbers = true, requires = "from")]
    pub to: Option<f64>,

    /// Number of points in the range
    #[arg(long, default_value_t = 11)]
    pub points: usize,
}

impl EvaluateArgs {
    /// The abscissae requested, either listed or as a range.
    fn x_values(&self) -> CliResult<Vec<f64>> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                if self.points == 0 {
                    return Err(CliError::InvalidArgument(
                        "--points must be at least 1".to_string(),
                    ));
                }
                Ok(linspace(from, to, self.points))
            }
            _ if !self.x_values.is_empty() => Ok(self.x_values.clone()),
            _ => Err(CliError::InvalidArgument(
                "give either --x values or a --from/--to range".to_string(),
            )),
        }
    }
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "x")]
    x: String,
    #[tabled(rename = "f(x)")]
    y: String,
}

/// Execute the evaluate command.
pub fn execute(args: EvaluateArgs, ctx: &Context) -> Result<()> {
    let request = EvaluateRequest {
        equation: args.function.clone(),
        x_values: args.x_values()?,
    };

    let response = ctx
        .service
        .evaluate(&request)
        .map_err(|err| report_failure(err, ctx))?;

    match ctx.format {
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Csv => print_csv(&response.points)?,
        OutputFormat::Minimal => {
            let ys: Vec<f64> = response.points.iter().map(|p| p.y).collect();
            print_lines(&ys);
        }
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!("f(x) = {}", args.function));
            }
            let rows: Vec<PointRow> = response
                .points
                .iter()
                .map(|p| PointRow {
                    x: p.x.to_string(),
                    y: fmt_value(p.y),
                })
                .collect();
            print_table(&rows);
        }
    }

    if !response.success {
        return Err(CliError::InvalidArgument(response.message).into());
    }
    if response.points.len() < request.x_values.len() && !ctx.quiet {
        print_warning(&response.message);
    }
    Ok(())
}
