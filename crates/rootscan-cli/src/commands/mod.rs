//! CLI command implementations.

use std::path::PathBuf;

use rootscan_api::{ApiError, RootService};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_json};

pub mod bisection;
pub mod config;
pub mod evaluate;
pub mod functions;
pub mod newton;
pub mod secant;

pub use bisection::BisectionArgs;
pub use evaluate::EvaluateArgs;
pub use newton::NewtonArgs;
pub use secant::SecantArgs;

/// Shared state handed to every command.
pub struct Context {
    pub service: RootService,
    /// Where the configuration came from, if not the defaults.
    pub config_source: Option<PathBuf>,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Shows whatever the solver managed before failing, then hands the error back.
///
/// JSON output gets the structured error body on stdout; table and CSV print
/// the partial bisection rows. Minimal prints nothing.
pub fn report_failure(err: ApiError, ctx: &Context) -> anyhow::Error {
    match ctx.format {
        OutputFormat::Json => {
            if let Err(print_err) = print_json(&err.to_response()) {
                return print_err;
            }
        }
        OutputFormat::Minimal => {}
        format => {
            if let ApiError::Solver {
                trace: Some(rows), ..
            } = &err
            {
                if !rows.is_empty() {
                    if format == OutputFormat::Table && !ctx.quiet {
                        print_header("Iterations before failure");
                    }
                    if let Err(print_err) = bisection::print_trace(rows, format) {
                        return print_err;
                    }
                }
            }
        }
    }
    err.into()
}
