//! Newton-Raphson DTOs.

use rootscan_math::solvers::NewtonStep;
use serde::{Deserialize, Serialize};

/// Request for a Newton-Raphson multi-root search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewtonRequest {
    /// Equation text in `x`.
    #[serde(default)]
    pub equation: String,

    /// Guess the search is centred on.
    pub initial_guess: f64,

    /// Convergence tolerance (default from configuration).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,

    /// Iteration budget per probe (default from configuration).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<u32>,

    /// Width of the window of guesses (default from configuration).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_range: Option<f64>,

    /// Number of guesses in the window (default from configuration).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_search_points: Option<usize>,
}

impl NewtonRequest {
    /// Creates a request with configured defaults for everything else.
    pub fn new(equation: impl Into<String>, initial_guess: f64) -> Self {
        Self {
            equation: equation.into(),
            initial_guess,
            tolerance: None,
            max_iterations: None,
            search_range: None,
            num_search_points: None,
        }
    }
}

/// One Newton-Raphson iteration row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonRow {
    pub iteration: u32,
    pub x_value: f64,
    pub f_x: f64,
    pub f_prime_x: f64,
    pub error: f64,
}

impl From<&NewtonStep> for NewtonRow {
    fn from(step: &NewtonStep) -> Self {
        Self {
            iteration: step.iteration,
            x_value: step.x,
            f_x: step.fx,
            f_prime_x: step.dfx,
            error: step.error,
        }
    }
}

/// Newton-Raphson search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewtonResponse {
    /// Root nearest the initial guess.
    pub root: Option<f64>,
    /// All distinct roots, ascending.
    pub roots: Vec<f64>,
    pub converged: bool,
    /// `|f(root)|`.
    pub total_error: f64,
    /// Same as `total_error`.
    pub final_error: f64,
    pub iterations_count: usize,
    /// Iterations of the run started at the initial guess.
    pub iterations_data: Vec<NewtonRow>,
    pub message: String,
    /// Printed symbolic derivative.
    pub derivative: String,
}
