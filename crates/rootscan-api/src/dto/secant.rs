//! Secant DTOs.

use rootscan_math::solvers::SecantStep;
use serde::{Deserialize, Serialize};

/// Request for a secant multi-root search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecantRequest {
    /// Equation text in `x`.
    #[serde(default)]
    pub function: String,

    /// First starting point.
    pub x0: f64,

    /// Second starting point.
    pub x1: f64,

    /// Convergence tolerance (default from configuration).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,

    /// Iteration budget per run (default from configuration).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<u32>,
}

impl SecantRequest {
    /// Creates a request with default tolerance and budget.
    pub fn new(function: impl Into<String>, x0: f64, x1: f64) -> Self {
        Self {
            function: function.into(),
            x0,
            x1,
            tolerance: None,
            max_iterations: None,
        }
    }
}

/// One secant iteration row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecantRow {
    pub iteration: u32,
    pub x0: f64,
    pub x1: f64,
    pub x2: f64,
    pub error: f64,
}

impl From<&SecantStep> for SecantRow {
    fn from(step: &SecantStep) -> Self {
        Self {
            iteration: step.iteration,
            x0: step.x0,
            x1: step.x1,
            x2: step.x2,
            error: step.error,
        }
    }
}

/// Secant search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecantResponse {
    /// The root, or the smallest root when there are several.
    pub root: Option<f64>,
    /// All distinct roots, ascending.
    pub roots: Vec<f64>,
    pub multiple_roots: bool,
    pub num_roots: usize,
    /// Number of trace rows.
    pub iterations: usize,
    /// Final error of the run that found the root; absent with several roots.
    pub error: Option<f64>,
    pub data: Vec<SecantRow>,
    pub success: bool,
}
