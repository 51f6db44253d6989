//! Bisection DTOs.

use rootscan_math::sampling::FunctionSamples;
use rootscan_math::solvers::BisectionStep;
use serde::{Deserialize, Serialize};

/// Request to bisect a bracket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BisectionRequest {
    /// Equation text in `x`.
    #[serde(default)]
    pub function: String,

    /// Left end of the bracket.
    pub a: f64,

    /// Right end of the bracket.
    pub b: f64,

    /// Convergence tolerance (default from configuration).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,

    /// Iteration budget (default from configuration).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<u32>,
}

impl BisectionRequest {
    /// Creates a request with default tolerance and budget.
    pub fn new(function: impl Into<String>, a: f64, b: f64) -> Self {
        Self {
            function: function.into(),
            a,
            b,
            tolerance: None,
            max_iterations: None,
        }
    }
}

/// One row of the bisection history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BisectionRow {
    pub iteration: u32,
    pub c: f64,
    #[serde(rename = "f(c)")]
    pub fc: f64,
    pub error: f64,
}

impl From<&BisectionStep> for BisectionRow {
    fn from(step: &BisectionStep) -> Self {
        Self {
            iteration: step.iteration,
            c: step.c,
            fc: step.fc,
            error: step.error,
        }
    }
}

/// Bisection result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BisectionResponse {
    pub root: f64,
    pub iterations: u32,
    pub error: f64,
    pub converged: bool,
    pub history: Vec<BisectionRow>,
    /// The function over the bracket plus a margin, for plotting.
    pub samples: FunctionSamples,
}
