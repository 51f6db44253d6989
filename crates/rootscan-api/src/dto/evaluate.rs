//! Function evaluation DTOs.

use rootscan_math::sampling::SamplePoint;
use serde::{Deserialize, Serialize};

/// Request to evaluate an equation at given points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// Equation text in `x`.
    #[serde(default)]
    pub equation: String,

    /// Points to evaluate at.
    #[serde(default)]
    pub x_values: Vec<f64>,
}

/// Evaluated points, skipping those where the function is not finite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub points: Vec<SamplePoint>,
    pub success: bool,
    pub message: String,
}
