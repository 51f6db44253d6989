//! Common DTO types.

use rootscan_math::solvers::SolverConfig;

use crate::error::{ApiError, ApiResult};

/// Overlays the optional request settings on the configured defaults.
pub fn solver_config(
    tolerance: Option<f64>,
    max_iterations: Option<u32>,
    defaults: &SolverConfig,
) -> ApiResult<SolverConfig> {
    let config = SolverConfig {
        tolerance: tolerance.unwrap_or(defaults.tolerance),
        max_iterations: max_iterations.unwrap_or(defaults.max_iterations),
        exhaustion: defaults.exhaustion,
    };
    config.validate()?;
    Ok(config)
}

/// Rejects a missing or blank text field.
pub fn require_text<'a>(field: &str, value: &'a str) -> ApiResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed)
}

/// Rejects NaN and infinite numbers.
pub fn require_finite(field: &str, value: f64) -> ApiResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApiError::Validation(format!(
            "{} must be a finite number",
            field
        )))
    }
}
