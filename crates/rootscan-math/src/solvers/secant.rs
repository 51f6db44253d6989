//! Secant root-finding algorithm.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{Failure, MathError};
use crate::solvers::{Method, SolveResult, Solution, SolverConfig, TraceStep, SLOPE_EPSILON};

/// One secant iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecantStep {
    /// 1-based iteration index.
    pub iteration: u32,
    /// Older point.
    pub x0: f64,
    /// Newer point.
    pub x1: f64,
    /// Next iterate.
    pub x2: f64,
    /// `|x2 - x1|`.
    pub error: f64,
}

impl TraceStep for SecantStep {
    fn iteration(&self) -> u32 {
        self.iteration
    }

    fn error(&self) -> f64 {
        self.error
    }
}

/// Secant root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) * (x_n - x_{n-1}) / (f(x_n) - f(x_{n-1}))`
///
/// Unlike bisection the two starting points need not bracket a root.
/// When the budget runs out the last iterate is returned with
/// `converged = false`, unless the policy is
/// [`ExhaustionPolicy::Strict`](crate::solvers::ExhaustionPolicy::Strict).
///
/// # Errors
///
/// - [`MathError::DomainError`] when a function value or iterate is not finite
/// - [`MathError::DegenerateSecant`] when `|f(x1) - f(x0)| < 1e-15`
///
/// # Example
///
/// ```rust
/// use rootscan_math::solvers::{secant, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> SolveResult<SecantStep>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    if !x0.is_finite() || !x1.is_finite() {
        return Err(MathError::invalid_input("initial points must be finite").into());
    }

    let (mut x0, mut x1) = (x0, x1);
    let (mut f0, mut f1) = (f(x0), f(x1));
    let mut last: Option<(f64, f64)> = None;
    let mut steps = Vec::new();

    for iteration in 1..=config.max_iterations {
        if !f0.is_finite() {
            return Err(Failure::new(MathError::domain(x0, f0), steps));
        }
        if !f1.is_finite() {
            return Err(Failure::new(MathError::domain(x1, f1), steps));
        }

        let difference = f1 - f0;
        if difference.abs() < SLOPE_EPSILON {
            return Err(Failure::new(
                MathError::DegenerateSecant {
                    x0,
                    x1,
                    difference,
                },
                steps,
            ));
        }

        let x2 = x1 - f1 * (x1 - x0) / difference;
        if !x2.is_finite() {
            return Err(Failure::new(MathError::domain(x1, x2), steps));
        }

        let error = (x2 - x1).abs();
        trace!("secant {}: x0 = {}, x1 = {}, x2 = {}", iteration, x0, x1, x2);
        steps.push(SecantStep {
            iteration,
            x0,
            x1,
            x2,
            error,
        });

        if error < config.tolerance {
            return Ok(Solution {
                root: x2,
                iterations: iteration,
                error,
                converged: true,
                trace: steps,
            });
        }

        last = Some((x2, error));
        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = f(x2);
    }

    let strict = config.exhaustion.is_strict(Method::Secant.strict_by_default());
    match last {
        Some((root, error)) if !strict => {
            debug!(
                "secant exhausted {} iterations, best estimate {}",
                config.max_iterations, root
            );
            Ok(Solution {
                root,
                iterations: config.max_iterations,
                error,
                converged: false,
                trace: steps,
            })
        }
        _ => Err(Failure::new(
            MathError::MaxIterationsReached {
                iterations: config.max_iterations,
            },
            steps,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::ExhaustionPolicy;
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic() {
        let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;

        let result = secant(f, 2.0, 3.0, &SolverConfig::default()).unwrap();

        assert!(result.converged);
        assert_relative_eq!(result.root, 2.0945515, epsilon = 1e-6);
    }

    #[test]
    fn test_points_shift_each_step() {
        let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;

        let result = secant(f, 2.0, 3.0, &SolverConfig::default()).unwrap();

        let first = result.trace[0];
        assert_eq!((first.iteration, first.x0, first.x1), (1, 2.0, 3.0));
        for pair in result.trace.windows(2) {
            assert_eq!(pair[1].x0, pair[0].x1);
            assert_eq!(pair[1].x1, pair[0].x2);
            assert_eq!(pair[1].iteration, pair[0].iteration + 1);
        }
    }

    #[test]
    fn test_no_bracket_needed() {
        let f = |x: f64| x * x - 2.0;

        let result = secant(f, 3.0, 4.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-6);
    }

    #[test]
    fn test_flat_secant() {
        let f = |x: f64| x * x - 1.0;

        let failure = secant(f, -2.0, 2.0, &SolverConfig::default()).unwrap_err();

        assert!(matches!(failure.error, MathError::DegenerateSecant { .. }));
        assert!(failure.trace.is_empty());
    }

    #[test]
    fn test_non_finite_start() {
        let f = |x: f64| x.ln();

        let failure = secant(f, -1.0, 2.0, &SolverConfig::default()).unwrap_err();

        assert!(matches!(failure.error, MathError::DomainError { x, .. } if x == -1.0));
    }

    #[test]
    fn test_exhaustion_is_best_effort_by_default() {
        let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;
        let config = SolverConfig::new(1e-12, 3);

        let result = secant(f, 2.0, 3.0, &config).unwrap();

        assert!(!result.converged);
        assert_eq!(result.iterations, 3);
        let last = result.trace.last().unwrap();
        assert_eq!(result.root, last.x2);
        assert_eq!(result.error, last.error);
    }

    #[test]
    fn test_exhaustion_can_be_strict() {
        let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;
        let config = SolverConfig::new(1e-12, 3).with_exhaustion(ExhaustionPolicy::Strict);

        let failure = secant(f, 2.0, 3.0, &config).unwrap_err();

        assert_eq!(
            failure.error,
            MathError::MaxIterationsReached { iterations: 3 }
        );
        assert_eq!(failure.trace.len(), 3);
    }
}
