//! Newton-Raphson root-finding algorithm.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{Failure, MathError};
use crate::solvers::{Method, SolveResult, Solution, SolverConfig, TraceStep, SLOPE_EPSILON};

/// One Newton-Raphson iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonStep {
    /// 1-based iteration index.
    pub iteration: u32,
    /// Iterate the step started from.
    pub x: f64,
    /// `f(x)`.
    pub fx: f64,
    /// `f'(x)`.
    pub dfx: f64,
    /// Size of the step taken.
    pub error: f64,
}

impl TraceStep for NewtonStep {
    fn iteration(&self) -> u32 {
        self.iteration
    }

    fn error(&self) -> f64 {
        self.error
    }
}

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// Converges when the step size `|x_{n+1} - x_n|` drops below the tolerance;
/// the new iterate is returned as the root.
///
/// # Errors
///
/// - [`MathError::DegenerateDerivative`] when `|f'(x)| < 1e-15`
/// - [`MathError::DomainError`] when `f(x)`, `f'(x)` or the next iterate is not finite
/// - [`MathError::MaxIterationsReached`] when the budget runs out, unless the
///   policy is [`ExhaustionPolicy::BestEffort`](crate::solvers::ExhaustionPolicy::BestEffort)
///
/// Every error carries the steps taken so far.
///
/// # Example
///
/// ```rust
/// use rootscan_math::solvers::{newton_raphson, SolverConfig};
///
/// let f = |x: f64| x * x - 4.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 3.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 2.0).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> SolveResult<NewtonStep>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    config.validate()?;
    if !initial_guess.is_finite() {
        return Err(MathError::invalid_input("initial guess must be finite").into());
    }

    let mut x = initial_guess;
    let mut last_error = f64::INFINITY;
    let mut steps = Vec::new();

    for iteration in 1..=config.max_iterations {
        let fx = f(x);
        let dfx = df(x);

        if !fx.is_finite() {
            return Err(Failure::new(MathError::domain(x, fx), steps));
        }
        if !dfx.is_finite() {
            return Err(Failure::new(MathError::domain(x, dfx), steps));
        }
        if dfx.abs() < SLOPE_EPSILON {
            return Err(Failure::new(
                MathError::DegenerateDerivative { x, derivative: dfx },
                steps,
            ));
        }

        let x_next = x - fx / dfx;
        if !x_next.is_finite() {
            return Err(Failure::new(MathError::domain(x, x_next), steps));
        }

        let error = (x_next - x).abs();
        trace!("newton {}: x = {}, f(x) = {:e}, f'(x) = {:e}", iteration, x, fx, dfx);
        steps.push(NewtonStep {
            iteration,
            x,
            fx,
            dfx,
            error,
        });

        if error < config.tolerance {
            return Ok(Solution {
                root: x_next,
                iterations: iteration,
                error,
                converged: true,
                trace: steps,
            });
        }

        x = x_next;
        last_error = error;
    }

    if config
        .exhaustion
        .is_strict(Method::NewtonRaphson.strict_by_default())
    {
        debug!(
            "newton from {} did not converge in {} iterations",
            initial_guess, config.max_iterations
        );
        return Err(Failure::new(
            MathError::MaxIterationsReached {
                iterations: config.max_iterations,
            },
            steps,
        ));
    }

    Ok(Solution {
        root: x,
        iterations: config.max_iterations,
        error: last_error,
        converged: false,
        trace: steps,
    })
}
