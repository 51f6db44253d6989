//! Bisection root-finding algorithm.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{Failure, MathError};
use crate::solvers::{opposite_signs, Method, SolveResult, Solution, SolverConfig, TraceStep};

/// One bisection iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BisectionStep {
    /// 1-based iteration index.
    pub iteration: u32,
    /// Midpoint of the current bracket.
    pub c: f64,
    /// `f(c)`.
    pub fc: f64,
    /// Width of the bracket the midpoint was taken from.
    pub error: f64,
}

impl TraceStep for BisectionStep {
    fn iteration(&self) -> u32 {
        self.iteration
    }

    fn error(&self) -> f64 {
        self.error
    }
}

/// Bisection root-finding algorithm.
///
/// Repeatedly halves `[a, b]`, keeping the half whose endpoints change sign.
/// Stops as soon as `|f(c)| < tolerance` or the bracket width drops below
/// the tolerance; either condition is enough.
///
/// Requires `f(a)` and `f(b)` to have opposite signs. The endpoints are used
/// in the order given.
///
/// When the iteration budget runs out the midpoint of the last bracket is
/// returned with `converged = false`, unless the policy is
/// [`ExhaustionPolicy::Strict`](crate::solvers::ExhaustionPolicy::Strict).
///
/// # Example
///
/// ```rust
/// use rootscan_math::solvers::{bisection, SolverConfig};
///
/// let f = |x: f64| x * x - 4.0;
///
/// let result = bisection(f, 0.0, 3.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 2.0).abs() < 1e-6);
/// assert!(result.iterations < 25);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> SolveResult<BisectionStep>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    if !a.is_finite() || !b.is_finite() {
        return Err(MathError::invalid_input("bracket endpoints must be finite").into());
    }

    let fa = f(a);
    let fb = f(b);
    if !fa.is_finite() {
        return Err(MathError::domain(a, fa).into());
    }
    if !fb.is_finite() {
        return Err(MathError::domain(b, fb).into());
    }
    if !opposite_signs(fa, fb) {
        return Err(MathError::InvalidBracket { a, b, fa, fb }.into());
    }

    let (mut lo, mut hi, mut f_lo) = (a, b, fa);
    let mut steps = Vec::new();

    for iteration in 1..=config.max_iterations {
        let c = (lo + hi) / 2.0;
        let fc = f(c);
        let width = (hi - lo).abs();

        if !fc.is_finite() {
            return Err(Failure::new(MathError::domain(c, fc), steps));
        }

        trace!("bisection {}: c = {}, f(c) = {:e}, width = {:e}", iteration, c, fc, width);
        steps.push(BisectionStep {
            iteration,
            c,
            fc,
            error: width,
        });

        if fc.abs() < config.tolerance || width < config.tolerance {
            return Ok(Solution {
                root: c,
                iterations: iteration,
                error: width,
                converged: true,
                trace: steps,
            });
        }

        if opposite_signs(f_lo, fc) {
            hi = c;
        } else {
            lo = c;
            f_lo = fc;
        }
    }

    if config
        .exhaustion
        .is_strict(Method::Bisection.strict_by_default())
    {
        return Err(Failure::new(
            MathError::MaxIterationsReached {
                iterations: config.max_iterations,
            },
            steps,
        ));
    }

    let root = (lo + hi) / 2.0;
    let width = (hi - lo).abs();
    debug!(
        "bisection exhausted {} iterations, best estimate {} (width {:e})",
        config.max_iterations, root, width
    );
    Ok(Solution {
        root,
        iterations: config.max_iterations,
        error: width,
        converged: false,
        trace: steps,
    })
}
