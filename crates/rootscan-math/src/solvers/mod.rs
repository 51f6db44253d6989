//! Single-root iterations.
//!
//! - [`bisection`]: bracketing method, needs a sign change on `[a, b]`
//! - [`newton_raphson`]: needs the derivative, quadratic convergence near a root
//! - [`secant`]: derivative-free, starts from two points
//!
//! Every solver records one step per iteration and hands the trace back on
//! success ([`Solution`]) and on failure ([`Failure`]).
//!
//! # Exhausting the iteration budget
//!
//! | Solver | Default on exhaustion |
//! |--------|-----------------------|
//! | Bisection | best-effort midpoint, `converged = false` |
//! | Newton-Raphson | [`MathError::MaxIterationsReached`] |
//! | Secant | best-effort last iterate, `converged = false` |
//!
//! [`ExhaustionPolicy`] overrides the default for all three.
//!
//! ```rust
//! use rootscan_math::solvers::{secant, SolverConfig};
//!
//! let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;
//! let solution = secant(f, 2.0, 3.0, &SolverConfig::default()).unwrap();
//! assert!((solution.root - 2.0945515).abs() < 1e-6);
//! ```

mod bisection;
mod newton;
mod secant;

pub use bisection::{bisection, BisectionStep};
pub use newton::{newton_raphson, NewtonStep};
pub use secant::{secant, SecantStep};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Failure, MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Slopes and function differences below this are treated as zero.
pub const SLOPE_EPSILON: f64 = 1e-15;

/// Outcome of a single-root solve.
pub type SolveResult<S> = Result<Solution<S>, Failure<S>>;

/// What a solver does when `max_iterations` runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Bisection and secant return their best estimate, Newton-Raphson fails.
    #[default]
    MethodDefault,
    /// Every solver returns its best estimate.
    BestEffort,
    /// Every solver fails with `MaxIterationsReached`.
    Strict,
}

impl ExhaustionPolicy {
    /// Whether exhaustion is an error for a solver whose own default is `strict_by_default`.
    pub(crate) fn is_strict(self, strict_by_default: bool) -> bool {
        match self {
            Self::MethodDefault => strict_by_default,
            Self::BestEffort => false,
            Self::Strict => true,
        }
    }
}

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Convergence threshold on the error estimate.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// Behaviour when the iteration budget is exhausted.
    pub exhaustion: ExhaustionPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            exhaustion: ExhaustionPolicy::MethodDefault,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the exhaustion policy.
    #[must_use]
    pub fn with_exhaustion(mut self, exhaustion: ExhaustionPolicy) -> Self {
        self.exhaustion = exhaustion;
        self
    }

    /// Checks that the tolerance is positive and at least one iteration is allowed.
    pub fn validate(&self) -> MathResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// A finished single-root solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution<S> {
    /// The root estimate.
    pub root: f64,
    /// Number of iterations performed.
    pub iterations: u32,
    /// Final error estimate (bracket width or step size).
    pub error: f64,
    /// False only when the budget ran out and a best-effort estimate was returned.
    pub converged: bool,
    /// One record per iteration.
    pub trace: Vec<S>,
}

/// Common view of an iteration record.
pub trait TraceStep {
    /// 1-based iteration index.
    fn iteration(&self) -> u32;

    /// Error estimate after this step.
    fn error(&self) -> f64;
}

/// The three single-root methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Interval halving.
    Bisection,
    /// Newton-Raphson with a derivative.
    NewtonRaphson,
    /// Secant through the last two iterates.
    Secant,
}

impl Method {
    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bisection => "Bisection",
            Self::NewtonRaphson => "Newton-Raphson",
            Self::Secant => "Secant",
        }
    }

    /// Whether exhausting the budget fails under [`ExhaustionPolicy::MethodDefault`].
    pub fn strict_by_default(self) -> bool {
        matches!(self, Self::NewtonRaphson)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True when `a` and `b` are non-zero with opposite signs.
///
/// Avoids the product `a * b`, which can underflow to zero.
pub(crate) fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}
