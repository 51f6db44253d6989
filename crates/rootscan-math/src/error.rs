//! Error types for root finding.

use thiserror::Error;

/// A specialized Result type for root-finding operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while searching for roots.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The bracket endpoints do not straddle a sign change.
    #[error("Invalid bracket: f({a}) = {fa:.6} and f({b}) = {fb:.6} must have opposite signs")]
    InvalidBracket {
        /// Left endpoint.
        a: f64,
        /// Right endpoint.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// The derivative is too close to zero for a Newton step.
    #[error("Derivative too close to zero at x = {x} (f'(x) = {derivative:.2e})")]
    DegenerateDerivative {
        /// Point of evaluation.
        x: f64,
        /// The near-zero derivative.
        derivative: f64,
    },

    /// The two secant points have (almost) equal function values.
    #[error("Secant slope undefined: f({x1}) - f({x0}) = {difference:.2e}")]
    DegenerateSecant {
        /// Older point.
        x0: f64,
        /// Newer point.
        x1: f64,
        /// The near-zero difference of function values.
        difference: f64,
    },

    /// A function value or iterate was NaN or infinite.
    #[error("Non-finite value {value} encountered at x = {x}")]
    DomainError {
        /// Point of evaluation.
        x: f64,
        /// The offending value.
        value: f64,
    },

    /// The iteration budget ran out before convergence.
    #[error("Max iterations reached ({iterations}) without convergence")]
    MaxIterationsReached {
        /// Number of iterations performed.
        iterations: u32,
    },

    /// A multi-root search produced no acceptable root.
    #[error("No roots found after {attempts} attempts")]
    NoRootsFound {
        /// Number of single-root runs attempted.
        attempts: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a domain error for a non-finite `value` seen at `x`.
    #[must_use]
    pub fn domain(x: f64, value: f64) -> Self {
        Self::DomainError { x, value }
    }

    /// Stable snake-case name of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidBracket { .. } => "invalid_bracket",
            Self::DegenerateDerivative { .. } => "degenerate_derivative",
            Self::DegenerateSecant { .. } => "degenerate_secant",
            Self::DomainError { .. } => "domain_error",
            Self::MaxIterationsReached { .. } => "max_iterations_reached",
            Self::NoRootsFound { .. } => "no_roots_found",
            Self::InvalidInput { .. } => "invalid_input",
        }
    }
}

/// A failed single-root solve, with the steps taken before it stopped.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{error}")]
pub struct Failure<S> {
    /// Why the solve stopped.
    pub error: MathError,
    /// Iteration records produced before the failure.
    pub trace: Vec<S>,
}

impl<S> Failure<S> {
    /// Creates a failure carrying a partial trace.
    pub fn new(error: MathError, trace: Vec<S>) -> Self {
        Self { error, trace }
    }
}

impl<S> From<MathError> for Failure<S> {
    fn from(error: MathError) -> Self {
        Self::new(error, Vec::new())
    }
}
