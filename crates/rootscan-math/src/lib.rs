//! # Rootscan Math
//!
//! Root-finding core for Rootscan.
//!
//! This crate provides:
//!
//! - **Solvers**: single-root iterations (bisection, Newton-Raphson, secant)
//!   that return their full iteration trace
//! - **Search**: multi-root drivers that fan a solver out over many starting
//!   points, validate and deduplicate the results
//! - **Sampling**: helpers that tabulate a function for plotting
//!
//! Everything here works on plain `Fn(f64) -> f64` closures. Parsing
//! equation text is left to the caller.
//!
//! ```rust
//! use rootscan_math::prelude::*;
//!
//! let f = |x: f64| x * x - 4.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let search = newton_search(f, df, 0.0, &SolverConfig::default(), &NewtonSearchConfig::default())
//!     .unwrap();
//! assert_eq!(search.roots.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod parallel;
pub mod sampling;
pub mod search;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Failure, MathError, MathResult};
    pub use crate::sampling::{evaluate_samples, linspace, plot_window, FunctionSamples, SamplePoint};
    pub use crate::search::{
        is_valid_root, newton_search, secant_search, NewtonSearch, NewtonSearchConfig, RootSet,
        SecantRoots, SecantSearch, SecantSearchConfig, ValidationConfig,
    };
    pub use crate::solvers::{
        bisection, newton_raphson, secant, BisectionStep, ExhaustionPolicy, Method, NewtonStep,
        SecantStep, SolveResult, Solution, SolverConfig, TraceStep,
    };
}

pub use error::{Failure, MathError, MathResult};
