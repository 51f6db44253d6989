//! Newton-Raphson over a spread of initial guesses.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::parallel::maybe_parallel_map;
use crate::search::RootSet;
use crate::solvers::{newton_raphson, NewtonStep, SolverConfig};

/// Tuning for [`newton_search`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewtonSearchConfig {
    /// Width of the window of guesses, centred on `x0`.
    pub search_range: f64,
    /// Number of evenly spaced guesses in the window.
    pub num_search_points: usize,
    /// A root is accepted only if `|f(root)| < residual_factor * tolerance`.
    pub residual_factor: f64,
    /// Roots within `dedup_factor * tolerance` of each other are the same root.
    pub dedup_factor: f64,
    /// Run probes on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for NewtonSearchConfig {
    fn default() -> Self {
        Self {
            search_range: 10.0,
            num_search_points: 20,
            residual_factor: 10.0,
            dedup_factor: 10.0,
            parallel: false,
        }
    }
}

impl NewtonSearchConfig {
    /// Sets the search window width.
    #[must_use]
    pub fn with_range(mut self, search_range: f64) -> Self {
        self.search_range = search_range;
        self
    }

    /// Sets the number of guesses.
    #[must_use]
    pub fn with_points(mut self, num_search_points: usize) -> Self {
        self.num_search_points = num_search_points;
        self
    }

    /// Checks that the window and factors are usable.
    pub fn validate(&self) -> MathResult<()> {
        if !self.search_range.is_finite() || self.search_range < 0.0 {
            return Err(MathError::invalid_input(format!(
                "search_range must be a non-negative number, got {}",
                self.search_range
            )));
        }
        if self.residual_factor.is_nan()
            || self.dedup_factor.is_nan()
            || self.residual_factor <= 0.0
            || self.dedup_factor <= 0.0
        {
            return Err(MathError::invalid_input(
                "residual_factor and dedup_factor must be positive",
            ));
        }
        Ok(())
    }
}

/// Result of [`newton_search`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewtonSearch {
    /// Distinct accepted roots, ascending.
    pub roots: RootSet,
    /// Accepted root nearest to `x0`.
    pub primary_root: Option<f64>,
    /// Whether any root was accepted.
    pub converged: bool,
    /// Iterations of the run started at `x0`.
    pub trace: Vec<NewtonStep>,
    /// `|f(primary_root)|`, infinite if not finite, zero without a root.
    pub residual: f64,
    /// Number of probes run.
    pub attempts: usize,
    /// One-line summary.
    pub message: String,
}

impl NewtonSearch {
    /// Fails with [`MathError::NoRootsFound`] when nothing was accepted.
    pub fn ensure_converged(&self) -> MathResult<()> {
        if self.converged {
            Ok(())
        } else {
            Err(MathError::NoRootsFound {
                attempts: self.attempts,
            })
        }
    }
}

/// Guesses for [`newton_search`]: `num_search_points` values spread evenly
/// over `[x0 - range/2, x0 + range/2]`, followed by `x0` when it is not
/// already one of them.
pub fn starting_points(x0: f64, config: &NewtonSearchConfig) -> Vec<f64> {
    let n = config.num_search_points;
    let start = x0 - config.search_range / 2.0;
    let step = if n > 1 {
        config.search_range / (n - 1) as f64
    } else {
        0.0
    };
    let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    if !points.iter().any(|&p| (p - x0).abs() <= f64::EPSILON * x0.abs().max(1.0)) {
        points.push(x0);
    }
    points
}

/// Runs Newton-Raphson from every guess of [`starting_points`] and collects
/// the distinct roots.
///
/// A probe contributes a root when it converged, its residual is below
/// `residual_factor * tolerance`, and no accepted root lies within
/// `dedup_factor * tolerance`. Probes are examined in starting-point order,
/// so the result is the same whether or not they ran in parallel.
///
/// The reported trace is that of the probe started at `x0`.
///
/// ```rust
/// use rootscan_math::search::{newton_search, NewtonSearchConfig};
/// use rootscan_math::solvers::SolverConfig;
///
/// let search = newton_search(
///     |x: f64| x * x - 4.0,
///     |x: f64| 2.0 * x,
///     0.0,
///     &SolverConfig::default(),
///     &NewtonSearchConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(search.roots.len(), 2);
/// // -2 and 2 are equally near; the smaller wins
/// assert!((search.primary_root.unwrap() + 2.0).abs() < 1e-9);
/// ```
pub fn newton_search<F, DF>(
    f: F,
    df: DF,
    x0: f64,
    config: &SolverConfig,
    search: &NewtonSearchConfig,
) -> MathResult<NewtonSearch>
where
    F: Fn(f64) -> f64 + Sync,
    DF: Fn(f64) -> f64 + Sync,
{
    config.validate()?;
    search.validate()?;
    if !x0.is_finite() {
        return Err(MathError::invalid_input("initial guess must be finite"));
    }

    let points = starting_points(x0, search);
    let runs = maybe_parallel_map(&points, search.parallel, |&start| {
        newton_raphson(&f, &df, start, config)
    });

    let residual_limit = search.residual_factor * config.tolerance;
    let dedup = search.dedup_factor * config.tolerance;
    let mut roots = RootSet::new();
    let mut trace = None;

    for (&start, run) in points.iter().zip(runs) {
        let solution = match run {
            Ok(solution) if solution.converged => solution,
            Ok(_) => continue,
            Err(failure) => {
                debug!("newton probe from {} failed: {}", start, failure.error);
                continue;
            }
        };

        let residual = f(solution.root).abs();
        if residual.is_nan() || residual >= residual_limit {
            debug!(
                "newton probe from {} rejected: residual {:e} at {}",
                start, residual, solution.root
            );
            continue;
        }
        if !roots.insert(solution.root, dedup) {
            continue;
        }
        debug!("newton probe from {} accepted root {}", start, solution.root);

        if trace.is_none() && (start - x0).abs() < config.tolerance {
            trace = Some(solution.trace);
        }
    }

    let trace = match trace {
        Some(trace) => trace,
        None => match newton_raphson(&f, &df, x0, config) {
            Ok(solution) => solution.trace,
            Err(failure) => failure.trace,
        },
    };

    let primary_root = roots.nearest(x0);
    let residual = primary_root.map_or(0.0, |root| {
        let value = f(root).abs();
        if value.is_finite() {
            value
        } else {
            f64::INFINITY
        }
    });
    let converged = !roots.is_empty();
    let message = if converged {
        format!("Found {} root(s) in the search range.", roots.len())
    } else {
        "No roots found in the search range. Try adjusting initial guess or search range."
            .to_string()
    };
    debug!(
        "newton search around {}: {} root(s) from {} probes",
        x0,
        roots.len(),
        points.len()
    );

    Ok(NewtonSearch {
        roots,
        primary_root,
        converged,
        trace,
        residual,
        attempts: points.len(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quadratic(x: f64) -> f64 {
        x * x - 4.0
    }

    fn quadratic_prime(x: f64) -> f64 {
        2.0 * x
    }

    #[test]
    fn test_starting_points() {
        let config = NewtonSearchConfig::default();
        let points = starting_points(0.0, &config);
        // 20 grid points, none of which is exactly 0
        assert_eq!(points.len(), 21);
        assert_relative_eq!(points[0], -5.0);
        assert_relative_eq!(points[19], 5.0, epsilon = 1e-12);
        assert_eq!(points[20], 0.0);

        let odd = config.with_points(11);
        let points = starting_points(0.0, &odd);
        assert_eq!(points.len(), 11);

        let single = config.with_points(0);
        assert_eq!(starting_points(1.5, &single), vec![1.5]);
    }

    #[test]
    fn test_finds_both_roots() {
        let search = newton_search(
            quadratic,
            quadratic_prime,
            0.0,
            &SolverConfig::default(),
            &NewtonSearchConfig::default(),
        )
        .unwrap();

        assert!(search.converged);
        assert_eq!(search.roots.len(), 2);
        assert_relative_eq!(search.roots.as_slice()[0], -2.0, epsilon = 1e-9);
        assert_relative_eq!(search.roots.as_slice()[1], 2.0, epsilon = 1e-9);
        assert_eq!(search.attempts, 21);
        assert_eq!(search.message, "Found 2 root(s) in the search range.");
        assert!(search.residual < 1e-5);
    }

    #[test]
    fn test_primary_root_is_nearest_guess() {
        let search = newton_search(
            quadratic,
            quadratic_prime,
            1.5,
            &SolverConfig::default(),
            &NewtonSearchConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(search.primary_root.unwrap(), 2.0, epsilon = 1e-9);
        // the run from x0 = 1.5 converged, so its trace is reported
        assert_relative_eq!(search.trace[0].x, 1.5);
    }

    #[test]
    fn test_fallback_trace_from_failed_guess() {
        // x0 = 0 has a zero derivative, so its trace is empty but the search still succeeds
        let search = newton_search(
            quadratic,
            quadratic_prime,
            0.0,
            &SolverConfig::default(),
            &NewtonSearchConfig::default(),
        )
        .unwrap();

        assert!(search.trace.is_empty());
        assert!(search.converged);
    }

    #[test]
    fn test_no_real_roots() {
        let search = newton_search(
            |x: f64| x * x + 1.0,
            |x: f64| 2.0 * x,
            0.5,
            &SolverConfig::default(),
            &NewtonSearchConfig::default(),
        )
        .unwrap();

        assert!(!search.converged);
        assert!(search.roots.is_empty());
        assert_eq!(search.primary_root, None);
        assert_eq!(search.residual, 0.0);
        assert!(search.message.starts_with("No roots found"));
        assert!(!search.trace.is_empty());
        assert_eq!(
            search.ensure_converged(),
            Err(MathError::NoRootsFound { attempts: 21 })
        );
    }

    #[test]
    fn test_roots_are_distinct() {
        let search = newton_search(
            |x: f64| x.sin(),
            |x: f64| x.cos(),
            0.0,
            &SolverConfig::default(),
            &NewtonSearchConfig::default().with_range(12.0),
        )
        .unwrap();

        let roots = search.roots.as_slice();
        assert!(roots.len() >= 3);
        for pair in roots.windows(2) {
            assert!(pair[1] - pair[0] > 1e-5);
        }
        assert_relative_eq!(search.primary_root.unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let f = |x: f64| x.powi(3) - x;
        let df = |x: f64| 3.0 * x * x - 1.0;
        let config = SolverConfig::default();
        let sequential = newton_search(f, df, 0.3, &config, &NewtonSearchConfig::default()).unwrap();
        let parallel = newton_search(
            f,
            df,
            0.3,
            &config,
            &NewtonSearchConfig {
                parallel: true,
                ..NewtonSearchConfig::default()
            },
        )
        .unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.roots.len(), 3);
    }

    #[test]
    fn test_invalid_search_config() {
        let result = newton_search(
            quadratic,
            quadratic_prime,
            0.0,
            &SolverConfig::default(),
            &NewtonSearchConfig::default().with_range(f64::NAN),
        );
        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }
}
