//! Secant over a grid of starting pairs.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::sampling::linspace;
use crate::search::{is_valid_root, RootSet, ValidationConfig};
use crate::solvers::{secant, SecantStep, SolverConfig};

/// Tuning for [`secant_search`].
///
/// The global grid spans `[-R, R]` with
/// `R = min(range_multiplier * max(|x0|, |x1|, min_base_range), max_range)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecantSearchConfig {
    /// Points in the global grid.
    pub num_intervals: usize,
    /// Points clustered around the caller's pair.
    pub local_points: usize,
    /// Half-width of the local cluster in multiples of `|x1 - x0|`.
    pub local_spread: f64,
    /// Multiplier applied to the largest starting magnitude.
    pub range_multiplier: f64,
    /// Smallest magnitude used to size the grid.
    pub min_base_range: f64,
    /// Upper bound of `R`.
    pub max_range: f64,
    /// Each grid point is paired with this many following points.
    pub pair_span: usize,
    /// Pairs closer than this are skipped.
    pub min_pair_gap: f64,
    /// Pairs with both points this close to a known root are skipped.
    pub root_exclusion: f64,
    /// Stop once this many roots are accepted.
    pub max_roots: usize,
    /// Traces are kept for this many roots.
    pub traced_roots: usize,
    /// Roots closer than this are the same root.
    pub dedup_tolerance: f64,
    /// Distance and residual gate.
    pub validation: ValidationConfig,
}

impl Default for SecantSearchConfig {
    fn default() -> Self {
        Self {
            num_intervals: 12,
            local_points: 6,
            local_spread: 2.0,
            range_multiplier: 3.0,
            min_base_range: 3.0,
            max_range: 15.0,
            pair_span: 2,
            min_pair_gap: 0.05,
            root_exclusion: 0.1,
            max_roots: 4,
            traced_roots: 3,
            dedup_tolerance: 1e-3,
            validation: ValidationConfig::default(),
        }
    }
}

impl SecantSearchConfig {
    /// Checks that the ranges and tolerances are usable.
    pub fn validate(&self) -> MathResult<()> {
        let non_negative = [
            ("local_spread", self.local_spread),
            ("range_multiplier", self.range_multiplier),
            ("min_base_range", self.min_base_range),
            ("max_range", self.max_range),
            ("min_pair_gap", self.min_pair_gap),
            ("root_exclusion", self.root_exclusion),
            ("dedup_tolerance", self.dedup_tolerance),
            ("validation.max_distance_factor", self.validation.max_distance_factor),
            ("validation.min_radius", self.validation.min_radius),
            ("validation.narrow_radius", self.validation.narrow_radius),
            ("validation.widen_factor", self.validation.widen_factor),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(MathError::invalid_input(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.max_roots == 0 {
            return Err(MathError::invalid_input("max_roots must be at least 1"));
        }
        Ok(())
    }
}

/// Roots reported by [`secant_search`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SecantRoots {
    /// Nothing passed validation.
    None,
    /// Exactly one root, with the error of the run that found it.
    Single {
        /// The root.
        root: f64,
        /// Final error of its secant run.
        error: f64,
    },
    /// Several roots, ascending.
    Multiple {
        /// The roots.
        roots: Vec<f64>,
    },
}

/// Result of [`secant_search`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecantSearch {
    /// Distinct accepted roots, ascending.
    pub roots: RootSet,
    /// Packaged view of `roots`.
    pub outcome: SecantRoots,
    /// Traces of the first accepted roots, concatenated.
    pub trace: Vec<SecantStep>,
    /// Number of secant runs attempted.
    pub attempts: usize,
}

impl SecantSearch {
    /// Fails with [`MathError::NoRootsFound`] when nothing was accepted.
    pub fn ensure_found(&self) -> MathResult<()> {
        if self.roots.is_empty() {
            Err(MathError::NoRootsFound {
                attempts: self.attempts,
            })
        } else {
            Ok(())
        }
    }
}

/// Candidate starting points: a global grid over `[-R, R]` merged with a
/// cluster around the midpoint of `(x0, x1)`, sorted and deduplicated.
pub fn grid_points(x0: f64, x1: f64, config: &SecantSearchConfig) -> Vec<f64> {
    let base = x0.abs().max(x1.abs()).max(config.min_base_range);
    let range = (config.range_multiplier * base).min(config.max_range);
    let mut points = linspace(-range, range, config.num_intervals);

    let center = (x0 + x1) / 2.0;
    let spread = (x1 - x0).abs() * config.local_spread;
    points.extend(linspace(center - spread, center + spread, config.local_points));

    points.retain(|p| p.is_finite());
    points.sort_by(f64::total_cmp);
    points.dedup();
    points
}

struct Collector<'a> {
    config: &'a SolverConfig,
    search: &'a SecantSearchConfig,
    origin: (f64, f64),
    roots: RootSet,
    trace: Vec<SecantStep>,
    last_error: f64,
    attempts: usize,
}

impl Collector<'_> {
    fn is_full(&self) -> bool {
        self.roots.len() >= self.search.max_roots
    }

    fn near_known_root(&self, a: f64, b: f64) -> bool {
        let exclusion = self.search.root_exclusion;
        self.roots
            .iter()
            .any(|r| (a - r).abs() < exclusion && (b - r).abs() < exclusion)
    }

    fn attempt<F: Fn(f64) -> f64>(&mut self, f: &F, a: f64, b: f64) {
        self.attempts += 1;
        let solution = match secant(f, a, b, self.config) {
            Ok(solution) => solution,
            Err(failure) => {
                trace!("secant run ({}, {}) failed: {}", a, b, failure.error);
                return;
            }
        };

        let (x0, x1) = self.origin;
        if !is_valid_root(
            f,
            solution.root,
            self.config.tolerance,
            x0,
            x1,
            &self.search.validation,
        ) {
            trace!("secant run ({}, {}) rejected {}", a, b, solution.root);
            return;
        }
        if !self.roots.insert(solution.root, self.search.dedup_tolerance) {
            return;
        }

        debug!("secant run ({}, {}) accepted root {}", a, b, solution.root);
        if self.roots.len() <= self.search.traced_roots {
            self.trace.extend(solution.trace);
        }
        self.last_error = solution.error;
    }
}

/// Runs the secant method from `(x0, x1)` and then from pairs of
/// [`grid_points`], collecting validated distinct roots.
///
/// Each grid point is paired with the next `pair_span` points. Pairs closer
/// than `min_pair_gap`, or with both points within `root_exclusion` of an
/// accepted root, are skipped. The search stops once `max_roots` roots are
/// accepted. Failed runs are ignored.
///
/// ```rust
/// use rootscan_math::search::{secant_search, SecantRoots, SecantSearchConfig};
/// use rootscan_math::solvers::SolverConfig;
///
/// let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;
/// let search = secant_search(f, 2.0, 3.0, &SolverConfig::default(), &SecantSearchConfig::default())
///     .unwrap();
///
/// assert!(matches!(search.outcome, SecantRoots::Single { .. }));
/// ```
pub fn secant_search<F>(
    f: F,
    x0: f64,
    x1: f64,
    config: &SolverConfig,
    search: &SecantSearchConfig,
) -> MathResult<SecantSearch>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    search.validate()?;
    if !x0.is_finite() || !x1.is_finite() {
        return Err(MathError::invalid_input("initial points must be finite"));
    }

    let mut collector = Collector {
        config,
        search,
        origin: (x0, x1),
        roots: RootSet::new(),
        trace: Vec::new(),
        last_error: f64::NAN,
        attempts: 0,
    };

    collector.attempt(&f, x0, x1);

    let points = grid_points(x0, x1, search);
    'outer: for i in 0..points.len() {
        let end = (i + 1 + search.pair_span).min(points.len());
        for j in (i + 1)..end {
            if collector.is_full() {
                break 'outer;
            }
            let (a, b) = (points[i], points[j]);
            if (a - b).abs() < search.min_pair_gap || collector.near_known_root(a, b) {
                continue;
            }
            collector.attempt(&f, a, b);
        }
    }

    let Collector {
        roots,
        trace,
        last_error,
        attempts,
        ..
    } = collector;

    let outcome = match roots.as_slice() {
        [] => SecantRoots::None,
        [root] => SecantRoots::Single {
            root: *root,
            error: last_error,
        },
        many => SecantRoots::Multiple {
            roots: many.to_vec(),
        },
    };
    debug!(
        "secant search from ({}, {}): {} root(s) from {} attempts",
        x0,
        x1,
        roots.len(),
        attempts
    );

    Ok(SecantSearch {
        roots,
        outcome,
        trace,
        attempts,
    })
}
