//! Worked examples for each solver and driver.

use approx::assert_relative_eq;
use rootscan_math::prelude::*;

fn quadratic(x: f64) -> f64 {
    x * x - 4.0
}

fn quadratic_prime(x: f64) -> f64 {
    2.0 * x
}

#[test]
fn bisection_on_quadratic() {
    let solution = bisection(quadratic, 0.0, 3.0, &SolverConfig::new(1e-6, 100)).unwrap();

    assert!(solution.converged);
    assert_relative_eq!(solution.root, 2.0, epsilon = 1e-6);
    assert!(solution.iterations < 25);
}

#[test]
fn newton_from_either_side() {
    let config = SolverConfig::default();

    let right = newton_raphson(quadratic, quadratic_prime, 3.0, &config).unwrap();
    let left = newton_raphson(quadratic, quadratic_prime, -3.0, &config).unwrap();

    assert_relative_eq!(right.root, 2.0, epsilon = 1e-9);
    assert_relative_eq!(left.root, -2.0, epsilon = 1e-9);
}

#[test]
fn newton_search_finds_both_roots() {
    let search = newton_search(
        quadratic,
        quadratic_prime,
        0.0,
        &SolverConfig::default(),
        &NewtonSearchConfig::default().with_range(10.0),
    )
    .unwrap();

    let roots = search.roots.as_slice();
    assert_eq!(roots.len(), 2);
    assert_relative_eq!(roots[0], -2.0, epsilon = 1e-9);
    assert_relative_eq!(roots[1], 2.0, epsilon = 1e-9);
}

#[test]
fn secant_on_cubic() {
    let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;

    let solution = secant(f, 2.0, 3.0, &SolverConfig::default()).unwrap();

    assert_relative_eq!(solution.root, 2.0945515, epsilon = 1e-6);
}

#[test]
fn newton_on_positive_quadratic() {
    let f = |x: f64| x * x + 1.0;
    let df = |x: f64| 2.0 * x;

    let failure = newton_raphson(f, df, 0.0, &SolverConfig::default()).unwrap_err();
    assert!(matches!(failure.error, MathError::DegenerateDerivative { .. }));

    let failure = newton_raphson(f, df, 1.0, &SolverConfig::default()).unwrap_err();
    assert!(matches!(
        failure.error,
        MathError::DegenerateDerivative { .. } | MathError::MaxIterationsReached { .. }
    ));
}

#[test]
fn unified_best_effort_policy() {
    let config = SolverConfig::new(1e-15, 3).with_exhaustion(ExhaustionPolicy::BestEffort);

    let newton = newton_raphson(quadratic, quadratic_prime, 50.0, &config).unwrap();

    assert!(!newton.converged);
    assert_eq!(newton.iterations, 3);
}

#[test]
fn secant_search_packaging() {
    let single = secant_search(
        |x: f64| x.exp() - 2.0,
        0.0,
        1.0,
        &SolverConfig::default(),
        &SecantSearchConfig::default(),
    )
    .unwrap();
    match single.outcome {
        SecantRoots::Single { root, .. } => assert_relative_eq!(root, 2.0_f64.ln(), epsilon = 1e-6),
        other => panic!("expected a single root, got {other:?}"),
    }

    let several = secant_search(
        |x: f64| x.powi(3) - x,
        0.5,
        2.0,
        &SolverConfig::default(),
        &SecantSearchConfig::default(),
    )
    .unwrap();
    assert_eq!(several.roots.len(), 3);
    assert!(matches!(several.outcome, SecantRoots::Multiple { .. }));
}

#[test]
fn samples_for_plotting() {
    let points = evaluate_samples(|x: f64| x.sqrt(), &linspace(-1.0, 1.0, 5));
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].x, 0.0);
}
