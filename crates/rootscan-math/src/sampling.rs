//! Tabulating a function for plots.

use serde::{Deserialize, Serialize};

/// A finite `(x, y)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Abscissa.
    pub x: f64,
    /// `f(x)`.
    pub y: f64,
}

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// `n = 0` gives an empty vector and `n = 1` gives `[start]`. The last value
/// is exactly `end`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Evaluates `f` at each x, dropping points where either coordinate is not finite.
pub fn evaluate_samples<F>(f: F, xs: &[f64]) -> Vec<SamplePoint>
where
    F: Fn(f64) -> f64,
{
    xs.iter()
        .filter(|x| x.is_finite())
        .map(|&x| SamplePoint { x, y: f(x) })
        .filter(|p| p.y.is_finite())
        .collect()
}

/// A function tabulated over a window, with gaps where it is not finite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionSamples {
    /// Abscissae, evenly spaced.
    pub xs: Vec<f64>,
    /// `f(x)`, or `None` where the value is NaN or infinite.
    pub ys: Vec<Option<f64>>,
}

impl FunctionSamples {
    /// Number of samples, gaps included.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Samples `f` at `n` points over `[a, b]` widened by `margin` of its width on each side.
pub fn plot_window<F>(f: F, a: f64, b: f64, margin: f64, n: usize) -> FunctionSamples
where
    F: Fn(f64) -> f64,
{
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let pad = (hi - lo) * margin;
    let xs = linspace(lo - pad, hi + pad, n);
    let ys = xs
        .iter()
        .map(|&x| Some(f(x)).filter(|y| y.is_finite()))
        .collect();
    FunctionSamples { xs, ys }
}
