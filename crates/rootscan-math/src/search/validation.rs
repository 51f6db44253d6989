//! Acceptance test for secant candidates.

use serde::{Deserialize, Serialize};

/// How far from the starting pair a root may lie.
///
/// The radius is `max(|x0 - x1|, min_radius)`; radii below `narrow_radius`
/// are widened to `max(radius * widen_factor, narrow_radius)`. Roots further
/// than `max_distance_factor * radius` from the midpoint of the pair are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Allowed distance in multiples of the radius.
    pub max_distance_factor: f64,
    /// Lower bound of the radius.
    pub min_radius: f64,
    /// Radii below this are widened.
    pub narrow_radius: f64,
    /// Multiplier applied to a narrow radius.
    pub widen_factor: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_distance_factor: 8.0,
            min_radius: 1.0,
            narrow_radius: 2.0,
            widen_factor: 3.0,
        }
    }
}

impl ValidationConfig {
    /// Midpoint of the pair and the largest accepted distance from it.
    pub fn window(&self, x0: f64, x1: f64) -> (f64, f64) {
        let center = (x0 + x1) / 2.0;
        let mut radius = (x0 - x1).abs().max(self.min_radius);
        if radius < self.narrow_radius {
            radius = (radius * self.widen_factor).max(self.narrow_radius);
        }
        (center, self.max_distance_factor * radius)
    }
}

/// Whether `root` is a real root of `f` close enough to the pair `(x0, x1)`.
///
/// Rejects roots where `f(root)` is not finite or `|f(root)| >= tolerance`.
pub fn is_valid_root<F>(
    f: F,
    root: f64,
    tolerance: f64,
    x0: f64,
    x1: f64,
    config: &ValidationConfig,
) -> bool
where
    F: Fn(f64) -> f64,
{
    if !root.is_finite() {
        return false;
    }
    let value = f(root);
    if !value.is_finite() || value.abs() >= tolerance {
        return false;
    }
    let (center, allowed) = config.window(x0, x1);
    (root - center).abs() <= allowed
}
