//! Sorted, deduplicated collection of roots.

use serde::{Deserialize, Serialize};

/// Accepted roots in ascending order, pairwise further apart than the
/// tolerance they were inserted with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootSet {
    roots: Vec<f64>,
}

impl RootSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether some root lies within `tolerance` of `x` (inclusive).
    pub fn contains_near(&self, x: f64, tolerance: f64) -> bool {
        self.roots.iter().any(|r| (r - x).abs() <= tolerance)
    }

    /// Inserts `root` unless it is not finite or within `tolerance` of an existing root.
    ///
    /// Returns whether the root was added.
    pub fn insert(&mut self, root: f64, tolerance: f64) -> bool {
        if !root.is_finite() || self.contains_near(root, tolerance) {
            return false;
        }
        let at = self.roots.partition_point(|&r| r < root);
        self.roots.insert(at, root);
        true
    }

    /// The root closest to `x`; on a tie the smaller root.
    pub fn nearest(&self, x: f64) -> Option<f64> {
        let mut best: Option<(f64, f64)> = None;
        for &root in &self.roots {
            let distance = (root - x).abs();
            match best {
                Some((_, d)) if distance >= d => {}
                _ => best = Some((root, distance)),
            }
        }
        best.map(|(root, _)| root)
    }

    /// Number of roots.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Smallest root.
    pub fn first(&self) -> Option<f64> {
        self.roots.first().copied()
    }

    /// Roots in ascending order.
    pub fn as_slice(&self) -> &[f64] {
        &self.roots
    }

    /// Iterates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.roots.iter().copied()
    }

    /// Consumes the set, returning the sorted roots.
    pub fn into_vec(self) -> Vec<f64> {
        self.roots
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}
