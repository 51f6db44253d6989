//! Multi-root search drivers.
//!
//! A single Newton or secant run finds at most one root, and which one
//! depends on where it starts. The drivers here run the solver from many
//! starting configurations, drop failed probes, filter the survivors and
//! collect the distinct roots in a [`RootSet`].
//!
//! - [`newton_search`]: evenly spaced guesses around `x0`
//! - [`secant_search`]: a global grid plus points clustered around the
//!   caller's pair, gated by [`is_valid_root`]
//!
//! All tuning constants live in [`NewtonSearchConfig`],
//! [`SecantSearchConfig`] and [`ValidationConfig`].

mod newton;
mod root_set;
mod secant;
mod validation;

pub use newton::{newton_search, starting_points, NewtonSearch, NewtonSearchConfig};
pub use root_set::RootSet;
pub use secant::{grid_points, secant_search, SecantRoots, SecantSearch, SecantSearchConfig};
pub use validation::{is_valid_root, ValidationConfig};
