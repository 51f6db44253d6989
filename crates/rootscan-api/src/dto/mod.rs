//! Data Transfer Objects for service requests and responses.

pub mod bisection;
pub mod catalog;
pub mod common;
pub mod evaluate;
pub mod newton;
pub mod secant;

pub use bisection::*;
pub use catalog::*;
pub use common::*;
pub use evaluate::*;
pub use newton::*;
pub use secant::*;
