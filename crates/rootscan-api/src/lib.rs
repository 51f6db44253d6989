//! Rootscan service layer.
//!
//! This crate joins equation text to the root-finding core and shapes the
//! results into serializable responses.
//!
//! ## Services
//!
//! - Bisection on a bracket, with a function plot
//! - Newton-Raphson multi-root search, with the symbolic derivative
//! - Secant multi-root search
//! - Function evaluation at arbitrary points
//! - Catalog of supported functions and example equations
//!
//! ## Usage
//!
//! ```rust
//! use rootscan_api::dto::NewtonRequest;
//! use rootscan_api::{RootService, ServiceConfig};
//!
//! let service = RootService::new(ServiceConfig::default());
//! let response = service.newton(&NewtonRequest::new("x**2 - 4", 1.0)).unwrap();
//!
//! assert_eq!(response.roots.len(), 2);
//! assert_eq!(response.derivative, "2*x");
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod service;

pub use config::ServiceConfig;
pub use error::{ApiError, ApiResult};
pub use service::RootService;
