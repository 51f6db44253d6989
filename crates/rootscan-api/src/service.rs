//! Root-finding services.
//!
//! Each call compiles the equation, runs the core solver and shapes the
//! result. Nothing is shared between calls apart from the read-only
//! configuration.

use rootscan_expr::{compile, Expression};
use rootscan_math::sampling::{evaluate_samples, plot_window};
use rootscan_math::search::{newton_search, secant_search, SecantRoots};
use rootscan_math::solvers::bisection;
use tracing::{debug, info_span, warn};

use crate::config::ServiceConfig;
use crate::dto::{
    require_finite, require_text, solver_config, BisectionRequest, BisectionResponse,
    BisectionRow, CatalogResponse, EvaluateRequest, EvaluateResponse, NewtonRequest,
    NewtonResponse, NewtonRow, SecantRequest, SecantResponse, SecantRow,
};
use crate::error::{ApiError, ApiResult};

/// Entry point for the bisection, Newton-Raphson, secant and evaluation services.
#[derive(Debug, Clone, Default)]
pub struct RootService {
    config: ServiceConfig,
}

impl RootService {
    /// Creates a service with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Bisects `[a, b]` and samples the function around the bracket.
    pub fn bisection(&self, req: &BisectionRequest) -> ApiResult<BisectionResponse> {
        let _span = info_span!("bisection", function = %req.function, a = req.a, b = req.b).entered();

        let f = parse("function", &req.function)?;
        let a = require_finite("a", req.a)?;
        let b = require_finite("b", req.b)?;
        let config = solver_config(req.tolerance, req.max_iterations, &self.config.defaults)?;

        let solution = bisection(f.as_fn(), a, b, &config).map_err(|failure| {
            warn!(error = %failure.error, steps = failure.trace.len(), "bisection failed");
            ApiError::Solver {
                error: failure.error,
                trace: Some(failure.trace.iter().map(BisectionRow::from).collect()),
            }
        })?;
        debug!(root = solution.root, iterations = solution.iterations, "bisection finished");

        let samples = plot_window(
            f.as_fn(),
            a,
            b,
            self.config.plot.margin,
            self.config.plot.samples,
        );

        Ok(BisectionResponse {
            root: solution.root,
            iterations: solution.iterations,
            error: solution.error,
            converged: solution.converged,
            history: solution.trace.iter().map(BisectionRow::from).collect(),
            samples,
        })
    }

    /// Searches for roots with Newton-Raphson around the initial guess.
    pub fn newton(&self, req: &NewtonRequest) -> ApiResult<NewtonResponse> {
        let _span = info_span!("newton", equation = %req.equation, x0 = req.initial_guess).entered();

        let f = parse("equation", &req.equation)?;
        let df = f.derivative();
        let x0 = require_finite("initial_guess", req.initial_guess)?;
        let config = solver_config(req.tolerance, req.max_iterations, &self.config.defaults)?;

        let mut search_config = self.config.newton;
        if let Some(range) = req.search_range {
            search_config.search_range = range;
        }
        if let Some(points) = req.num_search_points {
            search_config.num_search_points = points;
        }

        let search = newton_search(f.as_fn(), df.as_fn(), x0, &config, &search_config)?;
        debug!(
            roots = search.roots.len(),
            attempts = search.attempts,
            "newton search finished"
        );

        Ok(NewtonResponse {
            root: search.primary_root,
            roots: search.roots.as_slice().to_vec(),
            converged: search.converged,
            total_error: search.residual,
            final_error: search.residual,
            iterations_count: search.trace.len(),
            iterations_data: search.trace.iter().map(NewtonRow::from).collect(),
            message: search.message,
            derivative: df.to_string(),
        })
    }

    /// Searches for roots with the secant method starting from `(x0, x1)`.
    pub fn secant(&self, req: &SecantRequest) -> ApiResult<SecantResponse> {
        let _span = info_span!("secant", function = %req.function, x0 = req.x0, x1 = req.x1).entered();

        let f = parse("function", &req.function)?;
        let x0 = require_finite("x0", req.x0)?;
        let x1 = require_finite("x1", req.x1)?;
        let config = solver_config(req.tolerance, req.max_iterations, &self.config.defaults)?;

        let search = secant_search(f.as_fn(), x0, x1, &config, &self.config.secant)?;
        debug!(
            roots = search.roots.len(),
            attempts = search.attempts,
            "secant search finished"
        );

        let error = match search.outcome {
            SecantRoots::Single { error, .. } => Some(error),
            SecantRoots::None | SecantRoots::Multiple { .. } => None,
        };
        let num_roots = search.roots.len();

        Ok(SecantResponse {
            root: search.roots.first(),
            roots: search.roots.into_vec(),
            multiple_roots: num_roots > 1,
            num_roots,
            iterations: search.trace.len(),
            error,
            data: search.trace.iter().map(SecantRow::from).collect(),
            success: num_roots > 0,
        })
    }

    /// Evaluates the equation at each requested point.
    pub fn evaluate(&self, req: &EvaluateRequest) -> ApiResult<EvaluateResponse> {
        let _span = info_span!("evaluate", equation = %req.equation, points = req.x_values.len()).entered();

        let f = parse("equation", &req.equation)?;
        let points = evaluate_samples(f.as_fn(), &req.x_values);
        let failed = req.x_values.len() - points.len();

        if points.is_empty() {
            return Ok(EvaluateResponse {
                points,
                success: false,
                message: "Could not evaluate function at any of the provided points".to_string(),
            });
        }

        let mut message = format!("Successfully evaluated {} points", points.len());
        if failed > 0 {
            message.push_str(&format!(" ({} points failed)", failed));
        }
        Ok(EvaluateResponse {
            points,
            success: true,
            message,
        })
    }

    /// Supported functions, constants and example equations.
    pub fn catalog(&self) -> CatalogResponse {
        CatalogResponse::build()
    }
}

fn parse(field: &str, text: &str) -> ApiResult<Expression> {
    let text = require_text(field, text)?;
    Ok(compile(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn service() -> RootService {
        RootService::new(ServiceConfig::default())
    }

    #[test]
    fn test_bisection() {
        let response = service()
            .bisection(&BisectionRequest::new("x**2 - 4", 0.0, 3.0))
            .unwrap();

        assert!(response.converged);
        assert_relative_eq!(response.root, 2.0, epsilon = 1e-6);
        assert_eq!(response.history.len(), response.iterations as usize);
        assert_eq!(response.samples.len(), 300);
    }

    #[test]
    fn test_bisection_invalid_bracket() {
        let err = service()
            .bisection(&BisectionRequest::new("x**2 - 4", 3.0, 5.0))
            .unwrap_err();

        assert_eq!(err.code(), "INVALID_BRACKET");
    }

    #[test]
    fn test_blank_function() {
        let err = service()
            .bisection(&BisectionRequest::new("  ", 0.0, 1.0))
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_newton_reports_derivative() {
        let response = service()
            .newton(&NewtonRequest::new("x**3 - 2*x - 5", 2.0))
            .unwrap();

        let derivative = rootscan_expr::compile(&response.derivative).unwrap();
        assert_eq!(derivative.eval(2.0), 10.0);
        assert!(response.converged);
        assert_eq!(response.total_error, response.final_error);
        assert_eq!(response.iterations_count, response.iterations_data.len());
    }

    #[test]
    fn test_secant_error_only_for_single_root() {
        let single = service()
            .secant(&SecantRequest::new("x**3 - 2*x - 5", 2.0, 3.0))
            .unwrap();
        assert_eq!(single.num_roots, 1);
        assert!(single.error.is_some());
        assert!(!single.multiple_roots);

        let several = service()
            .secant(&SecantRequest::new("x**2 - 4", 1.0, 3.0))
            .unwrap();
        assert!(several.multiple_roots);
        assert!(several.error.is_none());
        assert_relative_eq!(several.root.unwrap(), -2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_evaluate_counts_failures() {
        let response = service()
            .evaluate(&EvaluateRequest {
                equation: "log(x)".into(),
                x_values: vec![-1.0, 1.0, 2.0],
            })
            .unwrap();

        assert!(response.success);
        assert_eq!(response.points.len(), 2);
        assert_eq!(response.message, "Successfully evaluated 2 points (1 points failed)");
    }
}
