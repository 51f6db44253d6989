//! Service tests covering request parsing, response shapes and configuration.

use std::io::Write;

use approx::assert_relative_eq;
use rootscan_api::dto::{BisectionRequest, EvaluateRequest, NewtonRequest, SecantRequest};
use rootscan_api::{ApiError, RootService, ServiceConfig};
use serde_json::{json, Value};

fn service() -> RootService {
    RootService::new(ServiceConfig::default())
}

// =============================================================================
// REQUEST PARSING
// =============================================================================

#[test]
fn requests_accept_original_payloads() {
    let req: BisectionRequest = serde_json::from_value(json!({
        "function": "x**2 - 4",
        "a": 0,
        "b": 3,
        "tolerance": 1e-6,
        "max_iterations": 100
    }))
    .unwrap();
    assert_eq!(req.max_iterations, Some(100));

    let req: NewtonRequest = serde_json::from_value(json!({
        "equation": "x**2 - 4",
        "initial_guess": 0.0
    }))
    .unwrap();
    assert_eq!(req.search_range, None);

    let req: SecantRequest = serde_json::from_value(json!({
        "function": "x**3 - 2*x - 5",
        "x0": 2,
        "x1": 3
    }))
    .unwrap();
    assert_eq!(req.x1, 3.0);
}

#[test]
fn missing_function_is_a_validation_error() {
    let req: BisectionRequest = serde_json::from_value(json!({ "a": 0, "b": 3 })).unwrap();

    let err = service().bisection(&req).unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(err.to_response().error.code, "VALIDATION_ERROR");
}

// =============================================================================
// RESPONSE SHAPES
// =============================================================================

#[test]
fn bisection_response_shape() {
    let response = service()
        .bisection(&BisectionRequest::new("x**2 - 4", 0.0, 3.0))
        .unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert!(json["converged"].as_bool().unwrap());
    let first = &json["history"][0];
    assert_eq!(first["iteration"], 1);
    assert_eq!(first["c"], 1.5);
    assert_eq!(first["f(c)"], -1.75);
    assert_eq!(first["error"], 3.0);
    assert_eq!(json["samples"]["xs"].as_array().unwrap().len(), 300);
}

#[test]
fn bisection_plot_keeps_gaps() {
    let response = service()
        .bisection(&BisectionRequest::new("log(x) - 1", 0.5, 4.0))
        .unwrap();
    let json = serde_json::to_value(&response).unwrap();

    // the window starts at 0.15, so every sample is defined
    assert!(json["samples"]["ys"]
        .as_array()
        .unwrap()
        .iter()
        .all(Value::is_number));
    assert_relative_eq!(response.root, std::f64::consts::E, epsilon = 1e-5);

    let response = service()
        .bisection(&BisectionRequest::new("sqrt(x) - 1", 0.0, 4.0))
        .unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert!(json["samples"]["ys"][0].is_null());
}

#[test]
fn newton_response_shape() {
    let response = service().newton(&NewtonRequest::new("x**2 - 4", 0.0)).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["roots"].as_array().unwrap().len(), 2);
    assert_relative_eq!(json["root"].as_f64().unwrap(), -2.0, epsilon = 1e-9);
    assert_eq!(json["message"], "Found 2 root(s) in the search range.");
    let derivative = rootscan_expr::compile(json["derivative"].as_str().unwrap()).unwrap();
    assert_relative_eq!(derivative.eval(3.0), 6.0);
    for key in ["total_error", "final_error", "iterations_count", "iterations_data"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn newton_trace_rows() {
    let response = service().newton(&NewtonRequest::new("x**2 - 4", 3.0)).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    let first = &json["iterations_data"][0];
    assert_eq!(first["x_value"], 3.0);
    assert_eq!(first["f_x"], 5.0);
    assert_eq!(first["f_prime_x"], 6.0);
}

#[test]
fn newton_without_roots_is_not_an_error() {
    let response = service().newton(&NewtonRequest::new("x**2 + 1", 0.5)).unwrap();

    assert!(!response.converged);
    assert!(response.root.is_none());
    assert!(response.roots.is_empty());
    assert_eq!(response.total_error, 0.0);
    assert!(response.message.starts_with("No roots found"));
}

#[test]
fn newton_search_overrides() {
    let mut req = NewtonRequest::new("sin(x)", 0.0);
    req.search_range = Some(1.0);
    req.num_search_points = Some(3);

    let response = service().newton(&req).unwrap();

    assert_eq!(response.roots.len(), 1);
    assert_relative_eq!(response.roots[0], 0.0, epsilon = 1e-9);
}

#[test]
fn secant_response_shape() {
    let response = service()
        .secant(&SecantRequest::new("x**3 - 2*x - 5", 2.0, 3.0))
        .unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["num_roots"], 1);
    assert_eq!(json["multiple_roots"], false);
    assert_relative_eq!(json["root"].as_f64().unwrap(), 2.0945515, epsilon = 1e-6);
    let first = &json["data"][0];
    assert_eq!(first["x0"], 2.0);
    assert_eq!(first["x1"], 3.0);
}

#[test]
fn secant_without_roots() {
    let response = service()
        .secant(&SecantRequest::new("x**2 + 1", 1.0, 2.0))
        .unwrap();

    assert!(!response.success);
    assert!(response.root.is_none());
    assert_eq!(response.num_roots, 0);
    assert_eq!(response.iterations, 0);
}

#[test]
fn evaluate_reports_total_failure() {
    let response = service()
        .evaluate(&EvaluateRequest {
            equation: "sqrt(x)".into(),
            x_values: vec![-3.0, -2.0],
        })
        .unwrap();

    assert!(!response.success);
    assert!(response.points.is_empty());
}

#[test]
fn invalid_expression() {
    let err = service()
        .secant(&SecantRequest::new("sin(x", 0.0, 1.0))
        .unwrap_err();
    let body = serde_json::to_value(err.to_response()).unwrap();

    assert_eq!(body["error"]["code"], "INVALID_EXPRESSION");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid expression"));
}

#[test]
fn bisection_failure_keeps_history() {
    // 1/(x - 1) changes sign across the pole at 1, which the first midpoint hits
    let err = service()
        .bisection(&BisectionRequest::new("1/(x - 1)", 0.0, 2.0))
        .unwrap_err();

    assert_eq!(err.code(), "DOMAIN_ERROR");
    let body = serde_json::to_value(err.to_response()).unwrap();
    assert!(body["error"].get("history").is_none());

    // with a bracket that narrows onto the pole the history is non-empty
    let err = service()
        .bisection(&BisectionRequest::new("1/(x - 0.5)", 0.0, 2.0))
        .unwrap_err();
    let body = serde_json::to_value(err.to_response()).unwrap();
    assert_eq!(body["error"]["history"][0]["c"], 1.0);
}

#[test]
fn catalog_lists_functions() {
    let catalog = service().catalog();

    assert!(catalog.basic.contains(&"pow".to_string()));
    assert!(catalog.trigonometric.contains(&"atanh".to_string()));
    assert_eq!(catalog.constants, vec!["pi", "e"]);
    assert!(catalog.examples.contains(&"cos(x) - x".to_string()));
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn configured_defaults_apply_to_requests() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[defaults]\nmax_iterations = 3\n\n[plot]\nsamples = 50").unwrap();
    let config = ServiceConfig::from_file(file.path()).unwrap();
    let service = RootService::new(config);

    let response = service
        .bisection(&BisectionRequest::new("x**2 - 2", 1.0, 2.0))
        .unwrap();

    assert!(!response.converged);
    assert_eq!(response.iterations, 3);
    assert_eq!(response.samples.len(), 50);
}

#[test]
fn request_settings_override_configuration() {
    let mut req = BisectionRequest::new("x**2 - 2", 1.0, 2.0);
    req.max_iterations = Some(2);

    let response = service().bisection(&req).unwrap();

    assert_eq!(response.iterations, 2);
}
