//! End-to-end tests for the `rootscan` binary.

use std::fs;
use std::sync::{Mutex, MutexGuard, PoisonError};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

static SERIAL: Mutex<()> = Mutex::new(());

/// A scratch directory, held together with a lock so that only one
/// `rootscan` process runs at a time. symbolica's unlicensed mode allows a
/// single instance per machine.
fn isolated() -> (MutexGuard<'static, ()>, TempDir) {
    let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    (guard, TempDir::new().unwrap())
}

/// A command isolated from any ambient configuration.
fn rootscan(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rootscan").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("ROOTSCAN_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_bisection_minimal_prints_root() {
    let (_guard, dir) = isolated();
    let output = rootscan(&dir)
        .args(["--format", "minimal", "bisection", "-f", "x**2 - 4", "-a", "0", "-b", "3"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let root: f64 = String::from_utf8(output.stdout).unwrap().trim().parse().unwrap();
    assert!((root - 2.0).abs() < 1e-5);
}

#[test]
fn test_bisection_table_has_summary_and_trace() {
    let (_guard, dir) = isolated();
    rootscan(&dir)
        .args(["bisection", "-f", "x**2 - 4", "-a", "-3", "-b", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Root"))
        .stdout(predicate::str::contains("Converged"))
        .stdout(predicate::str::contains("f(c)"));
}

#[test]
fn test_bisection_json_includes_samples() {
    let (_guard, dir) = isolated();
    let output = rootscan(&dir)
        .args([
            "--format", "json", "bisection", "-f", "x**2 - 4", "-a", "0", "-b", "3",
            "--samples", "25",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["converged"], true);
    assert_eq!(json["samples"]["xs"].as_array().unwrap().len(), 25);
    assert!(!json["history"].as_array().unwrap().is_empty());
}

#[test]
fn test_invalid_bracket_fails() {
    let (_guard, dir) = isolated();
    rootscan(&dir)
        .args(["bisection", "-f", "x**2 + 1", "-a", "0", "-b", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bracket"));
}

#[test]
fn test_domain_error_prints_partial_trace_as_csv() {
    let (_guard, dir) = isolated();
    rootscan(&dir)
        .args([
            "--format", "csv", "bisection", "-f", "x - 0.6 + log((x - 0.5)^2)/1000", "-a", "0", "-b", "2",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("iteration,c,f(c),error"))
        .stderr(predicate::str::contains("Non-finite value"));
}

#[test]
fn test_domain_error_json_body() {
    let (_guard, dir) = isolated();
    let output = rootscan(&dir)
        .args([
            "--format", "json", "bisection", "-f", "x - 0.6 + log((x - 0.5)^2)/1000", "-a", "0", "-b", "2",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["error"]["code"], "DOMAIN_ERROR");
    assert_eq!(json["error"]["history"].as_array().unwrap().len(), 1);
}

#[test]
fn test_invalid_expression_fails() {
    let (_guard, dir) = isolated();
    rootscan(&dir)
        .args(["newton", "-f", "sin(x", "--x0", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid expression"));
}

#[test]
fn test_newton_json_finds_both_roots() {
    let (_guard, dir) = isolated();
    let output = rootscan(&dir)
        .args(["--format", "json", "newton", "-f", "x**2 - 4", "--x0", "1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    let roots: Vec<f64> = json["roots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(roots.len(), 2);
    assert!(roots.iter().any(|r| (r + 2.0).abs() < 1e-6));
    assert!(roots.iter().any(|r| (r - 2.0).abs() < 1e-6));
    let derivative = json["derivative"].as_str().unwrap();
    assert!(derivative.contains('x'), "{derivative}");
}

#[test]
fn test_newton_without_roots_exits_non_zero() {
    let (_guard, dir) = isolated();
    rootscan(&dir)
        .args(["--format", "minimal", "newton", "-f", "x**2 + 1", "--x0", "0.5"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_secant_csv_trace() {
    let (_guard, dir) = isolated();
    rootscan(&dir)
        .args(["--format", "csv", "secant", "-f", "x**3 - 2*x - 5", "--x0", "2", "--x1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("iteration,x0,x1,x2,error"));
}

#[test]
fn test_secant_minimal_lists_roots() {
    let (_guard, dir) = isolated();
    let output = rootscan(&dir)
        .args(["--format", "minimal", "secant", "-f", "x**2 - 4", "--x0", "1", "--x1", "3"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let roots: Vec<f64> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| l.parse().unwrap())
        .collect();
    assert_eq!(roots.len(), 2);
}

#[test]
fn test_evaluate_listed_points() {
    let (_guard, dir) = isolated();
    rootscan(&dir)
        .args(["--format", "minimal", "evaluate", "-f", "sqrt(x)", "--x", "1", "--x", "4"])
        .assert()
        .success()
        .stdout("1\n2\n");
}

#[test]
fn test_evaluate_skips_undefined_points() {
    let (_guard, dir) = isolated();
    let output = rootscan(&dir)
        .args(["--format", "json", "evaluate", "-f", "log(x)", "--from", "-1", "--to", "1", "--points", "3"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["points"].as_array().unwrap().len(), 1);
    assert_eq!(json["message"], "Successfully evaluated 1 points (2 points failed)");
}

#[test]
fn test_evaluate_requires_points() {
    let (_guard, dir) = isolated();
    rootscan(&dir)
        .args(["evaluate", "-f", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--from/--to"));
}

#[test]
fn test_functions_lists_catalog() {
    let (_guard, dir) = isolated();
    rootscan(&dir)
        .args(["functions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sin"))
        .stdout(predicate::str::contains("log10"))
        .stdout(predicate::str::contains("x**3 - 2*x - 5"));
}

#[test]
fn test_config_from_flag() {
    let (_guard, dir) = isolated();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[plot]\nsamples = 42\n").unwrap();

    rootscan(&dir)
        .args(["config", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("samples = 42"))
        .stdout(predicate::str::contains("loaded from"));
}

#[test]
fn test_config_from_environment_and_local_file() {
    let (_guard, dir) = isolated();
    fs::write(dir.path().join("rootscan.toml"), "[plot]\nsamples = 7\n").unwrap();
    rootscan(&dir)
        .args(["--format", "csv", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plot.samples,7"));

    let env_path = dir.path().join("env.toml");
    fs::write(&env_path, "[plot]\nsamples = 9\n").unwrap();
    rootscan(&dir)
        .env("ROOTSCAN_CONFIG", &env_path)
        .args(["--format", "csv", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plot.samples,9"));
}

#[test]
fn test_bad_config_fails() {
    let (_guard, dir) = isolated();
    fs::write(dir.path().join("rootscan.toml"), "[plot\n").unwrap();
    rootscan(&dir)
        .args(["config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
