// ABOUTME: Integration tests for the stride-plan binary
// ABOUTME: Runs each subcommand against temporary request files and checks the JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Integration tests for the stride-plan binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use serde_json::{json, Value};
use tempfile::TempDir;

/// Run the CLI and capture exit code, stdout and stderr
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_stride-plan"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (exit_code, stdout, stderr)
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn request_json(frequency: u8) -> Value {
    json!({
        "user_id": "runner-1",
        "current_vdot": 45.0,
        "target_race": "5k",
        "weekly_frequency": frequency,
        "experience_level": "intermediate"
    })
}

#[test]
fn test_help_lists_subcommands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["vdot", "target", "plan", "block"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}

#[test]
fn test_vdot_from_race_result() {
    let (exit_code, stdout, stderr) = run_cli(&["vdot", "--distance", "5k", "--time", "20:00"]);
    assert_eq!(exit_code, 0, "{stderr}");

    let output: Value = serde_json::from_str(&stdout).unwrap();
    let vdot = output["vdot"].as_f64().unwrap();
    assert!((49.0..51.0).contains(&vdot), "{vdot}");
    assert!(output["paces"]["easy"].as_f64().unwrap() > output["paces"]["threshold"].as_f64().unwrap());
    assert!(output["paces_formatted"]["threshold"]
        .as_str()
        .unwrap()
        .ends_with("/mi"));
    assert!(output["equivalent_times_formatted"]["marathon"]
        .as_str()
        .unwrap()
        .starts_with("3:"));
}

#[test]
fn test_vdot_rejects_bad_time() {
    let (exit_code, _stdout, stderr) = run_cli(&["vdot", "--distance", "5k", "--time", "fast"]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Invalid time"));
}

#[test]
fn test_target_vdot() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "target", "--vdot", "45", "--level", "beginner", "--weeks", "12",
    ]);
    assert_eq!(exit_code, 0, "{stderr}");

    let output: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(output["experience_level"], "beginner");
    assert!(output["target_vdot"].as_f64().unwrap() > 45.0);
}

#[test]
fn test_plan_week_output() {
    let dir = TempDir::new().unwrap();
    let request = write_json(&dir, "request.json", &request_json(4));

    let (exit_code, stdout, stderr) = run_cli(&[
        "plan",
        "--request",
        request.to_str().unwrap(),
        "--week",
        "3",
        "--start",
        "2026-10-19",
    ]);
    assert_eq!(exit_code, 0, "{stderr}");

    let output: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(output["plan"]["total_weeks"], 10);
    assert_eq!(output["plan"]["target_race"], "5k");
    assert_eq!(output["week"]["number"], 3);
    assert_eq!(output["week"]["phase"], "build");
    assert_eq!(output["week"]["workouts"].as_array().unwrap().len(), 4);
}

#[test]
fn test_block_from_run_history() {
    let dir = TempDir::new().unwrap();
    let request = write_json(&dir, "request.json", &request_json(4));
    let runs = write_json(
        &dir,
        "runs.json",
        &json!([
            { "distance": 3.1, "duration": 1260.0, "date": "2026-10-04" },
            { "distance": 6.2, "duration": 2700.0, "date": "2026-10-11" }
        ]),
    );

    let (exit_code, stdout, stderr) = run_cli(&[
        "block",
        "--request",
        request.to_str().unwrap(),
        "--runs",
        runs.to_str().unwrap(),
        "--start",
        "2026-10-19",
    ]);
    assert_eq!(exit_code, 0, "{stderr}");

    let output: Value = serde_json::from_str(&stdout).unwrap();
    let vdot = output["plan"]["vdot"].as_f64().unwrap();
    assert!((45.5..46.5).contains(&vdot), "{vdot}");

    let workouts = output["workouts"].as_array().unwrap();
    assert_eq!(workouts.len(), 8);
    assert_eq!(workouts[0]["scheduled_date"], "2026-10-19");
    assert_eq!(workouts[7]["scheduled_date"], "2026-11-01");
    assert!(workouts.iter().all(|workout| workout["id"].is_string()));
}

#[test]
fn test_invalid_request_reports_error_code() {
    let dir = TempDir::new().unwrap();
    let request = write_json(&dir, "request.json", &request_json(9));

    let (exit_code, stdout, stderr) = run_cli(&[
        "plan",
        "--request",
        request.to_str().unwrap(),
        "--start",
        "2026-10-19",
    ]);
    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("INVALID_INPUT"), "{stderr}");
    assert!(stderr.contains("weekly_frequency"), "{stderr}");
}

#[test]
fn test_unknown_race_is_unsupported() {
    let dir = TempDir::new().unwrap();
    let mut body = request_json(4);
    body["target_race"] = json!("ultra");
    let request = write_json(&dir, "request.json", &body);

    let (exit_code, _stdout, stderr) = run_cli(&["plan", "--request", request.to_str().unwrap()]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("ultra"), "{stderr}");
}
