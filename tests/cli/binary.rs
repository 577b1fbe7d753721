//! The `msgqueue` executable end to end

use crate::common::{write_temp_file, ROUND_ROBIN_SCENARIO};
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};

/// Run the binary with an empty config file so a user config cannot interfere
fn run_msgqueue(scenario: &Path, extra: &[&str]) -> Output {
    let (_dir, config) = write_temp_file("empty.toml", "");
    Command::new(env!("CARGO_BIN_EXE_msgqueue"))
        .arg("--config-file")
        .arg(&config)
        .arg("--no-color")
        .args(extra)
        .arg(scenario)
        .output()
        .unwrap()
}

#[test]
fn test_json_report_on_stdout() {
    let (_dir, path) = write_temp_file("walkthrough.toml", ROUND_ROBIN_SCENARIO);
    let output = run_msgqueue(&path, &["--output", "json"]);

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["history_size"], 3);
    assert_eq!(report["steps"].as_array().unwrap().len(), 6);
}

#[test]
fn test_text_report_on_stdout() {
    let (_dir, path) = write_temp_file("walkthrough.toml", ROUND_ROBIN_SCENARIO);
    let output = run_msgqueue(&path, &["-H", "2"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("history size: 2"));
    assert!(stdout.contains("p5 t2 left 1: A"));
    assert!(stdout.contains("p3 t1 left 0: D"));
}

#[test]
fn test_failing_step_exits_non_zero() {
    let (_dir, path) = write_temp_file(
        "broken.toml",
        "[[step]]\nop = \"insert\"\npriority = 1\ntype = 1\nplays = 0\n",
    );
    let output = run_msgqueue(&path, &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("step 1: Invalid argument: play_count must be greater than 0"));
}

#[test]
fn test_missing_scenario_file() {
    let output = run_msgqueue(Path::new("/no/such/scenario.toml"), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("/no/such/scenario.toml"));
}
