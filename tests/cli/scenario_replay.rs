//! Scenario files replayed through the library API

use crate::common::{write_temp_file, ROUND_ROBIN_SCENARIO};
use msgqueue::app::report::Outcome;
use msgqueue::app::runner::ScenarioRunner;
use msgqueue::app::scenario::Scenario;
use msgqueue::app::startup::resolve_history_size;
use msgqueue::app::cli::args::Args;
use serde_json::{json, Value};

fn replay(path: &std::path::Path, args: &Args) -> msgqueue::app::report::Report {
    let scenario = Scenario::load(path).unwrap();
    let history_size = resolve_history_size(args, &scenario).unwrap();
    ScenarioRunner::new(history_size).run(&scenario).unwrap()
}

#[test]
fn test_round_robin_walkthrough() {
    let (_dir, path) = write_temp_file("walkthrough.toml", ROUND_ROBIN_SCENARIO);
    let report = replay(&path, &Args::default());

    let payloads: Vec<Value> = report.popped().map(|m| m.payload.clone()).collect();
    assert_eq!(
        payloads,
        vec![json!("A"), json!("C"), json!("B"), json!("A"), json!("D")]
    );

    // history-size = 3 in the scenario keeps the last three pops
    assert_eq!(report.history_size, 3);
    match &report.steps[5].outcome {
        Outcome::History { entries } => {
            let kept: Vec<&Value> = entries.iter().map(|m| &m.payload).collect();
            assert_eq!(kept, vec![&json!("B"), &json!("A"), &json!("D")]);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_cli_history_size_wins_over_scenario() {
    let (_dir, path) = write_temp_file("walkthrough.toml", ROUND_ROBIN_SCENARIO);
    let args = Args {
        history_size: Some(1),
        ..Args::default()
    };
    let report = replay(&path, &args);

    match &report.steps[5].outcome {
        Outcome::History { entries } => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].payload, json!("D"));
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_json_report_round_trips_through_serde() {
    let (_dir, path) = write_temp_file("walkthrough.toml", ROUND_ROBIN_SCENARIO);
    let report = replay(&path, &Args::default());

    let value: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    let drained = &value["steps"][4];
    assert_eq!(drained["op"], "drain");
    assert_eq!(drained["messages"].as_array().unwrap().len(), 5);
    assert_eq!(drained["messages"][0]["remaining_plays"], 1);
    assert_eq!(drained["messages"][0]["priority"], 5);
    assert_eq!(drained["messages"][0]["message_type"], 2);
}

#[test]
fn test_invalid_step_stops_replay() {
    let (_dir, path) = write_temp_file(
        "invalid.toml",
        "[[step]]\nop = \"insert\"\npriority = 4\ntype = 0\n",
    );
    let scenario = Scenario::load(&path).unwrap();
    let err = ScenarioRunner::new(5).run(&scenario).unwrap_err();
    assert_eq!(
        err.to_string(),
        "step 1: Invalid argument: message_type must be greater than 0"
    );
}
