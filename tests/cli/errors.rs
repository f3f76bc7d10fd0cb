use crate::cli::support::{waypoint, EXAMPLE_GRAPH};
use predicates::prelude::*;

#[test]
fn test_malformed_edge_is_usage_error() {
    waypoint()
        .args(["--edge", "A-B-4", "nodes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid edge spec"));
}

#[test]
fn test_negative_weight_is_data_error() {
    waypoint()
        .args(["--edge", "A:B:-3", "route", "A", "B"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("invalid weight"));
}

#[test]
fn test_infinite_weight_is_data_error() {
    waypoint()
        .args(["--edge", "A:B:inf", "nodes"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_json_error_envelope() {
    let output = waypoint()
        .args(["--format", "json", "--edge", "A:B:-1", "nodes"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_weight");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_json_envelope_for_parse_errors() {
    let output = waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--format", "json", "route", "A"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_unknown_format() {
    waypoint()
        .args(["--format", "xml", "nodes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}
