use crate::cli::support::{stdout_json, waypoint, EXAMPLE_GRAPH};
use predicates::prelude::*;

#[test]
fn test_route_human() {
    waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["route", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> C -> B"))
        .stdout(predicate::str::contains("distance: 2 (2 hops)"));
}

#[test]
fn test_route_quiet_prints_only_path() {
    waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--quiet", "route", "A", "B"])
        .assert()
        .success()
        .stdout("A -> C -> B\n");
}

#[test]
fn test_route_json() {
    let output = waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--format", "json", "route", "A", "B"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["distance"], 2.0);
    assert_eq!(json["hops"], 2);
    assert_eq!(json["path"], serde_json::json!(["A", "C", "B"]));
}

#[test]
fn test_route_to_source_is_single_node() {
    let output = waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--format", "json", "route", "A", "A"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["distance"], 0.0);
    assert_eq!(json["path"], serde_json::json!(["A"]));
}

#[test]
fn test_route_unreachable_is_not_an_error() {
    waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["route", "A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from A to D"));

    let output = waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--format", "json", "route", "B", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert!(json["distance"].is_null());
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_route_unknown_target() {
    let output = waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--format", "json", "route", "A", "Nowhere"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_route_undirected_walks_backwards() {
    waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--undirected", "route", "B", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B -> C -> A"));
}

#[test]
fn test_route_later_edge_overrides_weight() {
    waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--edge", "A:B:0.5", "route", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B"))
        .stdout(predicate::str::contains("distance: 0.5 (1 hop)"));
}

#[test]
fn test_route_records() {
    waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--format", "records", "route", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H waypoint=1 records=1 mode=route from=\"A\" to=\"B\" found=true distance=2 hops=2",
        ))
        .stdout(predicate::str::contains("E \"A\" -> \"C\" weight=1"))
        .stdout(predicate::str::contains("E \"C\" -> \"B\" weight=1"));
}
