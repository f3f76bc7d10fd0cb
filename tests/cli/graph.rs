use crate::cli::support::{stdout_json, waypoint, EXAMPLE_GRAPH};
use predicates::prelude::*;

#[test]
fn test_nodes_in_insertion_order() {
    waypoint()
        .args(EXAMPLE_GRAPH)
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)A .*B .*C .*D ").unwrap());
}

#[test]
fn test_nodes_json_counts() {
    let output = waypoint()
        .args(["--undirected", "--edge", "x:y:2", "--format", "json", "nodes"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["directed"], false);
    assert_eq!(json["node_count"], 2);
    assert_eq!(json["edge_count"], 2);
    assert_eq!(json["nodes"], serde_json::json!(["x", "y"]));
}

#[test]
fn test_empty_graph() {
    waypoint()
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph is empty"));
}

#[test]
fn test_neighbors_human() {
    waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["neighbors", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B  4"))
        .stdout(predicate::str::contains("A -> C  1"));
}

#[test]
fn test_neighbors_undirected_mirror() {
    let output = waypoint()
        .args(["--undirected", "--edge", "u:v:3", "--format", "json", "neighbors", "v"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(
        json["neighbors"],
        serde_json::json!([{ "to": "u", "weight": 3.0 }])
    );
}

#[test]
fn test_neighbors_unknown_node() {
    let output = waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--format", "json", "neighbors", "Q"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["known"], false);
    assert_eq!(json["neighbors"], serde_json::json!([]));
}

#[test]
fn test_repeated_edge_updates_in_place() {
    let output = waypoint()
        .args(["--edge", "a:b:1", "--edge", "a:b:7", "--format", "json", "neighbors", "a"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(
        json["neighbors"],
        serde_json::json!([{ "to": "b", "weight": 7.0 }])
    );
}
