use crate::cli::support::{stdout_json, waypoint, EXAMPLE_GRAPH};
use predicates::prelude::*;

#[test]
fn test_paths_human() {
    waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["paths", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Shortest paths from A (3 of 4 nodes reachable)",
        ))
        .stdout(predicate::str::contains("  A  0  source"))
        .stdout(predicate::str::contains("  B  2  via C"))
        .stdout(predicate::str::contains("  C  1  via A"))
        .stdout(predicate::str::contains("  D  inf  unreachable"));
}

#[test]
fn test_paths_json() {
    let output = waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--format", "json", "paths", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["source"], "A");
    assert_eq!(json["directed"], true);

    let nodes = json["nodes"].as_array().unwrap();
    let ids: Vec<&str> = nodes.iter().map(|n| n["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["A", "B", "C", "D"]);

    assert_eq!(nodes[1]["distance"], 2.0);
    assert_eq!(nodes[1]["predecessor"], "C");
    assert!(nodes[0]["predecessor"].is_null());
    assert!(nodes[3]["distance"].is_null());
    assert_eq!(nodes[3]["reachable"], false);

    assert_eq!(json["stats"]["stale_skips"], 1);
    assert_eq!(json["stats"]["relaxations"], 3);
}

#[test]
fn test_paths_unknown_source_is_registered() {
    let output = waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--format", "json", "paths", "Z"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 5);
    assert_eq!(nodes[4]["id"], "Z");
    assert_eq!(nodes[4]["distance"], 0.0);
    assert_eq!(nodes[0]["reachable"], false);
}

#[test]
fn test_paths_records() {
    waypoint()
        .args(EXAMPLE_GRAPH)
        .args(["--format", "records", "paths", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H waypoint=1 records=1 mode=paths source=\"A\" nodes=4 reachable=3",
        ))
        .stdout(predicate::str::contains("N \"B\" distance=2 via=\"C\""))
        .stdout(predicate::str::contains("N \"D\" distance=inf via=-"));
}

#[test]
fn test_paths_format_from_env() {
    let output = waypoint()
        .env("WAYPOINT_FORMAT", "json")
        .args(EXAMPLE_GRAPH)
        .args(["paths", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["source"], "A");
}
