//! Route command: shortest path between two nodes
use waypoint_core::error::Result;
use waypoint_core::graph::{Graph, PathResult};
use waypoint_core::records::{escape_quotes, format_cost, header};

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the route command
///
/// An unreachable or unknown target is not an error: it is reported as
/// an infinite distance with an empty path.
pub fn execute(cli: &Cli, graph: &mut Graph<String>, source: &str, target: &str) -> Result<()> {
    let target = target.to_string();
    let result = graph.shortest_path_to(source.to_string(), &target);

    tracing::debug!(
        source,
        target = %target,
        found = result.is_reachable(),
        hops = result.hops(),
        "route resolved"
    );

    output_by_format_result!(cli.format,
        json => output_json(source, &target, &result),
        human => { output_human(cli, source, &target, &result); },
        records => { output_records(graph, source, &target, &result); }
    )
}

fn output_human(cli: &Cli, source: &str, target: &str, result: &PathResult<String>) {
    if !result.is_reachable() {
        println!("No path from {} to {}", source, target);
        return;
    }

    println!("{}", result.path.join(" -> "));
    if !cli.quiet {
        println!(
            "distance: {} ({} hop{})",
            format_cost(result.distance),
            result.hops(),
            if result.hops() == 1 { "" } else { "s" }
        );
    }
}

fn output_json(source: &str, target: &str, result: &PathResult<String>) -> Result<()> {
    let output = serde_json::json!({
        "from": source,
        "to": target,
        "found": result.is_reachable(),
        "distance": result.distance,
        "hops": result.hops(),
        "path": result.path,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(graph: &Graph<String>, source: &str, target: &str, result: &PathResult<String>) {
    println!(
        "{}",
        header(
            "route",
            &[
                ("from", format!("\"{}\"", escape_quotes(source))),
                ("to", format!("\"{}\"", escape_quotes(target))),
                ("found", result.is_reachable().to_string()),
                ("distance", format_cost(result.distance)),
                ("hops", result.hops().to_string()),
            ],
        )
    );

    for node in &result.path {
        println!("N \"{}\"", escape_quotes(node));
    }
    for pair in result.path.windows(2) {
        let weight = graph
            .weight(&pair[0], &pair[1])
            .map(format_cost)
            .unwrap_or_else(|| "?".to_string());
        println!(
            "E \"{}\" -> \"{}\" weight={}",
            escape_quotes(&pair[0]),
            escape_quotes(&pair[1]),
            weight
        );
    }
}
