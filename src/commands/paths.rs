//! Paths command: all shortest distances from one source
use waypoint_core::error::Result;
use waypoint_core::graph::{Cost, Graph, ShortestPaths};
use waypoint_core::records::{escape_quotes, format_cost, header};

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the paths command
pub fn execute(cli: &Cli, graph: &mut Graph<String>, source: &str) -> Result<()> {
    let result = graph.shortest_paths(source.to_string());

    output_by_format_result!(cli.format,
        json => output_json(graph, &result),
        human => { output_human(cli, graph, &result); },
        records => { output_records(graph, &result); }
    )
}

fn reachable_count(graph: &Graph<String>, result: &ShortestPaths<String>) -> usize {
    graph
        .nodes()
        .iter()
        .filter(|node| result.is_reachable(node))
        .count()
}

fn output_human(cli: &Cli, graph: &Graph<String>, result: &ShortestPaths<String>) {
    if !cli.quiet {
        println!(
            "Shortest paths from {} ({} of {} nodes reachable)",
            result.source,
            reachable_count(graph, result),
            graph.node_count()
        );
    }

    for node in graph.nodes() {
        let distance = result.distance(node).unwrap_or(Cost::INFINITY);
        let via = match result.predecessors.get(node) {
            Some(Some(pred)) => format!("via {}", pred),
            _ if node == &result.source => "source".to_string(),
            _ => "unreachable".to_string(),
        };
        println!("  {}  {}  {}", node, format_cost(distance), via);
    }
}

fn output_json(graph: &Graph<String>, result: &ShortestPaths<String>) -> Result<()> {
    let nodes: Vec<serde_json::Value> = graph
        .nodes()
        .iter()
        .map(|node| {
            serde_json::json!({
                "id": node,
                "distance": result.distance(node),
                "predecessor": result.predecessors.get(node).cloned().flatten(),
                "reachable": result.is_reachable(node),
            })
        })
        .collect();

    let output = serde_json::json!({
        "source": result.source,
        "directed": graph.directed(),
        "nodes": nodes,
        "stats": result.stats,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(graph: &Graph<String>, result: &ShortestPaths<String>) {
    println!(
        "{}",
        header(
            "paths",
            &[
                ("source", format!("\"{}\"", escape_quotes(&result.source))),
                ("nodes", graph.node_count().to_string()),
                ("reachable", reachable_count(graph, result).to_string()),
            ],
        )
    );

    for node in graph.nodes() {
        let distance = result.distance(node).unwrap_or(Cost::INFINITY);
        let via = match result.predecessors.get(node) {
            Some(Some(pred)) => format!("\"{}\"", escape_quotes(pred)),
            _ => "-".to_string(),
        };
        println!(
            "N \"{}\" distance={} via={}",
            escape_quotes(node),
            format_cost(distance),
            via
        );
    }
}
