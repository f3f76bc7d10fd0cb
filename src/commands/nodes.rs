//! Nodes command: every registered node in insertion order
use waypoint_core::error::Result;
use waypoint_core::graph::Graph;
use waypoint_core::records::{escape_quotes, header};

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the nodes command
pub fn execute(cli: &Cli, graph: &Graph<String>) -> Result<()> {
    output_by_format_result!(cli.format,
        json => output_json(graph),
        human => { output_human(cli, graph); },
        records => { output_records(graph); }
    )
}

fn output_human(cli: &Cli, graph: &Graph<String>) {
    if graph.node_count() == 0 {
        if !cli.quiet {
            println!("Graph is empty");
        }
        return;
    }

    for node in graph.nodes() {
        println!("{}  (out-degree {})", node, graph.neighbors(node).len());
    }
}

fn output_json(graph: &Graph<String>) -> Result<()> {
    let output = serde_json::json!({
        "directed": graph.directed(),
        "node_count": graph.node_count(),
        "edge_count": graph.edge_count(),
        "nodes": graph.nodes(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(graph: &Graph<String>) {
    println!(
        "{}",
        header(
            "nodes",
            &[
                ("directed", graph.directed().to_string()),
                ("nodes", graph.node_count().to_string()),
                ("edges", graph.edge_count().to_string()),
            ],
        )
    );
    for node in graph.nodes() {
        println!(
            "N \"{}\" out_degree={}",
            escape_quotes(node),
            graph.neighbors(node).len()
        );
    }
}
