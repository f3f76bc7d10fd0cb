//! Neighbors command: outgoing edges of one node
use waypoint_core::error::Result;
use waypoint_core::graph::{Edge, Graph};
use waypoint_core::records::{escape_quotes, format_cost, header};

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the neighbors command. Unknown nodes have no neighbors.
pub fn execute(cli: &Cli, graph: &Graph<String>, node: &str) -> Result<()> {
    let node = node.to_string();
    let edges = graph.neighbors(&node);

    output_by_format_result!(cli.format,
        json => output_json(&node, graph.contains(&node), edges),
        human => { output_human(cli, &node, edges); },
        records => { output_records(&node, edges); }
    )
}

fn output_human(cli: &Cli, node: &str, edges: &[Edge<String>]) {
    if edges.is_empty() {
        if !cli.quiet {
            println!("No outgoing edges from {}", node);
        }
        return;
    }

    for edge in edges {
        println!("{} -> {}  {}", node, edge.to, format_cost(edge.weight));
    }
}

fn output_json(node: &str, known: bool, edges: &[Edge<String>]) -> Result<()> {
    let output = serde_json::json!({
        "id": node,
        "known": known,
        "neighbors": edges,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(node: &str, edges: &[Edge<String>]) {
    println!(
        "{}",
        header(
            "neighbors",
            &[
                ("id", format!("\"{}\"", escape_quotes(node))),
                ("count", edges.len().to_string()),
            ],
        )
    );
    for edge in edges {
        println!(
            "E \"{}\" -> \"{}\" weight={}",
            escape_quotes(node),
            escape_quotes(&edge.to),
            format_cost(edge.weight)
        );
    }
}
