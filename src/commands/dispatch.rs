//! Command dispatch logic for waypoint
use std::time::Instant;

use waypoint_core::error::Result;
use waypoint_core::graph::Graph;
use waypoint_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let mut graph = build_graph(cli)?;
    trace_time!(
        start,
        "build_graph",
        nodes = graph.node_count(),
        edges = graph.edge_count()
    );

    match &cli.command {
        Commands::Paths { source } => commands::paths::execute(cli, &mut graph, source),
        Commands::Route { source, target } => {
            commands::route::execute(cli, &mut graph, source, target)
        }
        Commands::Neighbors { node } => commands::neighbors::execute(cli, &graph, node),
        Commands::Nodes => commands::nodes::execute(cli, &graph),
    }
}

/// Build the graph described by `--edge` and `--node` arguments.
///
/// Edges are added first; `--node` only contributes ids no edge mentions.
pub fn build_graph(cli: &Cli) -> Result<Graph<String>> {
    let mut graph = Graph::new(!cli.undirected);

    for edge in &cli.edges {
        graph.try_add_edge(edge.from.clone(), edge.to.clone(), edge.weight)?;
    }
    for node in &cli.nodes {
        graph.add_node(node.clone());
    }

    tracing::debug!(
        directed = graph.directed(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );
    Ok(graph)
}
