//! CLI argument parsing for waypoint
//!
//! Global flags describe the graph (`--edge`, `--node`, `--undirected`)
//! and the output (`--format`, `--quiet`, `--verbose`); subcommands pick
//! the query.

pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};

pub use parse::EdgeSpec;
use parse::{parse_edge_spec, parse_output_format};
pub use waypoint_core::format::OutputFormat;

/// Waypoint - weighted shortest paths over an ad-hoc graph
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "human",
        env = "WAYPOINT_FORMAT",
        value_parser = parse_output_format
    )]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true, env = "WAYPOINT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Treat every edge as bidirectional
    #[arg(long, short, global = true)]
    pub undirected: bool,

    /// Weighted edge as FROM:TO:WEIGHT (repeatable)
    #[arg(long = "edge", short = 'e', global = true, value_parser = parse_edge_spec)]
    pub edges: Vec<EdgeSpec>,

    /// Isolated node to register (repeatable)
    #[arg(long = "node", short = 'n', global = true)]
    pub nodes: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest distance and predecessor for every node
    Paths {
        /// Source node
        source: String,
    },

    /// Shortest route between two nodes
    Route {
        /// Source node
        source: String,

        /// Target node
        target: String,
    },

    /// Outgoing edges of a node
    Neighbors {
        /// Node to inspect
        node: String,
    },

    /// List registered nodes in insertion order
    Nodes,
}
