//! Waypoint Core Library
//!
//! Weighted adjacency-list graphs and single-source shortest paths
//! (Dijkstra with lazy decrease-key).

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;

pub use error::{Result, WaypointError};
pub use graph::{reconstruct_path, Cost, Edge, Graph, MinQueue, PathResult, ShortestPaths};
