//! Weighted graph storage and shortest-path operations
//!
//! - `queue`: comparator-ordered binary min-heap (no decrease-key)
//! - `store`: mutable adjacency-list graph, directed or undirected
//! - `algos`: Dijkstra with lazy decrease-key
//! - `path`: predecessor-map walking

pub mod algos;
pub mod path;
pub mod queue;
pub mod store;
pub mod types;

pub use algos::{QueueEntry, ShortestPaths, SolveStats};
pub use path::reconstruct_path;
pub use queue::{MinQueue, QueueStats};
pub use store::Graph;
pub use types::{Cost, Edge, NodeId, PathResult};
