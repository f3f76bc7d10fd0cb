//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths with lazy decrease-key

pub mod dijkstra;

pub use dijkstra::{QueueEntry, ShortestPaths, SolveStats};
