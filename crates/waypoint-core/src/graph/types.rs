use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use serde::{Serialize, Serializer};

/// Bound satisfied by anything usable as a node identifier.
///
/// Nodes carry no payload; identity is all the graph needs.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> NodeId for T {}

/// Accumulated or per-edge traversal cost
///
/// Edge weights are expected to be finite and non-negative. Distances
/// use `Cost::INFINITY` for "not reached".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// True for weights `add_edge` callers are allowed to pass
    pub fn is_valid_weight(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Total order over costs, used by the solver's queue comparator
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl From<u32> for Cost {
    fn from(cost: u32) -> Self {
        Cost(f64::from(cost))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// Infinite costs serialize as `null` so JSON output stays valid
impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// Outgoing edge stored in a node's adjacency list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<N> {
    pub to: N,
    pub weight: Cost,
}

/// Result of a single source-to-target query
///
/// An unreachable (or unknown) target has `distance == Cost::INFINITY`
/// and an empty `path`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<N> {
    pub distance: Cost,
    pub path: Vec<N>,
}

impl<N> PathResult<N> {
    pub fn unreachable() -> Self {
        PathResult {
            distance: Cost::INFINITY,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
