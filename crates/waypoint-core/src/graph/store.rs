//! Mutable weighted adjacency-list graph
//!
//! Nodes live in an insertion-ordered arena; a hash map from id to slot
//! gives O(1) lookup. Each slot owns the node's outgoing edge list.

use std::collections::HashMap;

use crate::error::{Result, WaypointError};
use crate::graph::types::{Cost, Edge, NodeId};

/// Weighted graph over opaque node identifiers
#[derive(Debug, Clone)]
pub struct Graph<N> {
    directed: bool,
    nodes: Vec<N>,
    adjacency: Vec<Vec<Edge<N>>>,
    slots: HashMap<N, usize>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<N: NodeId> Graph<N> {
    /// Create an empty graph. `directed == false` mirrors every edge.
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            nodes: Vec::new(),
            adjacency: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Build a graph from `(from, to, weight)` triples via `add_edge`
    pub fn from_edges<I, W>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
        W: Into<Cost>,
    {
        let mut graph = Self::new(directed);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn contains(&self, id: &N) -> bool {
        self.slots.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored adjacency entries (an undirected edge counts twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Register a node. No-op if it is already present.
    pub fn add_node(&mut self, id: N) {
        self.slot_for(id);
    }

    /// Insert or update the weighted edge `from -> to`.
    ///
    /// Both endpoints are registered if absent. In an undirected graph the
    /// mirror edge `to -> from` gets the same weight. The weight is not
    /// checked; it should be finite and non-negative or shortest paths
    /// become meaningless. Use [`Graph::try_add_edge`] for untrusted input.
    pub fn add_edge(&mut self, from: N, to: N, weight: impl Into<Cost>) {
        let weight = weight.into();
        let from_slot = self.slot_for(from.clone());
        let to_slot = self.slot_for(to.clone());

        Self::upsert(&mut self.adjacency[from_slot], to, weight);
        if !self.directed {
            Self::upsert(&mut self.adjacency[to_slot], from, weight);
        }
    }

    /// Like [`Graph::add_edge`] but rejects negative, NaN, and infinite
    /// weights, leaving the graph untouched.
    pub fn try_add_edge(&mut self, from: N, to: N, weight: impl Into<Cost>) -> Result<()> {
        let weight = weight.into();
        if !weight.is_valid_weight() {
            return Err(WaypointError::invalid_weight(&from, &to, weight.value()));
        }
        self.add_edge(from, to, weight);
        Ok(())
    }

    /// All registered nodes in insertion order
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Outgoing edges of `id`; empty when the node is unknown
    pub fn neighbors(&self, id: &N) -> &[Edge<N>] {
        match self.slots.get(id) {
            Some(&slot) => &self.adjacency[slot],
            None => &[],
        }
    }

    /// Weight of the edge `from -> to`, if present
    pub fn weight(&self, from: &N, to: &N) -> Option<Cost> {
        self.neighbors(from)
            .iter()
            .find(|edge| &edge.to == to)
            .map(|edge| edge.weight)
    }

    /// Every stored `(from, to, weight)` entry, grouped by source node in
    /// insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Cost)> + '_ {
        self.nodes
            .iter()
            .zip(&self.adjacency)
            .flat_map(|(from, edges)| edges.iter().map(move |edge| (from, &edge.to, edge.weight)))
    }

    fn slot_for(&mut self, id: N) -> usize {
        if let Some(&slot) = self.slots.get(&id) {
            return slot;
        }
        let slot = self.nodes.len();
        self.nodes.push(id.clone());
        self.adjacency.push(Vec::new());
        self.slots.insert(id, slot);
        slot
    }

    fn upsert(edges: &mut Vec<Edge<N>>, to: N, weight: Cost) {
        match edges.iter_mut().find(|edge| edge.to == to) {
            Some(edge) => edge.weight = weight,
            None => edges.push(Edge { to, weight }),
        }
    }
}
