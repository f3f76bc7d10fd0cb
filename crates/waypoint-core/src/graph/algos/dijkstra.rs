use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::graph::path::reconstruct_path;
use crate::graph::queue::{MinQueue, QueueStats};
use crate::graph::store::Graph;
use crate::graph::types::{Cost, NodeId, PathResult};

/// Tentative distance for a node, as queued during a solve.
///
/// Several entries for the same node may be queued at once; only the one
/// whose cost still matches the distance map is live.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry<N> {
    pub node: N,
    pub cost: Cost,
}

type EntryOrder<N> = fn(&QueueEntry<N>, &QueueEntry<N>) -> Ordering;

fn by_cost<N>(a: &QueueEntry<N>, b: &QueueEntry<N>) -> Ordering {
    a.cost.total_cmp(&b.cost)
}

/// Counters collected while solving
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    /// Successful relaxations (distance improvements)
    pub relaxations: u64,
    /// Popped entries discarded because a better distance was found later
    pub stale_skips: u64,
    /// Live entries expanded
    pub settled: u64,
    pub queue: QueueStats,
}

/// Distance and predecessor maps produced by one solve
#[derive(Debug, Clone)]
pub struct ShortestPaths<N> {
    pub source: N,
    pub distances: HashMap<N, Cost>,
    pub predecessors: HashMap<N, Option<N>>,
    pub stats: SolveStats,
}

impl<N: NodeId> ShortestPaths<N> {
    /// Distance to `target`: `None` if the node was unknown at solve time,
    /// `Some(Cost::INFINITY)` if it was known but unreachable.
    pub fn distance(&self, target: &N) -> Option<Cost> {
        self.distances.get(target).copied()
    }

    pub fn is_reachable(&self, target: &N) -> bool {
        self.distance(target).is_some_and(|d| d.is_finite())
    }

    /// Node sequence from the source to `target`, empty when unreachable
    pub fn path_to(&self, target: &N) -> Vec<N> {
        if self.is_reachable(target) {
            reconstruct_path(&self.predecessors, target)
        } else {
            Vec::new()
        }
    }

    pub fn result_for(&self, target: &N) -> PathResult<N> {
        match self.distance(target) {
            Some(distance) if distance.is_finite() => PathResult {
                distance,
                path: reconstruct_path(&self.predecessors, target),
            },
            _ => PathResult::unreachable(),
        }
    }
}

impl<N: NodeId> Graph<N> {
    /// Single-source shortest paths (Dijkstra with lazy decrease-key).
    ///
    /// An unregistered `source` is added as an isolated node first. The
    /// returned maps cover every node registered at call time. Weights
    /// must be non-negative for the distances to be correct.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn shortest_paths(&mut self, source: N) -> ShortestPaths<N> {
        if !self.contains(&source) {
            tracing::debug!(?source, "registering unknown source as isolated node");
            self.add_node(source.clone());
        }

        let mut distances: HashMap<N, Cost> = HashMap::with_capacity(self.node_count());
        let mut predecessors: HashMap<N, Option<N>> = HashMap::with_capacity(self.node_count());
        for node in self.nodes() {
            distances.insert(node.clone(), Cost::INFINITY);
            predecessors.insert(node.clone(), None);
        }
        distances.insert(source.clone(), Cost::ZERO);

        let mut stats = SolveStats::default();
        let mut queue: MinQueue<QueueEntry<N>, EntryOrder<N>> =
            MinQueue::with_capacity(self.node_count(), by_cost);
        queue.insert(QueueEntry {
            node: source.clone(),
            cost: Cost::ZERO,
        });

        while let Some(QueueEntry {
            node: current,
            cost,
        }) = queue.pop()
        {
            // A later relaxation superseded this entry
            if distances.get(&current) != Some(&cost) {
                stats.stale_skips += 1;
                continue;
            }
            stats.settled += 1;

            for edge in self.neighbors(&current) {
                let candidate = cost + edge.weight;
                let known = distances
                    .get(&edge.to)
                    .copied()
                    .unwrap_or(Cost::INFINITY);

                if candidate < known {
                    tracing::trace!(from = ?current, to = ?edge.to, %candidate, "relax");
                    distances.insert(edge.to.clone(), candidate);
                    predecessors.insert(edge.to.clone(), Some(current.clone()));
                    queue.insert(QueueEntry {
                        node: edge.to.clone(),
                        cost: candidate,
                    });
                    stats.relaxations += 1;
                }
            }
        }

        stats.queue = queue.stats();
        tracing::debug!(
            relaxations = stats.relaxations,
            stale_skips = stats.stale_skips,
            settled = stats.settled,
            pushes = stats.queue.pushes,
            max_queue = stats.queue.max_len,
            "shortest_paths complete"
        );

        ShortestPaths {
            source,
            distances,
            predecessors,
            stats,
        }
    }

    /// Distance and route from `source` to `target`.
    ///
    /// Unreachable or unknown targets yield `Cost::INFINITY` and an empty
    /// path.
    pub fn shortest_path_to(&mut self, source: N, target: &N) -> PathResult<N> {
        self.shortest_paths(source).result_for(target)
    }
}
