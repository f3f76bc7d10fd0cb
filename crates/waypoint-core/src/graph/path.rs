//! Path reconstruction from a predecessor map

use std::collections::{HashMap, HashSet};

use crate::graph::types::NodeId;

/// Walk `target -> predecessor -> ...` until a node with no predecessor,
/// then return the nodes in forward (source-to-target) order.
///
/// Returns an empty path when `target` is absent from the map. A node
/// present with no predecessor (the source, or an unreached node) yields a
/// single-node path; callers that care about reachability check distances
/// first. A cyclic map, which a solve never produces, yields an empty path.
pub fn reconstruct_path<N: NodeId>(predecessors: &HashMap<N, Option<N>>, target: &N) -> Vec<N> {
    let mut path = Vec::new();
    let mut seen = HashSet::new();
    let mut current = Some(target);

    while let Some(node) = current {
        let Some(pred) = predecessors.get(node) else {
            break;
        };
        if !seen.insert(node) {
            tracing::warn!(?target, at = ?node, "predecessor map contains a cycle");
            return Vec::new();
        }
        path.push(node.clone());
        current = pred.as_ref();
    }

    path.reverse();
    path
}
