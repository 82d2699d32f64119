//! Single-mode reachability search.
//!
//! Breadth-first search over the subgraph of one stop kind: only stops of
//! that kind and only edges of the matching mode. Transfers are never taken.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::domain::{StopId, StopKind};
use crate::network::{GraphEdge, NetworkModel};

use super::strategy::Hop;

/// Find a path from `from` to `to` using only `kind` stops and edges.
///
/// Returns the hops in travel order (empty when `from == to`), or `None`
/// when `to` is unreachable. The path has the fewest hops; among equal-hop
/// paths the one discovered first (dataset edge order) wins.
pub fn single_mode_path<'a>(
    network: &'a NetworkModel,
    from: &'a StopId,
    to: &'a StopId,
    kind: StopKind,
) -> Option<Vec<Hop<'a>>> {
    if network.stop(from)?.kind != kind {
        return None;
    }
    if from == to {
        return Some(Vec::new());
    }

    let mode = kind.mode();
    let mut parent: HashMap<&'a StopId, (&'a StopId, &'a GraphEdge)> = HashMap::new();
    let mut queue: VecDeque<&'a StopId> = VecDeque::from([from]);
    let mut explored = 0usize;

    while let Some(current) = queue.pop_front() {
        explored += 1;

        for edge in network.edges_from(current) {
            if edge.mode != mode {
                continue;
            }
            let target_kind = match network.stop(&edge.to) {
                Some(stop) => stop.kind,
                None => continue,
            };
            if target_kind != kind {
                continue;
            }
            if &edge.to == from || parent.contains_key(&edge.to) {
                continue;
            }

            parent.insert(&edge.to, (current, edge));

            if &edge.to == to {
                trace!(%from, %to, %kind, explored, "single-mode path found");
                return Some(reconstruct(&parent, from, to));
            }
            queue.push_back(&edge.to);
        }
    }

    trace!(%from, %to, %kind, explored, "single-mode path not found");
    None
}

fn reconstruct<'a>(
    parent: &HashMap<&'a StopId, (&'a StopId, &'a GraphEdge)>,
    from: &'a StopId,
    to: &'a StopId,
) -> Vec<Hop<'a>> {
    let mut hops = Vec::new();
    let mut cursor = to;
    while cursor != from {
        let Some(&(prev, edge)) = parent.get(cursor) else {
            break;
        };
        hops.push(Hop {
            from: prev,
            edge,
            transfer_pending: false,
        });
        cursor = prev;
    }
    hops.reverse();
    hops
}
