//! Constrained multi-modal search over bus, tram and transfer edges.
//!
//! The search runs over states rather than stops. A state records where we
//! are, the mode of the last edge taken, which transit modes have been used,
//! and whether the next boarding follows a transfer. Keying the visited set
//! on the full state lets the search revisit a stop when it arrives with a
//! different usage history, which is what makes "must use both bus and
//! tram" searchable with a plain BFS.
//!
//! Transitions:
//!
//! - a bus or tram edge from a stop of the matching kind marks that mode as
//!   used and clears the transfer flag;
//! - a transfer edge is enabled only straight after a bus or tram edge (never
//!   first, never twice in a row) and sets the transfer flag.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::trace;

use crate::domain::{StopId, TravelMode};
use crate::network::{GraphEdge, NetworkModel};

use super::strategy::Hop;

/// Which transit modes an accepted path must have used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageRule {
    /// At least one bus edge and at least one tram edge
    BusAndTram,
    /// At least one bus or tram edge
    AnyTransit,
}

impl UsageRule {
    fn satisfied(&self, used_bus: bool, used_tram: bool) -> bool {
        match self {
            UsageRule::BusAndTram => used_bus && used_tram,
            UsageRule::AnyTransit => used_bus || used_tram,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum LastMode {
    None,
    Bus,
    Tram,
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SearchState<'a> {
    stop: &'a StopId,
    last: LastMode,
    used_bus: bool,
    used_tram: bool,
    transfer_pending: bool,
}

impl<'a> SearchState<'a> {
    fn initial(stop: &'a StopId) -> Self {
        Self {
            stop,
            last: LastMode::None,
            used_bus: false,
            used_tram: false,
            transfer_pending: false,
        }
    }

    /// The state reached by taking `edge`, or `None` if the edge is not
    /// enabled in this state.
    fn step(&self, network: &NetworkModel, edge: &'a GraphEdge) -> Option<Self> {
        match edge.mode {
            TravelMode::Bus | TravelMode::Tram => {
                let kind = network.stop(self.stop)?.kind;
                if kind.mode() != edge.mode {
                    return None;
                }
                let is_bus = edge.mode == TravelMode::Bus;
                Some(SearchState {
                    stop: &edge.to,
                    last: if is_bus { LastMode::Bus } else { LastMode::Tram },
                    used_bus: self.used_bus || is_bus,
                    used_tram: self.used_tram || !is_bus,
                    transfer_pending: false,
                })
            }
            TravelMode::Transfer => match self.last {
                LastMode::Bus | LastMode::Tram => Some(SearchState {
                    stop: &edge.to,
                    last: LastMode::Transfer,
                    transfer_pending: true,
                    ..*self
                }),
                LastMode::None | LastMode::Transfer => None,
            },
            TravelMode::Walk | TravelMode::Taxi => None,
        }
    }
}

/// Find a path from `from` to `to` whose mode usage satisfies `rule`.
///
/// Unweighted: the accepted path has the fewest edges, ties resolved by
/// discovery order. Each hop carries the transfer flag in force when it was
/// taken, so the boarding after a transfer can be priced accordingly.
/// Returns `None` once the finite state space is exhausted.
pub fn constrained_path<'a>(
    network: &'a NetworkModel,
    from: &'a StopId,
    to: &'a StopId,
    rule: UsageRule,
) -> Option<Vec<Hop<'a>>> {
    network.stop(from)?;

    let start = SearchState::initial(from);
    let mut parent: HashMap<SearchState<'a>, (SearchState<'a>, &'a GraphEdge)> = HashMap::new();
    let mut visited: HashSet<SearchState<'a>> = HashSet::from([start]);
    let mut queue: VecDeque<SearchState<'a>> = VecDeque::from([start]);

    while let Some(state) = queue.pop_front() {
        if state.stop == to && rule.satisfied(state.used_bus, state.used_tram) {
            trace!(
                %from,
                %to,
                ?rule,
                states = visited.len(),
                "multi-modal path found"
            );
            return Some(reconstruct(&parent, start, state));
        }

        for edge in network.edges_from(state.stop) {
            let Some(next) = state.step(network, edge) else {
                continue;
            };
            if visited.insert(next) {
                parent.insert(next, (state, edge));
                queue.push_back(next);
            }
        }
    }

    trace!(%from, %to, ?rule, states = visited.len(), "multi-modal path not found");
    None
}

fn reconstruct<'a>(
    parent: &HashMap<SearchState<'a>, (SearchState<'a>, &'a GraphEdge)>,
    start: SearchState<'a>,
    end: SearchState<'a>,
) -> Vec<Hop<'a>> {
    let mut hops = Vec::new();
    let mut cursor = end;
    while cursor != start {
        let Some(&(prev, edge)) = parent.get(&cursor) else {
            break;
        };
        hops.push(Hop {
            from: prev.stop,
            edge,
            transfer_pending: prev.transfer_pending && edge.mode != TravelMode::Transfer,
        });
        cursor = prev;
    }
    hops.reverse();
    hops
}
