//! Best-route selection.
//!
//! Picks the recommended itinerary among the strategies that produced one.

use std::cmp::Ordering;

use crate::domain::Itinerary;

use super::Strategy;

/// Costs closer than this are treated as equal.
pub const COST_EPSILON: f64 = 1e-9;

/// Compare two itineraries by preference.
///
/// 1. Total cost (cheaper is better)
/// 2. Total time (faster is better), when costs are equal within
///    [`COST_EPSILON`]
pub fn compare_itineraries(a: &Itinerary, b: &Itinerary) -> Ordering {
    if (a.total_cost() - b.total_cost()).abs() >= COST_EPSILON {
        return a.total_cost().total_cmp(&b.total_cost());
    }
    a.total_time().total_cmp(&b.total_time())
}

/// Select the best itinerary.
///
/// Returns `None` when there is nothing to choose from. When two candidates
/// compare equal the one listed first is kept.
pub fn select_best<'a, I>(candidates: I) -> Option<(Strategy, &'a Itinerary)>
where
    I: IntoIterator<Item = (Strategy, &'a Itinerary)>,
{
    let mut best: Option<(Strategy, &'a Itinerary)> = None;
    for candidate in candidates {
        best = match best {
            Some(current) if compare_itineraries(candidate.1, current.1) != Ordering::Less => {
                Some(current)
            }
            _ => Some(candidate),
        };
    }
    best
}
