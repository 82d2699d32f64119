//! Route planner.
//!
//! This module answers: "given where I am, where I'm going, who I am and how
//! I'm paying, what are my options and which is cheapest?"
//!
//! Five strategies are evaluated per query. Single-mode strategies use a
//! breadth-first search restricted to one stop kind; the multi-modal ones
//! search over (stop, usage history) states so they can require a mix of
//! modes. Found paths are priced by the fare policy, assembled into
//! itineraries, and ranked by cost then time.

mod assemble;
mod config;
mod multimodal;
mod rank;
mod reach;
mod search;
mod strategy;


pub use assemble::{assemble, coordinate_segments, merge_adjacent};
pub use config::PlannerConfig;
pub use multimodal::{UsageRule, constrained_path};
pub use rank::{COST_EPSILON, compare_itineraries, select_best};
pub use reach::single_mode_path;
pub use search::{PlanResult, Planner};
pub use strategy::{Hop, Strategy, StrategyOutcome};
