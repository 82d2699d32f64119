//! City transit route planner and fare engine.
//!
//! A web application that answers: "how do I get from here to there by
//! taxi, bus or tram, what will it cost me, and which option is cheapest?"

pub mod domain;
pub mod fare;
pub mod network;
pub mod planner;
pub mod web;
