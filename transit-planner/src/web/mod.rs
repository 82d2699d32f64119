//! Web layer for the transit planner.
//!
//! Provides HTTP endpoints for listing stops and planning trips.

mod config;
mod dto;
mod routes;
mod state;
mod wallet;

pub use config::{ADDR_ENV, ConfigError, DATA_ENV, ServerConfig};
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use wallet::{PaymentReceipt, Wallet};
