//! # powerball_core - Powerball odds simulation engine
//!
//! This library provides the ticket generation, matching, and long-running
//! realistic-odds simulation behind the Powerball probability toy.
//!
//! ## Features
//! - Uniform deduplicated ticket generation (5 whites 1-69, powerball 1-26)
//! - Exact-match checking against historical drawing data
//! - Bulk and until-win search loops with incremental progress
//! - Off-thread realistic simulation with scripted milestone narration,
//!   cooperative cancellation, and channel-based event delivery

pub mod check;
pub mod engine;
pub mod error;
pub mod format;
pub mod generate;
pub mod models;
pub mod stats;
pub mod validate;

// Re-export main API surface
pub use check::{check_ticket, matches_drawing};
pub use engine::bulk::{run_bulk, BulkResult, BulkWin};
pub use engine::fast_win::{run_fast_win, FastWin};
pub use engine::realistic::{run_realistic, RealisticConfig, RealisticResult};
pub use engine::worker::{spawn_realistic, RealisticHandle, SimEvent, StopToken};
pub use engine::Outcome;
pub use error::{Result, SimError, TicketError};
pub use generate::{generate_ticket, random_ticket};
pub use models::{Drawing, Ticket, TicketKey};
pub use stats::SimStats;
pub use validate::validate_ticket;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
