//! Simulation runners: bulk testing, fast-win search, and the realistic
//! odds engine with its off-thread worker.

pub mod bulk;
pub mod fast_win;
pub mod milestones;
pub mod realistic;
pub mod worker;

use serde::Serialize;

/// Result of a cancellable run. Cancellation is an explicit outcome, not an
/// error: the caller asked the loop to stop and it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome<T> {
    Won(T),
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn won(self) -> Option<T> {
        match self {
            Outcome::Won(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }
}
