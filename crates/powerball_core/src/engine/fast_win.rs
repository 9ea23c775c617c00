//! Fast-win search: generate unique tickets until one matches a historical
//! drawing.
//!
//! Against a full history (1,500+ drawings) the effective per-ticket match
//! probability is high enough that this terminates quickly, but the loop
//! itself is unbounded and therefore cancellable.

use rand::Rng;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::thread;

use super::Outcome;
use crate::check::check_ticket;
use crate::error::{Result, SimError};
use crate::generate::generate_ticket;
use crate::models::{Drawing, Ticket, TicketKey};

/// Progress is reported (and the loop yields) once per this many unique
/// tickets, to bound callback overhead.
pub const PROGRESS_INTERVAL: u64 = 1_000;

/// A successful fast-win search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FastWin {
    pub ticket: Ticket,
    /// Date of the matched historical drawing.
    pub date: String,
    /// Unique tickets tried, including the winner.
    pub tickets_checked: u64,
}

/// Searches for a ticket matching any historical drawing.
///
/// The stop predicate is polled before each unique-ticket attempt; a true
/// result aborts the search with [`Outcome::Cancelled`]. Duplicate tickets
/// (by identity key) are regenerated without being counted or checked.
pub fn run_fast_win<R, P, S>(
    rng: &mut R,
    drawings: &[Drawing],
    mut on_progress: P,
    should_stop: S,
) -> Result<Outcome<FastWin>>
where
    R: Rng + ?Sized,
    P: FnMut(u64),
    S: Fn() -> bool,
{
    if drawings.is_empty() {
        return Err(SimError::EmptyDataset);
    }

    let mut seen: FxHashSet<TicketKey> = FxHashSet::default();
    let mut tickets_checked: u64 = 0;

    loop {
        if should_stop() {
            return Ok(Outcome::Cancelled);
        }

        let ticket = generate_ticket(rng);
        if !seen.insert(ticket.key()) {
            continue;
        }
        tickets_checked += 1;

        if let Some(date) = check_ticket(&ticket, drawings) {
            return Ok(Outcome::Won(FastWin {
                ticket,
                date: date.to_string(),
                tickets_checked,
            }));
        }

        if tickets_checked % PROGRESS_INTERVAL == 0 {
            on_progress(tickets_checked);
            thread::yield_now();
        }
    }
}
