//! Bulk simulation: generate N unique tickets and test each against the
//! full drawing history.

use rand::Rng;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::thread;

use crate::check::check_ticket;
use crate::error::{Result, SimError};
use crate::generate::generate_ticket;
use crate::models::{Drawing, Ticket, TicketKey};

/// A winning ticket found during a bulk run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkWin {
    /// Index into [`BulkResult::tickets`].
    pub index: usize,
    /// Date of the first matching historical drawing.
    pub date: String,
}

/// Outcome of one bulk run. `wins.len() + losses` always equals the
/// requested ticket count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkResult {
    pub tickets: Vec<Ticket>,
    pub wins: Vec<BulkWin>,
    pub losses: u64,
}

/// How often the checking loop yields to the host scheduler.
const YIELD_INTERVAL: usize = 100;

/// Generates `n` unique tickets (regenerating on identity collisions) and
/// checks each against the full history in order, reporting the cumulative
/// count of checked tickets after every check.
///
/// Fails before any generation if `n` is zero or the dataset is empty.
pub fn run_bulk<R, P>(
    rng: &mut R,
    n: u64,
    drawings: &[Drawing],
    mut on_progress: P,
) -> Result<BulkResult>
where
    R: Rng + ?Sized,
    P: FnMut(u64),
{
    if n == 0 {
        return Err(SimError::InvalidCount(n));
    }
    if drawings.is_empty() {
        return Err(SimError::EmptyDataset);
    }

    let mut seen: FxHashSet<TicketKey> = FxHashSet::default();
    let mut tickets: Vec<Ticket> = Vec::with_capacity(n as usize);
    while (tickets.len() as u64) < n {
        let ticket = generate_ticket(rng);
        if seen.insert(ticket.key()) {
            tickets.push(ticket);
        }
    }

    let mut wins = Vec::new();
    let mut losses = 0u64;
    for (index, ticket) in tickets.iter().enumerate() {
        match check_ticket(ticket, drawings) {
            Some(date) => wins.push(BulkWin { index, date: date.to_string() }),
            None => losses += 1,
        }
        on_progress(index as u64 + 1);

        if (index + 1) % YIELD_INTERVAL == 0 {
            thread::yield_now();
        }
    }

    Ok(BulkResult { tickets, wins, losses })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn history() -> Vec<Drawing> {
        vec![
            Drawing { date: "2020-02-01".to_string(), whites: [4, 8, 15, 16, 23], powerball: 13 },
            Drawing { date: "2020-02-05".to_string(), whites: [1, 2, 3, 4, 5], powerball: 6 },
        ]
    }

    #[test]
    fn test_returns_exactly_n_unique_tickets() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result = run_bulk(&mut rng, 500, &history(), |_| {}).unwrap();

        assert_eq!(result.tickets.len(), 500);
        let keys: FxHashSet<TicketKey> = result.tickets.iter().map(Ticket::key).collect();
        assert_eq!(keys.len(), 500, "all tickets distinct by identity key");
        assert_eq!(result.wins.len() as u64 + result.losses, 500);
    }

    #[test]
    fn test_progress_reports_every_check() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut reports = Vec::new();
        run_bulk(&mut rng, 50, &history(), |done| reports.push(done)).unwrap();
        assert_eq!(reports, (1..=50).collect::<Vec<u64>>());
    }

    #[test]
    fn test_rejects_zero_count_before_generating() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut progressed = false;
        let err = run_bulk(&mut rng, 0, &history(), |_| progressed = true).unwrap_err();
        assert_eq!(err, SimError::InvalidCount(0));
        assert!(!progressed);
    }

    #[test]
    fn test_rejects_empty_dataset() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = run_bulk(&mut rng, 10, &[], |_| {}).unwrap_err();
        assert_eq!(err, SimError::EmptyDataset);
    }

    #[test]
    fn test_win_and_loss_never_double_count() {
        // Tiny history, many tickets: wins are rare but possible; regardless
        // of how many occur, the partition must be exact.
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let result = run_bulk(&mut rng, 2_000, &history(), |_| {}).unwrap();
        assert_eq!(result.wins.len() as u64 + result.losses, 2_000);
        for win in &result.wins {
            assert!(win.index < result.tickets.len());
            assert!(check_ticket(&result.tickets[win.index], &history()).is_some());
        }
    }
}
