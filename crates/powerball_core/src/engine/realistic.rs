//! Realistic-odds simulation: one fixed ticket against fresh random
//! drawings, 1 in 292,201,338 per iteration.
//!
//! The loop is unbounded until an exact match, so it supports cooperative
//! cancellation, periodic progress snapshots, and the scripted milestone
//! narration. Run it off the interactive thread via
//! [`spawn_realistic`](super::worker::spawn_realistic).

use rand::Rng;
use serde::Serialize;
use std::thread;
use std::time::Duration;

use super::milestones::MILESTONES;
use super::Outcome;
use crate::format::{group_thousands, group_thousands_f2};
use crate::generate::generate_ticket;
use crate::models::Ticket;
use crate::stats::{SimStats, DAYS_WAITED_PER_TICKET, TICKET_PRICE_DOLLARS};

/// Status message + progress snapshot cadence, in iterations.
pub const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Cooperative yield cadence, in iterations.
pub const YIELD_INTERVAL: u64 = 10_000;

/// Nominal pacing between scripted lines.
pub const DEFAULT_LINE_DELAY: Duration = Duration::from_secs(2);

/// Tuning knobs for a realistic run.
#[derive(Debug, Clone)]
pub struct RealisticConfig {
    /// Pacing between lines of a milestone block, and the delay hint carried
    /// by the winning script. Tests use `Duration::ZERO`.
    pub line_delay: Duration,
}

impl Default for RealisticConfig {
    fn default() -> Self {
        Self { line_delay: DEFAULT_LINE_DELAY }
    }
}

/// Final result of a won realistic run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RealisticResult {
    pub ticket: Ticket,
    /// Iterations completed, counting the winning drawing.
    pub tickets_generated: u64,
    pub money_spent: u64,
    pub years_waited: f64,
}

/// Runs the realistic simulation to completion or cancellation.
///
/// Per iteration: poll the stop predicate, draw one synthetic drawing from
/// the generator's distribution, and compare it to the fixed ticket. Every
/// 1,000,000 misses a status line and a progress snapshot go out; exact
/// counter values fire the milestone script; every 10,000 iterations the
/// loop yields to the scheduler. Message callbacks carry an optional pacing
/// hint the display layer is expected to honor.
pub fn run_realistic<R, M, P, S>(
    rng: &mut R,
    ticket: Ticket,
    config: &RealisticConfig,
    mut on_message: M,
    mut on_progress: P,
    should_stop: S,
) -> Outcome<RealisticResult>
where
    R: Rng + ?Sized,
    M: FnMut(&str, Option<Duration>),
    P: FnMut(SimStats),
    S: Fn() -> bool,
{
    let mut counter: u64 = 0;
    let mut next_milestone = 0usize;
    let pace = if config.line_delay.is_zero() { None } else { Some(config.line_delay) };

    on_message(
        "Generating tickets until a winning ticket is found (this may take a while)...",
        None,
    );

    loop {
        if should_stop() {
            return Outcome::Cancelled;
        }

        // Synthetic drawing, not historical data. Whites are kept sorted by
        // the generator, so the exact-match rule is plain equality.
        let drawing = generate_ticket(rng);
        if drawing == ticket {
            let total = counter + 1;
            let money = TICKET_PRICE_DOLLARS * total;
            let years = (DAYS_WAITED_PER_TICKET * total) as f64 / 365.0;

            on_message("-----------------------------", None);
            on_message("WINNING TICKET FOUND", pace);
            on_message(&format!("Ticket numbers: {}", ticket), None);
            on_message(&format!("Total tickets generated: {}", group_thousands(total)), pace);
            on_message("Congratulations, you won the lottery!", pace);
            on_message(&format!("You spent about ${} to get here.", group_thousands(money)), pace);
            on_message("You won about $141 million after taxes.", pace);
            on_message(
                &format!(
                    "You spent about {} years waiting for the drawings.",
                    group_thousands_f2(years)
                ),
                pace,
            );
            on_message("Enjoy your retirement!", pace);

            log::info!("realistic run won after {} tickets", total);
            return Outcome::Won(RealisticResult {
                ticket,
                tickets_generated: total,
                money_spent: money,
                years_waited: years,
            });
        }

        counter += 1;

        if counter % PROGRESS_INTERVAL == 0 {
            on_message(&format!("Generated {} tickets so far...", group_thousands(counter)), None);
            on_progress(SimStats::from_count(counter));
        }

        // Thresholds are ascending and the counter steps by one, so a single
        // cursor fires each block exactly once.
        if let Some(milestone) = MILESTONES.get(next_milestone) {
            if counter == milestone.at {
                for (i, line) in milestone.lines.iter().enumerate() {
                    if i > 0 && !config.line_delay.is_zero() {
                        thread::sleep(config.line_delay);
                    }
                    on_message(line, None);
                }
                next_milestone += 1;
            }
        }

        if counter % YIELD_INTERVAL == 0 {
            thread::yield_now();
        }
    }
}
