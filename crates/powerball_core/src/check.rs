//! Exact-match checking against drawings.
//!
//! All functions are pure - they take a ticket and drawings as input and
//! return the match outcome. This allows easy unit testing without running
//! any simulation loop.

use crate::models::{Drawing, Ticket};

/// Exact-match rule: the sorted whites are element-wise equal and the
/// powerballs are equal. Both sides are sorted before comparison, so the
/// result does not depend on the stored order.
pub fn matches_drawing(ticket: &Ticket, drawing: &Drawing) -> bool {
    let mut ticket_whites = ticket.whites;
    ticket_whites.sort_unstable();
    let mut drawing_whites = drawing.whites;
    drawing_whites.sort_unstable();
    ticket_whites == drawing_whites && ticket.powerball == drawing.powerball
}

/// Checks a ticket against the full history in input order.
///
/// Returns the date of the first matching drawing, or `None`.
pub fn check_ticket<'a>(ticket: &Ticket, drawings: &'a [Drawing]) -> Option<&'a str> {
    drawings
        .iter()
        .find(|drawing| matches_drawing(ticket, drawing))
        .map(|drawing| drawing.date.as_str())
}
