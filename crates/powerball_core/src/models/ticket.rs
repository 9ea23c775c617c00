use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TicketError;
use crate::validate::validate_ticket;

/// Inclusive white-ball domain.
pub const WHITE_MIN: u8 = 1;
pub const WHITE_MAX: u8 = 69;

/// Inclusive powerball domain.
pub const POWERBALL_MIN: u8 = 1;
pub const POWERBALL_MAX: u8 = 26;

/// A ticket always carries exactly this many white balls.
pub const WHITES_PER_TICKET: usize = 5;

/// Canonical ticket identity: the five sorted whites followed by the
/// powerball. Used as the key of deduplication sets.
pub type TicketKey = [u8; 6];

/// One Powerball ticket: five distinct white balls plus a powerball.
///
/// Invariant: `whites` is stored sorted ascending. Every constructor in this
/// crate upholds it, so exact-match comparison reduces to plain equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    pub whites: [u8; WHITES_PER_TICKET],
    pub powerball: u8,
}

impl Ticket {
    /// Builds a ticket from already-validated numbers, sorting the whites.
    pub fn new(mut whites: [u8; WHITES_PER_TICKET], powerball: u8) -> Self {
        whites.sort_unstable();
        Self { whites, powerball }
    }

    /// Validating constructor for user-supplied numbers. Applies the custom
    /// ticket rules in order and sorts the whites on success.
    pub fn from_parts(whites: &[i64], powerball: i64) -> Result<Self, TicketError> {
        validate_ticket(whites, powerball)?;
        let mut sorted = [0u8; WHITES_PER_TICKET];
        for (slot, &value) in sorted.iter_mut().zip(whites) {
            *slot = value as u8;
        }
        sorted.sort_unstable();
        Ok(Self { whites: sorted, powerball: powerball as u8 })
    }

    /// Canonical identity for deduplication.
    pub fn key(&self) -> TicketKey {
        let mut key = [0u8; 6];
        key[..WHITES_PER_TICKET].copy_from_slice(&self.whites);
        key[WHITES_PER_TICKET] = self.powerball;
        key
    }
}

impl fmt::Display for Ticket {
    /// Renders "w w w w w PP" with a zero-padded 2-digit powerball.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for white in &self.whites {
            write!(f, "{} ", white)?;
        }
        write!(f, "{:02}", self.powerball)
    }
}
