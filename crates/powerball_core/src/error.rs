use thiserror::Error;

/// Why a user-supplied custom ticket was rejected.
///
/// Rules are applied in declaration order and the first failure wins. The
/// messages are surfaced verbatim to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    #[error("Must enter exactly 5 white ball numbers")]
    WhiteCount { found: usize },

    #[error("White balls must be between 1 and 69")]
    WhiteOutOfRange { value: i64 },

    #[error("White ball numbers must be unique")]
    DuplicateWhite { value: i64 },

    #[error("Powerball must be between 1 and 26")]
    PowerballOutOfRange { value: i64 },
}

/// Preflight failures of the simulation runners.
///
/// These are reported once, before any generation begins; no runner retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("no historical drawing data loaded; cannot run a historical check")]
    EmptyDataset,

    #[error("ticket count must be at least 1, got {0}")]
    InvalidCount(u64),
}

pub type Result<T> = std::result::Result<T, SimError>;
