use serde::{Deserialize, Serialize};

use super::ticket::WHITES_PER_TICKET;

/// One historical Powerball drawing.
///
/// Loaded once by the data loader and shared read-only across runs. The date
/// is an opaque label; the engine never reparses it. The loader guarantees
/// the whites are distinct, in range, and sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drawing {
    pub date: String,
    pub whites: [u8; WHITES_PER_TICKET],
    pub powerball: u8,
}
