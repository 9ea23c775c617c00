//! Core data model: tickets and historical drawings.

pub mod drawing;
pub mod ticket;

pub use drawing::Drawing;
pub use ticket::{
    Ticket, TicketKey, POWERBALL_MAX, POWERBALL_MIN, WHITES_PER_TICKET, WHITE_MAX, WHITE_MIN,
};
