//! Ticket value objects and purchase aggregation.

mod summary;
mod value_objects;

pub use summary::{MAX_TICKETS_PER_PURCHASE, PurchaseSummary};
pub use value_objects::{AccountId, Money, TicketType, TicketTypeRequest};

use thiserror::Error;

/// Errors that can occur when constructing ticket values.
#[derive(Debug, Error)]
pub enum TicketError {
    /// Ticket quantity must be at least one.
    #[error("Invalid ticket count: {count} (must be a positive integer)")]
    InvalidTicketCount { count: u32 },
}
