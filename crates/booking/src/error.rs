//! Booking error types.

use thiserror::Error;

/// Errors that can occur while processing a ticket purchase.
#[derive(Debug, Error)]
pub enum BookingError {
    /// The purchasing account ID is not a positive integer.
    #[error("Invalid account ID: must be a positive integer")]
    InvalidAccountId,

    /// The summed ticket count exceeds the per-purchase limit.
    #[error(
        "Ticket limit exceeded: cannot purchase more than {limit} tickets at a time (requested {requested})"
    )]
    TicketLimitExceeded { requested: u32, limit: u32 },

    /// Child and Infant tickets cannot be purchased without an Adult ticket.
    #[error("At least one Adult ticket is required for a valid purchase")]
    AdultTicketRequired,

    /// A collaborator was invoked with input violating its contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Payment service error.
    #[error("Payment service error: {0}")]
    Payment(String),

    /// Seat reservation service error.
    #[error("Seat reservation service error: {0}")]
    Reservation(String),
}

/// Convenience type alias for booking results.
pub type Result<T> = std::result::Result<T, BookingError>;
