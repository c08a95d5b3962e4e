//! External collaborator traits and in-memory implementations.
//!
//! The purchase service consumes two collaborators: a payment processor and
//! a seat reservation service. Both are black boxes to the core; the
//! in-memory implementations record their effects and are used throughout
//! the tests.

pub mod payment;
pub mod reservation;

pub use payment::{InMemoryTicketPaymentService, TicketPaymentService};
pub use reservation::{InMemorySeatReservationService, SeatReservationService};
