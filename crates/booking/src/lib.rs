//! Ticket purchase orchestration.
//!
//! This crate provides the purchase service that validates ticket requests
//! against the business rules, aggregates totals, and delegates to two
//! external collaborators:
//! 1. A payment processor charging the purchasing account
//! 2. A seat reservation service allocating the purchased seats
//!
//! Payment always precedes reservation, and neither collaborator is invoked
//! unless every validation passes.

pub mod error;
pub mod service;
pub mod services;

pub use error::{BookingError, Result};
pub use service::TicketService;
pub use services::{
    InMemorySeatReservationService, InMemoryTicketPaymentService, SeatReservationService,
    TicketPaymentService,
};
