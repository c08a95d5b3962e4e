//! Domain layer for the ticket booking system.
//!
//! This crate provides the core ticket abstractions including:
//! - Value objects for accounts, money, and ticket requests
//! - The fixed three-tier price table
//! - Purchase aggregation over an ordered request sequence

pub mod ticket;

pub use ticket::{
    AccountId, MAX_TICKETS_PER_PURCHASE, Money, PurchaseSummary, TicketError, TicketType,
    TicketTypeRequest,
};
