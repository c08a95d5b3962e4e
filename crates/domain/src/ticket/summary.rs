//! Purchase aggregation over an ordered request sequence.

use serde::{Deserialize, Serialize};

use super::{Money, TicketType, TicketTypeRequest};

/// Maximum number of tickets that can be purchased in a single call.
///
/// The limit applies to the summed total across all requests in the call,
/// not to any single request.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// Aggregated totals for one purchase request sequence.
///
/// Computed by folding over the requests in the order supplied. A summary
/// exists only within one purchase operation and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PurchaseSummary {
    total_tickets: u32,
    total_seats: u32,
    total_amount: Money,
    has_adult: bool,
}

impl PurchaseSummary {
    /// Folds a request sequence into its purchase totals.
    ///
    /// Infants count toward the ticket total but occupy no seat and cost
    /// nothing.
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        let mut summary = Self::default();

        for request in requests {
            summary.total_tickets += request.count();
            summary.total_seats += request.seats();
            summary.total_amount += request.amount();

            if request.ticket_type() == TicketType::Adult {
                summary.has_adult = true;
            }
        }

        summary
    }

    /// Returns the total number of tickets across all types.
    pub fn total_tickets(&self) -> u32 {
        self.total_tickets
    }

    /// Returns the number of seats to reserve.
    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Returns the total amount to charge.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Returns true if at least one Adult ticket was requested.
    pub fn has_adult(&self) -> bool {
        self.has_adult
    }

    /// Returns true if the ticket total exceeds the per-purchase limit.
    pub fn exceeds_ticket_limit(&self) -> bool {
        self.total_tickets > MAX_TICKETS_PER_PURCHASE
    }
}
