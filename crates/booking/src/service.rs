//! Ticket purchase service.

use domain::{AccountId, MAX_TICKETS_PER_PURCHASE, PurchaseSummary, TicketTypeRequest};

use crate::error::BookingError;
use crate::services::{SeatReservationService, TicketPaymentService};

/// Validates ticket purchase requests and delegates to the payment and seat
/// reservation collaborators.
///
/// The service is stateless across calls: each purchase is validated,
/// aggregated, and dispatched independently, with no running totals or
/// session state.
pub struct TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    payment: P,
    reservation: R,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    /// Creates a new ticket service with the given collaborators.
    pub fn new(payment: P, reservation: R) -> Self {
        Self {
            payment,
            reservation,
        }
    }

    /// Purchases tickets for an account.
    ///
    /// Validates the account ID, folds the requests into their totals, and
    /// checks the ticket limit and the adult-presence rule. On success the
    /// payment processor is charged and the seats are reserved, in that
    /// order, each exactly once. No collaborator is invoked unless every
    /// check passes; a collaborator failure propagates to the caller
    /// without compensation.
    #[tracing::instrument(skip(self, requests))]
    pub async fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, BookingError> {
        metrics::counter!("ticket_purchases_total").increment(1);

        let summary = match self.validate(account_id, requests) {
            Ok(summary) => summary,
            Err(e) => {
                metrics::counter!("ticket_purchase_failures_total").increment(1);
                return Err(e);
            }
        };

        // Payment first: a seat is never reserved without an attempted charge.
        self.payment
            .make_payment(account_id, summary.total_amount())
            .await?;
        self.reservation
            .reserve_seats(account_id, summary.total_seats())
            .await?;

        tracing::info!(
            tickets = summary.total_tickets(),
            seats = summary.total_seats(),
            amount = %summary.total_amount(),
            "ticket purchase completed"
        );

        Ok(summary)
    }

    fn validate(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, BookingError> {
        if !account_id.is_valid() {
            return Err(BookingError::InvalidAccountId);
        }

        let summary = PurchaseSummary::from_requests(requests);

        // The limit is checked before the adult rule, so an oversized
        // child-only purchase reports the limit violation.
        if summary.exceeds_ticket_limit() {
            return Err(BookingError::TicketLimitExceeded {
                requested: summary.total_tickets(),
                limit: MAX_TICKETS_PER_PURCHASE,
            });
        }

        if !summary.has_adult() {
            return Err(BookingError::AdultTicketRequired);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{InMemorySeatReservationService, InMemoryTicketPaymentService};
    use domain::TicketType;

    fn service() -> (
        TicketService<InMemoryTicketPaymentService, InMemorySeatReservationService>,
        InMemoryTicketPaymentService,
        InMemorySeatReservationService,
    ) {
        let payment = InMemoryTicketPaymentService::new();
        let reservation = InMemorySeatReservationService::new();
        let service = TicketService::new(payment.clone(), reservation.clone());
        (service, payment, reservation)
    }

    fn adult(count: u32) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketType::Adult, count).unwrap()
    }

    fn child(count: u32) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketType::Child, count).unwrap()
    }

    fn infant(count: u32) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketType::Infant, count).unwrap()
    }

    #[tokio::test]
    async fn test_valid_purchase_returns_summary() {
        let (service, _, _) = service();

        let summary = service
            .purchase_tickets(AccountId::new(1), &[adult(2), child(1)])
            .await
            .unwrap();

        assert_eq!(summary.total_tickets(), 3);
        assert_eq!(summary.total_seats(), 3);
        assert_eq!(summary.total_amount().units(), 65);
    }

    #[tokio::test]
    async fn test_invalid_account_id() {
        let (service, payment, reservation) = service();

        let result = service
            .purchase_tickets(AccountId::new(0), &[adult(1)])
            .await;

        assert!(matches!(result, Err(BookingError::InvalidAccountId)));
        assert_eq!(payment.payment_count(), 0);
        assert_eq!(reservation.reservation_count(), 0);
    }

    #[tokio::test]
    async fn test_adult_required() {
        let (service, payment, reservation) = service();

        let result = service
            .purchase_tickets(AccountId::new(1), &[child(2), infant(1)])
            .await;

        assert!(matches!(result, Err(BookingError::AdultTicketRequired)));
        assert_eq!(payment.payment_count(), 0);
        assert_eq!(reservation.reservation_count(), 0);
    }

    #[tokio::test]
    async fn test_ticket_limit() {
        let (service, payment, reservation) = service();

        let result = service
            .purchase_tickets(AccountId::new(1), &[adult(26)])
            .await;

        assert!(matches!(
            result,
            Err(BookingError::TicketLimitExceeded {
                requested: 26,
                limit: 25
            })
        ));
        assert_eq!(payment.payment_count(), 0);
        assert_eq!(reservation.reservation_count(), 0);
    }
}
