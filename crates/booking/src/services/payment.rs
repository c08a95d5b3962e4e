//! Payment processor trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use domain::{AccountId, Money};

use crate::error::BookingError;

/// Trait for charging a purchasing account.
///
/// Implementations charge unconditionally; business rules are enforced by
/// the purchase service before the call. Only the stated input contract is
/// checked here.
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    /// Charges the account the given amount.
    ///
    /// `account_id` must be a positive integer; the amount is non-negative
    /// by construction.
    async fn make_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Result<(), BookingError>;
}

#[derive(Debug, Default)]
struct InMemoryPaymentState {
    payments: Vec<(AccountId, Money)>,
    fail_on_payment: bool,
}

/// In-memory payment processor for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketPaymentService {
    state: Arc<RwLock<InMemoryPaymentState>>,
}

impl InMemoryTicketPaymentService {
    /// Creates a new in-memory payment processor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the processor to fail on the next payment call.
    pub fn set_fail_on_payment(&self, fail: bool) {
        self.state.write().unwrap().fail_on_payment = fail;
    }

    /// Returns the number of payments made.
    pub fn payment_count(&self) -> usize {
        self.state.read().unwrap().payments.len()
    }

    /// Returns every charge made, in call order.
    pub fn payments(&self) -> Vec<(AccountId, Money)> {
        self.state.read().unwrap().payments.clone()
    }

    /// Returns the sum of all charges.
    pub fn total_charged(&self) -> Money {
        self.state
            .read()
            .unwrap()
            .payments
            .iter()
            .map(|(_, amount)| *amount)
            .sum()
    }
}

#[async_trait]
impl TicketPaymentService for InMemoryTicketPaymentService {
    async fn make_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Result<(), BookingError> {
        if !account_id.is_valid() {
            return Err(BookingError::InvalidArgument(
                "accountId must be a positive integer",
            ));
        }

        let mut state = self.state.write().unwrap();

        if state.fail_on_payment {
            return Err(BookingError::Payment("Payment declined".to_string()));
        }

        state.payments.push((account_id, amount));
        tracing::info!(account_id = %account_id, amount = %amount, "payment processed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_payments_are_recorded_in_order() {
        let service = InMemoryTicketPaymentService::new();
        let account = AccountId::new(1);

        service
            .make_payment(account, Money::from_units(65))
            .await
            .unwrap();
        service
            .make_payment(account, Money::from_units(50))
            .await
            .unwrap();

        assert_eq!(service.payment_count(), 2);
        assert_eq!(
            service.payments(),
            vec![
                (account, Money::from_units(65)),
                (account, Money::from_units(50))
            ]
        );
        assert_eq!(service.total_charged(), Money::from_units(115));
    }

    #[tokio::test]
    async fn test_fail_on_payment() {
        let service = InMemoryTicketPaymentService::new();
        service.set_fail_on_payment(true);

        let result = service
            .make_payment(AccountId::new(1), Money::from_units(65))
            .await;

        assert!(matches!(result, Err(BookingError::Payment(_))));
        assert_eq!(service.payment_count(), 0);
    }

    #[tokio::test]
    async fn test_rejects_non_positive_account() {
        let service = InMemoryTicketPaymentService::new();

        let result = service
            .make_payment(AccountId::new(0), Money::from_units(65))
            .await;

        assert!(matches!(result, Err(BookingError::InvalidArgument(_))));
        assert_eq!(service.payment_count(), 0);
    }

    #[tokio::test]
    async fn test_zero_amount_is_accepted() {
        let service = InMemoryTicketPaymentService::new();

        service
            .make_payment(AccountId::new(1), Money::zero())
            .await
            .unwrap();

        assert_eq!(service.payment_count(), 1);
        assert!(service.total_charged().is_zero());
    }
}
