//! Seat reservation trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use domain::AccountId;

use crate::error::BookingError;

/// Trait for allocating seats to a purchasing account.
///
/// Implementations allocate unconditionally; business rules are enforced by
/// the purchase service before the call. Only the stated input contract is
/// checked here.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// Reserves the given number of seats for the account.
    ///
    /// `account_id` must be a positive integer; the seat count is
    /// non-negative by construction.
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), BookingError>;
}

#[derive(Debug, Default)]
struct InMemoryReservationState {
    reservations: Vec<(AccountId, u32)>,
    fail_on_reserve: bool,
}

/// In-memory seat reservation service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    state: Arc<RwLock<InMemoryReservationState>>,
}

impl InMemorySeatReservationService {
    /// Creates a new in-memory seat reservation service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail on the next reserve call.
    pub fn set_fail_on_reserve(&self, fail: bool) {
        self.state.write().unwrap().fail_on_reserve = fail;
    }

    /// Returns the number of reservations made.
    pub fn reservation_count(&self) -> usize {
        self.state.read().unwrap().reservations.len()
    }

    /// Returns every reservation made, in call order.
    pub fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.state.read().unwrap().reservations.clone()
    }

    /// Returns the total number of seats reserved.
    pub fn total_seats_reserved(&self) -> u32 {
        self.state
            .read()
            .unwrap()
            .reservations
            .iter()
            .map(|(_, seats)| *seats)
            .sum()
    }
}

#[async_trait]
impl SeatReservationService for InMemorySeatReservationService {
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), BookingError> {
        if !account_id.is_valid() {
            return Err(BookingError::InvalidArgument(
                "accountId must be a positive integer",
            ));
        }

        let mut state = self.state.write().unwrap();

        if state.fail_on_reserve {
            return Err(BookingError::Reservation(
                "Seat allocation failed".to_string(),
            ));
        }

        state.reservations.push((account_id, seat_count));
        tracing::info!(account_id = %account_id, seats = seat_count, "seats reserved");

        Ok(())
    }
}
