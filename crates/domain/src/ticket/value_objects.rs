//! Value objects for the ticket domain.

use serde::{Deserialize, Serialize};

use super::TicketError;

/// Unique identifier for a purchasing account.
///
/// Accounts are identified by a positive integer. The wrapper accepts any
/// `i64` so callers can pass an id through exactly as received; whether the
/// id is usable is a per-purchase rule checked by the purchase service, not
/// a construction invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an account ID from a raw integer.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns true if the ID is a positive integer.
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

/// Money amount in whole currency units.
///
/// Ticket prices have no fractional component, so amounts are whole units
/// rather than cents. Non-negativity is guaranteed by the representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in whole units (e.g., 25 = £25).
    units: u64,
}

impl Money {
    /// Creates a new Money amount from whole units.
    pub fn from_units(units: u64) -> Self {
        Self { units }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { units: 0 }
    }

    /// Returns the amount in whole units.
    pub fn units(&self) -> u64 {
        self.units
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.units == 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            units: self.units * quantity as u64,
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "£{}", self.units)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            units: self.units + rhs.units,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.units += rhs.units;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), std::ops::Add::add)
    }
}

/// The three ticket categories on sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketType {
    /// Full-price ticket, occupies a seat.
    Adult,

    /// Reduced-price ticket, occupies a seat.
    Child,

    /// Free ticket; infants sit on an adult's lap and occupy no seat.
    Infant,
}

impl TicketType {
    /// All ticket types, in price order.
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Returns the fixed price for one ticket of this type.
    pub fn price(&self) -> Money {
        match self {
            TicketType::Adult => Money::from_units(25),
            TicketType::Child => Money::from_units(15),
            TicketType::Infant => Money::zero(),
        }
    }

    /// Returns true if a ticket of this type occupies a seat.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    /// Returns the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "Adult",
            TicketType::Child => "Child",
            TicketType::Infant => "Infant",
        }
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request for a number of tickets of one type.
///
/// Immutable once constructed; the quantity is validated up front so a
/// request always holds a positive count. Multiple requests of the same
/// type may appear in one purchase and are summed, never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    count: u32,
}

impl TicketTypeRequest {
    /// Creates a new ticket request.
    ///
    /// Fails with [`TicketError::InvalidTicketCount`] if `count` is zero.
    pub fn new(ticket_type: TicketType, count: u32) -> Result<Self, TicketError> {
        if count == 0 {
            return Err(TicketError::InvalidTicketCount { count });
        }

        Ok(Self { ticket_type, count })
    }

    /// Returns the requested ticket type.
    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Returns the number of tickets requested.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns the total price for this request (count × unit price).
    pub fn amount(&self) -> Money {
        self.ticket_type.price().multiply(self.count)
    }

    /// Returns the number of seats this request occupies.
    ///
    /// Zero for infants regardless of count.
    pub fn seats(&self) -> u32 {
        if self.ticket_type.occupies_seat() {
            self.count
        } else {
            0
        }
    }
}
