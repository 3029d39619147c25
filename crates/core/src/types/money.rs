//! Integer money type.
//!
//! Catalog prices and order totals are whole-rupee amounts. There are no
//! fractional units anywhere in the data model, so money is an integer
//! newtype rather than a decimal.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// A whole-rupee amount.
///
/// Serializes as a bare integer, matching the wire contract
/// (`"price": 45999`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupees(i64);

impl Rupees {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Create an amount from a whole-rupee value.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying whole-rupee value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Rupees {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl core::str::FromStr for Rupees {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl From<Rupees> for i64 {
    fn from(amount: Rupees) -> Self {
        amount.0
    }
}

impl Add for Rupees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Rupees {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Line-item arithmetic: unit price times quantity.
impl Mul<u32> for Rupees {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * i64::from(quantity))
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}
