//! Fare amounts.

use std::fmt;
use std::ops::Add;

use serde::{Serialize, Serializer};

/// Error returned when converting an invalid decimal amount.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid amount {value}: {reason}")]
pub struct InvalidAmount {
    value: f64,
    reason: &'static str,
}

/// A non-negative amount of money, held in whole cents.
///
/// Fares are configured as decimals (`2.50`) but all arithmetic happens on
/// integer cents, so `3.75 - 2.50` is exactly `1.25`.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::Money;
///
/// let fare = Money::from_decimal(3.75).unwrap();
/// let paid = Money::from_decimal(2.50).unwrap();
/// assert_eq!(fare.saturating_sub(paid).to_string(), "$1.25");
/// assert_eq!(paid.saturating_sub(fare), Money::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: u64,
}

impl Money {
    /// No charge.
    pub const ZERO: Money = Money { cents: 0 };

    /// Creates an amount from whole cents.
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Converts a decimal amount, rounding to the nearest cent.
    ///
    /// Negative, NaN and infinite values are rejected.
    pub fn from_decimal(value: f64) -> Result<Self, InvalidAmount> {
        if !value.is_finite() {
            return Err(InvalidAmount {
                value,
                reason: "must be finite",
            });
        }
        if value < 0.0 {
            return Err(InvalidAmount {
                value,
                reason: "must not be negative",
            });
        }

        Ok(Self {
            cents: (value * 100.0).round() as u64,
        })
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// Returns the amount as a decimal, for JSON output.
    pub fn as_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Returns `true` for a zero amount.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Subtraction clamped at zero.
    pub fn saturating_sub(self, rhs: Money) -> Money {
        Money {
            cents: self.cents.saturating_sub(rhs.cents),
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}
