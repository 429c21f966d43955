//! Order price covering every finite real
//!
//! Prices inside `Decimal`'s range (about ±7.9e28) are held as exact
//! decimals and rounded to the book's scale. Larger reals cannot be
//! represented as a `Decimal`, so they are kept as `f64`. Past 2^53 every
//! `f64` is already a whole number, so these never need rounding.

use crate::error::{BookError, PriceViolation};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::str::FromStr;

/// Price of an order or market level
///
/// Ordering is numeric across both representations.
///
/// # Example
///
/// ```
/// use pricebook_types::Price;
/// use rust_decimal_macros::dec;
///
/// let huge = Price::from_f64(f64::MAX).unwrap();
/// assert!(huge > Price::from(dec!(1000000)));
/// assert_eq!(Price::from_f64(0.5).unwrap(), dec!(0.5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Price(Repr);

#[derive(Debug, Clone, Copy)]
enum Repr {
    Exact(Decimal),
    /// Magnitude beyond `Decimal::MAX`
    Wide(f64),
}

impl Price {
    /// Convert a real, falling back to `f64` storage outside `Decimal`'s range
    ///
    /// Returns `None` for NaN and infinities.
    pub fn from_f64(real: f64) -> Option<Self> {
        if !real.is_finite() {
            return None;
        }
        let repr = match Decimal::from_f64(real) {
            Some(exact) => Repr::Exact(exact),
            None if real.abs() >= 1.0 => Repr::Wide(real),
            // Below the smallest representable scale
            None => Repr::Exact(Decimal::ZERO),
        };
        Some(Self(repr))
    }

    /// The exact decimal value, if the price fits in a `Decimal`
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self.0 {
            Repr::Exact(exact) => Some(exact),
            Repr::Wide(_) => None,
        }
    }

    /// Round to `dp` decimal places, midpoint away from zero
    pub fn round_dp(self, dp: u32) -> Self {
        match self.0 {
            Repr::Exact(exact) => Self(Repr::Exact(
                exact.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
            )),
            Repr::Wide(_) => self,
        }
    }

    /// Returns true if the price is above zero
    pub fn is_positive(&self) -> bool {
        match self.0 {
            Repr::Exact(exact) => exact > Decimal::ZERO,
            Repr::Wide(wide) => wide > 0.0,
        }
    }
}

impl From<Decimal> for Price {
    fn from(exact: Decimal) -> Self {
        Self(Repr::Exact(exact))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Repr::Exact(a), Repr::Exact(b)) => a.cmp(&b),
            (Repr::Wide(a), Repr::Wide(b)) => a.total_cmp(&b),
            (Repr::Exact(_), Repr::Wide(b)) => {
                if b > 0.0 {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (Repr::Wide(a), Repr::Exact(_)) => {
                if a > 0.0 {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
        }
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Price {}

impl PartialEq<Decimal> for Price {
    fn eq(&self, other: &Decimal) -> bool {
        self.as_decimal().as_ref() == Some(other)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Repr::Exact(exact) => exact.fmt(f),
            Repr::Wide(wide) => wide.fmt(f),
        }
    }
}

impl FromStr for Price {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(exact) = Decimal::from_str(s) {
            return Ok(Self::from(exact));
        }
        s.parse::<f64>()
            .ok()
            .and_then(Self::from_f64)
            .ok_or(BookError::InvalidPrice(PriceViolation::WrongType))
    }
}

// Serialized as a string, like `Decimal` with `serde-with-str`
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
