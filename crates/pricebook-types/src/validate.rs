//! Raw field validation
//!
//! Order fields arrive as raw [`serde_json::Value`]s and are checked here
//! before they ever reach book storage. The type rules are strict:
//!
//! - `id` and `quantity` must be JSON integers (reals such as `1.0` are rejected)
//! - `price` may be an integer or a real; reals are rounded to the configured scale,
//!   and reals beyond `Decimal`'s range are kept as they are
//! - booleans are never accepted as numbers
//! - every field must be strictly positive after rounding

use crate::error::{BookError, BookResult, PriceViolation, QuantityViolation};
use crate::order::{OrderId, Quantity};
use crate::price::Price;
use rust_decimal::Decimal;
use serde_json::Value;

/// Default number of decimal places kept on prices
pub const DEFAULT_PRICE_PRECISION: u32 = 2;

/// Largest price scale accepted by the book configuration
pub const MAX_PRICE_PRECISION: u32 = 8;

/// Validate a raw order id
///
/// # Example
///
/// ```
/// use pricebook_types::{parse_id, BookError};
/// use serde_json::json;
///
/// assert_eq!(parse_id(&json!(7)), Ok(7));
/// assert_eq!(parse_id(&json!(0)), Err(BookError::IdNotPositive));
/// assert_eq!(parse_id(&json!("7")), Err(BookError::InvalidId));
/// ```
pub fn parse_id(value: &Value) -> BookResult<OrderId> {
    let Value::Number(n) = value else {
        return Err(BookError::InvalidId);
    };

    if let Some(id) = n.as_u64() {
        return if id == 0 {
            Err(BookError::IdNotPositive)
        } else {
            Ok(id)
        };
    }

    // Negative integers are still integers, only the magnitude is wrong
    if n.as_i64().is_some() {
        return Err(BookError::IdNotPositive);
    }

    Err(BookError::InvalidId)
}

/// Validate a raw price and round it to `precision` decimal places
///
/// Rounding uses midpoint-away-from-zero, so `0.005` becomes `0.01` at the
/// default scale while `0.001` rounds down to zero and is rejected. Every
/// finite positive real is accepted, including `f64::MAX`.
pub fn parse_price(value: &Value, precision: u32) -> BookResult<Price> {
    let Value::Number(n) = value else {
        return Err(BookError::InvalidPrice(PriceViolation::WrongType));
    };

    if let Some(int) = n.as_u64() {
        return check_price(Decimal::from(int).into());
    }
    if let Some(int) = n.as_i64() {
        return check_price(Decimal::from(int).into());
    }

    let price = n
        .as_f64()
        .and_then(Price::from_f64)
        .ok_or(BookError::InvalidPrice(PriceViolation::WrongType))?;
    round_price(price, precision)
}

/// Round an already-typed price to `precision` places and check it is positive
pub fn round_price(price: Price, precision: u32) -> BookResult<Price> {
    check_price(price.round_dp(precision))
}

fn check_price(price: Price) -> BookResult<Price> {
    if price.is_positive() {
        Ok(price)
    } else {
        Err(BookError::InvalidPrice(PriceViolation::NotPositive))
    }
}

/// Validate a raw quantity
pub fn parse_quantity(value: &Value) -> BookResult<Quantity> {
    let Value::Number(n) = value else {
        return Err(BookError::InvalidQuantity(QuantityViolation::WrongType));
    };

    match (n.as_u64(), n.as_i64()) {
        (Some(0), _) | (None, Some(_)) => {
            Err(BookError::InvalidQuantity(QuantityViolation::NotPositive))
        }
        (Some(qty), _) => Ok(qty),
        (None, None) => Err(BookError::InvalidQuantity(QuantityViolation::WrongType)),
    }
}
