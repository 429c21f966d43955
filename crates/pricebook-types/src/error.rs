//! Error types for order book operations

use thiserror::Error;

/// Why a price value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceViolation {
    /// Not an integer or real number (booleans included)
    WrongType,
    /// Zero or negative after rounding
    NotPositive,
}

impl std::fmt::Display for PriceViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongType => write!(f, "must be Float or Integer"),
            Self::NotPositive => write!(f, "must be bigger than Zero"),
        }
    }
}

/// Why a quantity value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityViolation {
    /// Not a true integer (booleans and reals included)
    WrongType,
    /// Zero or negative
    NotPositive,
    /// Merging into the price level would overflow the aggregated quantity
    Overflow,
}

impl std::fmt::Display for QuantityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongType => write!(f, "must be Integer"),
            Self::NotPositive => write!(f, "must be bigger than Zero"),
            Self::Overflow => write!(f, "overflows the price level total"),
        }
    }
}

/// Main error type for order book operations
///
/// Every variant is local to the call that produced it: the book is left
/// exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookError {
    /// Id argument is not a true integer
    #[error("<id> must be Integer")]
    InvalidId,

    /// Id argument is an integer but not above zero
    #[error("<id> must be bigger than Zero")]
    IdNotPositive,

    /// Price argument failed validation
    #[error("<price> {0}")]
    InvalidPrice(PriceViolation),

    /// Quantity argument failed validation
    #[error("<quantity> {0}")]
    InvalidQuantity(QuantityViolation),
}

/// Result type alias for order book operations
pub type BookResult<T> = Result<T, BookError>;
