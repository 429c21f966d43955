//! Shared types for the pricebook order book engine
//!
//! This crate provides the validated order record and error types used by
//! `pricebook-book`. It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Order`] - Validated order record (id, price, quantity)
//! - [`Price`] - Order price, exact decimal or out-of-range real
//! - [`Side`] - Ask or bid side of the book
//! - [`MarketLevel`] - Aggregated `{price, quantity}` pair for market data
//! - [`BookError`] - Validation error kinds
//! - [`parse_id`], [`parse_price`], [`parse_quantity`] - Raw field validation

pub mod enums;
pub mod error;
pub mod level;
pub mod order;
pub mod price;
pub mod validate;

// Re-export commonly used types
pub use enums::*;
pub use error::*;
pub use level::*;
pub use order::*;
pub use price::*;
pub use validate::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
