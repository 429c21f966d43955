//! In-memory order book engine
//!
//! This crate provides a two-sided order book that keeps each side sorted by
//! price, merges orders landing on an identical price, and hands out
//! monotonically increasing ids per side. It is a pure single-threaded data
//! structure: no matching, no persistence, no networking.
//!
//! If a book must be shared between threads, wrap the whole [`OrderBook`] in
//! one lock; every mutation may touch the full ordered sequence of a side.
//!
//! # Example
//!
//! ```
//! use pricebook_book::{OrderBook, BookError};
//!
//! let mut book = OrderBook::new();
//! book.set_ask(101.25, 10).unwrap();
//! book.set_ask(100.5, 5).unwrap();
//! book.set_bid(99, 7).unwrap();
//!
//! let data = book.report_market_data();
//! assert_eq!(data.asks.len(), 2);
//! assert!(data.is_sorted_by_price());
//!
//! assert_eq!(book.get_ask(0), Err(BookError::IdNotPositive));
//! ```

pub mod book;
pub mod config;
pub mod market;
pub mod side;

// Re-export main types
pub use book::OrderBook;
pub use config::{BookConfig, BookConfigBuilder, ConfigError};
pub use market::MarketData;
pub use side::{BookSide, InsertOutcome};

pub use pricebook_types::{
    BookError, BookResult, Decimal, MarketLevel, Order, OrderId, Price, PriceViolation,
    Quantity, QuantityViolation, Side,
};
