//! Common test utilities and fixtures for integration tests
//!
//! Valid and invalid raw order inputs with their expected outcomes, plus
//! seeded random orders and an independent sort-and-merge of them.

#![allow(dead_code)]

use pricebook_book::{BookError, OrderBook, PriceViolation, QuantityViolation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Install a test-friendly tracing subscriber once (respects `RUST_LOG`)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fresh book with tracing installed
pub fn new_book() -> OrderBook {
    init_tracing();
    OrderBook::new()
}

/// Price/quantity pairs every side must accept
pub fn positive_suite() -> Vec<(Value, Value)> {
    vec![
        (json!(0.005), json!(1)),
        (json!(0.01), json!(1)),
        (json!(10.0), json!(i64::MAX)),
        (json!(55.5), json!(100)),
        (json!(10000.99), json!(99999)),
        (json!(100), json!(10)),
        (json!(f64::MAX), json!(9)),
    ]
}

/// Raw ids with the outcome a get/delete on an empty book must produce
pub fn id_suite() -> Vec<(Value, Option<BookError>)> {
    vec![
        (json!(true), Some(BookError::InvalidId)),
        (json!(""), Some(BookError::InvalidId)),
        (json!(" "), Some(BookError::InvalidId)),
        (json!("1"), Some(BookError::InvalidId)),
        (json!([49]), Some(BookError::InvalidId)),
        (json!(null), Some(BookError::InvalidId)),
        (json!([]), Some(BookError::InvalidId)),
        (json!({}), Some(BookError::InvalidId)),
        (json!(1.0), Some(BookError::InvalidId)),
        (json!(0), Some(BookError::IdNotPositive)),
        (json!(-1), Some(BookError::IdNotPositive)),
        (json!(-i64::MAX), Some(BookError::IdNotPositive)),
        (json!(1), None),
        (json!(i64::MAX), None),
    ]
}

/// Price/quantity pairs with the error a set must produce
pub fn invalid_set_suite() -> Vec<(Value, Value, BookError)> {
    let qty_type = BookError::InvalidQuantity(QuantityViolation::WrongType);
    let qty_zero = BookError::InvalidQuantity(QuantityViolation::NotPositive);
    let price_type = BookError::InvalidPrice(PriceViolation::WrongType);
    let price_zero = BookError::InvalidPrice(PriceViolation::NotPositive);

    vec![
        // quantity
        (json!(100.0), json!(1.0), qty_type),
        (json!(5), json!(true), qty_type),
        (json!(1), json!(""), qty_type),
        (json!(0.1), json!(" "), qty_type),
        (json!(0.99), json!("1"), qty_type),
        (json!(99.99), json!([49]), qty_type),
        (json!(0.55), json!([]), qty_type),
        (json!(1000000.01), json!({}), qty_type),
        (json!(5.4), json!(null), qty_type),
        (json!(10.5), json!(0), qty_zero),
        (json!(11.11), json!(-1), qty_zero),
        (json!(9999.9), json!(-i64::MAX), qty_zero),
        // price
        (json!(true), json!(7), price_type),
        (json!(null), json!(1), price_type),
        (json!(""), json!(99), price_type),
        (json!(" "), json!(9999999), price_type),
        (json!("1"), json!(1001), price_type),
        (json!([49]), json!(100), price_type),
        (json!([]), json!(22), price_type),
        (json!({}), json!(2), price_type),
        (json!(-1.0), json!(555), price_zero),
        (json!(-f64::MAX), json!(999), price_zero),
        (json!(0.001), json!(99999), price_zero),
        (json!(0), json!(10), price_zero),
    ]
}

/// Deterministic random `(price, quantity)` pairs
pub fn random_orders(count: usize, seed: u64) -> Vec<(f64, u64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0.01..100.0), rng.gen_range(1..=1000)))
        .collect()
}

/// Sort and merge orders independently of the book: price -> total quantity
pub fn expected_levels(orders: &[(f64, u64)]) -> Vec<(Decimal, u64)> {
    let mut levels: BTreeMap<Decimal, u64> = BTreeMap::new();
    for (price, qty) in orders {
        let price = Decimal::from_f64(*price)
            .expect("test prices fit in a decimal")
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        *levels.entry(price).or_default() += qty;
    }
    levels.into_iter().collect()
}
