//! Aggregated price level as reported in market data

use crate::order::{Order, Quantity};
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A single price level in a market data report
///
/// Carries price and aggregated quantity only; order ids are stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketLevel {
    /// Price of this level
    pub price: Price,
    /// Quantity resting at this price
    pub quantity: Quantity,
}

impl MarketLevel {
    /// Create a new price level
    pub fn new(price: impl Into<Price>, quantity: Quantity) -> Self {
        Self {
            price: price.into(),
            quantity,
        }
    }
}

impl From<&Order> for MarketLevel {
    fn from(order: &Order) -> Self {
        Self::new(order.price(), order.quantity())
    }
}
