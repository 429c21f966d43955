//! Market data snapshot

use pricebook_types::MarketLevel;
use serde::{Deserialize, Serialize};

/// Read-only `{price, quantity}` projection of both sides of the book
///
/// Both sides are listed in ascending price order, exactly as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketData {
    /// Ask levels (lowest to highest price)
    pub asks: Vec<MarketLevel>,
    /// Bid levels (lowest to highest price)
    pub bids: Vec<MarketLevel>,
}

impl MarketData {
    /// Returns true if both sides are in non-decreasing price order
    pub fn is_sorted_by_price(&self) -> bool {
        is_sorted(&self.asks) && is_sorted(&self.bids)
    }

    /// Check if both sides are empty
    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }
}

fn is_sorted(levels: &[MarketLevel]) -> bool {
    levels.windows(2).all(|w| w[0].price <= w[1].price)
}
