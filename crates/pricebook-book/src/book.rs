//! Two-sided order book with per-side id allocation
//!
//! The book owns one [`BookSide`] per direction and one id counter per side.
//! Counters start at zero and advance by one for every successful `set`,
//! merges included, so ids are strictly increasing and never reused.

use crate::config::BookConfig;
use crate::market::MarketData;
use crate::side::{BookSide, InsertOutcome};
use pricebook_types::{
    parse_price, parse_quantity, round_price, BookResult, Order, OrderId, Price, Quantity, Side,
};
use serde_json::Value;
use tracing::debug;

/// In-memory order book holding asks and bids
///
/// # Example
///
/// ```
/// use pricebook_book::OrderBook;
///
/// let mut book = OrderBook::new();
/// let first = book.set_ask(99.99, 99).unwrap();
/// let second = book.set_ask(99.99, 99).unwrap();
/// assert!(second > first);
///
/// // Same price merges into one level owned by the first id
/// let ask = book.get_ask(first).unwrap().unwrap();
/// assert_eq!(ask.quantity(), 198);
/// assert!(book.get_ask(second).unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct OrderBook {
    config: BookConfig,
    asks: BookSide,
    bids: BookSide,
    /// Last id handed out on the ask side (0 = none yet)
    ask_id: OrderId,
    /// Last id handed out on the bid side (0 = none yet)
    bid_id: OrderId,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create a new empty book with the default configuration
    pub fn new() -> Self {
        Self::with_config(BookConfig::default())
    }

    /// Create a new empty book with a specific configuration
    pub fn with_config(config: BookConfig) -> Self {
        let mut asks = BookSide::new(Side::Ask);
        let mut bids = BookSide::new(Side::Bid);
        asks.set_notices(config.notices());
        bids.set_notices(config.notices());

        Self {
            config,
            asks,
            bids,
            ask_id: 0,
            bid_id: 0,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    // ========================================================================
    // Side-generic operations
    // ========================================================================

    /// Add an order from raw price and quantity values
    ///
    /// Returns the id allocated for this call. When the price already has a
    /// level the quantity is merged into it and the returned id is not stored
    /// anywhere; use [`id_at`](Self::id_at) to find the owning order.
    pub fn set(
        &mut self,
        side: Side,
        price: impl Into<Value>,
        quantity: impl Into<Value>,
    ) -> BookResult<OrderId> {
        let price = parse_price(&price.into(), self.config.price_precision())?;
        let quantity = parse_quantity(&quantity.into())?;
        self.place(side, price, quantity)
    }

    /// Add an order from already-typed values
    ///
    /// The price is rounded to the configured precision. The side's id
    /// counter only advances once the order has been stored or merged.
    pub fn place(
        &mut self,
        side: Side,
        price: impl Into<Price>,
        quantity: Quantity,
    ) -> BookResult<OrderId> {
        let id = self.last_id(side) + 1;
        let order = Order::with_precision(id, price, quantity, self.config.price_precision())?;

        let outcome = self.side_mut(side).insert(order)?;
        match side {
            Side::Ask => self.ask_id = id,
            Side::Bid => self.bid_id = id,
        }

        if let InsertOutcome::Merged { into, .. } = outcome {
            debug!("{} #{} burned by merge into #{}", side, id, into);
        }
        Ok(id)
    }

    /// Look up an order by raw id
    ///
    /// `Ok(None)` means the id was valid but no order on this side has it.
    pub fn get(&self, side: Side, id: impl Into<Value>) -> BookResult<Option<&Order>> {
        self.side(side).get(&id.into())
    }

    /// Delete an order by raw id, returning the removed order
    pub fn delete(&mut self, side: Side, id: impl Into<Value>) -> BookResult<Option<Order>> {
        self.side_mut(side).delete(&id.into())
    }

    /// Id of the order that owns the level at `price`, if any
    ///
    /// The price is rounded to the configured precision before lookup.
    pub fn id_at(&self, side: Side, price: impl Into<Price>) -> Option<OrderId> {
        let price = round_price(price.into(), self.config.price_precision()).ok()?;
        self.side(side).id_at(price)
    }

    /// Last id allocated on a side (0 if none yet)
    pub fn last_id(&self, side: Side) -> OrderId {
        match side {
            Side::Ask => self.ask_id,
            Side::Bid => self.bid_id,
        }
    }

    /// Read-only access to one side
    pub fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Ask => &self.asks,
            Side::Bid => &self.bids,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut BookSide {
        match side {
            Side::Ask => &mut self.asks,
            Side::Bid => &mut self.bids,
        }
    }

    // ========================================================================
    // Ask / bid operations
    // ========================================================================

    /// Add an ask; see [`set`](Self::set)
    pub fn set_ask(
        &mut self,
        price: impl Into<Value>,
        quantity: impl Into<Value>,
    ) -> BookResult<OrderId> {
        self.set(Side::Ask, price, quantity)
    }

    /// Add a bid; see [`set`](Self::set)
    pub fn set_bid(
        &mut self,
        price: impl Into<Value>,
        quantity: impl Into<Value>,
    ) -> BookResult<OrderId> {
        self.set(Side::Bid, price, quantity)
    }

    /// Look up an ask by id
    pub fn get_ask(&self, id: impl Into<Value>) -> BookResult<Option<&Order>> {
        self.get(Side::Ask, id)
    }

    /// Look up a bid by id
    pub fn get_bid(&self, id: impl Into<Value>) -> BookResult<Option<&Order>> {
        self.get(Side::Bid, id)
    }

    /// Delete an ask by id
    pub fn del_ask(&mut self, id: impl Into<Value>) -> BookResult<Option<Order>> {
        self.delete(Side::Ask, id)
    }

    /// Delete a bid by id
    pub fn del_bid(&mut self, id: impl Into<Value>) -> BookResult<Option<Order>> {
        self.delete(Side::Bid, id)
    }

    /// Last ask id allocated (0 if none yet)
    pub fn ask_id(&self) -> OrderId {
        self.ask_id
    }

    /// Last bid id allocated (0 if none yet)
    pub fn bid_id(&self) -> OrderId {
        self.bid_id
    }

    /// Id of the ask that owns the level at `price`
    pub fn ask_id_at(&self, price: impl Into<Price>) -> Option<OrderId> {
        self.id_at(Side::Ask, price)
    }

    /// Id of the bid that owns the level at `price`
    pub fn bid_id_at(&self, price: impl Into<Price>) -> Option<OrderId> {
        self.id_at(Side::Bid, price)
    }

    /// Asks in ascending price order
    pub fn asks(&self) -> &[Order] {
        self.asks.orders()
    }

    /// Bids in ascending price order
    pub fn bids(&self) -> &[Order] {
        self.bids.orders()
    }

    /// Number of ask levels
    pub fn ask_count(&self) -> usize {
        self.asks.len()
    }

    /// Number of bid levels
    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    /// Check if the book holds no orders
    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    /// Snapshot both sides as `{price, quantity}` levels in ascending price order
    pub fn report_market_data(&self) -> MarketData {
        let data = MarketData {
            asks: self.asks.levels(),
            bids: self.bids.levels(),
        };
        debug!("Market data: {:?}", data);
        data
    }
}
