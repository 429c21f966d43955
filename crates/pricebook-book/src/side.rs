//! Vec-based storage for one side of the book
//!
//! Orders are kept in a single `Vec` sorted ascending by price with at most
//! one order per price. Position finding is an approximate binary search
//! (O(log N) comparisons); the insert itself shifts the tail (O(N)).
//! Lookup and delete by id are linear scans, independent of price order.

use pricebook_types::{parse_id, BookResult, MarketLevel, Order, OrderId, Price, Side};
use serde_json::Value;
use tracing::{debug, info};

/// Outcome of inserting an order into a side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new price level was created at `position`
    Inserted { position: usize },
    /// Quantity was added to the existing order `into` at `position`
    Merged { position: usize, into: OrderId },
}

impl InsertOutcome {
    /// Slot the order now occupies (or was merged into)
    pub fn position(&self) -> usize {
        match self {
            Self::Inserted { position } | Self::Merged { position, .. } => *position,
        }
    }
}

/// Ordered collection of orders for one side (asks or bids)
#[derive(Debug, Clone)]
pub struct BookSide {
    side: Side,
    /// Sorted ascending by price, no duplicate prices
    orders: Vec<Order>,
    notices: bool,
}

impl BookSide {
    /// Create a new empty side
    pub fn new(side: Side) -> Self {
        Self {
            side,
            orders: Vec::new(),
            notices: true,
        }
    }

    /// Enable or disable informational notices for lookups
    pub fn set_notices(&mut self, enabled: bool) {
        self.notices = enabled;
    }

    /// Which side this is
    pub fn side(&self) -> Side {
        self.side
    }

    /// Insert an order, merging into an existing price level if one matches
    ///
    /// On merge the incoming order's id is discarded: only the first order
    /// inserted at a price keeps its id. Fails only if the merged quantity
    /// would overflow, in which case the side is left untouched.
    pub fn insert(&mut self, order: Order) -> BookResult<InsertOutcome> {
        let price = order.price();
        let len = self.orders.len() as isize;
        let mut low: isize = 0;
        let mut high: isize = len - 1;
        let mut mid: isize = 0;

        while low <= high {
            mid = (low + high) / 2;
            let level = &mut self.orders[mid as usize];

            if price < level.price() {
                high = mid - 1;
            } else if price > level.price() {
                low = mid + 1;
            } else {
                level.add_quantity(order.quantity())?;
                debug!(
                    "{} #{} merged into #{} at {}: quantity={}",
                    self.side,
                    order.id(),
                    level.id(),
                    price,
                    level.quantity()
                );
                return Ok(InsertOutcome::Merged {
                    position: mid as usize,
                    into: level.id(),
                });
            }
        }

        // Search converged without a match; the tie-break on `mid` covers
        // the case where floor division left it one slot short.
        let position = if low >= len {
            self.orders.len()
        } else if high < 0 {
            0
        } else if self.orders[mid as usize].price() < price {
            mid as usize + 1
        } else {
            mid as usize
        };

        debug!("{} #{} inserted at slot {}: {}", self.side, order.id(), position, order);
        self.orders.insert(position, order);
        Ok(InsertOutcome::Inserted { position })
    }

    /// Find the slot of the order with `id` (linear scan)
    pub fn find_position(&self, id: OrderId) -> Option<usize> {
        self.orders.iter().position(|o| o.id() == id)
    }

    /// Look up an order by raw id
    ///
    /// Returns `Ok(None)` if the id is valid but no order has it.
    pub fn get(&self, id: &Value) -> BookResult<Option<&Order>> {
        let id = parse_id(id)?;
        Ok(self.get_by_id(id))
    }

    /// Look up an order by validated id
    pub fn get_by_id(&self, id: OrderId) -> Option<&Order> {
        match self.find_position(id) {
            Some(position) => {
                let order = &self.orders[position];
                if self.notices {
                    info!("{} #{} info: {}", self.side, order.id(), order);
                }
                Some(order)
            }
            None => {
                self.notice_missing(id);
                None
            }
        }
    }

    /// Delete an order by raw id, returning the removed order
    ///
    /// Returns `Ok(None)` if the id is valid but no order has it.
    pub fn delete(&mut self, id: &Value) -> BookResult<Option<Order>> {
        let id = parse_id(id)?;
        Ok(self.remove_by_id(id))
    }

    /// Delete an order by validated id, preserving the order of the rest
    pub fn remove_by_id(&mut self, id: OrderId) -> Option<Order> {
        match self.find_position(id) {
            Some(position) => {
                let order = self.orders.remove(position);
                debug!("{} #{} deleted: {}", self.side, order.id(), order);
                Some(order)
            }
            None => {
                self.notice_missing(id);
                None
            }
        }
    }

    fn notice_missing(&self, id: OrderId) {
        if self.notices {
            info!("{} #{} does not exist", self.side, id);
        }
    }

    /// Id of the order holding the level at `price`, if any
    pub fn id_at(&self, price: Price) -> Option<OrderId> {
        self.orders
            .binary_search_by(|o| o.price().cmp(&price))
            .ok()
            .map(|position| self.orders[position].id())
    }

    /// Orders in ascending price order
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Iterator over orders (lowest to highest price)
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Price levels (ids stripped) in ascending price order
    pub fn levels(&self) -> Vec<MarketLevel> {
        self.orders.iter().map(MarketLevel::from).collect()
    }

    /// Number of price levels
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the side is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
