//! Validated order record

use crate::error::{BookError, BookResult, QuantityViolation};
use crate::price::Price;
use crate::validate::{round_price, DEFAULT_PRICE_PRECISION};

/// Order identifier, unique within one side of the book
pub type OrderId = u64;

/// Order quantity in whole units
pub type Quantity = u64;

/// One resting order on one side of the book
///
/// An `Order` can only be obtained through one of the validating
/// constructors, so `id`, `price` and `quantity` are always positive.
/// Id and price never change after construction; quantity only grows
/// when another order merges into the same price level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    price: Price,
    quantity: Quantity,
}

impl Order {
    /// Create an order, rounding the price to the default two decimal places
    ///
    /// # Example
    ///
    /// ```
    /// use pricebook_types::Order;
    /// use rust_decimal_macros::dec;
    ///
    /// let order = Order::new(1, dec!(0.005), 10).unwrap();
    /// assert_eq!(order.price(), dec!(0.01));
    /// ```
    pub fn new(id: OrderId, price: impl Into<Price>, quantity: Quantity) -> BookResult<Self> {
        Self::with_precision(id, price, quantity, DEFAULT_PRICE_PRECISION)
    }

    /// Create an order, rounding the price to `precision` decimal places
    pub fn with_precision(
        id: OrderId,
        price: impl Into<Price>,
        quantity: Quantity,
        precision: u32,
    ) -> BookResult<Self> {
        if id == 0 {
            return Err(BookError::IdNotPositive);
        }
        let price = round_price(price.into(), precision)?;
        if quantity == 0 {
            return Err(BookError::InvalidQuantity(QuantityViolation::NotPositive));
        }

        Ok(Self { id, price, quantity })
    }

    /// Order id
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Order price
    pub fn price(&self) -> Price {
        self.price
    }

    /// Current quantity (grows on merge)
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Merge `qty` more units into this order
    ///
    /// Fails without modifying the order if the total would overflow.
    pub fn add_quantity(&mut self, qty: Quantity) -> BookResult<()> {
        self.quantity = self
            .quantity
            .checked_add(qty)
            .ok_or(BookError::InvalidQuantity(QuantityViolation::Overflow))?;
        Ok(())
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "price={}, quantity={}", self.price, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PriceViolation;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_creation() {
        let order = Order::new(3, dec!(100.50), 15).unwrap();
        assert_eq!(order.id(), 3);
        assert_eq!(order.price(), dec!(100.50));
        assert_eq!(order.quantity(), 15);
    }

    #[test]
    fn test_order_rejects_invalid_fields() {
        assert_eq!(Order::new(0, dec!(1), 1), Err(BookError::IdNotPositive));
        assert_eq!(
            Order::new(1, dec!(0.001), 1),
            Err(BookError::InvalidPrice(PriceViolation::NotPositive))
        );
        assert_eq!(
            Order::new(1, dec!(1), 0),
            Err(BookError::InvalidQuantity(QuantityViolation::NotPositive))
        );
    }

    #[test]
    fn test_order_with_precision() {
        let order = Order::with_precision(1, dec!(1.23456), 1, 4).unwrap();
        assert_eq!(order.price(), dec!(1.2346));
    }

    #[test]
    fn test_order_keeps_wide_price() {
        let huge = Price::from_f64(f64::MAX).unwrap();
        let order = Order::new(1, huge, 9).unwrap();
        assert_eq!(order.price(), huge);
        assert!(Order::new(1, Price::from_f64(-f64::MAX).unwrap(), 9).is_err());
    }

    #[test]
    fn test_add_quantity() {
        let mut order = Order::new(1, dec!(99.99), 99).unwrap();
        order.add_quantity(99).unwrap();
        assert_eq!(order.quantity(), 198);
    }

    #[test]
    fn test_add_quantity_overflow_leaves_order_unchanged() {
        let mut order = Order::new(1, dec!(1), u64::MAX).unwrap();
        assert_eq!(
            order.add_quantity(1),
            Err(BookError::InvalidQuantity(QuantityViolation::Overflow))
        );
        assert_eq!(order.quantity(), u64::MAX);
    }

    #[test]
    fn test_order_display() {
        let order = Order::new(1, dec!(55.5), 100).unwrap();
        assert_eq!(order.to_string(), "price=55.5, quantity=100");
    }
}
