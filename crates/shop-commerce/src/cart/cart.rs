//! Cart and cart line types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// A client-side shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product, merging into an existing line.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The line would exceed MAX_QUANTITY_PER_ITEM
    /// - The product is priced in another currency
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                cart: self.currency,
                item: product.price.currency,
            });
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit {
                    requested: new_quantity,
                    limit: MAX_QUANTITY_PER_ITEM,
                });
            }
            existing.quantity = new_quantity;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit {
                requested: quantity,
                limit: MAX_QUANTITY_PER_ITEM,
            });
        }

        self.lines.push(CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
        });
        Ok(())
    }

    /// Set a line's quantity; zero or less removes it.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return if self.remove_item(product_id) {
                Ok(())
            } else {
                Err(CommerceError::ItemNotInCart(product_id.clone()))
            };
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit {
                requested: quantity,
                limit: MAX_QUANTITY_PER_ITEM,
            });
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| &l.product_id == product_id)
            .ok_or_else(|| CommerceError::ItemNotInCart(product_id.clone()))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        self.lines.len() < len_before
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total item count (sum of quantities), shown on the header badge.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Grand total of all lines.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let subtotals = self
            .lines
            .iter()
            .map(CartLine::subtotal)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(subtotals.iter(), self.currency).ok_or(CommerceError::Overflow)
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
}

impl CartLine {
    /// Unit price times quantity.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lure(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Lure {id}"), "rapala", "red", Money::new(cents, Currency::USD))
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        let p = lure("p1", 1000);
        cart.add_item(&p, 1).unwrap();
        cart.add_item(&p, 2).unwrap();

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new();
        cart.add_item(&lure("p1", 1000), 2).unwrap();
        cart.add_item(&lure("p2", 500), 3).unwrap();
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        cart.add_item(&lure("p1", 1000), 2).unwrap();
        cart.add_item(&lure("p2", 2000), 1).unwrap();
        assert_eq!(cart.total().unwrap().amount_cents, 4000);
    }

    #[test]
    fn test_update_quantity_to_zero_removes() {
        let mut cart = Cart::new();
        let p = lure("p1", 1000);
        cart.add_item(&p, 2).unwrap();
        cart.update_quantity(&p.id, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_missing_item() {
        let mut cart = Cart::new();
        let result = cart.update_quantity(&ProductId::new("ghost"), 3);
        assert_eq!(result, Err(CommerceError::ItemNotInCart(ProductId::new("ghost"))));
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::new();
        let result = cart.add_item(&lure("p1", 1000), MAX_QUANTITY_PER_ITEM + 1);
        assert!(matches!(result, Err(CommerceError::QuantityExceedsLimit { .. })));
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_item(&lure("p1", 1000), 0),
            Err(CommerceError::InvalidQuantity(0))
        );
    }

    #[test]
    fn test_currency_mismatch() {
        let mut cart = Cart::new();
        let p = Product::new("p1", "Euro lure", "mepps", "red", Money::new(700, Currency::EUR));
        assert!(matches!(
            cart.add_item(&p, 1),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
