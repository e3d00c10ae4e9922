//! Errors raised by cart arithmetic.

use thiserror::Error;

use crate::ids::ProductId;
use crate::money::Currency;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    #[error("{0} is not in the cart")]
    ItemNotInCart(ProductId),

    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(i64),

    /// A single line may not exceed the per-item cap.
    #[error("at most {limit} of one lure per order, asked for {requested}")]
    QuantityExceedsLimit { requested: i64, limit: i64 },

    #[error("cart is priced in {cart}, item in {item}")]
    CurrencyMismatch { cart: Currency, item: Currency },

    #[error("price arithmetic overflowed")]
    Overflow,
}
