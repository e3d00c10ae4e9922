//! Cart and liked-products module.
//!
//! Both back the counters in the navigation header.

mod cart;
mod liked;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};
pub use liked::LikedProducts;
