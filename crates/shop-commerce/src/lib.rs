//! Storefront domain types for the lure shop.
//!
//! This crate provides the value types shared by the feed core, the
//! browser app and the CLI:
//!
//! - **Catalog**: Products, advertisements, feed entries, the seeded lure catalogue
//! - **Cart**: Cart lines and the liked-products list behind the header badges
//! - **Search**: Feed queries, facet filters, sort specs, product pages
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_commerce::prelude::*;
//!
//! let query = FeedQuery::new(12)
//!     .with_brand(Some("rapala"))
//!     .with_sort(SortSpec::new(SortKey::Price, SortDirection::Asc));
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product, 2)?;
//! println!("{} items, {}", cart.item_count(), cart.total()?.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Advertisement, FeedEntry, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, LikedProducts};

    // Search
    pub use crate::search::{
        FeedFilter, FeedQuery, Filter, PageRequest, ProductPage, SortDirection, SortKey, SortSpec,
    };
}
