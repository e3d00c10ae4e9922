//! Product catalogue module.
//!
//! Contains products, advertisements, the mixed feed entry type and the
//! seeded lure catalogue used by the in-memory backend.

mod advert;
mod entry;
mod product;
pub mod seed;

pub use advert::Advertisement;
pub use entry::FeedEntry;
pub use product::Product;
