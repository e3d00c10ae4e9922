//! Product feed core for the lure shop.
//!
//! This crate provides:
//! - `DataProvider` - The paged product/advert backend seam, plus `InMemoryProvider`
//! - `FeedLoader` - Pagination state with generation-checked fetch tickets
//! - `interleave` - Pure advert interleaving over the product sequence
//! - `FeedController` - Filter/sort criteria and the queries they produce
//! - `ShopSession` - Controller, loader and viewport wired together
//! - `HeaderView` / menus - Derived state for the navigation header
//! - `ShopConfig` - TOML/JSON configuration

mod config;
mod controller;
mod error;
mod header;
mod interleave;
mod loader;
mod memory;
mod menu;
mod provider;
mod scroll;
mod session;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use header::*;
pub use interleave::*;
pub use loader::*;
pub use memory::*;
pub use menu::*;
pub use provider::*;
pub use scroll::*;
pub use session::*;
