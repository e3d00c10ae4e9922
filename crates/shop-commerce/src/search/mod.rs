//! Feed search module.
//!
//! Contains the feed query, facet filters, sort specs and product pages.

mod filter;
mod page;
mod query;

pub use filter::{FeedFilter, Filter, NO_CONSTRAINT};
pub use page::ProductPage;
pub use query::{FeedQuery, PageRequest, SortDirection, SortKey, SortSpec};
