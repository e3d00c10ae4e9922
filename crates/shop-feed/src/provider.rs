//! The data provider seam.

use async_trait::async_trait;
use shop_commerce::catalog::Advertisement;
use shop_commerce::search::{FeedQuery, ProductPage};

use crate::error::ProviderError;

/// Paged product source and advert pool.
///
/// Futures are not `Send`: providers run on the browser event loop or a
/// current-thread runtime.
#[async_trait(?Send)]
pub trait DataProvider {
    /// Fetch the page of products `query` asks for.
    async fn fetch_products(&self, query: &FeedQuery) -> Result<ProductPage, ProviderError>;

    /// Fetch the advert pool, in rotation order.
    async fn fetch_advertisements(&self) -> Result<Vec<Advertisement>, ProviderError>;
}
