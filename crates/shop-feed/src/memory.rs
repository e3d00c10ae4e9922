//! In-memory fake backend.

use std::sync::Arc;

use async_trait::async_trait;
use shop_commerce::catalog::{seed, Advertisement, Product};
use shop_commerce::search::{FeedQuery, ProductPage};

use crate::error::ProviderError;
use crate::provider::DataProvider;

/// Serves a fixed catalogue: filter, stable sort, then slice the page.
///
/// Cloning is cheap and shares the catalogue.
#[derive(Debug, Clone)]
pub struct InMemoryProvider {
    products: Arc<Vec<Product>>,
    adverts: Arc<Vec<Advertisement>>,
}

impl InMemoryProvider {
    pub fn new(products: Vec<Product>, adverts: Vec<Advertisement>) -> Self {
        Self {
            products: Arc::new(products),
            adverts: Arc::new(adverts),
        }
    }

    /// The seeded lure catalogue and advert pool.
    pub fn seeded() -> Self {
        Self::new(
            seed::lure_catalogue(seed::DEFAULT_CATALOGUE_SIZE),
            seed::advert_pool(),
        )
    }

    /// Synchronous page lookup behind `fetch_products`.
    pub fn page(&self, query: &FeedQuery) -> ProductPage {
        let mut matching: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| query.filter.matches(p))
            .collect();
        // sort_by is stable: unsorted keys keep catalogue order.
        matching.sort_by(|a, b| query.sort.compare(a, b));

        let items = matching
            .into_iter()
            .skip(query.page.offset())
            .take(query.page.size as usize)
            .cloned()
            .collect();

        ProductPage::new(query.page.index, query.page.size, items)
    }

    /// Look up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait(?Send)]
impl DataProvider for InMemoryProvider {
    async fn fetch_products(&self, query: &FeedQuery) -> Result<ProductPage, ProviderError> {
        Ok(self.page(query))
    }

    async fn fetch_advertisements(&self) -> Result<Vec<Advertisement>, ProviderError> {
        Ok(self.adverts.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::search::{SortDirection, SortKey, SortSpec};

    #[test]
    fn test_pages_partition_the_catalogue() {
        let provider = InMemoryProvider::seeded();
        let query = FeedQuery::new(50);

        let first = provider.page(&query);
        let second = provider.page(&query.next_page());
        let third = provider.page(&query.next_page().next_page());

        assert!(first.is_full());
        assert!(second.is_full());
        assert_eq!(third.len(), provider.len() - 100);
        assert!(!third.is_full());
    }

    #[test]
    fn test_filter_applies_both_facets() {
        let provider = InMemoryProvider::seeded();
        let query = FeedQuery::new(100)
            .with_brand(Some("rapala"))
            .with_color(Some("blue"));

        let page = provider.page(&query);
        assert!(!page.is_empty());
        assert!(page.items.iter().all(|p| p.brand == "rapala" && p.color == "blue"));
    }

    #[test]
    fn test_sort_by_weight_desc() {
        let provider = InMemoryProvider::seeded();
        let query = FeedQuery::new(20).with_sort(SortSpec::new(SortKey::Weight, SortDirection::Desc));

        let page = provider.page(&query);
        assert!(page.items.windows(2).all(|w| w[0].weight_grams >= w[1].weight_grams));
    }

    #[test]
    fn test_unknown_brand_yields_empty_page() {
        let provider = InMemoryProvider::seeded();
        let page = provider.page(&FeedQuery::new(10).with_brand(Some("acme")));
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_adverts_come_back_in_pool_order() {
        let provider = InMemoryProvider::seeded();
        let adverts = provider.fetch_advertisements().await.unwrap();
        assert_eq!(adverts, seed::advert_pool());
    }
}
