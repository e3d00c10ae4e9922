//! Paged feed loader.
//!
//! Every initial load starts a new generation. A fetch is described by a
//! `FetchTicket` stamped with the generation it belongs to; when the
//! result comes back, `complete` applies it only if the ticket is still
//! current. Results for superseded queries are dropped, so a slow response
//! can never overwrite a newer one.
//!
//! ```rust,ignore
//! let ticket = loader.begin_initial(query);
//! let result = provider.fetch_products(&ticket.query).await;
//! loader.complete(ticket, result)?;
//! ```

use serde::Serialize;
use shop_commerce::catalog::{Advertisement, FeedEntry, Product};
use shop_commerce::search::{FeedQuery, ProductPage};
use shop_observability::StructuredLogger;

use crate::config::AdvertConfig;
use crate::error::{FeedError, ProviderError};
use crate::interleave::interleave_with_chunk;
use crate::provider::DataProvider;

/// Load generation. Bumped by every initial load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Which kind of load a ticket is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadKind {
    /// Page 0; replaces the product list.
    Initial,
    /// The next page; appends.
    More,
}

/// An outstanding fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: Generation,
    pub kind: LoadKind,
    pub query: FeedQuery,
}

/// Pagination bookkeeping for the current generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PaginationState {
    /// Index of the last page applied.
    pub page_index: u32,
    /// Pages applied so far.
    pub pages_loaded: u32,
    /// Whether the last page came back full.
    pub has_more: bool,
}

/// What an applied result did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadOutcome {
    pub kind: LoadKind,
    pub page_index: u32,
    pub received: usize,
    pub total_products: usize,
    pub has_more: bool,
}

/// Render surface of the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedView {
    pub entries: Vec<FeedEntry>,
    pub loading: bool,
    pub has_more: bool,
    pub error: Option<String>,
}

/// Holds the product list, the advert pool and the derived display
/// sequence for the current query.
#[derive(Debug, Clone)]
pub struct FeedLoader {
    query: FeedQuery,
    generation: Generation,
    pagination: PaginationState,
    in_flight: Option<LoadKind>,
    initial_loaded: bool,
    products: Vec<Product>,
    adverts: Vec<Advertisement>,
    advert_config: AdvertConfig,
    display: Vec<FeedEntry>,
    error: Option<FeedError>,
    logger: StructuredLogger,
}

impl FeedLoader {
    pub fn new(page_size: u32, advert_config: AdvertConfig) -> Self {
        Self {
            query: FeedQuery::new(page_size),
            generation: Generation::default(),
            pagination: PaginationState::default(),
            in_flight: None,
            initial_loaded: false,
            products: Vec::new(),
            adverts: Vec::new(),
            advert_config,
            display: Vec::new(),
            error: None,
            logger: StructuredLogger::default().with_component("feed"),
        }
    }

    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger.with_component("feed");
        self
    }

    /// Start a new generation for `query`, at page 0.
    ///
    /// Any fetch still outstanding becomes stale.
    pub fn begin_initial(&mut self, query: FeedQuery) -> FetchTicket {
        self.generation = self.generation.next();
        self.query = query.at_page(0);
        self.pagination = PaginationState::default();
        self.in_flight = Some(LoadKind::Initial);
        self.initial_loaded = false;
        self.error = None;

        self.logger
            .debug("initial load started")
            .field("generation", self.generation.value())
            .field("brand", self.query.filter.brand_str())
            .field("color", self.query.filter.color_str())
            .field("sort", self.query.sort.to_string())
            .emit();

        self.ticket(LoadKind::Initial, self.query.clone())
    }

    /// Ticket for the next page, or `None` when a load is in flight, the
    /// first page has not landed yet, or the feed is exhausted.
    pub fn begin_more(&mut self) -> Option<FetchTicket> {
        if !self.initial_loaded || self.in_flight.is_some() || !self.pagination.has_more {
            self.logger
                .debug("load more ignored")
                .field("initial_loaded", self.initial_loaded)
                .field("in_flight", self.in_flight.is_some())
                .field("has_more", self.pagination.has_more)
                .emit();
            return None;
        }

        let query = self.query.clone().at_page(self.pagination.page_index + 1);
        self.in_flight = Some(LoadKind::More);

        self.logger
            .debug("load more started")
            .field("page", query.page.index)
            .emit();

        Some(self.ticket(LoadKind::More, query))
    }

    /// Apply a fetch result.
    ///
    /// Returns `StaleResult` without touching any state when the ticket is
    /// not the one this loader is waiting for.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<ProductPage, ProviderError>,
    ) -> Result<LoadOutcome, FeedError> {
        if ticket.generation != self.generation || self.in_flight != Some(ticket.kind) {
            self.logger
                .debug("discarding stale result")
                .field("ticket", ticket.generation.value())
                .field("current", self.generation.value())
                .emit();
            return Err(FeedError::StaleResult {
                ticket: ticket.generation.value(),
                current: self.generation.value(),
            });
        }

        self.in_flight = None;

        let page = match result {
            Ok(page) => page,
            Err(e) => return Err(self.fail(ticket.kind, e)),
        };

        let received = page.len();
        let has_more = page.is_full();

        match ticket.kind {
            LoadKind::Initial => {
                self.products = page.items;
                self.pagination = PaginationState {
                    page_index: 0,
                    pages_loaded: 1,
                    has_more,
                };
                self.initial_loaded = true;
            }
            LoadKind::More => {
                self.products.extend(page.items);
                self.pagination.page_index = ticket.query.page.index;
                self.pagination.pages_loaded += 1;
                self.pagination.has_more = has_more;
            }
        }

        self.error = None;
        self.refresh_display();

        let outcome = LoadOutcome {
            kind: ticket.kind,
            page_index: self.pagination.page_index,
            received,
            total_products: self.products.len(),
            has_more,
        };

        self.logger
            .info("page applied")
            .field("page", outcome.page_index)
            .field("received", received)
            .field("total", outcome.total_products)
            .field("has_more", has_more)
            .emit();

        Ok(outcome)
    }

    fn fail(&mut self, kind: LoadKind, cause: ProviderError) -> FeedError {
        let error = FeedError::FetchFailure(cause);

        if kind == LoadKind::Initial {
            self.products.clear();
            self.pagination = PaginationState::default();
        }

        self.logger
            .warn("fetch failed")
            .field("error", error.to_string())
            .field("initial", kind == LoadKind::Initial)
            .emit();

        self.error = Some(error.clone());
        self.refresh_display();
        error
    }

    /// Replace the advert pool and recompute the display sequence.
    pub fn set_adverts(&mut self, adverts: Vec<Advertisement>) {
        self.adverts = adverts;
        self.refresh_display();
    }

    /// Whether the advert pool should be fetched at all.
    pub fn adverts_enabled(&self) -> bool {
        self.advert_config.enabled
    }

    /// Apply a finished advert fetch. Failures leave the pool empty and are
    /// only logged; the feed still renders. Returns the pool size.
    pub fn apply_adverts(&mut self, result: Result<Vec<Advertisement>, ProviderError>) -> usize {
        let adverts = result.unwrap_or_else(|e| {
            self.logger
                .warn("advert fetch failed")
                .field("error", e.to_string())
                .emit();
            Vec::new()
        });
        let count = adverts.len();
        self.set_adverts(adverts);
        count
    }

    /// Fetch and apply the advert pool, unless adverts are disabled.
    pub async fn load_adverts<P: DataProvider + ?Sized>(&mut self, provider: &P) -> usize {
        if !self.adverts_enabled() {
            return 0;
        }
        let result = provider.fetch_advertisements().await;
        self.apply_adverts(result)
    }

    /// Fetch and apply page 0 of `query`.
    pub async fn load_initial<P: DataProvider + ?Sized>(
        &mut self,
        provider: &P,
        query: FeedQuery,
    ) -> Result<LoadOutcome, FeedError> {
        let ticket = self.begin_initial(query);
        let result = provider.fetch_products(&ticket.query).await;
        self.complete(ticket, result)
    }

    /// Fetch and apply the next page. `Ok(None)` when there is nothing to do.
    pub async fn load_more<P: DataProvider + ?Sized>(
        &mut self,
        provider: &P,
    ) -> Result<Option<LoadOutcome>, FeedError> {
        let Some(ticket) = self.begin_more() else {
            return Ok(None);
        };
        let result = provider.fetch_products(&ticket.query).await;
        self.complete(ticket, result).map(Some)
    }

    // The whole sequence is rebuilt from cursor 0 so advert positions do
    // not shift as pages append.
    fn refresh_display(&mut self) {
        self.display = if self.advert_config.enabled {
            interleave_with_chunk(self.advert_config.chunk_size, &self.products, &self.adverts, 0).entries
        } else {
            self.products.iter().cloned().map(FeedEntry::Product).collect()
        };
    }

    fn ticket(&self, kind: LoadKind, query: FeedQuery) -> FetchTicket {
        FetchTicket {
            generation: self.generation,
            kind,
            query,
        }
    }

    pub fn view(&self) -> FeedView {
        FeedView {
            entries: self.display.clone(),
            loading: self.is_loading(),
            has_more: self.pagination.has_more,
            error: self.error.as_ref().map(|e| e.to_string()),
        }
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.display
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn adverts(&self) -> &[Advertisement] {
        &self.adverts
    }

    pub fn query(&self) -> &FeedQuery {
        &self.query
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn error(&self) -> Option<&FeedError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// An initial load is outstanding.
    pub fn is_refreshing(&self) -> bool {
        self.in_flight == Some(LoadKind::Initial)
    }

    pub fn has_more(&self) -> bool {
        self.pagination.has_more
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::money::{Currency, Money};

    fn lures(range: std::ops::Range<usize>) -> Vec<Product> {
        range
            .map(|i| Product::new(format!("p{i}"), format!("Lure {i}"), "rebel", "green", Money::new(700, Currency::USD)))
            .collect()
    }

    fn page(index: u32, size: u32, items: Vec<Product>) -> Result<ProductPage, ProviderError> {
        Ok(ProductPage::new(index, size, items))
    }

    fn loader() -> FeedLoader {
        FeedLoader::new(4, AdvertConfig::default())
    }

    #[test]
    fn test_more_is_refused_before_first_page() {
        let mut loader = loader();
        assert!(loader.begin_more().is_none());

        let _ticket = loader.begin_initial(FeedQuery::new(4));
        assert!(loader.begin_more().is_none());
    }

    #[test]
    fn test_initial_then_more_appends() {
        let mut loader = loader();
        let ticket = loader.begin_initial(FeedQuery::new(4));
        let outcome = loader.complete(ticket, page(0, 4, lures(0..4))).unwrap();
        assert!(outcome.has_more);
        assert_eq!(outcome.kind, LoadKind::Initial);

        let ticket = loader.begin_more().unwrap();
        assert_eq!(ticket.query.page.index, 1);
        assert!(loader.begin_more().is_none(), "second load while one is in flight");

        let outcome = loader.complete(ticket, page(1, 4, lures(4..6))).unwrap();
        assert_eq!(outcome.total_products, 6);
        assert!(!outcome.has_more);
        assert_eq!(loader.pagination().pages_loaded, 2);
        assert!(loader.begin_more().is_none(), "exhausted");
    }

    #[test]
    fn test_stale_initial_is_discarded() {
        let mut loader = loader();
        let old = loader.begin_initial(FeedQuery::new(4).with_brand(Some("rebel")));
        let new = loader.begin_initial(FeedQuery::new(4).with_brand(Some("mepps")));

        let err = loader.complete(old, page(0, 4, lures(0..4))).unwrap_err();
        assert!(err.is_stale());
        assert!(loader.products().is_empty());
        assert!(loader.is_loading());

        loader.complete(new, page(0, 4, lures(10..12))).unwrap();
        assert_eq!(loader.products().len(), 2);
    }

    #[test]
    fn test_more_from_previous_generation_is_discarded() {
        let mut loader = loader();
        let ticket = loader.begin_initial(FeedQuery::new(4));
        loader.complete(ticket, page(0, 4, lures(0..4))).unwrap();
        let more = loader.begin_more().unwrap();

        let fresh = loader.begin_initial(FeedQuery::new(4).with_color(Some("red")));
        assert!(loader.complete(more, page(1, 4, lures(4..8))).unwrap_err().is_stale());

        loader.complete(fresh, page(0, 4, lures(20..21))).unwrap();
        assert_eq!(loader.products().len(), 1);
        assert_eq!(loader.products()[0].id.as_str(), "p20");
    }

    #[test]
    fn test_duplicate_completion_is_stale() {
        let mut loader = loader();
        let ticket = loader.begin_initial(FeedQuery::new(4));
        loader.complete(ticket.clone(), page(0, 4, lures(0..4))).unwrap();
        assert!(loader.complete(ticket, page(0, 4, lures(0..4))).unwrap_err().is_stale());
        assert_eq!(loader.products().len(), 4);
    }

    #[test]
    fn test_initial_failure_clears_feed() {
        let mut loader = loader();
        let ticket = loader.begin_initial(FeedQuery::new(4));
        loader.complete(ticket, page(0, 4, lures(0..4))).unwrap();

        let ticket = loader.begin_initial(FeedQuery::new(4).with_brand(Some("heddon")));
        let err = loader
            .complete(ticket, Err(ProviderError::Unavailable("timeout".into())))
            .unwrap_err();

        assert!(matches!(err, FeedError::FetchFailure(_)));
        let view = loader.view();
        assert!(view.entries.is_empty());
        assert!(!view.has_more);
        assert!(!view.loading);
        assert_eq!(view.error.as_deref(), Some("could not load products: provider unavailable: timeout"));
    }

    #[test]
    fn test_more_failure_keeps_products() {
        let mut loader = loader();
        let ticket = loader.begin_initial(FeedQuery::new(4));
        loader.complete(ticket, page(0, 4, lures(0..4))).unwrap();

        let ticket = loader.begin_more().unwrap();
        loader
            .complete(ticket, Err(ProviderError::Unavailable("reset".into())))
            .unwrap_err();

        assert_eq!(loader.products().len(), 4);
        assert!(loader.error().is_some());
        // Not retried automatically, but the next scroll may ask again.
        assert_eq!(loader.begin_more().unwrap().query.page.index, 1);
    }

    #[test]
    fn test_adverts_interleave_into_view() {
        let mut loader = FeedLoader::new(12, AdvertConfig::default());
        loader.set_adverts(vec![Advertisement::new("a1", "One"), Advertisement::new("a2", "Two")]);
        let ticket = loader.begin_initial(FeedQuery::new(12));
        loader.complete(ticket, page(0, 12, lures(0..12))).unwrap();

        let view = loader.view();
        assert_eq!(view.entries.len(), 14);
        assert!(view.entries[5].is_advert());
        assert!(view.entries[11].is_advert());
    }

    #[test]
    fn test_failed_advert_fetch_empties_pool_without_error() {
        let mut loader = FeedLoader::new(12, AdvertConfig::default());
        assert_eq!(loader.apply_adverts(Ok(vec![Advertisement::new("a1", "One")])), 1);

        let count = loader.apply_adverts(Err(ProviderError::Unavailable("cdn down".into())));
        assert_eq!(count, 0);
        assert!(loader.adverts().is_empty());
        assert!(loader.error().is_none());
    }

    #[test]
    fn test_disabled_adverts_are_not_shown() {
        let mut loader = FeedLoader::new(
            12,
            AdvertConfig {
                enabled: false,
                ..AdvertConfig::default()
            },
        );
        loader.set_adverts(vec![Advertisement::new("a1", "One")]);
        let ticket = loader.begin_initial(FeedQuery::new(12));
        loader.complete(ticket, page(0, 12, lures(0..12))).unwrap();

        assert!(loader.entries().iter().all(|e| !e.is_advert()));
    }
}
