//! A shopper's feed session: controller, loader and viewport together.

use shop_commerce::catalog::Advertisement;
use shop_commerce::search::{ProductPage, SortDirection, SortKey, SortSpec};
use shop_observability::StructuredLogger;

use crate::config::ShopConfig;
use crate::controller::{Criteria, FacetAction, FeedController};
use crate::error::{FeedError, ProviderError};
use crate::loader::{FeedLoader, FeedView, FetchTicket, LoadOutcome};
use crate::provider::DataProvider;
use crate::scroll::{ScrollPosition, ScrollTrigger};

/// The scrollable surface the feed renders into.
pub trait Viewport {
    fn scroll_to_top(&self);
}

/// Viewport for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoViewport;

impl Viewport for NoViewport {
    fn scroll_to_top(&self) {}
}

/// Routes menu changes and scroll events into the loader.
///
/// Every criteria change restarts the feed at page 0 and scrolls to the
/// top; near-bottom scrolls ask for the next page.
#[derive(Debug, Clone)]
pub struct ShopSession<V: Viewport = NoViewport> {
    controller: FeedController,
    loader: FeedLoader,
    scroll: ScrollTrigger,
    viewport: V,
}

impl<V: Viewport> ShopSession<V> {
    pub fn new(config: &ShopConfig, viewport: V) -> Self {
        Self {
            controller: FeedController::new(config.feed.page_size),
            loader: FeedLoader::new(config.feed.page_size, config.adverts.clone()),
            scroll: ScrollTrigger::new(config.feed.scroll_threshold_px),
            viewport,
        }
    }

    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.loader = self.loader.with_logger(logger);
        self
    }

    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.controller = self.controller.with_criteria(criteria);
        self
    }

    /// Initial load for the current criteria.
    pub fn mount(&mut self) -> FetchTicket {
        let query = self.controller.query();
        self.loader.begin_initial(query)
    }

    pub fn apply(&mut self, action: &FacetAction) -> FetchTicket {
        let query = self.controller.apply(action);
        let ticket = self.loader.begin_initial(query);
        self.viewport.scroll_to_top();
        ticket
    }

    pub fn set_brand_filter(&mut self, brand: Option<&str>) -> FetchTicket {
        self.apply(&FacetAction::Brand(brand.map(str::to_string)))
    }

    pub fn set_color_filter(&mut self, color: Option<&str>) -> FetchTicket {
        self.apply(&FacetAction::Color(color.map(str::to_string)))
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) -> FetchTicket {
        self.apply(&FacetAction::Sort(SortSpec::new(key, direction)))
    }

    /// Whether `position` is close enough to the end to ask for the next
    /// page. Read-only, so callers can check before taking a mutable borrow.
    pub fn wants_more(&self, position: ScrollPosition) -> bool {
        self.scroll
            .should_load_more(position, self.loader.is_loading(), self.loader.has_more())
    }

    /// Ticket for the next page if this scroll position warrants one.
    ///
    /// Also called after each applied page without any scrolling, so a first
    /// page that fits on screen still pulls in the next one.
    pub fn on_scroll(&mut self, position: ScrollPosition) -> Option<FetchTicket> {
        if !self.wants_more(position) {
            return None;
        }
        self.request_more()
    }

    /// Ticket for the next page regardless of scroll position.
    pub fn request_more(&mut self) -> Option<FetchTicket> {
        self.loader.begin_more()
    }

    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<ProductPage, ProviderError>,
    ) -> Result<LoadOutcome, FeedError> {
        self.loader.complete(ticket, result)
    }

    /// Fetch `ticket`'s page from `provider` and apply it.
    pub async fn run<P: DataProvider + ?Sized>(
        &mut self,
        provider: &P,
        ticket: FetchTicket,
    ) -> Result<LoadOutcome, FeedError> {
        let result = provider.fetch_products(&ticket.query).await;
        self.complete(ticket, result)
    }

    pub async fn load_adverts<P: DataProvider + ?Sized>(&mut self, provider: &P) -> usize {
        self.loader.load_adverts(provider).await
    }

    pub fn adverts_enabled(&self) -> bool {
        self.loader.adverts_enabled()
    }

    pub fn apply_adverts(&mut self, result: Result<Vec<Advertisement>, ProviderError>) -> usize {
        self.loader.apply_adverts(result)
    }

    pub fn view(&self) -> FeedView {
        self.loader.view()
    }

    pub fn criteria(&self) -> &Criteria {
        self.controller.criteria()
    }

    pub fn loader(&self) -> &FeedLoader {
        &self.loader
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingViewport {
        resets: Cell<u32>,
    }

    impl Viewport for CountingViewport {
        fn scroll_to_top(&self) {
            self.resets.set(self.resets.get() + 1);
        }
    }

    #[test]
    fn test_criteria_change_scrolls_to_top() {
        let mut session = ShopSession::new(&ShopConfig::default(), CountingViewport::default());
        let _ = session.mount();
        assert_eq!(session.viewport().resets.get(), 0);

        let ticket = session.set_brand_filter(Some("rapala"));
        assert_eq!(ticket.query.page.index, 0);
        session.set_sort(SortKey::Size, SortDirection::Asc);
        assert_eq!(session.viewport().resets.get(), 2);
    }

    #[test]
    fn test_scroll_before_first_page_does_nothing() {
        let mut session = ShopSession::new(&ShopConfig::default(), NoViewport);
        let _ = session.mount();
        assert!(session.on_scroll(ScrollPosition::new(0.0, 800.0, 800.0)).is_none());
    }

    fn full_page(index: u32, size: u32) -> Result<ProductPage, ProviderError> {
        use shop_commerce::catalog::Product;
        use shop_commerce::money::{Currency, Money};

        let items = (0..size)
            .map(|i| {
                let id = format!("p{}", index * size + i);
                Product::new(id.clone(), id, "mepps", "red", Money::new(450, Currency::USD))
            })
            .collect();
        Ok(ProductPage::new(index, size, items))
    }

    #[test]
    fn test_page_that_fits_on_screen_pulls_the_next_one() {
        let mut session = ShopSession::new(&ShopConfig::default(), NoViewport);
        let ticket = session.mount();
        session.complete(ticket, full_page(0, 12)).unwrap();

        // No scrollbar: content shorter than the viewport, scrolled to the top.
        let unscrolled = ScrollPosition::new(0.0, 1400.0, 900.0);
        assert!(session.wants_more(unscrolled));
        let ticket = session.on_scroll(unscrolled).unwrap();
        assert_eq!(ticket.query.page.index, 1);

        // While that page is in flight the same check is a no-op.
        assert!(!session.wants_more(unscrolled));
        assert!(session.on_scroll(unscrolled).is_none());
    }

    #[test]
    fn test_far_from_end_does_not_want_more() {
        let mut session = ShopSession::new(&ShopConfig::default(), NoViewport);
        let ticket = session.mount();
        session.complete(ticket, full_page(0, 12)).unwrap();

        assert!(!session.wants_more(ScrollPosition::new(0.0, 800.0, 4000.0)));
    }
}
