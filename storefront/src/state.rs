//! Shared client state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shop_auth::{AuthProvider, GoogleUser, InMemoryAuth};
use shop_commerce::cart::{Cart, LikedProducts};
use shop_commerce::catalog::Product;
use shop_commerce::ids::ProductId;
use shop_feed::{
    DataProvider, FacetAction, FetchTicket, InMemoryProvider, ScrollPosition, ShopConfig,
    ShopSession, Viewport,
};
use shop_observability::{LogFormat, StructuredLogger};

const SHOP_TOML: &str = include_str!("../../shop.toml");

/// Parse the bundled `shop.toml`, falling back to defaults.
pub fn load_config() -> ShopConfig {
    ShopConfig::from_toml_str(SHOP_TOML).unwrap_or_else(|e| {
        log::warn!("invalid bundled config, using defaults: {e:#}");
        ShopConfig::default()
    })
}

/// The browser window as the feed's viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Read the window's scroll geometry.
pub fn scroll_position() -> ScrollPosition {
    let window = window();
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let content_height = document()
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);

    ScrollPosition::new(scroll_top, viewport_height, content_height)
}

/// App-wide state, provided as context.
#[derive(Clone, Copy)]
pub struct ShopState {
    pub session: RwSignal<ShopSession<WindowViewport>>,
    pub cart: RwSignal<Cart>,
    pub liked: RwSignal<LikedProducts>,
    pub user: RwSignal<Option<GoogleUser>>,
    pub config: StoredValue<ShopConfig>,
    provider: StoredValue<InMemoryProvider>,
    auth: StoredValue<InMemoryAuth>,
}

impl ShopState {
    pub fn provide(config: ShopConfig) -> Self {
        let logger = StructuredLogger::default().with_format(LogFormat::Human);
        let session = ShopSession::new(&config, WindowViewport).with_logger(logger);
        let auth = InMemoryAuth::new();

        let state = Self {
            session: RwSignal::new(session),
            cart: RwSignal::new(Cart::new()),
            liked: RwSignal::new(LikedProducts::new()),
            user: RwSignal::new(auth.current_user()),
            config: StoredValue::new(config),
            provider: StoredValue::new(InMemoryProvider::seeded()),
            auth: StoredValue::new(auth),
        };
        provide_context(state);
        state
    }

    pub fn expect() -> Self {
        expect_context::<ShopState>()
    }

    /// Start the feed from page 0 and refresh the advert pool.
    pub fn mount_feed(&self) {
        if let Some(ticket) = self.session.try_update(|s| s.mount()) {
            self.fetch(ticket);
        }
        self.load_adverts();
    }

    pub fn dispatch(&self, action: FacetAction) {
        if let Some(ticket) = self.session.try_update(|s| s.apply(&action)) {
            self.fetch(ticket);
        }
    }

    /// Request the next page if `position` is near the end. Subscribers are
    /// only notified when a page is actually requested.
    pub fn on_scroll(&self, position: ScrollPosition) {
        if !self.session.with_untracked(|s| s.wants_more(position)) {
            return;
        }
        if let Some(ticket) = self.session.try_update(|s| s.on_scroll(position)).flatten() {
            self.fetch(ticket);
        }
    }

    fn fetch(&self, ticket: FetchTicket) {
        let provider = self.provider.get_value();
        let session = self.session;
        spawn_local(async move {
            let result = provider.fetch_products(&ticket.query).await;
            session.update(|s| {
                // Failures are already logged and shown by the loader.
                let _ = s.complete(ticket, result);
            });
        });
    }

    fn load_adverts(&self) {
        if !self.session.with_untracked(|s| s.adverts_enabled()) {
            return;
        }

        let provider = self.provider.get_value();
        let session = self.session;
        spawn_local(async move {
            let result = provider.fetch_advertisements().await;
            session.update(|s| {
                s.apply_adverts(result);
            });
        });
    }

    pub fn add_to_cart(&self, product: &Product) {
        self.cart.update(|cart| {
            if let Err(e) = cart.add_item(product, 1) {
                log::warn!("cart: {e}");
            }
        });
    }

    pub fn set_quantity(&self, id: &ProductId, quantity: i64) {
        self.cart.update(|cart| {
            if let Err(e) = cart.update_quantity(id, quantity) {
                log::warn!("cart: {e}");
            }
        });
    }

    pub fn toggle_like(&self, id: &ProductId) {
        self.liked.update(|liked| {
            liked.toggle(id);
        });
    }

    pub fn liked_products(&self) -> Vec<Product> {
        let ids: Vec<ProductId> = self.liked.with(|liked| liked.iter().cloned().collect());
        self.provider.with_value(|provider| {
            ids.iter()
                .filter_map(|id| provider.product(id.as_str()).cloned())
                .collect()
        })
    }

    pub fn sign_in(&self, user: GoogleUser) {
        self.auth.with_value(|auth| auth.log_in(user));
        self.refresh_user();
    }

    pub fn sign_out(&self) {
        if let Err(e) = self.auth.with_value(|auth| auth.log_out()) {
            log::debug!("sign out: {e}");
        }
        self.refresh_user();
    }

    /// Mirror the sign-in provider into the `user` signal the header reads.
    pub fn refresh_user(&self) {
        let current = self.auth.with_value(|auth| auth.current_user());
        self.user.set(current);
    }
}
