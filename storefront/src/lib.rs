//! Lure shop storefront.
//!
//! Client-rendered Leptos app over the feed core:
//! - Infinite product feed with brand/color/sort menus
//! - Adverts interleaved into the feed
//! - Liked products and cart badges in the header
//! - Google account area

mod app;
mod feed;
mod state;

pub use app::App;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
