//! Product feed page and cards.

use leptos::ev;
use leptos::prelude::*;
use shop_commerce::catalog::{seed, Advertisement, FeedEntry, Product};

use crate::state::{scroll_position, ShopState};

/// Infinite-scrolling product feed.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let state = ShopState::expect();
    state.mount_feed();

    let handle = window_event_listener(ev::scroll, move |_| state.on_scroll(scroll_position()));
    on_cleanup(move || handle.remove());

    let feed = Memo::new(move |_| state.session.with(|s| s.view()));

    // A page that fits on screen never fires `scroll`; re-check the distance
    // to the end after every applied page.
    Effect::new(move |_| {
        if feed.with(|f| !f.loading && f.has_more) {
            state.on_scroll(scroll_position());
        }
    });
    let refreshing = move || state.session.with(|s| s.loader().is_refreshing());

    view! {
        <h2>"Lures"</h2>
        <Show when=move || !refreshing() fallback=|| view! { <ProductGridSkeleton/> }>
            {move || feed.with(|f| f.error.clone()).map(|error| view! {
                <p class="feed-error">{error}</p>
            })}
            <div class="products">
                <For
                    each=move || feed.with(|f| f.entries.clone()).into_iter().enumerate()
                    key=|(position, entry)| entry.render_key(*position)
                    children=move |(_, entry)| match entry {
                        FeedEntry::Product(product) => view! { <ProductCard product=product/> }.into_any(),
                        FeedEntry::Advert(advert) => view! { <AdvertCard advert=advert/> }.into_any(),
                    }
                />
            </div>
            <Show when=move || feed.with(|f| f.loading)>
                <p class="feed-loader">"Loading more lures..."</p>
            </Show>
            <Show when=move || feed.with(|f| !f.has_more && !f.entries.is_empty())>
                <p class="feed-end">"That's every lure we have."</p>
            </Show>
            <Show when=move || feed.with(|f| f.entries.is_empty() && f.error.is_none())>
                <p>"No lures match these filters."</p>
            </Show>
        </Show>
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let state = ShopState::expect();
    let id = product.id.clone();
    let liked = {
        let id = id.clone();
        move || state.liked.with(|l| l.contains(&id))
    };
    let price = product.price_display();
    let dimensions = product.dimensions_display();
    let brand = seed::display_brand(&product.brand).to_string();
    let color = product.color.clone();
    let name = product.name.clone();
    let alt = name.clone();
    let image = product.image_url.clone();
    let liked_class = liked.clone();

    view! {
        <div class="product-card">
            <img src=image alt=alt class="product-image"/>
            <div class="product-info">
                <h3>{name}</h3>
                <p class="brand">{brand} " / " {color}</p>
                <p class="price">{price}</p>
                <p class="dimensions">{dimensions}</p>
                <div class="card-actions">
                    <button
                        class="like"
                        class:active=liked_class
                        on:click=move |_| state.toggle_like(&id)
                    >
                        {move || if liked() { "Liked" } else { "Like" }}
                    </button>
                    <button class="btn" on:click=move |_| state.add_to_cart(&product)>
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AdvertCard(advert: Advertisement) -> impl IntoView {
    let alt = advert.title.clone();

    view! {
        <a class="advert-card" href=advert.target_url>
            <img src=advert.image_url alt=alt/>
            <span class="advert-label">"Sponsored"</span>
            <h3>{advert.title}</h3>
        </a>
    }
}

#[component]
pub fn ProductGridSkeleton() -> impl IntoView {
    view! {
        <div class="products">
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
        </div>
    }
}

#[component]
fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="skeleton" style="width: 100%; height: 200px;"></div>
            <div class="product-info">
                <div class="skeleton" style="width: 80%; height: 1.5rem; margin-bottom: 0.5rem;"></div>
                <div class="skeleton" style="width: 40%; height: 1.25rem;"></div>
            </div>
        </div>
    }
}
