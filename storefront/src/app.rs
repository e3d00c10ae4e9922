//! Application components and pages.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::path;
use shop_auth::GoogleUser;
use shop_feed::{header_view, AccountArea, MenuItem};

use crate::feed::{ProductCard, ProductsPage};
use crate::state::{load_config, ShopState};

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    ShopState::provide(load_config());

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/shop_storefront.css"/>
        <Meta name="description" content="Hard baits, spinners and crankbaits from the brands anglers trust"/>
        <Title text="Lure Shop"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/liked") view=LikedPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let state = ShopState::expect();
    state.refresh_user();
    let location = use_location();

    let header = Memo::new(move |_| {
        let route = location.pathname.get();
        let criteria = state.session.with(|s| s.criteria().clone());
        state.cart.with(|cart| {
            state.liked.with(|liked| {
                state
                    .user
                    .with(|user| header_view(&route, &criteria, cart, liked, user.as_ref()))
            })
        })
    });
    let enabled = Signal::derive(move || header.with(|h| h.menus_enabled));

    view! {
        <header>
            <h1><a href="/">"Lure Shop"</a></h1>
            <nav>
                <a href="/products">"Products"</a>
                <FacetMenu title="Sort" items=Signal::derive(move || header.with(|h| h.sort_menu.clone())) enabled=enabled/>
                <FacetMenu title="Brand" items=Signal::derive(move || header.with(|h| h.brand_menu.clone())) enabled=enabled/>
                <FacetMenu title="Color" items=Signal::derive(move || header.with(|h| h.color_menu.clone())) enabled=enabled/>
                <a href="/liked">
                    "Liked"
                    {move || header.with(|h| h.liked_badge).map(|n| view! { <span class="badge">{n}</span> })}
                </a>
                <a href="/cart">
                    "Cart"
                    {move || header.with(|h| h.cart_badge).map(|n| view! { <span class="badge">{n}</span> })}
                </a>
            </nav>
            {move || match header.with(|h| h.account.clone()) {
                AccountArea::SignedOut => view! {
                    <a href="/login" class="btn">"Sign in with Google"</a>
                }.into_any(),
                AccountArea::SignedIn { display_name, image_url, .. } => view! {
                    <span class="account">
                        <img src=image_url alt="" class="avatar"/>
                        {display_name}
                        <button on:click=move |_| state.sign_out()>"Sign out"</button>
                    </span>
                }.into_any(),
            }}
        </header>
    }
}

/// One of the header drop-downs. Rows are inert off the products page.
#[component]
fn FacetMenu(title: &'static str, items: Signal<Vec<MenuItem>>, enabled: Signal<bool>) -> impl IntoView {
    let state = ShopState::expect();

    view! {
        <div class="menu" class:disabled=move || !enabled.get()>
            <span class="menu-title">{title}</span>
            <ul>
                {move || items.get().into_iter().map(|item| {
                    let action = item.action.clone();
                    view! {
                        <li>
                            <button
                                class:active=item.active
                                disabled=move || !enabled.get()
                                on:click=move |_| state.dispatch(action.clone())
                            >
                                {item.label}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Lure Shop - tight lines"</p>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Home page with hero section
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <h2>"Welcome to the Lure Shop"</h2>
            <p>"Crankbaits, spoons and spinners from Rapala, Heddon, Cotton Cordell, Rebel and Mepps"</p>
            <a href="/products" class="btn" style="margin-top: 1rem; display: inline-block;">
                "Browse Lures"
            </a>
        </div>
    }
}

#[component]
fn LikedPage() -> impl IntoView {
    let state = ShopState::expect();
    let products = Memo::new(move |_| state.liked_products());

    view! {
        <h2>"Liked Lures"</h2>
        <Show
            when=move || products.with(|p| !p.is_empty())
            fallback=|| view! {
                <p>"Nothing liked yet."</p>
                <a href="/products">"Browse lures"</a>
            }
        >
            <div class="products">
                {move || products.get().into_iter().map(|product| view! {
                    <ProductCard product=product/>
                }).collect_view()}
            </div>
        </Show>
    }
}

/// Shopping cart page
#[component]
fn CartPage() -> impl IntoView {
    let state = ShopState::expect();
    let total = move || {
        state
            .cart
            .with(|cart| cart.total().map(|m| m.display()).unwrap_or_else(|e| e.to_string()))
    };

    view! {
        <h2>"Shopping Cart"</h2>
        <Show
            when=move || state.cart.with(|cart| !cart.is_empty())
            fallback=|| view! {
                <p>"Your cart is empty."</p>
                <a href="/products">"Continue shopping"</a>
            }
        >
            <div style="max-width: 600px;">
                <p style="margin-bottom: 1rem;">
                    {move || state.cart.with(|cart| cart.item_count())} " item(s) in your cart"
                </p>
                {move || state.cart.with(|cart| cart.lines.clone()).into_iter().map(|line| {
                    let subtotal = line.subtotal().map(|m| m.display()).unwrap_or_default();
                    let unit = line.unit_price.display();
                    let quantity = line.quantity;
                    let inc = line.product_id.clone();
                    let dec = line.product_id.clone();
                    view! {
                        <div style="display: flex; justify-content: space-between; padding: 1rem; border-bottom: 1px solid #eee;">
                            <div>
                                <strong>{line.name}</strong>
                                <p style="color: #666;">{unit} " x " {quantity}</p>
                            </div>
                            <div style="text-align: right;">
                                <button on:click=move |_| state.set_quantity(&dec, quantity - 1)>"-"</button>
                                <button on:click=move |_| state.set_quantity(&inc, quantity + 1)>"+"</button>
                                <strong>{subtotal}</strong>
                            </div>
                        </div>
                    }
                }).collect_view()}
                <div style="display: flex; justify-content: space-between; padding: 1rem; font-size: 1.25rem;">
                    <strong>"Total"</strong>
                    <strong>{total}</strong>
                </div>
                <div style="margin-top: 1rem; display: flex; gap: 1rem;">
                    <a href="/products" style="color: #666;">"Continue Shopping"</a>
                    <button
                        style="background: #dc3545; color: white; border: none; padding: 0.5rem 1rem; border-radius: 4px; cursor: pointer;"
                        on:click=move |_| state.cart.update(|cart| cart.clear())
                    >
                        "Clear Cart"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Sign-in page. Stands in for the Google widget: it collects the profile
/// fields the widget would hand back.
#[component]
fn LoginPage() -> impl IntoView {
    let state = ShopState::expect();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let client_id = state
        .config
        .with_value(|c| c.auth.google_client_id.clone())
        .unwrap_or_else(|| "not configured".to_string());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        match GoogleUser::from_profile(format!("google-{email_value}"), name.get_untracked(), email_value, "") {
            Ok(user) => {
                state.sign_in(user);
                navigate("/products", Default::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <h2>"Sign in with Google"</h2>
        <p style="font-size: 0.8rem; color: #888;">"Client id: " {client_id}</p>
        <form on:submit=on_submit class="login-form">
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <button type="submit" class="btn">"Continue"</button>
        </form>
        {move || error.get().map(|e| view! { <p style="color: red;">{e}</p> })}
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
