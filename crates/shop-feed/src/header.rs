//! Header view model.

use shop_auth::{AuthProvider, GoogleUser};
use shop_commerce::cart::{Cart, LikedProducts};

use crate::controller::Criteria;
use crate::menu::{brand_menu, color_menu, sort_menu, MenuItem};

/// The only route the filter menus act on.
pub const PRODUCTS_ROUTE: &str = "/products";

/// Right-hand side of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountArea {
    /// Show the Google sign-in button.
    SignedOut,
    SignedIn {
        display_name: String,
        email: String,
        image_url: String,
    },
}

/// Everything the header renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Menus are shown but disabled off the products page.
    pub menus_enabled: bool,
    pub sort_menu: Vec<MenuItem>,
    pub brand_menu: Vec<MenuItem>,
    pub color_menu: Vec<MenuItem>,
    /// Liked count, hidden at zero.
    pub liked_badge: Option<usize>,
    /// Cart item count, hidden at zero.
    pub cart_badge: Option<i64>,
    pub account: AccountArea,
}

pub fn header_view(
    route: &str,
    criteria: &Criteria,
    cart: &Cart,
    liked: &LikedProducts,
    user: Option<&GoogleUser>,
) -> HeaderView {
    let account = match user {
        Some(user) => AccountArea::SignedIn {
            display_name: user.display_name().to_string(),
            email: user.email.clone(),
            image_url: user.image_url.clone(),
        },
        None => AccountArea::SignedOut,
    };

    let cart_count = cart.item_count();

    HeaderView {
        menus_enabled: route.trim_end_matches('/') == PRODUCTS_ROUTE,
        sort_menu: sort_menu(criteria),
        brand_menu: brand_menu(criteria),
        color_menu: color_menu(criteria),
        liked_badge: (!liked.is_empty()).then(|| liked.len()),
        cart_badge: (cart_count > 0).then_some(cart_count),
        account,
    }
}

/// [`header_view`] with the account area taken from the sign-in provider.
pub fn header_view_for<A: AuthProvider + ?Sized>(
    route: &str,
    criteria: &Criteria,
    cart: &Cart,
    liked: &LikedProducts,
    auth: &A,
) -> HeaderView {
    header_view(route, criteria, cart, liked, auth.current_user().as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_auth::InMemoryAuth;
    use shop_commerce::catalog::Product;
    use shop_commerce::ids::ProductId;
    use shop_commerce::money::{Currency, Money};

    fn lure() -> Product {
        Product::new("lure-007", "Heddon Zara Spook", "heddon", "white", Money::new(899, Currency::USD))
    }

    #[test]
    fn test_empty_session_has_no_badges() {
        let view = header_view("/products", &Criteria::default(), &Cart::new(), &LikedProducts::new(), None);
        assert!(view.menus_enabled);
        assert_eq!(view.liked_badge, None);
        assert_eq!(view.cart_badge, None);
        assert_eq!(view.account, AccountArea::SignedOut);
    }

    #[test]
    fn test_menus_disabled_off_products_route() {
        for route in ["/", "/cart", "/liked", "/login", "/products/lure-007"] {
            let view = header_view(route, &Criteria::default(), &Cart::new(), &LikedProducts::new(), None);
            assert!(!view.menus_enabled, "{route}");
        }
    }

    #[test]
    fn test_badges_count_items() {
        let mut cart = Cart::new();
        cart.add_item(&lure(), 3).unwrap();
        let mut liked = LikedProducts::new();
        liked.toggle(&ProductId::new("lure-007"));
        liked.toggle(&ProductId::new("lure-010"));

        let view = header_view("/products", &Criteria::default(), &cart, &liked, None);
        assert_eq!(view.cart_badge, Some(3));
        assert_eq!(view.liked_badge, Some(2));
    }

    #[test]
    fn test_signed_in_shows_account() {
        let user = GoogleUser::from_profile("g-1", "", "ada@example.com", "https://img/ada.png").unwrap();
        let view = header_view("/", &Criteria::default(), &Cart::new(), &LikedProducts::new(), Some(&user));

        assert_eq!(
            view.account,
            AccountArea::SignedIn {
                display_name: "ada@example.com".into(),
                email: "ada@example.com".into(),
                image_url: "https://img/ada.png".into(),
            }
        );
    }

    #[test]
    fn test_account_follows_auth_provider() {
        let user = GoogleUser::from_profile("g-2", "Grace", "grace@example.com", "").unwrap();
        let auth = InMemoryAuth::signed_in(user);
        let header = |auth: &InMemoryAuth| {
            header_view_for("/products", &Criteria::default(), &Cart::new(), &LikedProducts::new(), auth)
        };

        match header(&auth).account {
            AccountArea::SignedIn { display_name, email, .. } => {
                assert_eq!(display_name, "Grace");
                assert_eq!(email, "grace@example.com");
            }
            AccountArea::SignedOut => panic!("signed-in user not shown"),
        }

        auth.log_out().unwrap();
        assert_eq!(header(&auth).account, AccountArea::SignedOut);
    }
}
