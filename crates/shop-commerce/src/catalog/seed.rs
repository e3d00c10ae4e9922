//! Seeded lure catalogue and advert pool for the in-memory backend.
//!
//! Generation is deterministic: the same count always yields the same
//! products, so demos and tests see a stable feed.

use crate::catalog::{Advertisement, Product};
use crate::money::{Currency, Money};

/// Brand facet values carried by seeded products.
pub const BRANDS: [&str; 5] = ["rapala", "heddon", "cottoncordel", "rebel", "mepps"];

/// Color facet values carried by seeded products.
pub const COLORS: [&str; 7] = ["red", "blue", "green", "yellow", "brown", "black", "white"];

const MODELS: [&str; 8] = [
    "Floater",
    "Shad Rap",
    "Spook",
    "Big O",
    "Crawfish",
    "Aglia Spinner",
    "Popper",
    "Jerkbait",
];

/// Default number of products in the demo catalogue.
pub const DEFAULT_CATALOGUE_SIZE: usize = 120;

/// Generate `count` lures spread across all brands and colors.
pub fn lure_catalogue(count: usize) -> Vec<Product> {
    let mut state: u32 = 0x5eed;
    (0..count)
        .map(|i| {
            state = next(state);
            let brand = BRANDS[i % BRANDS.len()];
            // Offset by i / BRANDS so brand/color pairs do not lock-step.
            let color = COLORS[(i + i / BRANDS.len()) % COLORS.len()];
            let model = MODELS[(state as usize >> 4) % MODELS.len()];
            let price_cents = 499 + i64::from(state % 2000);
            let weight = 3 + (state >> 8) % 30;
            let size = 40 + (state >> 12) % 110;

            Product::new(
                format!("lure-{:03}", i + 1),
                format!("{} {} ({})", display_brand(brand), model, color),
                brand,
                color,
                Money::new(price_cents, Currency::USD),
            )
            .with_dimensions(weight, size)
            .with_image(format!("/img/lures/{}-{}.png", brand, color))
        })
        .collect()
}

/// The small fixed advert pool.
///
/// The clearance campaign is booked twice in a row, as the ad backend does.
pub fn advert_pool() -> Vec<Advertisement> {
    vec![
        Advertisement::new("ad-spring-sale", "Spring sale: 20% off hard baits")
            .with_links("/img/ads/spring.png", "/products"),
        Advertisement::new("ad-clearance", "Clearance: last season's colors")
            .with_links("/img/ads/clearance.png", "/products"),
        Advertisement::new("ad-clearance", "Clearance: last season's colors")
            .with_links("/img/ads/clearance.png", "/products"),
        Advertisement::new("ad-line", "New braided line in stock")
            .with_links("/img/ads/line.png", "/products"),
    ]
}

/// Human label for a brand facet value.
pub fn display_brand(brand: &str) -> &str {
    match brand {
        "rapala" => "Rapala",
        "heddon" => "Heddon",
        "cottoncordel" => "Cotton Cordell",
        "rebel" => "Rebel",
        "mepps" => "Mepps",
        other => other,
    }
}

fn next(state: u32) -> u32 {
    state.wrapping_mul(1_103_515_245).wrapping_add(12_345)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_deterministic() {
        assert_eq!(lure_catalogue(30), lure_catalogue(30));
    }

    #[test]
    fn test_catalogue_covers_every_brand_and_color() {
        let products = lure_catalogue(DEFAULT_CATALOGUE_SIZE);
        for brand in BRANDS {
            assert!(products.iter().any(|p| p.brand == brand), "missing {brand}");
        }
        for color in COLORS {
            assert!(products.iter().any(|p| p.color == color), "missing {color}");
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let products = lure_catalogue(DEFAULT_CATALOGUE_SIZE);
        let mut ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DEFAULT_CATALOGUE_SIZE);
    }

    #[test]
    fn test_advert_pool_has_adjacent_duplicate() {
        let pool = advert_pool();
        assert!(pool.windows(2).any(|w| w[0].id == w[1].id));
    }
}
