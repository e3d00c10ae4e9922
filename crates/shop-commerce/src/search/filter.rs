//! Facet filters.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Facet value meaning "no constraint", as sent by the nav menus.
pub const NO_CONSTRAINT: &str = "none";

/// A single facet constraint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Filter by brand.
    Brand(String),
    /// Filter by color.
    Color(String),
}

impl Filter {
    /// Check whether a product satisfies this constraint.
    ///
    /// Values are opaque: comparison is exact, and an unknown value simply
    /// matches nothing.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Brand(brand) => product.brand == *brand,
            Filter::Color(color) => product.color == *color,
        }
    }
}

/// The brand and color facets of a feed query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FeedFilter {
    /// Brand constraint, `None` for any brand.
    pub brand: Option<String>,
    /// Color constraint, `None` for any color.
    pub color: Option<String>,
}

impl FeedFilter {
    /// Normalize a raw facet value: `"none"` and `""` mean no constraint.
    pub fn facet_value(raw: Option<&str>) -> Option<String> {
        match raw {
            None => None,
            Some(v) if v.is_empty() || v == NO_CONSTRAINT => None,
            Some(v) => Some(v.to_string()),
        }
    }

    /// The active constraints.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(brand) = &self.brand {
            filters.push(Filter::Brand(brand.clone()));
        }
        if let Some(color) = &self.color {
            filters.push(Filter::Color(color.clone()));
        }
        filters
    }

    /// Check whether a product satisfies every active constraint.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters().iter().all(|f| f.matches(product))
    }

    /// Brand value as the nav menu spells it.
    pub fn brand_str(&self) -> &str {
        self.brand.as_deref().unwrap_or(NO_CONSTRAINT)
    }

    /// Color value as the nav menu spells it.
    pub fn color_str(&self) -> &str {
        self.color.as_deref().unwrap_or(NO_CONSTRAINT)
    }
}
