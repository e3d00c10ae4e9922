//! Mixed product/advert entries of the display sequence.

use crate::catalog::{Advertisement, Product};
use serde::{Deserialize, Serialize};

/// One entry of the rendered product feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeedEntry {
    Product(Product),
    Advert(Advertisement),
}

impl FeedEntry {
    /// Whether the renderer should draw an advert card.
    pub fn is_advert(&self) -> bool {
        matches!(self, FeedEntry::Advert(_))
    }

    /// The product, if this is one.
    pub fn as_product(&self) -> Option<&Product> {
        match self {
            FeedEntry::Product(p) => Some(p),
            FeedEntry::Advert(_) => None,
        }
    }

    /// The advertisement, if this is one.
    pub fn as_advert(&self) -> Option<&Advertisement> {
        match self {
            FeedEntry::Advert(a) => Some(a),
            FeedEntry::Product(_) => None,
        }
    }

    /// Stable key for keyed list rendering.
    ///
    /// Adverts repeat across the feed, so their key includes the position.
    pub fn render_key(&self, position: usize) -> String {
        match self {
            FeedEntry::Product(p) => format!("p:{}", p.id),
            FeedEntry::Advert(a) => format!("a:{}:{}", a.id, position),
        }
    }
}

impl From<Product> for FeedEntry {
    fn from(p: Product) -> Self {
        FeedEntry::Product(p)
    }
}

impl From<Advertisement> for FeedEntry {
    fn from(a: Advertisement) -> Self {
        FeedEntry::Advert(a)
    }
}
