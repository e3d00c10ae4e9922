//! Advertisement type.

use crate::ids::AdvertId;
use serde::{Deserialize, Serialize};

/// An advertisement slotted into the product feed.
///
/// Pools may legitimately repeat an id (the same campaign booked twice);
/// the interleaver is responsible for not showing it back to back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Advertisement {
    /// Campaign identifier.
    pub id: AdvertId,
    /// Headline.
    pub title: String,
    /// Banner image.
    pub image_url: String,
    /// Where a click lands.
    pub target_url: String,
}

impl Advertisement {
    /// Create an advertisement.
    pub fn new(id: impl Into<AdvertId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: String::new(),
            target_url: String::new(),
        }
    }

    /// Set banner image and click target.
    pub fn with_links(mut self, image_url: impl Into<String>, target_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self.target_url = target_url.into();
        self
    }
}
