//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A lure in the catalogue.
///
/// Read-only once fetched; the feed never mutates a product it holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Brand facet value (e.g., "rapala").
    pub brand: String,
    /// Color facet value (e.g., "blue").
    pub color: String,
    /// Unit price.
    pub price: Money,
    /// Weight in grams.
    pub weight_grams: u32,
    /// Body length in millimetres.
    pub size_mm: u32,
    /// Image shown on the product card.
    pub image_url: String,
    /// Longer description, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Create a product with the facet and sort attributes set.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        color: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            color: color.into(),
            price,
            weight_grams: 0,
            size_mm: 0,
            image_url: String::new(),
            description: None,
        }
    }

    /// Set weight and size.
    pub fn with_dimensions(mut self, weight_grams: u32, size_mm: u32) -> Self {
        self.weight_grams = weight_grams;
        self.size_mm = size_mm;
        self
    }

    /// Set the card image.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Format the price for a product card.
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Weight and size as shown under the price (e.g., "11 g / 90 mm").
    pub fn dimensions_display(&self) -> String {
        format!("{} g / {} mm", self.weight_grams, self.size_mm)
    }
}
