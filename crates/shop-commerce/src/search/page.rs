//! A page of products as returned by a data provider.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// One page of raw products. Never contains adverts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPage {
    /// Page index this answers.
    pub index: u32,
    /// Page size that was requested.
    pub requested_size: u32,
    /// The products, in display order.
    pub items: Vec<Product>,
}

impl ProductPage {
    pub fn new(index: u32, requested_size: u32, items: Vec<Product>) -> Self {
        Self {
            index,
            requested_size,
            items,
        }
    }

    /// A full page signals that more may follow.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.requested_size as usize
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
