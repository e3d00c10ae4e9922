//! Liked products.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Products the shopper has liked, in the order they were liked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LikedProducts {
    ids: Vec<ProductId>,
}

impl LikedProducts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Like or unlike a product. Returns true if it is now liked.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if let Some(pos) = self.ids.iter().position(|x| x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut liked = LikedProducts::new();
        let id = ProductId::new("lure-001");

        assert!(liked.toggle(&id));
        assert!(liked.contains(&id));
        assert_eq!(liked.len(), 1);

        assert!(!liked.toggle(&id));
        assert!(liked.is_empty());
    }

    #[test]
    fn test_preserves_like_order() {
        let mut liked = LikedProducts::new();
        liked.toggle(&ProductId::new("b"));
        liked.toggle(&ProductId::new("a"));
        let order: Vec<_> = liked.iter().map(|id| id.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }
}
