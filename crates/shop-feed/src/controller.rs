//! Filter/sort controller.
//!
//! Holds the shopper's current criteria. Every change produces the page-0
//! query the loader should restart with; facets not named by the change
//! are preserved.

use serde::{Deserialize, Serialize};
use shop_commerce::search::{FeedFilter, FeedQuery, SortDirection, SortKey, SortSpec};

/// Current filter and sort selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Criteria {
    pub filter: FeedFilter,
    pub sort: SortSpec,
}

impl Criteria {
    /// The criteria after `action`.
    pub fn apply(&self, action: &FacetAction) -> Criteria {
        let mut next = self.clone();
        match action {
            FacetAction::Brand(brand) => next.filter.brand = FeedFilter::facet_value(brand.as_deref()),
            FacetAction::Color(color) => next.filter.color = FeedFilter::facet_value(color.as_deref()),
            FacetAction::Sort(sort) => next.sort = sort.clone(),
        }
        next
    }

    /// Page 0 of these criteria.
    pub fn query(&self, page_size: u32) -> FeedQuery {
        FeedQuery::new(page_size)
            .with_filter(self.filter.clone())
            .with_sort(self.sort.clone())
    }
}

/// A single menu selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "facet", content = "value", rename_all = "lowercase")]
pub enum FacetAction {
    /// `None` or `"none"` clears the brand.
    Brand(Option<String>),
    /// `None` or `"none"` clears the color.
    Color(Option<String>),
    Sort(SortSpec),
}

/// Owns the criteria and the page size queries are built with.
#[derive(Debug, Clone)]
pub struct FeedController {
    criteria: Criteria,
    page_size: u32,
}

impl FeedController {
    pub fn new(page_size: u32) -> Self {
        Self {
            criteria: Criteria::default(),
            page_size: page_size.max(1),
        }
    }

    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Page 0 of the current criteria.
    pub fn query(&self) -> FeedQuery {
        self.criteria.query(self.page_size)
    }

    pub fn apply(&mut self, action: &FacetAction) -> FeedQuery {
        self.criteria = self.criteria.apply(action);
        self.query()
    }

    pub fn set_brand_filter(&mut self, brand: Option<&str>) -> FeedQuery {
        self.apply(&FacetAction::Brand(brand.map(str::to_string)))
    }

    pub fn set_color_filter(&mut self, color: Option<&str>) -> FeedQuery {
        self.apply(&FacetAction::Color(color.map(str::to_string)))
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) -> FeedQuery {
        self.apply(&FacetAction::Sort(SortSpec::new(key, direction)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_then_color_keeps_both() {
        let mut controller = FeedController::new(12);
        controller.set_brand_filter(Some("rapala"));
        let query = controller.set_color_filter(Some("blue"));

        assert_eq!(query.page.index, 0);
        assert_eq!(query.filter.brand.as_deref(), Some("rapala"));
        assert_eq!(query.filter.color.as_deref(), Some("blue"));
        assert_eq!(query.sort, SortSpec::default());
    }

    #[test]
    fn test_none_clears_a_facet() {
        let mut controller = FeedController::new(12);
        controller.set_brand_filter(Some("heddon"));
        controller.set_color_filter(Some("red"));

        let query = controller.set_brand_filter(Some("none"));
        assert!(query.filter.brand.is_none());
        assert_eq!(query.filter.color.as_deref(), Some("red"));

        let query = controller.set_color_filter(None);
        assert_eq!(query.filter, FeedFilter::default());
    }

    #[test]
    fn test_sort_preserves_filters() {
        let mut controller = FeedController::new(8);
        controller.set_brand_filter(Some("mepps"));
        let query = controller.set_sort(SortKey::Price, SortDirection::Desc);

        assert_eq!(query.sort.to_string(), "price:desc");
        assert_eq!(query.filter.brand.as_deref(), Some("mepps"));
        assert_eq!(query.page.size, 8);
    }

    #[test]
    fn test_criteria_apply_is_pure() {
        let before = Criteria::default();
        let after = before.apply(&FacetAction::Brand(Some("rebel".into())));
        assert_eq!(before, Criteria::default());
        assert_eq!(after.filter.brand.as_deref(), Some("rebel"));
    }
}
