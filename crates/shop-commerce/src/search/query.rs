//! Feed query builder.

use crate::catalog::Product;
use crate::search::FeedFilter;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Product attribute to sort the feed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Provider order.
    #[default]
    Unsorted,
    Price,
    Weight,
    Size,
    /// A key this build does not know; kept verbatim, sorts like `Unsorted`.
    Other(String),
}

impl SortKey {
    /// Parse a sort key as sent by the nav menu.
    pub fn parse(s: &str) -> Self {
        match s {
            "none" | "" => SortKey::Unsorted,
            "price" => SortKey::Price,
            "weight" => SortKey::Weight,
            "size" => SortKey::Size,
            other => SortKey::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Unsorted => "none",
            SortKey::Price => "price",
            SortKey::Weight => "weight",
            SortKey::Size => "size",
            SortKey::Other(s) => s,
        }
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        SortKey::parse(&s)
    }
}

impl From<SortKey> for String {
    fn from(k: SortKey) -> Self {
        k.as_str().to_string()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction; anything other than "desc" is ascending.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort facet of a feed query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Parse `key:direction` (e.g. "price:desc"); a bare key sorts ascending.
    pub fn parse(s: &str) -> Self {
        let mut parts = s.splitn(2, ':');
        let key = SortKey::parse(parts.next().unwrap_or(""));
        let direction = SortDirection::parse(parts.next().unwrap_or("asc"));
        Self { key, direction }
    }

    /// Order two products under this spec.
    ///
    /// Unsorted and unknown keys compare equal, so a stable sort keeps
    /// provider order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ord = match self.key {
            SortKey::Price => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortKey::Weight => a.weight_grams.cmp(&b.weight_grams),
            SortKey::Size => a.size_mm.cmp(&b.size_mm),
            SortKey::Unsorted | SortKey::Other(_) => Ordering::Equal,
        };
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key.as_str(), self.direction.as_str())
    }
}

/// Which page of the feed to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index.
    pub index: u32,
    /// Items per page.
    pub size: u32,
}

impl PageRequest {
    /// Offset of the first item of this page.
    pub fn offset(&self) -> usize {
        self.index as usize * self.size as usize
    }
}

/// A feed query: page, filter and sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedQuery {
    pub page: PageRequest,
    pub filter: FeedFilter,
    pub sort: SortSpec,
}

impl FeedQuery {
    /// Page 0 of the unfiltered, unsorted feed.
    pub fn new(page_size: u32) -> Self {
        Self {
            page: PageRequest {
                index: 0,
                size: page_size.max(1),
            },
            filter: FeedFilter::default(),
            sort: SortSpec::default(),
        }
    }

    /// Set the brand facet (`"none"` clears it).
    pub fn with_brand(mut self, brand: Option<&str>) -> Self {
        self.filter.brand = FeedFilter::facet_value(brand);
        self
    }

    /// Set the color facet (`"none"` clears it).
    pub fn with_color(mut self, color: Option<&str>) -> Self {
        self.filter.color = FeedFilter::facet_value(color);
        self
    }

    /// Set the whole filter.
    pub fn with_filter(mut self, filter: FeedFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the sort spec.
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Same criteria at another page index.
    pub fn at_page(mut self, index: u32) -> Self {
        self.page.index = index;
        self
    }

    /// Same criteria, next page.
    pub fn next_page(&self) -> Self {
        self.clone().at_page(self.page.index + 1)
    }

    /// Whether two queries differ only in page index.
    pub fn same_criteria(&self, other: &FeedQuery) -> bool {
        self.filter == other.filter && self.sort == other.sort && self.page.size == other.page.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[test]
    fn test_query_builder() {
        let query = FeedQuery::new(12)
            .with_brand(Some("rapala"))
            .with_color(Some("blue"))
            .with_sort(SortSpec::new(SortKey::Price, SortDirection::Desc));

        assert_eq!(query.page, PageRequest { index: 0, size: 12 });
        assert_eq!(query.filter.brand.as_deref(), Some("rapala"));
        assert_eq!(query.filter.color.as_deref(), Some("blue"));
        assert_eq!(query.sort.to_string(), "price:desc");
    }

    #[test]
    fn test_next_page_keeps_criteria() {
        let query = FeedQuery::new(10).with_brand(Some("mepps"));
        let next = query.next_page();
        assert_eq!(next.page.index, 1);
        assert_eq!(next.page.offset(), 10);
        assert!(next.same_criteria(&query));
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(FeedQuery::new(0).page.size, 1);
    }

    #[test]
    fn test_sort_spec_parse() {
        assert_eq!(SortSpec::parse("weight:desc"), SortSpec::new(SortKey::Weight, SortDirection::Desc));
        assert_eq!(SortSpec::parse("size"), SortSpec::new(SortKey::Size, SortDirection::Asc));
        assert_eq!(SortSpec::parse("none:asc").key, SortKey::Unsorted);
        assert_eq!(SortSpec::parse("rating:asc").key, SortKey::Other("rating".to_string()));
    }

    #[test]
    fn test_compare_price_desc() {
        let cheap = Product::new("a", "A", "rebel", "red", Money::new(100, Currency::USD));
        let dear = Product::new("b", "B", "rebel", "red", Money::new(900, Currency::USD));
        let spec = SortSpec::new(SortKey::Price, SortDirection::Desc);
        assert_eq!(spec.compare(&dear, &cheap), Ordering::Less);
    }

    #[test]
    fn test_sort_key_serializes_as_string() {
        let spec = SortSpec::new(SortKey::Weight, SortDirection::Asc);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["key"], "weight");
        assert_eq!(json["direction"], "asc");

        let back: SortSpec = serde_json::from_value(json).unwrap();
        assert_eq!(back, spec);
    }
}
