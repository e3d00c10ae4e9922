//! Navigation menu tables.

use serde::Serialize;
use shop_commerce::search::{SortDirection, SortKey, SortSpec, NO_CONSTRAINT};

use crate::controller::{Criteria, FacetAction};

/// A sort menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub label: &'static str,
    pub key: &'static str,
    pub direction: SortDirection,
}

impl SortOption {
    pub fn spec(&self) -> SortSpec {
        SortSpec::new(SortKey::parse(self.key), self.direction)
    }
}

/// A brand or color menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetOption {
    pub label: &'static str,
    pub value: &'static str,
}

pub const SORT_OPTIONS: [SortOption; 7] = [
    SortOption { label: "Price: low to high", key: "price", direction: SortDirection::Asc },
    SortOption { label: "Price: high to low", key: "price", direction: SortDirection::Desc },
    SortOption { label: "Weight: light to heavy", key: "weight", direction: SortDirection::Asc },
    SortOption { label: "Weight: heavy to light", key: "weight", direction: SortDirection::Desc },
    SortOption { label: "Size: small to large", key: "size", direction: SortDirection::Asc },
    SortOption { label: "Size: large to small", key: "size", direction: SortDirection::Desc },
    SortOption { label: "None", key: NO_CONSTRAINT, direction: SortDirection::Asc },
];

pub const BRAND_OPTIONS: [FacetOption; 6] = [
    FacetOption { label: "Rapala", value: "rapala" },
    FacetOption { label: "Heddon", value: "heddon" },
    FacetOption { label: "Cotton Cordell", value: "cottoncordel" },
    FacetOption { label: "Rebel", value: "rebel" },
    FacetOption { label: "Mepps", value: "mepps" },
    FacetOption { label: "None", value: NO_CONSTRAINT },
];

pub const COLOR_OPTIONS: [FacetOption; 8] = [
    FacetOption { label: "Red", value: "red" },
    FacetOption { label: "Blue", value: "blue" },
    FacetOption { label: "Green", value: "green" },
    FacetOption { label: "Yellow", value: "yellow" },
    FacetOption { label: "Brown", value: "brown" },
    FacetOption { label: "Black", value: "black" },
    FacetOption { label: "White", value: "white" },
    FacetOption { label: "Any", value: NO_CONSTRAINT },
];

/// A rendered menu row: label, highlight, and what selecting it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: &'static str,
    pub active: bool,
    #[serde(skip)]
    pub action: FacetAction,
}

pub fn sort_menu(criteria: &Criteria) -> Vec<MenuItem> {
    SORT_OPTIONS
        .iter()
        .map(|option| {
            let spec = option.spec();
            MenuItem {
                label: option.label,
                active: spec == criteria.sort,
                action: FacetAction::Sort(spec),
            }
        })
        .collect()
}

pub fn brand_menu(criteria: &Criteria) -> Vec<MenuItem> {
    facet_menu(&BRAND_OPTIONS, criteria.filter.brand_str(), |v| FacetAction::Brand(Some(v)))
}

pub fn color_menu(criteria: &Criteria) -> Vec<MenuItem> {
    facet_menu(&COLOR_OPTIONS, criteria.filter.color_str(), |v| FacetAction::Color(Some(v)))
}

fn facet_menu(
    options: &[FacetOption],
    current: &str,
    action: impl Fn(String) -> FacetAction,
) -> Vec<MenuItem> {
    options
        .iter()
        .map(|option| MenuItem {
            label: option.label,
            active: option.value == current,
            action: action(option.value.to_string()),
        })
        .collect()
}
