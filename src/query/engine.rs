// ==========================================
// Danuferd Vehicle Catalog - query engine
// ==========================================
// Pure predicate pipeline over normalized entries. All predicates are
// conjunctive; ordering of the output follows the input.
// ==========================================

use crate::domain::types::{CatalogTab, Category};
use crate::normalizer::CatalogEntry;
use crate::query::filter::CatalogSelection;
use std::collections::BTreeSet;

/// Brands offered as filter options while a car tab is active.
pub const CAR_BRANDS: [&str; 8] = [
    "BMW",
    "Daihatsu",
    "Honda",
    "Mazda",
    "Mitsubishi",
    "Nissan",
    "Suzuki",
    "Toyota",
];

/// Brands offered as filter options while a motorcycle tab is active.
pub const MOTORCYCLE_BRANDS: [&str; 4] = ["KTM", "Kawasaki", "Vespa", "Yamaha"];

/// Distinct values offered by the filter panel for the active tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub brands: Vec<String>,
    pub types: Vec<String>,
    pub transmissions: Vec<String>,
    pub locations: Vec<String>,
}

/// Apply the active selection to the full entry set.
pub fn apply(entries: &[CatalogEntry], selection: &CatalogSelection) -> Vec<CatalogEntry> {
    let filters = &selection.filters;
    let search = filters
        .search
        .as_ref()
        .map(|s| s.to_lowercase())
        .filter(|s| !s.is_empty());

    entries
        .iter()
        .filter(|entry| selection.tab.matches(entry.category, entry.condition))
        .filter(|entry| match &selection.brand_tab {
            Some(brand) => entry.brand == *brand,
            None => true,
        })
        .filter(|entry| match &search {
            Some(term) => {
                let haystack = format!(
                    "{} {} {} {}",
                    entry.brand, entry.model, entry.vehicle_type, entry.color
                )
                .to_lowercase();
                haystack.contains(term)
            }
            None => true,
        })
        .filter(|entry| matches_exact(&filters.brand, &entry.brand))
        .filter(|entry| matches_exact(&filters.vehicle_type, &entry.vehicle_type))
        .filter(|entry| matches_exact(&filters.transmission, &entry.transmission))
        .filter(|entry| matches_exact(&filters.location, &entry.location))
        .filter(|entry| lower_bound(filters.year_min.map(i64::from), entry.year.map(i64::from)))
        .filter(|entry| upper_bound(filters.year_max.map(i64::from), entry.year.map(i64::from)))
        .filter(|entry| lower_bound(filters.price_min, entry.price))
        .filter(|entry| upper_bound(filters.price_max, entry.price))
        .cloned()
        .collect()
}

/// Brand chips for a tab: the vehicle-class allow-list intersected with
/// brands actually present among tab-matching entries. A brand string
/// appearing only in the other vehicle class never leaks in.
pub fn brand_options(entries: &[CatalogEntry], tab: CatalogTab) -> Vec<String> {
    let allow_list: &[&str] = match tab.category {
        Category::Car => &CAR_BRANDS,
        Category::Motorcycle => &MOTORCYCLE_BRANDS,
    };

    let present: BTreeSet<&str> = entries
        .iter()
        .filter(|entry| tab.matches(entry.category, entry.condition))
        .map(|entry| entry.brand.as_str())
        .collect();

    let mut brands: Vec<String> = present
        .into_iter()
        .filter(|brand| allow_list.contains(brand))
        .map(str::to_string)
        .collect();
    brands.sort();
    brands
}

/// Distinct filter-panel values among tab-matching entries.
pub fn filter_options(entries: &[CatalogEntry], tab: CatalogTab) -> FilterOptions {
    let mut types = BTreeSet::new();
    let mut transmissions = BTreeSet::new();
    let mut locations = BTreeSet::new();

    for entry in entries
        .iter()
        .filter(|entry| tab.matches(entry.category, entry.condition))
    {
        if !entry.vehicle_type.is_empty() {
            types.insert(entry.vehicle_type.clone());
        }
        if !entry.transmission.is_empty() {
            transmissions.insert(entry.transmission.clone());
        }
        if !entry.location.is_empty() {
            locations.insert(entry.location.clone());
        }
    }

    FilterOptions {
        brands: brand_options(entries, tab),
        types: types.into_iter().collect(),
        transmissions: transmissions.into_iter().collect(),
        locations: locations.into_iter().collect(),
    }
}

fn matches_exact(filter: &Option<String>, value: &str) -> bool {
    match filter {
        Some(expected) if !expected.is_empty() => value == expected,
        _ => true,
    }
}

/// An absent entry value fails any active bound.
fn lower_bound(bound: Option<i64>, value: Option<i64>) -> bool {
    match bound {
        Some(min) => matches!(value, Some(v) if v >= min),
        None => true,
    }
}

fn upper_bound(bound: Option<i64>, value: Option<i64>) -> bool {
    match bound {
        Some(max) => matches!(value, Some(v) if v <= max),
        None => true,
    }
}
