// SPDX-License-Identifier: Apache-2.0

use godi_inventory_model::{Catalog, Product};
use serde::{Deserialize, Serialize};

/// Category selector as the grid's dropdown presents it: the literal
/// `"All"` choice, or an exact category name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == Self::ALL_LABEL {
            Self::All
        } else {
            Self::Named(raw.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => product.category.as_str() == name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProductFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl ProductFilter {
    #[must_use]
    pub fn new(search: &str, category: CategoryFilter) -> Self {
        Self {
            search: search.to_string(),
            category,
        }
    }
}

fn matches_search(product: &Product, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(needle_lower)
        || product.sku.as_str().to_lowercase().contains(needle_lower)
}

/// Visible subset of the catalog: case-insensitive substring match on name
/// or SKU, AND category equality. Source order preserved, no re-sort.
#[must_use]
pub fn filter_products(catalog: &Catalog, filter: &ProductFilter) -> Vec<Product> {
    let needle = filter.search.to_lowercase();
    catalog
        .products()
        .iter()
        .filter(|product| matches_search(product, &needle) && filter.category.matches(product))
        .cloned()
        .collect()
}

/// Dropdown choice set: `"All"` then distinct categories in first-seen
/// order.
#[must_use]
pub fn categories(catalog: &Catalog) -> Vec<String> {
    let mut choices = vec![CategoryFilter::ALL_LABEL.to_string()];
    for product in catalog.products() {
        let name = product.category.as_str();
        if !choices.iter().any(|seen| seen == name) {
            choices.push(name.to_string());
        }
    }
    choices
}

/// Alert-banner feed: every product at or below its reorder point, in
/// source order.
#[must_use]
pub fn low_stock_products(catalog: &Catalog) -> Vec<Product> {
    catalog
        .products()
        .iter()
        .filter(|product| product.is_low_stock())
        .cloned()
        .collect()
}
