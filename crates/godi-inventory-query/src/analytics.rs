// SPDX-License-Identifier: Apache-2.0

use godi_inventory_model::{Catalog, Product};
use serde::{Deserialize, Serialize};

pub const TOP_LIST_LEN: usize = 5;

/// Per-category rollup: record count, on-hand value, unit total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryStats {
    pub category: String,
    pub count: usize,
    pub value: f64,
    pub stock: u64,
}

/// Dashboard rollup over the FULL catalog (never the filtered view),
/// recomputed on demand from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsSnapshot {
    pub total_products: usize,
    pub total_stock_value: f64,
    /// Units per product. An empty catalog divides 0 by 0 and yields NaN;
    /// callers that serialize must guard for it.
    pub average_stock_level: f64,
    pub low_stock_items: Vec<Product>,
    pub out_of_stock_items: Vec<Product>,
    pub well_stocked_items: Vec<Product>,
    pub category_stats: Vec<CategoryStats>,
    pub top_categories: Vec<CategoryStats>,
    pub top_value_products: Vec<Product>,
}

impl AnalyticsSnapshot {
    #[must_use]
    pub fn compute(catalog: &Catalog) -> Self {
        let products = catalog.products();
        let total_products = products.len();
        let mut total_stock_value = 0.0_f64;
        let mut total_stock: u64 = 0;

        let mut low_stock_items = Vec::new();
        let mut out_of_stock_items = Vec::new();
        let mut well_stocked_items = Vec::new();
        // First-seen category order; ties in the value ranking keep it.
        let mut category_stats: Vec<CategoryStats> = Vec::new();

        for product in products {
            let value = product.stock_value();
            total_stock_value += value;
            total_stock += u64::from(product.stock);

            if product.is_low_stock() {
                low_stock_items.push(product.clone());
            } else {
                well_stocked_items.push(product.clone());
            }
            if product.stock == 0 {
                out_of_stock_items.push(product.clone());
            }

            let name = product.category.as_str();
            match category_stats
                .iter_mut()
                .find(|stats| stats.category == name)
            {
                Some(stats) => {
                    stats.count += 1;
                    stats.value += value;
                    stats.stock += u64::from(product.stock);
                }
                None => category_stats.push(CategoryStats {
                    category: name.to_string(),
                    count: 1,
                    value,
                    stock: u64::from(product.stock),
                }),
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let average_stock_level = total_stock as f64 / total_products as f64;

        let mut top_categories = category_stats.clone();
        top_categories.sort_by(|a, b| b.value.total_cmp(&a.value));
        top_categories.truncate(TOP_LIST_LEN);

        let mut top_value_products = products.to_vec();
        top_value_products.sort_by(|a, b| b.stock_value().total_cmp(&a.stock_value()));
        top_value_products.truncate(TOP_LIST_LEN);

        Self {
            total_products,
            total_stock_value,
            average_stock_level,
            low_stock_items,
            out_of_stock_items,
            well_stocked_items,
            category_stats,
            top_categories,
            top_value_products,
        }
    }
}
