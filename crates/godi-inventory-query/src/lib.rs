// SPDX-License-Identifier: Apache-2.0
#![forbid(unsafe_code)]
//! Read-side queries over the catalog. Everything here is a pure function
//! of its inputs; mutation lives in `godi-inventory-store`.

mod analytics;
mod filters;

pub use analytics::{AnalyticsSnapshot, CategoryStats, TOP_LIST_LEN};
pub use filters::{
    categories, filter_products, low_stock_products, CategoryFilter, ProductFilter,
};

pub const CRATE_NAME: &str = "godi-inventory-query";
