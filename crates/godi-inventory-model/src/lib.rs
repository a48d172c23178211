// SPDX-License-Identifier: Apache-2.0
#![forbid(unsafe_code)]
//! Inventory model SSOT.
//!
//! ```compile_fail
//! use godi_inventory_model::StockStatus;
//!
//! fn exhaustive_match(s: StockStatus) -> &'static str {
//!     match s {
//!         StockStatus::Out => "o",
//!         StockStatus::Low => "l",
//!         StockStatus::Medium => "m",
//!     }
//! }
//! ```

mod catalog;
mod notification;
mod product;
mod status;

pub use catalog::Catalog;
pub use notification::{Notification, Severity};
pub use product::{
    Category, ParseError, Product, ProductId, Sku, CATEGORY_MAX_LEN, NAME_MAX_LEN, SKU_MAX_LEN,
};
pub use status::{is_low_stock, StockStatus};

pub const CRATE_NAME: &str = "godi-inventory-model";
