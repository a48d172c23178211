// SPDX-License-Identifier: Apache-2.0
#![forbid(unsafe_code)]
//! Write side of the inventory core: the two validated transactions.
//! Each one is a single-step `Validating -> {Applied, Rejected}` move that
//! replaces the whole catalog snapshot atomically and returns notifications
//! as values instead of firing side effects.

mod transaction;

pub use transaction::{
    apply_restock, apply_sale, record_sale, restock, RejectReason, TransactionOutcome,
};

pub const CRATE_NAME: &str = "godi-inventory-store";
