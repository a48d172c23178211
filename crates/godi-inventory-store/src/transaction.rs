// SPDX-License-Identifier: Apache-2.0

use godi_inventory_model::{is_low_stock, Catalog, Notification, ProductId, Severity};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RejectReason {
    UnknownProduct,
    ZeroQuantity,
    InsufficientStock,
}

impl RejectReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownProduct => "unknown_product",
            Self::ZeroQuantity => "zero_quantity",
            Self::InsufficientStock => "insufficient_stock",
        }
    }
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal state of one transaction. `Rejected` carries no catalog: the
/// caller keeps its unchanged snapshot, and no notification is owed.
/// Deliberately exhaustive: the state machine is closed by design.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionOutcome {
    Applied {
        catalog: Catalog,
        notifications: Vec<Notification>,
    },
    Rejected {
        reason: RejectReason,
    },
}

/// Sell `quantity` units of one product. Valid iff the id exists and
/// `1 <= quantity <= stock`; stock can therefore never go negative.
/// Stock alerts are classified against the post-sale level and precede the
/// unconditional sale confirmation.
#[must_use]
pub fn record_sale(catalog: &Catalog, id: ProductId, quantity: u32) -> TransactionOutcome {
    let Some(product) = catalog.get(id) else {
        return TransactionOutcome::Rejected {
            reason: RejectReason::UnknownProduct,
        };
    };
    if quantity == 0 {
        return TransactionOutcome::Rejected {
            reason: RejectReason::ZeroQuantity,
        };
    }
    if quantity > product.stock {
        return TransactionOutcome::Rejected {
            reason: RejectReason::InsufficientStock,
        };
    }

    let new_stock = product.stock.saturating_sub(quantity);
    let mut notifications = Vec::new();
    if new_stock == 0 {
        notifications.push(Notification::new(
            "Stock Alert",
            &format!("{} is now out of stock!", product.name),
            Severity::Critical,
        ));
    } else if is_low_stock(new_stock, product.low_stock_threshold) {
        notifications.push(Notification::new(
            "Low Stock Alert",
            &format!("{} is running low ({new_stock} remaining)", product.name),
            Severity::Warning,
        ));
    }
    notifications.push(Notification::new(
        "Sale Recorded",
        &format!("Successfully sold {quantity} unit(s)"),
        Severity::Info,
    ));

    match catalog.with_stock(id, new_stock) {
        Some(next) => TransactionOutcome::Applied {
            catalog: next,
            notifications,
        },
        None => TransactionOutcome::Rejected {
            reason: RejectReason::UnknownProduct,
        },
    }
}

/// Add `quantity` units. Valid iff the id exists and `quantity >= 1`; no
/// upper bound, no threshold classification on the result.
#[must_use]
pub fn restock(catalog: &Catalog, id: ProductId, quantity: u32) -> TransactionOutcome {
    let Some(product) = catalog.get(id) else {
        return TransactionOutcome::Rejected {
            reason: RejectReason::UnknownProduct,
        };
    };
    if quantity == 0 {
        return TransactionOutcome::Rejected {
            reason: RejectReason::ZeroQuantity,
        };
    }

    let new_stock = product.stock.saturating_add(quantity);
    let notifications = vec![Notification::new(
        "Stock Updated",
        &format!("Successfully added {quantity} unit(s)"),
        Severity::Info,
    )];

    match catalog.with_stock(id, new_stock) {
        Some(next) => TransactionOutcome::Applied {
            catalog: next,
            notifications,
        },
        None => TransactionOutcome::Rejected {
            reason: RejectReason::UnknownProduct,
        },
    }
}

/// Tuple surface for presentation callers: rejection is silent, returning
/// the unchanged catalog and no notifications.
#[must_use]
pub fn apply_sale(catalog: &Catalog, id: ProductId, quantity: u32) -> (Catalog, Vec<Notification>) {
    match record_sale(catalog, id, quantity) {
        TransactionOutcome::Applied {
            catalog,
            notifications,
        } => (catalog, notifications),
        TransactionOutcome::Rejected { .. } => (catalog.clone(), Vec::new()),
    }
}

/// Silent-rejection counterpart of [`apply_sale`] for restocking.
#[must_use]
pub fn apply_restock(
    catalog: &Catalog,
    id: ProductId,
    quantity: u32,
) -> (Catalog, Vec<Notification>) {
    match restock(catalog, id, quantity) {
        TransactionOutcome::Applied {
            catalog,
            notifications,
        } => (catalog, notifications),
        TransactionOutcome::Rejected { .. } => (catalog.clone(), Vec::new()),
    }
}
