// SPDX-License-Identifier: Apache-2.0

use godi_inventory_model::ProductId;
use godi_inventory_query::CategoryFilter;

/// Which dialog, if any, the session has open. One sum type instead of a
/// shared nullable product reference plus two open-flags that can
/// desynchronize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    NoSelection,
    SaleInProgress(ProductId),
    RestockInProgress(ProductId),
}

/// A confirmed dialog, ready to hand to the store crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingTransaction {
    Sale { product: ProductId, quantity: u32 },
    Restock { product: ProductId, quantity: u32 },
}

/// Presentation session state. The core never sees this; it is passed into
/// the pure query functions as explicit arguments on each call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub search_term: String,
    pub category: CategoryFilter,
    selection: Selection,
}

impl SessionState {
    #[must_use]
    pub fn new(search_term: &str, category: CategoryFilter) -> Self {
        Self {
            search_term: search_term.to_string(),
            category,
            selection: Selection::NoSelection,
        }
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    pub fn begin_sale(&mut self, product: ProductId) {
        self.selection = Selection::SaleInProgress(product);
    }

    pub fn begin_restock(&mut self, product: ProductId) {
        self.selection = Selection::RestockInProgress(product);
    }

    pub fn cancel(&mut self) {
        self.selection = Selection::NoSelection;
    }

    /// Close the open dialog with a quantity. `None` when no dialog is open;
    /// either way the selection resets.
    pub fn confirm(&mut self, quantity: u32) -> Option<PendingTransaction> {
        let pending = match self.selection {
            Selection::NoSelection => None,
            Selection::SaleInProgress(product) => {
                Some(PendingTransaction::Sale { product, quantity })
            }
            Selection::RestockInProgress(product) => {
                Some(PendingTransaction::Restock { product, quantity })
            }
        };
        self.selection = Selection::NoSelection;
        pending
    }
}
