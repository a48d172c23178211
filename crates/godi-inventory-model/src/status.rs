// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Four-way card badge bucket. Used for presentation only; low-stock
/// membership (`stock <= threshold`) is a separate notion with a different
/// boundary and must not be folded into this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Out,
    Low,
    Medium,
    Good,
}

impl StockStatus {
    /// `threshold == 0` makes `Low` and `Medium` unreachable for positive
    /// stock; every in-stock product then classifies as `Good`. Kept as-is.
    #[must_use]
    pub const fn classify(stock: u32, threshold: u32) -> Self {
        if stock == 0 {
            Self::Out
        } else if stock <= threshold {
            Self::Low
        } else if stock <= threshold.saturating_mul(2) {
            Self::Medium
        } else {
            Self::Good
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Out => "out",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::Good => "good",
        }
    }

    /// Badge text matching the dashboard cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Out => "Out of Stock",
            Self::Low => "Low Stock",
            Self::Medium => "Medium Stock",
            Self::Good => "In Stock",
        }
    }
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-way alert boundary: a product needs restocking when its stock has
/// fallen to or below its reorder point.
#[must_use]
pub const fn is_low_stock(stock: u32, threshold: u32) -> bool {
    stock <= threshold
}
