// SPDX-License-Identifier: Apache-2.0

use crate::status::{is_low_stock, StockStatus};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const NAME_MAX_LEN: usize = 256;
pub const SKU_MAX_LEN: usize = 32;
pub const CATEGORY_MAX_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
    InvalidPrice(f64),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::InvalidPrice(value) => {
                write!(f, "price must be a finite non-negative number, got {value}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

fn check_text(field: &'static str, input: &str, max_len: usize) -> Result<(), ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty(field));
    }
    if input.trim() != input {
        return Err(ParseError::Trimmed(field));
    }
    if input.len() > max_len {
        return Err(ParseError::TooLong(field, max_len));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Sku(pub(crate) String);

impl Sku {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        check_text("sku", input, SKU_MAX_LEN)?;
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Sku {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Category(pub(crate) String);

impl Category {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        check_text("category", input, CATEGORY_MAX_LEN)?;
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One inventory record. `id` is the stable identity key; transactions
/// replace `stock` and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub low_stock_threshold: u32,
    pub category: Category,
    pub sku: Sku,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: &str,
        price: f64,
        stock: u32,
        low_stock_threshold: u32,
        category: &str,
        sku: &str,
    ) -> Result<Self, ParseError> {
        check_text("name", name, NAME_MAX_LEN)?;
        if !price.is_finite() || price < 0.0 {
            return Err(ParseError::InvalidPrice(price));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            price,
            stock,
            low_stock_threshold,
            category: Category::parse(category)?,
            sku: Sku::parse(sku)?,
        })
    }

    #[must_use]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock, self.low_stock_threshold)
    }

    /// Low-stock membership for alerts and analytics. Boundary is
    /// `stock <= threshold`, which differs from [`StockStatus`] bucketing.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        is_low_stock(self.stock, self.low_stock_threshold)
    }

    /// On-hand value at full precision; round only when displaying.
    #[must_use]
    pub fn stock_value(&self) -> f64 {
        f64::from(self.stock) * self.price
    }
}
