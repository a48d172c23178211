// SPDX-License-Identifier: Apache-2.0

use crate::product::{Category, Product, ProductId, Sku};
use serde::{Deserialize, Serialize};

/// The full in-memory product collection at a point in time. Insertion
/// order is significant: filtering and analytics tie-breaking both preserve
/// it. The only mutation is whole-snapshot replacement via [`Catalog::with_stock`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// New snapshot with exactly one record's stock replaced. Returns `None`
    /// when `id` matches nothing; every other field is carried unchanged.
    #[must_use]
    pub fn with_stock(&self, id: ProductId, stock: u32) -> Option<Self> {
        self.get(id)?;
        let products = self
            .products
            .iter()
            .map(|product| {
                if product.id == id {
                    Product {
                        stock,
                        ..product.clone()
                    }
                } else {
                    product.clone()
                }
            })
            .collect();
        Some(Self { products })
    }

    /// Canonical six-product seed from the dashboard; fixture for tests and
    /// the CLI's session catalog.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            products: vec![
                seed(1, "Premium Coffee Beans", 24.99, 5, 10, "Beverages", "CB001"),
                seed(
                    2,
                    "Wireless Bluetooth Headphones",
                    89.99,
                    15,
                    5,
                    "Electronics",
                    "BH002",
                ),
                seed(3, "Organic Green Tea", 18.50, 3, 8, "Beverages", "GT003"),
                seed(4, "Smartphone Case", 29.99, 25, 10, "Accessories", "SC004"),
                seed(5, "Premium Chocolate Bar", 12.99, 1, 5, "Food", "CB005"),
                seed(6, "Notebook Set", 15.99, 40, 15, "Stationery", "NB006"),
            ],
        }
    }
}

fn seed(
    id: u64,
    name: &str,
    price: f64,
    stock: u32,
    low_stock_threshold: u32,
    category: &str,
    sku: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        stock,
        low_stock_threshold,
        category: Category(category.to_string()),
        sku: Sku(sku.to_string()),
    }
}
