// SPDX-License-Identifier: Apache-2.0

use godi_inventory_model::{
    is_low_stock, Catalog, Product, ProductId, Sku, StockStatus, NAME_MAX_LEN,
};

#[test]
fn product_parse_rejects_hidden_trimming_and_empty_fields() {
    assert!(Product::new(ProductId::new(1), "Coffee", 9.99, 5, 2, "Beverages", "CB001").is_ok());
    assert!(Product::new(ProductId::new(1), "", 9.99, 5, 2, "Beverages", "CB001").is_err());
    assert!(Product::new(ProductId::new(1), " Coffee", 9.99, 5, 2, "Beverages", "CB001").is_err());
    assert!(Product::new(ProductId::new(1), "Coffee ", 9.99, 5, 2, "Beverages", "CB001").is_err());
    assert!(Product::new(ProductId::new(1), "Coffee", 9.99, 5, 2, "", "CB001").is_err());
    assert!(Product::new(ProductId::new(1), "Coffee", 9.99, 5, 2, "Beverages", " CB001").is_err());
}

#[test]
fn product_parse_rejects_invalid_prices() {
    assert!(Product::new(ProductId::new(1), "Coffee", -0.01, 5, 2, "Beverages", "CB001").is_err());
    assert!(
        Product::new(ProductId::new(1), "Coffee", f64::NAN, 5, 2, "Beverages", "CB001").is_err()
    );
    assert!(
        Product::new(ProductId::new(1), "Coffee", f64::INFINITY, 5, 2, "Beverages", "CB001")
            .is_err()
    );
    assert!(Product::new(ProductId::new(1), "Free Sample", 0.0, 5, 2, "Promo", "FS001").is_ok());
}

#[test]
fn max_size_limits_are_enforced() {
    let too_long_name = "n".repeat(NAME_MAX_LEN + 1);
    assert!(
        Product::new(ProductId::new(1), &too_long_name, 1.0, 0, 0, "Misc", "MS001").is_err()
    );
    assert!(Sku::parse(&"s".repeat(64)).is_err());
}

#[test]
fn classifier_boundaries_sit_exactly_on_the_threshold_multiples() {
    let threshold = 8;
    assert_eq!(StockStatus::classify(0, threshold), StockStatus::Out);
    assert_eq!(StockStatus::classify(1, threshold), StockStatus::Low);
    assert_eq!(StockStatus::classify(threshold, threshold), StockStatus::Low);
    assert_eq!(
        StockStatus::classify(threshold + 1, threshold),
        StockStatus::Medium
    );
    assert_eq!(
        StockStatus::classify(2 * threshold, threshold),
        StockStatus::Medium
    );
    assert_eq!(
        StockStatus::classify(2 * threshold + 1, threshold),
        StockStatus::Good
    );
}

#[test]
fn zero_threshold_classifies_any_positive_stock_as_good() {
    // Degenerate case preserved on purpose: with threshold 0, `Low` and
    // `Medium` are unreachable for positive stock.
    assert_eq!(StockStatus::classify(0, 0), StockStatus::Out);
    assert_eq!(StockStatus::classify(1, 0), StockStatus::Good);
    assert_eq!(StockStatus::classify(100, 0), StockStatus::Good);
}

#[test]
fn low_stock_membership_uses_a_different_boundary_than_the_classifier() {
    // stock == threshold is both `Low` (badge) and low-stock (alert), but
    // stock == 0 with threshold 0 is `Out` while still low-stock.
    assert!(is_low_stock(0, 0));
    assert_eq!(StockStatus::classify(0, 0), StockStatus::Out);
    // stock just above threshold leaves the alert set but stays `Medium`.
    assert!(!is_low_stock(9, 8));
    assert_eq!(StockStatus::classify(9, 8), StockStatus::Medium);
}

#[test]
fn sample_catalog_matches_the_dashboard_seed() {
    let catalog = Catalog::sample();
    assert_eq!(catalog.len(), 6);

    let tea = catalog.get(ProductId::new(3)).expect("tea");
    assert_eq!(tea.name, "Organic Green Tea");
    assert_eq!(tea.sku.as_str(), "GT003");
    assert_eq!(tea.category.as_str(), "Beverages");
    assert_eq!(tea.stock, 3);
    assert_eq!(tea.low_stock_threshold, 8);

    let notebook = catalog.get(ProductId::new(6)).expect("notebook");
    assert!((notebook.stock_value() - 639.60).abs() < 1e-9);
}

#[test]
fn with_stock_replaces_exactly_one_record_and_nothing_else() {
    let catalog = Catalog::sample();
    let next = catalog
        .with_stock(ProductId::new(1), 0)
        .expect("known product");
    assert_eq!(next.get(ProductId::new(1)).expect("coffee").stock, 0);

    let before = catalog.get(ProductId::new(1)).expect("coffee");
    let after = next.get(ProductId::new(1)).expect("coffee");
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, before.name);
    assert!((after.price - before.price).abs() < f64::EPSILON);
    assert_eq!(after.sku, before.sku);
    assert_eq!(after.category, before.category);
    assert_eq!(after.low_stock_threshold, before.low_stock_threshold);

    for id in 2..=6 {
        assert_eq!(
            next.get(ProductId::new(id)),
            catalog.get(ProductId::new(id))
        );
    }
}

#[test]
fn with_stock_on_an_unknown_id_returns_none() {
    let catalog = Catalog::sample();
    assert!(catalog.with_stock(ProductId::new(999), 10).is_none());
}
