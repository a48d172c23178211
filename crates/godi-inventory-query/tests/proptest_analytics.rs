// SPDX-License-Identifier: Apache-2.0

use godi_inventory_model::{Catalog, Product, ProductId};
use godi_inventory_query::{filter_products, AnalyticsSnapshot, CategoryFilter, ProductFilter, TOP_LIST_LEN};
use proptest::prelude::*;
use proptest::test_runner::Config;

prop_compose! {
    fn arb_product_fields()(
        name in "[A-Za-z][A-Za-z0-9]{0,15}",
        price in 0.0_f64..1_000.0,
        stock in 0_u32..10_000,
        threshold in 0_u32..100,
        category in "[A-Z][a-z]{1,8}",
        sku in "[A-Z]{2}[0-9]{3}",
    ) -> (String, f64, u32, u32, String, String) {
        (name, price, stock, threshold, category, sku)
    }
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(arb_product_fields(), 0..24).prop_map(|fields| {
        let products = fields
            .into_iter()
            .enumerate()
            .map(|(index, (name, price, stock, threshold, category, sku))| {
                Product::new(
                    ProductId::new(index as u64 + 1),
                    &name,
                    price,
                    stock,
                    threshold,
                    &category,
                    &sku,
                )
                .expect("generated product is valid")
            })
            .collect();
        Catalog::new(products)
    })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn low_and_well_stocked_partition_the_catalog(catalog in arb_catalog()) {
        let snapshot = AnalyticsSnapshot::compute(&catalog);
        prop_assert_eq!(
            snapshot.low_stock_items.len() + snapshot.well_stocked_items.len(),
            snapshot.total_products
        );
        // Every out-of-stock product is also low-stock.
        for product in &snapshot.out_of_stock_items {
            prop_assert!(snapshot.low_stock_items.iter().any(|p| p.id == product.id));
        }
    }

    #[test]
    fn category_values_sum_to_the_total(catalog in arb_catalog()) {
        let snapshot = AnalyticsSnapshot::compute(&catalog);
        let category_total: f64 = snapshot.category_stats.iter().map(|s| s.value).sum();
        prop_assert!((category_total - snapshot.total_stock_value).abs() < 1e-6);
        let category_count: usize = snapshot.category_stats.iter().map(|s| s.count).sum();
        prop_assert_eq!(category_count, snapshot.total_products);
    }

    #[test]
    fn top_lists_never_exceed_their_cap(catalog in arb_catalog()) {
        let snapshot = AnalyticsSnapshot::compute(&catalog);
        prop_assert!(snapshot.top_categories.len() <= TOP_LIST_LEN);
        prop_assert!(snapshot.top_value_products.len() <= TOP_LIST_LEN);
    }

    #[test]
    fn filtering_never_invents_or_reorders_products(
        catalog in arb_catalog(),
        needle in "[a-z]{0,3}",
    ) {
        let filter = ProductFilter::new(&needle, CategoryFilter::All);
        let hits = filter_products(&catalog, &filter);
        let mut cursor = catalog.products().iter();
        for hit in &hits {
            // Each hit must appear in the remaining source suffix: subsequence.
            prop_assert!(cursor.any(|p| p.id == hit.id));
        }
    }

    #[test]
    fn empty_search_matches_the_whole_catalog(catalog in arb_catalog()) {
        let hits = filter_products(&catalog, &ProductFilter::default());
        prop_assert_eq!(hits.len(), catalog.len());
    }
}
