// SPDX-License-Identifier: Apache-2.0
#![forbid(unsafe_code)]

mod session;

use clap::{ArgAction, Parser, Subcommand};
use godi_inventory_model::{Catalog, Notification, Product, ProductId};
use godi_inventory_query::{
    categories, filter_products, low_stock_products, AnalyticsSnapshot, CategoryFilter,
    ProductFilter,
};
use godi_inventory_store::{record_sale, restock, TransactionOutcome};
use serde_json::json;
use session::{PendingTransaction, SessionState};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "godi-inventory")]
#[command(about = "GODI inventory operations CLI")]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
    #[arg(long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filtered product grid
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = CategoryFilter::ALL_LABEL)]
        category: String,
    },
    /// Category selector choices
    Categories,
    /// Alert-banner feed of products at or below their reorder point
    LowStock,
    /// Record a sale of one product
    Sale {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        qty: u32,
    },
    /// Add stock to one product
    Restock {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        qty: u32,
    },
    /// Full-catalog analytics snapshot
    Analytics,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliExit {
    Success = 0,
    Validation = 3,
}

impl From<CliExit> for ExitCode {
    fn from(code: CliExit) -> Self {
        Self::from(code as u8)
    }
}

fn init_tracing(quiet: bool, verbose: u8) {
    let level = if quiet {
        tracing::Level::ERROR
    } else {
        match verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    // No persistence by design: every invocation works on the seed catalog.
    let catalog = Catalog::sample();

    let code = match cli.command {
        Commands::List { search, category } => run_list(&catalog, &search, &category, cli.json),
        Commands::Categories => run_categories(&catalog, cli.json),
        Commands::LowStock => run_low_stock(&catalog, cli.json),
        Commands::Sale { id, qty } => run_sale(&catalog, id, qty, cli.json),
        Commands::Restock { id, qty } => run_restock(&catalog, id, qty, cli.json),
        Commands::Analytics => run_analytics(&catalog, cli.json),
    };
    code.into()
}

fn print_product_row(product: &Product) {
    println!(
        "{:>4}  {:<32} {:<8} {:<12} {:>9} {:>6}  {}",
        product.id,
        product.name,
        product.sku,
        product.category,
        format!("${:.2}", product.price),
        product.stock,
        product.stock_status().label(),
    );
}

fn print_product_table(products: &[Product]) {
    if products.is_empty() {
        println!("No products found");
        return;
    }
    println!(
        "{:>4}  {:<32} {:<8} {:<12} {:>9} {:>6}  {}",
        "ID", "NAME", "SKU", "CATEGORY", "PRICE", "STOCK", "STATUS"
    );
    for product in products {
        print_product_row(product);
    }
}

fn print_notifications(notifications: &[Notification]) {
    for notification in notifications {
        println!(
            "[{}] {}: {}",
            notification.severity.as_str().to_uppercase(),
            notification.title,
            notification.description,
        );
    }
}

fn run_list(catalog: &Catalog, search: &str, category: &str, as_json: bool) -> CliExit {
    let session = SessionState::new(search, CategoryFilter::parse(category));
    let filter = ProductFilter::new(&session.search_term, session.category.clone());
    let products = filter_products(catalog, &filter);
    tracing::debug!(total = catalog.len(), visible = products.len(), "list");
    if as_json {
        println!("{}", json!({ "products": products }));
    } else {
        print_product_table(&products);
    }
    CliExit::Success
}

fn run_categories(catalog: &Catalog, as_json: bool) -> CliExit {
    let choices = categories(catalog);
    if as_json {
        println!("{}", json!({ "categories": choices }));
    } else {
        for choice in choices {
            println!("{choice}");
        }
    }
    CliExit::Success
}

fn run_low_stock(catalog: &Catalog, as_json: bool) -> CliExit {
    let products = low_stock_products(catalog);
    if as_json {
        println!("{}", json!({ "low_stock": products }));
    } else if products.is_empty() {
        println!("No products below their reorder point");
    } else {
        print_product_table(&products);
    }
    CliExit::Success
}

fn run_sale(catalog: &Catalog, id: u64, qty: u32, as_json: bool) -> CliExit {
    let mut session = SessionState::default();
    session.begin_sale(ProductId::new(id));
    let Some(PendingTransaction::Sale { product, quantity }) = session.confirm(qty) else {
        return CliExit::Validation;
    };
    finish_transaction(record_sale(catalog, product, quantity), product, as_json)
}

fn run_restock(catalog: &Catalog, id: u64, qty: u32, as_json: bool) -> CliExit {
    let mut session = SessionState::default();
    session.begin_restock(ProductId::new(id));
    let Some(PendingTransaction::Restock { product, quantity }) = session.confirm(qty) else {
        return CliExit::Validation;
    };
    finish_transaction(restock(catalog, product, quantity), product, as_json)
}

fn finish_transaction(outcome: TransactionOutcome, id: ProductId, as_json: bool) -> CliExit {
    match outcome {
        TransactionOutcome::Applied {
            catalog: next,
            notifications,
        } => {
            tracing::info!(product = %id, "transaction applied");
            if as_json {
                println!(
                    "{}",
                    json!({
                        "applied": true,
                        "product": next.get(id),
                        "notifications": notifications,
                    })
                );
            } else {
                print_notifications(&notifications);
                if let Some(product) = next.get(id) {
                    print_product_row(product);
                }
            }
            CliExit::Success
        }
        TransactionOutcome::Rejected { reason } => {
            tracing::warn!(product = %id, reason = %reason, "transaction rejected");
            if as_json {
                println!("{}", json!({ "applied": false, "reason": reason }));
            } else {
                eprintln!("enter a valid quantity: rejected ({reason})");
            }
            CliExit::Validation
        }
    }
}

fn run_analytics(catalog: &Catalog, as_json: bool) -> CliExit {
    let snapshot = AnalyticsSnapshot::compute(catalog);
    if as_json {
        println!("{}", json!(snapshot));
        return CliExit::Success;
    }

    println!("Total Products       {}", snapshot.total_products);
    println!("Stock Value          ${:.2}", snapshot.total_stock_value);
    println!("Avg Stock Level      {:.1}", snapshot.average_stock_level);
    println!("Well Stocked         {} items", snapshot.well_stocked_items.len());
    println!("Low Stock            {} items", snapshot.low_stock_items.len());
    println!("Out of Stock         {} items", snapshot.out_of_stock_items.len());

    println!("\nTop Categories by Value");
    for (index, stats) in snapshot.top_categories.iter().enumerate() {
        println!(
            "#{} {:<12} ${:<10.2} {} items, {} units",
            index + 1,
            stats.category,
            stats.value,
            stats.count,
            stats.stock,
        );
    }

    println!("\nHighest Value Inventory");
    for (index, product) in snapshot.top_value_products.iter().enumerate() {
        println!(
            "#{} {:<32} SKU: {} \u{2022} {} units @ ${:.2} = ${:.2}",
            index + 1,
            product.name,
            product.sku,
            product.stock,
            product.price,
            product.stock_value(),
        );
    }
    CliExit::Success
}
