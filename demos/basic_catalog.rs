//! Example walking through a small catalog session.
//!
//! Run with: RUST_LOG=shelfkit=debug cargo run --example basic_catalog

use shelfkit::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CatalogError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut catalog = CatalogBuilder::new()
        .cache_capacity(2)
        .new_books([
            NewBook::new(
                "The Great Gatsby",
                "F. Scott Fitzgerald",
                "Fiction",
                "978-0743273565",
                1925,
            ),
            NewBook::new("To Kill a Mockingbird", "Harper Lee", "Fiction", "978-0446310789", 1960),
            NewBook::new("1984", "George Orwell", "Fiction", "978-0451524935", 1949),
            NewBook::new("The Republic", "Plato", "Philosophy", "978-0872201361", -375),
        ])
        .try_build()?;

    println!("=== Catalog ===\n");

    println!("1. Suggestions for \"the\"");
    for word in catalog.suggestions("the") {
        println!("   {word}");
    }
    println!();

    println!("2. Recently viewed (capacity 2)");
    catalog.book(1);
    catalog.book(2);
    catalog.book(1);
    catalog.book(3);
    println!("   LRU -> MRU: {:?} (2 was evicted)", catalog.recent().keys_lru_to_mru());
    println!();

    println!("3. Borrowing");
    let status = catalog.toggle_status(3);
    println!("   1984 is now {status:?}");
    println!(
        "   available fiction: {}",
        catalog.filter(Some("Fiction"), Some(BookStatus::Available)).len()
    );
    println!();

    println!("4. Sorted by year, newest first");
    for book in catalog.sorted(SortField::PublishedYear, SortDirection::Descending) {
        println!("   {:>5}  {}", book.published_year, book.title);
    }
    println!();

    println!("5. Recommendations for 1984");
    for book in catalog.recommendations(3) {
        println!("   {} by {}", book.title, book.author);
    }
    println!();

    println!("6. Snapshot");
    println!("   {}", catalog.snapshot()?);
    Ok(())
}
