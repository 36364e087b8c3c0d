//! Example demonstrating keyed heap sort over catalog records.
//!
//! Run with: cargo run --example basic_sort

use shelfkit::builder::CatalogBuilder;
use shelfkit::catalog::NewBook;
use shelfkit::sort::{Collation, KeyedHeapSort, SortDirection, SortField};

fn main() {
    println!("=== KeyedHeapSort ===\n");

    let catalog = match CatalogBuilder::new()
        .new_books([
            NewBook::new(
                "The Great Gatsby",
                "F. Scott Fitzgerald",
                "Fiction",
                "978-0743273565",
                1925,
            ),
            NewBook::new("to kill a mockingbird", "Harper Lee", "Fiction", "978-0446310789", 1960),
            NewBook::new("Pride and Prejudice", "Jane Austen", "Fiction", "978-0141439518", 1813),
            NewBook::new("The Art of War", "Sun Tzu", "Philosophy", "978-1599869773", -500),
        ])
        .try_build()
    {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("{err}");
            return;
        },
    };
    let books = catalog.books();

    for name in ["publishedYear", "title", "genre"] {
        match KeyedHeapSort::by_name(name, SortDirection::Ascending) {
            Ok(sorter) => {
                let titles: Vec<_> = sorter
                    .sort(books)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|b| b.title)
                    .collect();
                println!("   by {name}: {titles:?}");
            },
            Err(err) => println!("   by {name}: {err}"),
        }
    }

    let folded = KeyedHeapSort::new(SortField::Title, SortDirection::Ascending)
        .with_collation(Collation::CaseInsensitive);
    let titles: Vec<_> = folded
        .sort(books)
        .unwrap_or_default()
        .into_iter()
        .map(|b| b.title)
        .collect();
    println!("   by title, case-insensitive: {titles:?}");
}
