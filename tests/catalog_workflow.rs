// ==============================================
// CATALOG WORKFLOW TESTS (integration)
// ==============================================
//
// A librarian session against a seeded catalog: browse, lend, search,
// sort, snapshot and restore.

use shelfkit::prelude::*;

fn seed() -> Vec<NewBook> {
    vec![
        NewBook::new("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", "978-0743273565", 1925)
            .with_description("Jay Gatsby and the green light across the bay."),
        NewBook::new("Pride and Prejudice", "Jane Austen", "Fiction", "978-0141439518", 1813),
        NewBook::new("Emma", "Jane Austen", "Fiction", "978-0141439587", 1815),
        NewBook::new("The Art of War", "Sun Tzu", "Philosophy", "978-1599869773", -500),
        NewBook::new("The Republic", "Plato", "Philosophy", "978-0872201361", -375),
        NewBook::new("Cosmos", "Carl Sagan", "Science", "978-0345539434", 1980),
    ]
}

fn catalog() -> Catalog {
    CatalogBuilder::new()
        .cache_capacity(3)
        .new_books(seed())
        .try_build()
        .unwrap()
}

// ==============================================
// Browsing
// ==============================================

#[test]
fn viewing_books_fills_recent_cache_in_order() {
    let mut catalog = catalog();
    for id in [1, 2, 3, 4] {
        assert!(catalog.book(id).is_some());
    }
    assert_eq!(catalog.recent().keys_lru_to_mru(), vec![2, 3, 4]);

    catalog.book(2);
    assert_eq!(catalog.recent().keys_lru_to_mru(), vec![3, 4, 2]);
    catalog.recent().check_invariants().unwrap();
}

#[test]
fn suggestions_follow_typing() {
    let catalog = catalog();
    assert_eq!(catalog.suggestions("c"), vec!["carl sagan", "cosmos"]);
    assert_eq!(catalog.suggestions("JANE"), vec!["jane austen"]);
    assert_eq!(
        catalog.suggestions("the "),
        vec!["the art of war", "the great gatsby", "the republic"]
    );
    catalog.suggestion_index().check_invariants().unwrap();
}

// ==============================================
// Lending
// ==============================================

#[test]
fn borrowing_updates_filters_and_cached_view() {
    let mut catalog = catalog();
    assert_eq!(catalog.book(3).map(|b| b.status), Some(BookStatus::Available));

    assert_eq!(catalog.toggle_status(3), Some(BookStatus::Borrowed));
    assert_eq!(catalog.book(3).map(|b| b.status), Some(BookStatus::Borrowed));

    let borrowed: Vec<_> = catalog
        .filter(None, Some(BookStatus::Borrowed))
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(borrowed, vec!["Emma"]);
    assert_eq!(
        catalog.filter(Some("Fiction"), Some(BookStatus::Available)).len(),
        2
    );
}

#[test]
fn removing_a_viewed_book() {
    let mut catalog = catalog();
    catalog.book(5);
    let removed = catalog.remove_book(5).unwrap();
    assert_eq!(removed.author, "Plato");
    assert!(!catalog.recent().contains(&5));
    assert!(catalog.find_by_isbn("978-0872201361").is_none());

    let meditations = NewBook::new(
        "Meditations",
        "Marcus Aurelius",
        "Philosophy",
        "978-0812968255",
        180,
    );
    assert_eq!(catalog.add_book(meditations).unwrap(), 7);
    assert_eq!(catalog.find_by_isbn("978-0812968255").map(|b| b.id), Some(7));
}

// ==============================================
// Discovery
// ==============================================

#[test]
fn search_and_recommend() {
    let catalog = catalog();
    let hits: Vec<_> = catalog.search("green light").iter().map(|b| b.id).collect();
    assert_eq!(hits, vec![1]);

    // Emma shares category and author with Pride and Prejudice.
    let recommended: Vec<_> = catalog.recommendations(2).iter().map(|b| b.id).collect();
    assert_eq!(recommended, vec![3, 1]);

    let philosophy: Vec<_> = catalog.recommendations(4).iter().map(|b| b.id).collect();
    assert_eq!(philosophy, vec![5]);
}

#[test]
fn sorting_views_do_not_reorder_catalog() {
    let catalog = catalog();
    let years: Vec<_> = catalog
        .sorted(SortField::PublishedYear, SortDirection::Ascending)
        .iter()
        .map(|b| b.published_year)
        .collect();
    assert_eq!(years, vec![-500, -375, 1813, 1815, 1925, 1980]);

    let authors: Vec<_> = catalog
        .sorted_by_name("author", SortDirection::Descending)
        .unwrap()
        .into_iter()
        .map(|b| b.author)
        .collect();
    assert_eq!(authors.first().map(String::as_str), Some("Sun Tzu"));
    assert_eq!(authors.last().map(String::as_str), Some("Carl Sagan"));

    assert_eq!(catalog.books()[0].title, "The Great Gatsby");
    assert!(matches!(
        catalog.sorted_by_name("isbn", SortDirection::Ascending),
        Err(SortError::UnknownField(_))
    ));
}

// ==============================================
// Snapshots
// ==============================================

#[test]
fn snapshot_round_trip_keeps_state_but_not_cache() {
    let mut catalog = catalog();
    catalog.toggle_status(1);
    catalog.book(1);
    let text = catalog.snapshot().unwrap();

    let mut restored = CatalogBuilder::new()
        .cache_capacity(3)
        .snapshot(text)
        .try_build()
        .unwrap();
    assert_eq!(restored.books(), catalog.books());
    assert!(restored.recent().is_empty());
    assert_eq!(restored.suggestions("plato"), vec!["plato"]);
    let walden = NewBook::new("Walden", "Henry David Thoreau", "Nature", "978-0486284958", 1854);
    assert_eq!(restored.add_book(walden).unwrap(), 7);
}
