//! Catalog store integration tests

use biblion::catalog::Catalog;
use biblion::error::AppError;
use biblion::models::ItemKind;
use biblion::records::parse_catalog;

fn book(author: &str, year: i32) -> ItemKind {
    ItemKind::Book {
        author: author.into(),
        year,
    }
}

#[test]
fn test_ids_are_unique_and_items_keep_insertion_order() {
    let mut catalog = Catalog::new();
    for i in 0..5 {
        catalog.add_item(format!("Title{}", i), book("Author", 2000 + i));
    }

    let ids: Vec<u32> = catalog.items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let titles: Vec<&str> = catalog
        .items()
        .iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Title0", "Title1", "Title2", "Title3", "Title4"]);
}

#[test]
fn test_deleted_ids_are_not_reused() {
    let mut catalog = Catalog::new();
    catalog.add_item("A".into(), book("X", 2000));
    catalog.add_item("B".into(), book("Y", 2001));
    catalog.delete_item(2).unwrap();

    let item_id = catalog.add_item("C".into(), book("Z", 2002)).id;
    assert_eq!(item_id, 3);
}

#[test]
fn test_edit_replaces_title_and_reports_not_found() {
    let mut catalog = Catalog::new();
    catalog.add_item("Old".into(), book("X", 2000));

    catalog.edit_item(1, "New".into()).unwrap();
    assert_eq!(catalog.item(1).unwrap().title, "New");

    let err = catalog.edit_item(99, "Nope".into()).unwrap_err();
    assert!(matches!(err, AppError::ItemNotFound(99)));
}

#[test]
fn test_delete_reports_not_found_vs_removed() {
    let mut catalog = Catalog::new();
    catalog.add_item("A".into(), book("X", 2000));

    let removed = catalog.delete_item(1).unwrap();
    assert_eq!(removed.title, "A");
    assert!(catalog.is_empty());

    let err = catalog.delete_item(1).unwrap_err();
    assert!(matches!(err, AppError::ItemNotFound(1)));
}

#[test]
fn test_borrow_registers_borrower_and_bumps_popularity_once() {
    let mut catalog = Catalog::new();
    catalog.add_item("A".into(), book("X", 2000));

    let receipt = catalog.borrow_item(None, 1).unwrap();
    assert_eq!(receipt.user_id, 1);
    assert!(receipt.new_borrower);
    assert_eq!(catalog.item(1).unwrap().popularity, 1);

    let holdings = catalog.borrower_holdings();
    assert_eq!(holdings.len(), 1);
    assert_eq!(holdings[0].user_id, 1);
    assert_eq!(holdings[0].titles, vec!["A".to_string()]);
}

#[test]
fn test_second_borrow_by_other_user_fails_and_changes_nothing() {
    let mut catalog = Catalog::new();
    catalog.add_item("A".into(), book("X", 2000));
    catalog.borrow_item(None, 1).unwrap();

    let before_pop = catalog.item(1).unwrap().popularity;
    let before_holdings = catalog.borrower_holdings();

    let err = catalog.borrow_item(None, 1).unwrap_err();
    assert!(matches!(
        err,
        AppError::AlreadyBorrowed { item_id: 1, holder: 1 }
    ));

    // State after the failed attempt is identical to state before it.
    assert_eq!(catalog.item(1).unwrap().popularity, before_pop);
    assert_eq!(catalog.borrower_holdings(), before_holdings);
}

#[test]
fn test_duplicate_borrow_by_same_user_fails() {
    let mut catalog = Catalog::new();
    catalog.add_item("A".into(), book("X", 2000));
    let receipt = catalog.borrow_item(None, 1).unwrap();

    let err = catalog.borrow_item(Some(receipt.user_id), 1).unwrap_err();
    assert!(matches!(
        err,
        AppError::DuplicateBorrow { user_id: 1, item_id: 1 }
    ));
    assert_eq!(catalog.item(1).unwrap().popularity, 1);
}

#[test]
fn test_borrow_unknown_item_and_unknown_user() {
    let mut catalog = Catalog::new();
    catalog.add_item("A".into(), book("X", 2000));

    let err = catalog.borrow_item(None, 42).unwrap_err();
    assert!(matches!(err, AppError::ItemNotFound(42)));

    let err = catalog.borrow_item(Some(9), 1).unwrap_err();
    assert!(matches!(err, AppError::UserNotFound(9)));
}

#[test]
fn test_hot_picks_is_stable_on_ties() {
    let mut catalog = Catalog::new();
    catalog.add_item("A".into(), book("X", 2000));
    catalog.add_item("B".into(), book("Y", 2001));
    catalog.add_item("C".into(), book("Z", 2002));

    // A and B reach popularity 2, C reaches 3, via borrow/return cycles.
    for (item_id, borrows) in [(1u32, 2u32), (2, 2), (3, 3)] {
        for _ in 0..borrows {
            catalog.borrow_item(None, item_id).unwrap();
            catalog.return_item(item_id).unwrap();
        }
    }

    let picks: Vec<&str> = catalog
        .hot_picks()
        .iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(picks, vec!["C", "A", "B"]);
}

#[test]
fn test_delete_of_borrowed_item_clears_lending_and_held_set() {
    let mut catalog = Catalog::new();
    catalog.add_item("A".into(), book("X", 2000));
    catalog.add_item("B".into(), book("Y", 2001));
    let receipt = catalog.borrow_item(None, 1).unwrap();
    catalog.borrow_item(Some(receipt.user_id), 2).unwrap();

    catalog.delete_item(1).unwrap();

    let holdings = catalog.borrower_holdings();
    assert_eq!(holdings.len(), 1);
    assert_eq!(holdings[0].titles, vec!["B".to_string()]);

    // The freed id belongs to no item; borrowing it reports not found.
    let err = catalog.borrow_item(None, 1).unwrap_err();
    assert!(matches!(err, AppError::ItemNotFound(1)));
}

#[test]
fn test_return_frees_item_for_the_next_borrower() {
    let mut catalog = Catalog::new();
    catalog.add_item("A".into(), book("X", 2000));

    let first = catalog.borrow_item(None, 1).unwrap();
    assert_eq!(catalog.return_item(1).unwrap(), first.user_id);

    let second = catalog.borrow_item(None, 1).unwrap();
    assert_ne!(second.user_id, first.user_id);
    assert_eq!(catalog.item(1).unwrap().popularity, 2);
}

#[test]
fn test_return_failure_paths() {
    let mut catalog = Catalog::new();
    catalog.add_item("A".into(), book("X", 2000));

    let err = catalog.return_item(1).unwrap_err();
    assert!(matches!(err, AppError::NotBorrowed(1)));

    let err = catalog.return_item(5).unwrap_err();
    assert!(matches!(err, AppError::ItemNotFound(5)));
}

#[test]
fn test_load_records_assigns_ids_in_record_order() {
    let mut catalog = Catalog::new();
    catalog.add_item("Existing".into(), book("X", 2000));

    let records = parse_catalog(
        "1,Dune,FrankHerbert,1965\n2,Time,TimeInc,Smith,Jones.\n3,Herald,CityPress,2024-01-05",
    )
    .unwrap();
    catalog.load_records(records);

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.item(2).unwrap().title, "Dune");
    assert_eq!(catalog.item(3).unwrap().title, "Time");
    assert_eq!(catalog.item(4).unwrap().title, "Herald");
}
