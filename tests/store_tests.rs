// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finledger::db::Store;
use finledger::models::Kind;
use finledger::Error;
use rusqlite::Connection;
use tempfile::tempdir;

#[test]
fn initialize_is_idempotent_and_keeps_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.sqlite");

    let store = Store::open(&path).unwrap();
    store.append("food", 12.5, Kind::Expense).unwrap();
    for _ in 0..3 {
        store.initialize().unwrap();
    }
    assert_eq!(store.count().unwrap(), 1);
    store.close().unwrap();

    let reopened = Store::open(&path).unwrap();
    let all = reopened.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].category, "food");
    assert_eq!(all[0].amount, 12.5);
    assert_eq!(all[0].kind, Kind::Expense);
}

#[test]
fn ids_increase_in_insertion_order() {
    let store = Store::open_in_memory().unwrap();
    let a = store.append("a", 1.0, Kind::Income).unwrap();
    let b = store.append("b", 2.0, Kind::Expense).unwrap();
    let c = store.append("a", 3.0, Kind::Expense).unwrap();
    assert!(a.id < b.id && b.id < c.id);

    let cats: Vec<String> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|t| t.category)
        .collect();
    assert_eq!(cats, vec!["a", "b", "a"]);
}

#[test]
fn sum_by_category_filters_by_kind() {
    let store = Store::open_in_memory().unwrap();
    store.append("food", 10.0, Kind::Expense).unwrap();
    store.append("bonus", 50.0, Kind::Income).unwrap();

    let expenses = store.sum_by_category(Kind::Expense).unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].category, "food");
    assert!(expenses.iter().all(|t| t.category != "bonus"));

    let income = store.sum_by_category(Kind::Income).unwrap();
    assert_eq!(income[0].total, 50.0);
}

#[test]
fn kind_is_stored_as_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.sqlite");
    {
        let store = Store::open(&path).unwrap();
        store.append("salary", 100.0, Kind::Income).unwrap();
    }

    let conn = Connection::open(&path).unwrap();
    let t: String = conn
        .query_row("SELECT type FROM transactions", [], |r| r.get(0))
        .unwrap();
    assert_eq!(t, "income");

    let bad = conn.execute(
        "INSERT INTO transactions(category, amount, type) VALUES ('x', 1.0, 'transfer')",
        [],
    );
    assert!(bad.is_err());
}

#[test]
fn overflowing_total_is_reported_not_misread() {
    let store = Store::open_in_memory().unwrap();
    store.append("big", 1e308, Kind::Expense).unwrap();
    store.append("big", 1e308, Kind::Expense).unwrap();

    match store.sum_by_category(Kind::Expense) {
        Err(Error::TotalOverflow(category)) => assert_eq!(category, "big"),
        other => panic!("expected overflow, got {:?}", other),
    }
}
