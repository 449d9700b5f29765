mod common;

use std::fs;

use pocketbook::domain::{IncomeType, TransactionDraft};
use pocketbook::storage::StorageBackend;

#[test]
fn full_state_survives_a_restart() {
    let (mut book, guard) = common::setup_test_env();
    let id = book
        .create_profile("Maya")
        .expect("save")
        .expect("id assigned");
    book.add_transaction(
        id,
        TransactionDraft::income(20.0, Some(IncomeType::Gift), "Gift", false),
    )
    .expect("save");
    book.add_transaction(id, TransactionDraft::expense(4.0, "Food", None, true))
        .expect("save");
    book.add_goal(id, "Bike", 120.0).expect("save");
    book.set_budget(id, "Food", 30.0).expect("save");
    let snapshot = book.profile(id).expect("profile").clone();

    let reloaded = common::open_in(&guard);
    assert_eq!(reloaded.profiles().len(), 1);
    assert_eq!(reloaded.profile(id), Some(&snapshot));
}

#[test]
fn saved_collection_round_trips_deep_equal() {
    let (mut book, guard) = common::setup_test_env();
    book.create_profile("Maya").expect("save");
    book.create_profile("Theo").expect("save");
    let saved = book.profiles().to_vec();

    let storage = common::storage_in(&guard);
    assert_eq!(storage.load(), saved);
}

#[test]
fn empty_storage_loads_as_empty_collection() {
    let (book, _guard) = common::setup_test_env();
    assert!(book.is_empty());
}

#[test]
fn corrupt_storage_loads_as_empty_collection() {
    let (_, guard) = common::setup_test_env();
    let storage = common::storage_in(&guard);
    fs::write(storage.profiles_path(), "definitely not json").expect("write garbage");

    let book = common::open_in(&guard);
    assert!(book.is_empty());
}

#[test]
fn first_mutation_after_corruption_rewrites_the_slot() {
    let (_, guard) = common::setup_test_env();
    let storage = common::storage_in(&guard);
    fs::write(storage.profiles_path(), "[{broken").expect("write garbage");

    let mut book = common::open_in(&guard);
    let id = book
        .create_profile("Riley")
        .expect("save")
        .expect("id assigned");

    let reloaded = common::open_in(&guard);
    assert!(reloaded.profile(id).is_some());
}
