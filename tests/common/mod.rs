#![allow(dead_code)]

use pocketbook::{core::ProfileBook, storage::JsonStorage};
use tempfile::TempDir;

/// Opens a profile book backed by a fresh temporary data directory.
pub fn setup_test_env() -> (ProfileBook, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    (open_in(&temp), temp)
}

/// Re-opens a book over the same directory, simulating a restart.
pub fn open_in(temp: &TempDir) -> ProfileBook {
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
    ProfileBook::open(Box::new(storage))
}

pub fn storage_in(temp: &TempDir) -> JsonStorage {
    JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage")
}
