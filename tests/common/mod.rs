//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use shoplist::item::{IdScheme, ItemId, Quantity};
use shoplist::store::ShoppingListStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Store with the given items added in order, each with quantity 1.
pub fn store_with(id_scheme: IdScheme, names: &[&str]) -> ShoppingListStore {
    let mut store = ShoppingListStore::new(id_scheme);
    for name in names {
        store.add_item(name, "1").expect("add should succeed");
    }
    store
}

pub fn ids(store: &ShoppingListStore) -> Vec<u32> {
    store.items().iter().map(|item| item.id.0).collect()
}

pub fn qty(value: u32) -> Quantity {
    Quantity::new(value).expect("non-zero quantity")
}

pub fn id(value: u32) -> ItemId {
    ItemId(value)
}
