//! localStorage を使った永続ストア

use gloo::storage::{LocalStorage, Storage};
use profpilot_common::{Error, HandoffStore, KeyValueStore, Result};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn storage_error(e: JsValue) -> Error {
    Error::Storage(format!("{:?}", e))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        LocalStorage::raw().remove_item(key).map_err(storage_error)
    }
}

pub fn handoff_store() -> HandoffStore<LocalStore> {
    HandoffStore::new(LocalStore)
}
