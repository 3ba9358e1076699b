//! `localStorage`-backed session store.

use common::config::TOKEN_STORAGE_KEY;
use common::error::{Error, Result};
use common::session::SessionStore;
use wasm_bindgen::JsValue;
use web_sys::Storage;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage(&self) -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| Error::Storage("no window".into()))?
            .local_storage()
            .map_err(storage_error)?
            .ok_or_else(|| Error::Storage("localStorage unavailable".into()))
    }
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>> {
        self.storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .map_err(storage_error)
    }

    fn save(&self, token: &str) -> Result<()> {
        self.storage()?
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(storage_error)
    }

    fn clear(&self) -> Result<()> {
        self.storage()?
            .remove_item(TOKEN_STORAGE_KEY)
            .map_err(storage_error)
    }
}

fn storage_error(e: JsValue) -> Error {
    Error::Storage(format!("{e:?}"))
}
