//! `window.localStorage` backend for the goal store
//!
//! The storage handle is looked up on every call, so `BrowserStorage` is a
//! zero-sized value that satisfies the store's `Send + Sync` bound.

use goalboard_core::KeyValueStore;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{Result, UiError};

/// Goal storage backed by the page's local storage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

/// Resolve `window.localStorage`
///
/// # Errors
/// Returns `UiError::NoWindow` outside a page and
/// `UiError::StorageUnavailable` when storage is disabled or blocked.
fn local_storage() -> Result<web_sys::Storage> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    window
        .local_storage()
        .map_err(|e| UiError::StorageUnavailable(js_reason(&e)))?
        .ok_or_else(|| UiError::StorageUnavailable("localStorage is disabled".to_string()))
}

/// Best-effort text for a thrown JavaScript value
pub(crate) fn js_reason(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> goalboard_core::Result<Option<String>> {
        local_storage()
            .and_then(|storage| {
                storage
                    .get_item(key)
                    .map_err(|e| UiError::Js(js_reason(&e)))
            })
            .map_err(|e| e.into_storage_error(key))
    }

    fn set(&self, key: &str, value: &str) -> goalboard_core::Result<()> {
        local_storage()
            .and_then(|storage| {
                storage
                    .set_item(key, value)
                    .map_err(|e| UiError::Js(js_reason(&e)))
            })
            .map_err(|e| e.into_storage_error(key))
    }

    fn remove(&self, key: &str) -> goalboard_core::Result<()> {
        local_storage()
            .and_then(|storage| {
                storage
                    .remove_item(key)
                    .map_err(|e| UiError::Js(js_reason(&e)))
            })
            .map_err(|e| e.into_storage_error(key))
    }
}
