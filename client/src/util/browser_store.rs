//! `localStorage`-backed preference store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements `nav::theme::PreferenceStore` so the theme preference can be
//! persisted without the core knowing about web-sys. Disabled storage,
//! privacy mode, and quota errors surface as `StoreError`, which the core
//! swallows.

use nav::theme::{PreferenceStore, StoreError};

#[cfg(test)]
#[path = "browser_store_test.rs"]
mod browser_store_test;

/// Handle to the window's `localStorage`. Stateless; create one per use.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StoreError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}
