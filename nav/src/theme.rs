//! Dark mode preference with persisted and system sources.
//!
//! Persisted choice wins; without one, the host's `prefers-color-scheme`
//! signal decides. Storage is best effort: a failed write never undoes the
//! in-memory flip, it only means the choice will not survive a reload.

use std::collections::HashMap;

use crate::consts::THEME_STORAGE_KEY;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Errors from a [`PreferenceStore`] write.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage rejected the write: {0}")]
    Rejected(String),
}

/// Opaque key-value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process [`PreferenceStore`] for hosts without persistent storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, like a browser in privacy mode.
    #[must_use]
    pub fn read_only() -> Self {
        Self { values: HashMap::new(), read_only: true }
    }

    #[must_use]
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Unavailable);
        }
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Where the current theme value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeSource {
    /// Explicit user choice read from or written to storage.
    Persisted,
    /// Host colour-scheme preference (or the built-in default before load).
    #[default]
    SystemDefault,
}

/// Resolved theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark: bool,
    pub source: ThemeSource,
}

impl Default for ThemeState {
    /// Dark until the stored or system preference has been read.
    fn default() -> Self {
        Self { is_dark: true, source: ThemeSource::SystemDefault }
    }
}

impl ThemeState {
    /// Resolve the initial theme.
    ///
    /// `prefers_dark` is only consulted when nothing usable is persisted.
    #[must_use]
    pub fn load(store: &dyn PreferenceStore, prefers_dark: impl FnOnce() -> bool) -> Self {
        if let Some(raw) = store.get(THEME_STORAGE_KEY) {
            match decode(&raw) {
                Some(is_dark) => return Self { is_dark, source: ThemeSource::Persisted },
                None => log::warn!("ignoring malformed theme preference {raw:?}"),
            }
        }
        Self { is_dark: prefers_dark(), source: ThemeSource::SystemDefault }
    }

    /// Flip the theme and write it through to `store`.
    ///
    /// Returns the new `is_dark`. Storage failures are swallowed.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> bool {
        self.is_dark = !self.is_dark;
        self.source = ThemeSource::Persisted;
        if let Err(e) = store.set(THEME_STORAGE_KEY, &encode(self.is_dark)) {
            log::debug!("theme preference not persisted: {e}");
        }
        self.is_dark
    }
}

/// JSON encoding of a persisted preference (`true` / `false`).
#[must_use]
pub fn encode(is_dark: bool) -> String {
    serde_json::Value::Bool(is_dark).to_string()
}

/// Decode a persisted preference. Anything but a JSON boolean is `None`.
#[must_use]
pub fn decode(raw: &str) -> Option<bool> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Bool(value)) => Some(value),
        _ => None,
    }
}
