//! Persistence of the wallets the user connected before.
//!
//! The list is ordered most-recent-first and only ever grows from successful
//! connections; failed or cancelled attempts never touch it. Storage is a
//! pluggable key-value backend so the kit runs against localStorage in the
//! browser and against memory in tests.

use std::{cell::RefCell, collections::HashMap};

/// localStorage key the history list is persisted under.
pub const PREVIOUSLY_CONNECTED_KEY: &str = "unified-wallet-previously-connected";

/// Minimal key-value persistence the history list needs.
///
/// Implementations must not fail loudly: a backend that cannot read returns
/// `None`, a backend that cannot write drops the write.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Browser localStorage, reached through `web-sys`.
///
/// Unavailable storage (sandboxed iframe, disabled cookies) degrades to the
/// empty history rather than failing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageBackend for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// In-memory backend for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStorage(RefCell<HashMap<String, String>>);

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Ordered list of wallet names the user connected before, most recent first.
///
/// The storage layer enforces no cap; the classifier takes the first
/// [`crate::classify::HIGHLIGHT_LIMIT`] entries for highlighting.
pub struct PreviouslyConnectedStore {
    backend: Box<dyn StorageBackend>,
    key: String,
}

impl PreviouslyConnectedStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self::with_key(backend, PREVIOUSLY_CONNECTED_KEY)
    }

    pub fn with_key(backend: impl StorageBackend + 'static, key: &str) -> Self {
        Self {
            backend: Box::new(backend),
            key: key.to_owned(),
        }
    }

    /// the persisted history, most recent first
    ///
    /// Missing or corrupt storage yields the empty list.
    pub fn list(&self) -> Vec<String> {
        let Some(raw) = self.backend.read(&self.key) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(names) => names,
            Err(error) => {
                log::warn!("discarding corrupt wallet history `{raw}': {error}");
                Vec::new()
            }
        }
    }

    /// Record a successful connection: `name` moves to the front of the
    /// list, or is inserted at the front if it was not there yet.
    pub fn record_connected(&self, name: &str) {
        let mut names = self.list();
        names.retain(|n| n != name);
        names.insert(0, name.to_owned());

        match serde_json::to_string(&names) {
            Ok(raw) => self.backend.write(&self.key, &raw),
            Err(error) => log::warn!("couldn't serialize wallet history: {error}"),
        }
    }
}
