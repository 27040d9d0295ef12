//! Browser localStorage persistence for the widget shell flags.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell mirrors two flags into `localStorage` so a host page can observe
//! the last expanded/view state. Writes are best-effort: the first failure is
//! logged and the store falls back to in-memory only for the rest of the
//! session. Reads tolerate absent or garbage values key by key.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::state::widget::ActiveView;

/// Storage key holding `"true"` / `"false"`.
pub const EXPANDED_KEY: &str = "chatWidget_expanded";
/// Storage key holding `"menu"` / `"conversation"`.
pub const VIEW_KEY: &str = "chatWidget_view";

/// Error returned by a [`StateStore`] backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area is reachable (no window, storage disabled).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend refused the write (quota exceeded, security error).
    #[error("storage rejected write to {key}: {reason}")]
    Rejected { key: String, reason: String },
}

/// Key/value backend the widget persists into.
pub trait StateStore {
    /// Read a raw value. Backend failures read as absent.
    fn read(&self, key: &str) -> Option<String>;

    /// Write a raw value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot store the value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Without the `csr` feature every write reports
/// [`StorageError::Unavailable`] and every read is absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StateStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|err| StorageError::Rejected {
                key: key.to_owned(),
                reason: format!("{err:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.remove_item(key).map_err(|err| StorageError::Rejected {
                key: key.to_owned(),
                reason: format!("{err:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory backend, used by tests and as a stand-in outside the browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    reject_writes: bool,
    reject_key: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, like a full or disabled localStorage.
    pub fn rejecting() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    /// A store that refuses writes to one key only.
    pub fn rejecting_key(key: &str) -> Self {
        Self {
            reject_key: Some(key.to_owned()),
            ..Self::default()
        }
    }

    /// Seed a raw value without counting it as a write.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Number of write attempts seen so far, successful or not.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        if self.reject_writes || self.reject_key.as_deref() == Some(key) {
            return Err(StorageError::Rejected {
                key: key.to_owned(),
                reason: "quota exceeded".to_owned(),
            });
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The two persisted shell flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PersistedWidget {
    pub expanded: bool,
    pub view: ActiveView,
}

/// Persistence front for the shell: owns a backend and degrades to
/// in-memory-only after the first failed write.
#[derive(Debug)]
pub struct WidgetStore<S> {
    backend: S,
    degraded: bool,
}

impl<S: StateStore> WidgetStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            degraded: false,
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Whether a write has failed and persistence is off for this session.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Read back the persisted flags. Absent or unparseable values fall back
    /// to closed / menu independently.
    pub fn load(&self) -> PersistedWidget {
        let expanded = self
            .backend
            .read(EXPANDED_KEY)
            .and_then(|raw| raw.trim().parse::<bool>().ok())
            .unwrap_or(false);
        let view = self
            .backend
            .read(VIEW_KEY)
            .and_then(|raw| ActiveView::parse(raw.trim()))
            .unwrap_or_default();
        PersistedWidget { expanded, view }
    }

    /// Write both keys. Never fails; a rejected write switches the store to
    /// in-memory mode.
    ///
    /// The pair is written together or not at all: when the view write fails
    /// after the expanded write went through, the expanded key is put back to
    /// what it held before.
    pub fn persist(&mut self, snapshot: &PersistedWidget) {
        if self.degraded {
            return;
        }
        let expanded = if snapshot.expanded { "true" } else { "false" };
        let previous = self.backend.read(EXPANDED_KEY);
        if let Err(err) = self.backend.write(EXPANDED_KEY, expanded) {
            self.degrade(&err);
            return;
        }
        if let Err(err) = self.backend.write(VIEW_KEY, snapshot.view.as_str()) {
            let rollback = match previous.as_deref() {
                Some(value) => self.backend.write(EXPANDED_KEY, value),
                None => self.backend.remove(EXPANDED_KEY),
            };
            if let Err(rollback_err) = rollback {
                log::warn!("chat widget could not restore {EXPANDED_KEY}: {rollback_err}");
            }
            self.degrade(&err);
        }
    }

    fn degrade(&mut self, err: &StorageError) {
        log::warn!("chat widget state not persisted, keeping it in memory for this session: {err}");
        self.degraded = true;
    }
}
