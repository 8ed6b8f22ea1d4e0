//! Persistence port for tracker state.
//!
//! The tracker stores three JSON documents under fixed keys. Backends only
//! move strings; (de)serialization lives in [`load`] and [`save`].

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Fixed storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Projects,
    Entries,
    Timer,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Projects => "timeTracker_projects",
            StorageKey::Entries => "timeTracker_entries",
            StorageKey::Timer => "timeTracker_timer",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Outbound port for key/value persistence of JSON documents.
pub trait Storage {
    /// Raw JSON for `key`, or `None` if nothing has been stored yet.
    fn load_raw(&self, key: StorageKey) -> Result<Option<String>, StorageError>;

    fn save_raw(&self, key: StorageKey, json: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn load_raw(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        (**self).load_raw(key)
    }

    fn save_raw(&self, key: StorageKey, json: &str) -> Result<(), StorageError> {
        (**self).save_raw(key, json)
    }
}

/// Read `key`, falling back to `default` on a missing value or any failure.
///
/// Failures are logged, never surfaced.
pub fn load<T, S>(store: &S, key: StorageKey, default: T) -> T
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
{
    match store.load_raw(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(%key, "discarding unreadable stored value: {}", e);
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            tracing::warn!(%key, "failed to read from storage: {}", e);
            default
        }
    }
}

pub fn save<T, S>(store: &S, key: StorageKey, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: Storage + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.save_raw(key, &json)
}
