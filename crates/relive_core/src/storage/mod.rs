//! Host key-value storage and the review persistence adapter.
//!
//! # Responsibility
//! - Define the synchronous key-value contract standing in for browser local storage.
//! - Provide SQLite and in-memory implementations.
//! - Host the adapter that maps the review collection onto one storage slot.
//!
//! # Invariants
//! - Values are opaque UTF-8 strings; the store never interprets them.
//! - A write replaces the whole value for its key.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
pub mod review_storage;
mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use review_storage::{ReviewStorage, REVIEWS_STORAGE_KEY};
pub use sqlite::SqliteKeyValueStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a host key-value store.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Write rejected because it would exceed the configured byte quota.
    QuotaExceeded { requested: usize, quota: usize },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::QuotaExceeded { requested, quota } => write!(
                f,
                "storage quota exceeded: {requested} bytes requested, quota is {quota} bytes"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous string key-value store.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key is missing.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    /// Inserts or replaces the value for `key`.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Removes `key`; missing keys are not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
