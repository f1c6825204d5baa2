//! Key-value persistence used by the session tracker.
//!
//! The tracker never talks to SQLite directly: it only sees the three
//! operations below, so it can run against any durable (or in-memory) store.

pub mod keys;
pub mod memory;
pub mod sqlite;

use crate::errors::AppResult;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// One mutation in a [`KeyValueStore::apply`] batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Write<'a> {
    Set(&'a str, String),
    Remove(&'a str),
}

/// Minimal string key-value contract.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Apply `writes` in order. Stores that can should make the batch
    /// all-or-nothing; the default stops at the first failure.
    fn apply(&mut self, writes: &[Write<'_>]) -> AppResult<()> {
        for write in writes {
            match write {
                Write::Set(key, value) => self.set(key, value)?,
                Write::Remove(key) => self.remove(key)?,
            }
        }
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }

    fn apply(&mut self, writes: &[Write<'_>]) -> AppResult<()> {
        (**self).apply(writes)
    }
}
