//! Durable key-value storage boundary.
//!
//! The knowledge engine is written against [`KeyValueStore`] rather than a
//! concrete database: an opaque, enumerable map of string keys to string
//! values. It claims the `knowledge:` key prefix and must not collide with
//! other producers sharing the same underlying store.

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

use anyhow::Result;

/// Minimal contract the knowledge store needs from its backing storage.
///
/// Implementations must be safe to share across threads. Enumeration order
/// should be deterministic for a given store state — result ordering for
/// tied retrieval scores follows it.
pub trait KeyValueStore: Send + Sync {
    /// Write a value under a key, replacing any existing value (upsert).
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Enumerate every `(key, value)` pair in the store.
    fn scan(&self) -> Result<Vec<(String, String)>>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;
}
