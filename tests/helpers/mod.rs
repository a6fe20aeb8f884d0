#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use engram::embedding::{EmbeddingProvider, HashEmbeddingProvider};
use engram::knowledge::types::KnowledgeItem;
use engram::knowledge::{item_key, KnowledgeStore};
use engram::kv::{InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore};

pub const TEST_DIMENSIONS: usize = 256;

/// A knowledge store over a fresh in-memory map, plus a handle to the map
/// for direct inspection.
pub fn test_store() -> (Arc<InMemoryKeyValueStore>, KnowledgeStore) {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let embedder = Arc::new(HashEmbeddingProvider::new(TEST_DIMENSIONS));
    let store = KnowledgeStore::new(kv.clone(), embedder);
    (kv, store)
}

/// Same, but over an in-memory SQLite store — enumeration is in insertion
/// order, which matters for tie-order assertions.
pub fn test_sqlite_store() -> (Arc<SqliteKeyValueStore>, KnowledgeStore) {
    let kv = Arc::new(SqliteKeyValueStore::open_in_memory().unwrap());
    let embedder = Arc::new(HashEmbeddingProvider::new(TEST_DIMENSIONS));
    let store = KnowledgeStore::new(kv.clone(), embedder);
    (kv, store)
}

/// Write an item with a chosen creation timestamp directly through the
/// key-value boundary, bypassing ingestion. Returns its id.
pub fn put_item_at(
    kv: &dyn KeyValueStore,
    text: &str,
    importance: f32,
    created_at: DateTime<Utc>,
) -> Uuid {
    let embedder = HashEmbeddingProvider::new(TEST_DIMENSIONS);
    let item = KnowledgeItem {
        id: Uuid::new_v4(),
        text: text.to_string(),
        source: "user".into(),
        tags: Vec::new(),
        created_at,
        importance,
        embedding: embedder.embed(text).unwrap(),
        decay: 0.0,
        confidence: 1.0,
        json_payload: None,
    };
    kv.put(&item_key(item.id), &serde_json::to_string(&item).unwrap())
        .unwrap();
    item.id
}

/// Fetch one item back through the key-value boundary.
pub fn get_item(kv: &dyn KeyValueStore, id: Uuid) -> Option<KnowledgeItem> {
    let key = item_key(id);
    kv.scan()
        .unwrap()
        .into_iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| serde_json::from_str(&v).unwrap())
}
