//! Diagnostic counts over the knowledge namespace.
//!
//! Not part of the four-operation caller contract — used by the CLI and for
//! troubleshooting.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::error::Result;
use crate::knowledge::scan_items;
use crate::kv::KeyValueStore;

#[derive(Debug, Serialize)]
pub struct KnowledgeStats {
    pub total_items: usize,
    pub by_source: HashMap<String, usize>,
    pub mean_importance: f32,
    pub mean_decay: f32,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
}

/// Compute counts in one scan of the namespace.
pub fn knowledge_stats(store: &dyn KeyValueStore) -> Result<KnowledgeStats> {
    let items = scan_items(store)?;

    let mut by_source: HashMap<String, usize> = HashMap::new();
    let mut importance_sum = 0.0f32;
    let mut decay_sum = 0.0f32;
    let mut oldest: Option<DateTime<Utc>> = None;
    let mut newest: Option<DateTime<Utc>> = None;

    for item in &items {
        *by_source.entry(item.source.clone()).or_insert(0) += 1;
        importance_sum += item.importance;
        decay_sum += item.decay;
        if oldest.map_or(true, |t| item.created_at < t) {
            oldest = Some(item.created_at);
        }
        if newest.map_or(true, |t| item.created_at > t) {
            newest = Some(item.created_at);
        }
    }

    let n = items.len();
    Ok(KnowledgeStats {
        total_items: n,
        by_source,
        mean_importance: if n > 0 { importance_sum / n as f32 } else { 0.0 },
        mean_decay: if n > 0 { decay_sum / n as f32 } else { 0.0 },
        oldest,
        newest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::HashEmbeddingProvider;
    use crate::knowledge::ingest::ingest;
    use crate::kv::InMemoryKeyValueStore;

    #[test]
    fn stats_over_empty_store() {
        let store = InMemoryKeyValueStore::new();
        let stats = knowledge_stats(&store).unwrap();
        assert_eq!(stats.total_items, 0);
        assert!(stats.oldest.is_none());
        assert_eq!(stats.mean_importance, 0.0);
    }

    #[test]
    fn stats_counts_sources() {
        let store = InMemoryKeyValueStore::new();
        let embedder = HashEmbeddingProvider::new(64);
        ingest(&store, &embedder, "one", "user", &[], Some(0.2), None).unwrap();
        ingest(&store, &embedder, "two", "user", &[], Some(0.4), None).unwrap();
        ingest(&store, &embedder, "three", "sensor", &[], Some(0.6), None).unwrap();

        let stats = knowledge_stats(&store).unwrap();
        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.by_source["user"], 2);
        assert_eq!(stats.by_source["sensor"], 1);
        assert!((stats.mean_importance - 0.4).abs() < 1e-6);
        assert!(stats.oldest.is_some());
        assert!(stats.oldest <= stats.newest);
    }
}
