//! Core knowledge engine: ingest, query, consolidation, decay, and stats.
//!
//! The operations are free functions written against the [`KeyValueStore`]
//! and [`EmbeddingProvider`] boundaries; [`KnowledgeStore`] bundles both into
//! the one interface callers hold.

pub mod ingest;
pub mod maintenance;
pub mod query;
pub mod stats;
pub mod types;

use std::sync::Arc;

use uuid::Uuid;

use crate::embedding::EmbeddingProvider;
use crate::error::{KnowledgeError, Result};
use crate::kv::KeyValueStore;
use types::{KnowledgeItem, KnowledgeQuery, ScoredItem};

/// Key namespace this store claims in the underlying key-value store.
pub const KEY_PREFIX: &str = "knowledge:";

/// Namespaced key an item lives under.
pub fn item_key(id: Uuid) -> String {
    format!("{KEY_PREFIX}{id}")
}

/// Scan the namespace and deserialize every readable item, in enumeration
/// order. Records that fail to deserialize are skipped silently — corruption
/// is non-fatal and never surfaces to the caller.
pub(crate) fn scan_items(store: &dyn KeyValueStore) -> Result<Vec<KnowledgeItem>> {
    let entries = store.scan().map_err(KnowledgeError::Store)?;

    let mut items = Vec::new();
    for (key, value) in entries {
        let in_namespace = key
            .get(..KEY_PREFIX.len())
            .map_or(false, |p| p.eq_ignore_ascii_case(KEY_PREFIX));
        if !in_namespace {
            continue;
        }
        if value.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<KnowledgeItem>(&value) {
            Ok(item) => items.push(item),
            Err(err) => {
                tracing::debug!(%key, error = %err, "skipping undecodable knowledge record");
            }
        }
    }
    Ok(items)
}

/// Serialize an item and write it under its namespaced key.
pub(crate) fn save_item(store: &dyn KeyValueStore, item: &KnowledgeItem) -> Result<()> {
    let json = serde_json::to_string(item)
        .map_err(|e| KnowledgeError::Store(anyhow::Error::new(e)))?;
    store
        .put(&item_key(item.id), &json)
        .map_err(KnowledgeError::Store)
}

// ── Shared text helpers ───────────────────────────────────────────────────────

/// Punctuation treated as token separators, alongside whitespace.
const SEPARATORS: &[char] = &[
    ',', '.', ';', ':', '-', '/', '"', '\'', '(', ')', '[', ']',
];

/// Lowercase and split on whitespace + punctuation, dropping tokens of
/// length <= 1.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .map(str::trim)
        .filter(|t| t.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Normalized-text key used for consolidation grouping: lowercase, keep only
/// alphanumerics and whitespace, collapse whitespace runs, trim.
pub(crate) fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            out.push(ch);
            last_was_space = false;
        } else if ch.is_whitespace() && !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }

    out.trim().to_string()
}

// ── Facade ────────────────────────────────────────────────────────────────────

/// The semantic knowledge store: a key-value backend plus an embedding
/// provider, exposing ingest, query, consolidate, and decay.
///
/// Ingest and query are safe to run concurrently. Consolidate and decay
/// mutate or delete items read earlier in the same pass and carry no internal
/// mutual exclusion — the calling scheduler must serialize maintenance
/// passes, never overlapping them with each other or with themselves.
pub struct KnowledgeStore {
    store: Arc<dyn KeyValueStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl KnowledgeStore {
    pub fn new(store: Arc<dyn KeyValueStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    /// Ingest one fact; returns the new item's id. See [`ingest::ingest`].
    pub fn ingest(
        &self,
        text: &str,
        source: &str,
        tags: &[String],
        importance: Option<f32>,
        json_payload: Option<serde_json::Value>,
    ) -> Result<Uuid> {
        ingest::ingest(
            self.store.as_ref(),
            self.embedder.as_ref(),
            text,
            source,
            tags,
            importance,
            json_payload,
        )
    }

    /// Rank stored items against a query. See [`query::query`].
    pub fn query(&self, q: &KnowledgeQuery) -> Result<Vec<ScoredItem>> {
        query::query(self.store.as_ref(), self.embedder.as_ref(), q)
    }

    /// Deduplicate items sharing a normalized text. See
    /// [`maintenance::consolidate`].
    pub fn consolidate(&self) -> Result<maintenance::ConsolidateResult> {
        maintenance::consolidate(self.store.as_ref())
    }

    /// Age item confidence along a half-life curve. See
    /// [`maintenance::decay`].
    pub fn decay(&self, half_life: chrono::Duration) -> Result<maintenance::DecayResult> {
        maintenance::decay(self.store.as_ref(), half_life)
    }

    /// Diagnostic counts over the namespace. See [`stats::knowledge_stats`].
    pub fn stats(&self) -> Result<stats::KnowledgeStats> {
        stats::knowledge_stats(self.store.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits_on_punctuation() {
        let tokens = tokenize("Hello, World: rust/cargo (fast)");
        assert_eq!(tokens, vec!["hello", "world", "rust", "cargo", "fast"]);
    }

    #[test]
    fn tokenize_drops_single_char_tokens() {
        let tokens = tokenize("a I x ok");
        assert_eq!(tokens, vec!["ok"]);
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  , . ; ").is_empty());
    }

    #[test]
    fn normalize_strips_punctuation_and_collapses_whitespace() {
        assert_eq!(normalize_text("RED  Apple!"), "red apple");
        assert_eq!(normalize_text("  red\t apple  "), "red apple");
        assert_eq!(normalize_text("red-apple"), "redapple");
    }

    #[test]
    fn normalize_blank_is_empty() {
        assert_eq!(normalize_text("   "), "");
        assert_eq!(normalize_text("!?!"), "");
    }

    #[test]
    fn item_key_is_namespaced() {
        let id = Uuid::nil();
        assert_eq!(
            item_key(id),
            "knowledge:00000000-0000-0000-0000-000000000000"
        );
    }
}
