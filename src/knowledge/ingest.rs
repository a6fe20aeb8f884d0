//! Write path — embedding, tag normalization, importance estimation, storage.
//!
//! [`ingest`] is the single entry point. It never deduplicates — that
//! responsibility belongs entirely to consolidation — and performs exactly
//! one store write, so the operation is atomic per item.

use chrono::Utc;
use uuid::Uuid;

use crate::embedding::EmbeddingProvider;
use crate::error::{KnowledgeError, Result};
use crate::knowledge::types::KnowledgeItem;
use crate::kv::KeyValueStore;

/// Ingest one fact and return its id.
///
/// The embedding call is the operation's only failure point besides the
/// final store write; if it fails, nothing is written.
pub fn ingest(
    store: &dyn KeyValueStore,
    embedder: &dyn EmbeddingProvider,
    text: &str,
    source: &str,
    tags: &[String],
    importance: Option<f32>,
    json_payload: Option<serde_json::Value>,
) -> Result<Uuid> {
    let embedding = embedder.embed(text).map_err(KnowledgeError::Embedding)?;

    let item = KnowledgeItem {
        id: Uuid::new_v4(),
        text: text.to_string(),
        source: if source.trim().is_empty() {
            "user".to_string()
        } else {
            source.trim().to_string()
        },
        tags: normalize_tags(tags),
        created_at: Utc::now(),
        importance: importance.unwrap_or_else(|| estimate_importance(text)),
        embedding,
        decay: 0.0,
        confidence: 1.0,
        json_payload,
    };

    super::save_item(store, &item)?;
    tracing::debug!(id = %item.id, source = %item.source, "knowledge ingested");

    Ok(item.id)
}

/// Trim tags, drop blanks, and deduplicate case-insensitively. The first
/// occurrence's casing is kept.
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            continue;
        }
        let folded = trimmed.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        out.push(trimmed.to_string());
    }
    out
}

/// Heuristic importance for items the caller did not rate: rewards longer,
/// more emphatic statements without needing NLP. Blank text rates 0.
fn estimate_importance(text: &str) -> f32 {
    if text.trim().is_empty() {
        return 0.0;
    }
    let len = text.chars().count().min(400) as f32;
    let emphatic = text.chars().filter(|&c| c == '!' || c == '?').count().min(4) as f32;
    (0.2 + 0.0015 * len + 0.05 * emphatic).clamp(0.0, 1.0)
}
