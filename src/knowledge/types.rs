//! Core knowledge type definitions.
//!
//! Defines [`KnowledgeItem`] (the stored record) and [`KnowledgeQuery`] (the
//! query-side value). Items serialize as camelCase JSON, wire-compatible with
//! records written by earlier hosts of this store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default result cap for a query.
pub const DEFAULT_TOP_K: usize = 8;

/// A single stored fact with text, embedding, tags, and scoring attributes.
///
/// Created only by ingestion. `text`, `embedding`, and `created_at` are
/// immutable afterwards; `decay` is the only field the maintenance pass
/// rewrites. There is no update-in-place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeItem {
    /// Unique id, assigned at creation, never reused.
    pub id: Uuid,
    /// The raw fact content.
    pub text: String,
    /// Free-form provenance tag, `"user"` when the caller left it blank.
    pub source: String,
    /// Case-insensitively deduplicated, trimmed tag set.
    pub tags: Vec<String>,
    /// UTC creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Importance in `[0, 1]` — caller-supplied or estimated at ingestion.
    pub importance: f32,
    /// Fixed-length vector from the embedding provider.
    pub embedding: Vec<f32>,
    /// Accumulated staleness in `[0, 1]`, monotonically non-decreasing,
    /// written only by the decay pass.
    pub decay: f32,
    /// Starts at 1.0. Plumbed through for compatibility; nothing mutates it
    /// and it carries no scoring semantics here.
    pub confidence: f32,
    /// Opaque structured side-data, passed through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_payload: Option<serde_json::Value>,
}

/// Query-side value — not persisted.
#[derive(Debug, Clone)]
pub struct KnowledgeQuery {
    /// Text to embed and match against.
    pub text: String,
    /// Every tag listed here must be present on a candidate (case-insensitive).
    pub must_tags: Vec<String>,
    /// At least one tag listed here must be present on a candidate.
    pub any_tags: Vec<String>,
    /// Result cap; a floor of 1 is applied at query time.
    pub top_k: usize,
}

impl KnowledgeQuery {
    /// A plain text query with default `top_k` and no tag filters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            must_tags: Vec::new(),
            any_tags: Vec::new(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// A query hit: the item together with its combined relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem {
    pub item: KnowledgeItem,
    pub score: f32,
}
