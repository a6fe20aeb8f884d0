//! Hybrid query engine — cosine + keyword + recency + importance, dampened
//! by decay.
//!
//! All scoring happens over a full scan of the namespace; there is no
//! secondary index. Adequate for small-to-moderate item counts.

use chrono::{DateTime, Utc};

use crate::embedding::EmbeddingProvider;
use crate::error::{KnowledgeError, Result};
use crate::knowledge::types::{KnowledgeItem, KnowledgeQuery, ScoredItem};
use crate::knowledge::{scan_items, tokenize};
use crate::kv::KeyValueStore;

const WEIGHT_COSINE: f32 = 0.65;
const WEIGHT_KEYWORD: f32 = 0.20;
const WEIGHT_RECENCY: f32 = 0.10;
const WEIGHT_IMPORTANCE: f32 = 0.05;

/// Rank stored items against a query.
///
/// Embeds the query text (the whole query fails on embedding failure — it
/// never silently degrades to keyword-only scoring), scans and filters the
/// namespace, scores each survivor, and returns the top `max(1, top_k)` in
/// descending score order. The sort is stable: ties keep enumeration order.
pub fn query(
    store: &dyn KeyValueStore,
    embedder: &dyn EmbeddingProvider,
    query: &KnowledgeQuery,
) -> Result<Vec<ScoredItem>> {
    let q_text = query.text.trim();
    let q_embedding = embedder.embed(q_text).map_err(KnowledgeError::Embedding)?;
    let q_tokens = tokenize(q_text);

    let items = scan_items(store)?;
    let candidates = apply_tag_filters(items, &query.must_tags, &query.any_tags);

    let now = Utc::now();
    let mut scored: Vec<ScoredItem> = candidates
        .into_iter()
        .map(|item| {
            let score = combined_score(&item, &q_embedding, &q_tokens, now);
            ScoredItem { item, score }
        })
        .collect();

    // sort_by is stable — ties preserve enumeration order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(query.top_k.max(1));

    tracing::debug!(query = %q_text, results = scored.len(), "knowledge query completed");
    Ok(scored)
}

/// Weighted blend of the four signals, then multiplied by `1 - decay` so
/// decay acts as a strict dampener on the base relevance.
fn combined_score(
    item: &KnowledgeItem,
    q_embedding: &[f32],
    q_tokens: &[String],
    now: DateTime<Utc>,
) -> f32 {
    let sim = cosine_similarity(&item.embedding, q_embedding);
    let keyword = keyword_score(&item.text, q_tokens);
    let age_hours = (now - item.created_at).num_seconds() as f32 / 3600.0;
    let recency = recency_boost(age_hours);
    let importance = item.importance.clamp(0.0, 1.0);

    let base = WEIGHT_COSINE * sim
        + WEIGHT_KEYWORD * keyword
        + WEIGHT_RECENCY * recency
        + WEIGHT_IMPORTANCE * importance;

    base * (1.0 - item.decay.clamp(0.0, 1.0))
}

/// Apply must/any tag filters, AND'ed together when both are present.
/// Comparison is case-insensitive; blank filter tags are dropped before the
/// sets are built.
fn apply_tag_filters(
    items: Vec<KnowledgeItem>,
    must: &[String],
    any: &[String],
) -> Vec<KnowledgeItem> {
    let fold_set = |tags: &[String]| -> Vec<String> {
        tags.iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect()
    };

    let must_set = (!must.is_empty()).then(|| fold_set(must));
    let any_set = (!any.is_empty()).then(|| fold_set(any));

    items
        .into_iter()
        .filter(|item| {
            let item_tags: Vec<String> = item.tags.iter().map(|t| t.to_lowercase()).collect();
            if let Some(ref must) = must_set {
                if !must.iter().all(|t| item_tags.contains(t)) {
                    return false;
                }
            }
            if let Some(ref any) = any_set {
                if !any.iter().any(|t| item_tags.contains(t)) {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Cosine similarity over the common prefix of the two vectors. Returns 0
/// when either vector is empty or has near-zero norm, so a division by ~0
/// can never happen.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let n = a.len().min(b.len());
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for i in 0..n {
        let (x, y) = (f64::from(a[i]), f64::from(b[i]));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a <= 1e-9 || norm_b <= 1e-9 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())) as f32
}

/// Fraction of query tokens present in the document's token set, in [0, 1].
fn keyword_score(doc: &str, q_tokens: &[String]) -> f32 {
    if q_tokens.is_empty() {
        return 0.0;
    }
    let doc_tokens = tokenize(doc);
    if doc_tokens.is_empty() {
        return 0.0;
    }
    let hits = q_tokens.iter().filter(|t| doc_tokens.contains(t)).count();
    (hits as f32 / q_tokens.len().max(1) as f32).clamp(0.0, 1.0)
}

/// Step-function boost rewarding recently created items.
fn recency_boost(age_hours: f32) -> f32 {
    if age_hours <= 1.0 {
        1.0
    } else if age_hours <= 24.0 {
        0.7
    } else if age_hours <= 168.0 {
        0.4
    } else {
        0.2
    }
}
