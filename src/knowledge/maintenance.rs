//! Maintenance passes — consolidation and decay.
//!
//! Both operations scan the namespace and mutate or delete items read
//! earlier in the same pass. They carry no internal mutual exclusion: the
//! calling scheduler must serialize them (run one, await completion, then
//! the other), never overlapping them with each other or with themselves.

use chrono::{Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::error::Result;
use crate::knowledge::types::KnowledgeItem;
use crate::knowledge::{item_key, normalize_text, save_item, scan_items};
use crate::kv::KeyValueStore;

/// Write-back threshold for decay: values that moved less than this since
/// the last pass are not rewritten, to avoid needless store churn.
const DECAY_EPSILON: f32 = 0.001;

#[derive(Debug, Serialize)]
pub struct ConsolidateResult {
    /// Groups that had more than one member.
    pub duplicate_groups: usize,
    /// Items deleted.
    pub removed: usize,
}

#[derive(Debug, Serialize)]
pub struct DecayResult {
    /// Items examined.
    pub scanned: usize,
    /// Items whose decay moved enough to be written back.
    pub updated: usize,
}

// ── Consolidation ─────────────────────────────────────────────────────────────

/// Deduplicate items whose normalized text is identical.
///
/// Within each group the survivor is the member with the highest importance,
/// tie-broken by newest `created_at`, then by enumeration order — so the
/// outcome is deterministic for a given set of items. Every other member is
/// deleted by its namespaced key. The survivor is left untouched, decay
/// included.
pub fn consolidate(store: &dyn KeyValueStore) -> Result<ConsolidateResult> {
    let items = scan_items(store)?;

    let mut groups: HashMap<String, Vec<KnowledgeItem>> = HashMap::new();
    for item in items {
        groups.entry(normalize_text(&item.text)).or_default().push(item);
    }

    let mut result = ConsolidateResult {
        duplicate_groups: 0,
        removed: 0,
    };

    for members in groups.values() {
        if members.len() < 2 {
            continue;
        }
        result.duplicate_groups += 1;

        // First-enumerated member wins full ties
        let mut keep = &members[0];
        for member in &members[1..] {
            if member.importance > keep.importance
                || (member.importance == keep.importance && member.created_at > keep.created_at)
            {
                keep = member;
            }
        }

        for member in members {
            if member.id == keep.id {
                continue;
            }
            store
                .delete(&item_key(member.id))
                .map_err(crate::error::KnowledgeError::Store)?;
            result.removed += 1;
        }
    }

    tracing::info!(
        groups = result.duplicate_groups,
        removed = result.removed,
        "knowledge consolidation complete"
    );
    Ok(result)
}

// ── Decay ─────────────────────────────────────────────────────────────────────

/// Age every item's decay along an exponential half-life curve:
/// `1 - exp(-ln2 * age / half_life)` — 0 at creation, 0.5 at one half-life,
/// approaching 1 as age grows without bound. Decay never decreases.
///
/// No-op for a zero or negative half-life. Touches no field other than
/// `decay`, and only writes back items that moved more than a small epsilon.
pub fn decay(store: &dyn KeyValueStore, half_life: Duration) -> Result<DecayResult> {
    let mut result = DecayResult {
        scanned: 0,
        updated: 0,
    };
    if half_life <= Duration::zero() {
        return Ok(result);
    }

    let now = Utc::now();
    let half_life_secs = half_life.num_milliseconds() as f32 / 1000.0;
    let ln2 = std::f32::consts::LN_2;

    for mut item in scan_items(store)? {
        result.scanned += 1;

        let age_secs = (now - item.created_at).num_milliseconds() as f32 / 1000.0;
        let new_decay = (1.0 - (-ln2 * age_secs / half_life_secs).exp()).clamp(0.0, 1.0);

        if (new_decay - item.decay).abs() > DECAY_EPSILON {
            item.decay = new_decay;
            save_item(store, &item)?;
            result.updated += 1;
        }
    }

    tracing::info!(
        scanned = result.scanned,
        updated = result.updated,
        "knowledge decay update complete"
    );
    Ok(result)
}
