//! Error taxonomy for knowledge-store operations.
//!
//! Callers see exactly one error per failed operation. Corrupt records found
//! during a scan are never surfaced — they are skipped at the point of
//! deserialization and excluded from scoring, grouping, and decay.

use thiserror::Error;

/// Errors surfaced by the knowledge store's public operations.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// The embedding provider failed while ingesting or querying. The
    /// triggering operation performed no partial writes and returned no
    /// partial results.
    #[error("embedding provider failed")]
    Embedding(#[source] anyhow::Error),

    /// The underlying key-value store failed (I/O error, poisoned lock, ...).
    /// Propagated as-is from the specific operation that hit it.
    #[error("key-value store unavailable")]
    Store(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, KnowledgeError>;
