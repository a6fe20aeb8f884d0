//! Terminal command handlers — one file per subcommand.

pub mod ingest;
pub mod maintenance;
pub mod query;
pub mod stats;

use std::sync::Arc;

use anyhow::Result;

use engram::config::EngramConfig;
use engram::embedding::{self, EmbeddingProvider};
use engram::knowledge::KnowledgeStore;
use engram::kv::{KeyValueStore, SqliteKeyValueStore};

/// Open the configured SQLite store and embedding provider and bundle them.
pub fn open_store(config: &EngramConfig) -> Result<KnowledgeStore> {
    let kv: Arc<dyn KeyValueStore> =
        Arc::new(SqliteKeyValueStore::open(config.resolved_db_path())?);
    let provider: Arc<dyn EmbeddingProvider> =
        Arc::from(embedding::create_provider(&config.embedding)?);
    Ok(KnowledgeStore::new(kv, provider))
}
