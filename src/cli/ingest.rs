use anyhow::{Context, Result};

use engram::config::EngramConfig;

/// Ingest one fact from the terminal.
pub fn ingest(
    config: &EngramConfig,
    text: &str,
    source: &str,
    tags: &[String],
    importance: Option<f32>,
    payload: Option<&str>,
) -> Result<()> {
    let store = super::open_store(config)?;

    let json_payload = payload
        .map(|p| serde_json::from_str(p).context("--payload must be valid JSON"))
        .transpose()?;

    let id = store.ingest(text, source, tags, importance, json_payload)?;
    println!("Ingested {id}");
    Ok(())
}
