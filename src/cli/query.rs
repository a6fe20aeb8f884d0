use anyhow::Result;

use engram::config::EngramConfig;
use engram::knowledge::types::KnowledgeQuery;

/// Run a query from the terminal and print ranked results.
pub fn query(
    config: &EngramConfig,
    text: &str,
    must_tags: &[String],
    any_tags: &[String],
    top_k: Option<usize>,
) -> Result<()> {
    let store = super::open_store(config)?;

    let q = KnowledgeQuery {
        text: text.to_string(),
        must_tags: must_tags.to_vec(),
        any_tags: any_tags.to_vec(),
        top_k: top_k.unwrap_or(config.retrieval.default_top_k),
    };

    let results = store.query(&q)?;
    if results.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    println!("Found {} result(s)\n", results.len());
    for (i, scored) in results.iter().enumerate() {
        let item = &scored.item;
        let preview = if item.text.chars().count() > 120 {
            let cut: String = item.text.chars().take(120).collect();
            format!("{cut}...")
        } else {
            item.text.clone()
        };

        println!(
            "  {}. {} (score: {:.4}, importance: {:.2}, decay: {:.2})",
            i + 1,
            item.id,
            scored.score,
            item.importance,
            item.decay,
        );
        if !item.tags.is_empty() {
            println!("     tags: {}", item.tags.join(", "));
        }
        println!("     {preview}");
        println!();
    }

    Ok(())
}
