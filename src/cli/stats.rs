use anyhow::Result;

use engram::config::EngramConfig;

/// Display knowledge-store statistics in the terminal.
pub fn stats(config: &EngramConfig) -> Result<()> {
    let store = super::open_store(config)?;
    let stats = store.stats()?;

    println!("Knowledge Statistics");
    println!("{}", "=".repeat(40));
    println!("  Total items:         {}", stats.total_items);
    println!("  Mean importance:     {:.3}", stats.mean_importance);
    println!("  Mean decay:          {:.3}", stats.mean_decay);
    println!();

    if !stats.by_source.is_empty() {
        println!("By Source:");
        let mut sources: Vec<_> = stats.by_source.iter().collect();
        sources.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (source, count) in sources {
            println!("  {source:<16} {count}");
        }
        println!();
    }

    if let Some(oldest) = stats.oldest {
        println!("Oldest item:           {}", oldest.to_rfc3339());
    }
    if let Some(newest) = stats.newest {
        println!("Newest item:           {}", newest.to_rfc3339());
    }

    Ok(())
}
