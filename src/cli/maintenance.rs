use anyhow::Result;
use chrono::Duration;

use engram::config::EngramConfig;

/// Run a consolidation pass and report what it removed.
pub fn consolidate(config: &EngramConfig) -> Result<()> {
    let store = super::open_store(config)?;
    let result = store.consolidate()?;

    println!("Consolidation complete");
    println!("  Duplicate groups:    {}", result.duplicate_groups);
    println!("  Items removed:       {}", result.removed);
    Ok(())
}

/// Run a decay pass with the given (or configured) half-life in days.
pub fn decay(config: &EngramConfig, half_life_days: Option<f64>) -> Result<()> {
    let days = half_life_days.unwrap_or(config.maintenance.half_life_days);
    let half_life = Duration::milliseconds((days * 86_400_000.0) as i64);

    let store = super::open_store(config)?;
    let result = store.decay(half_life)?;

    println!("Decay pass complete (half-life: {days} day(s))");
    println!("  Items scanned:       {}", result.scanned);
    println!("  Items updated:       {}", result.updated);
    Ok(())
}
