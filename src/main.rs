mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use engram::config::EngramConfig;

#[derive(Parser)]
#[command(name = "engram", version, about = "Semantic knowledge store with hybrid retrieval")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ingest a fact into the store
    Ingest {
        /// The fact text
        text: String,
        /// Provenance tag (defaults to "user")
        #[arg(long, default_value = "user")]
        source: String,
        /// Tag to attach (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Importance in [0, 1]; estimated from the text when omitted
        #[arg(long)]
        importance: Option<f32>,
        /// Opaque JSON side-data to store with the item
        #[arg(long)]
        payload: Option<String>,
    },
    /// Query the store and print ranked results
    Query {
        /// The query text
        text: String,
        /// Tag a candidate must carry (repeatable; all must match)
        #[arg(long = "must-tag")]
        must_tags: Vec<String>,
        /// Tag of which a candidate must carry at least one (repeatable)
        #[arg(long = "any-tag")]
        any_tags: Vec<String>,
        /// Result cap (defaults from config)
        #[arg(long)]
        top_k: Option<usize>,
    },
    /// Deduplicate items that share the same normalized text
    Consolidate,
    /// Age item decay along a half-life curve
    Decay {
        /// Half-life in days (defaults from config)
        #[arg(long)]
        half_life_days: Option<f64>,
    },
    /// Show store statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = EngramConfig::load()?;

    // Log to stderr so stdout stays clean for command output.
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Ingest {
            text,
            source,
            tags,
            importance,
            payload,
        } => cli::ingest::ingest(&config, &text, &source, &tags, importance, payload.as_deref()),
        Command::Query {
            text,
            must_tags,
            any_tags,
            top_k,
        } => cli::query::query(&config, &text, &must_tags, &any_tags, top_k),
        Command::Consolidate => cli::maintenance::consolidate(&config),
        Command::Decay { half_life_days } => cli::maintenance::decay(&config, half_life_days),
        Command::Stats => cli::stats::stats(&config),
    }
}
