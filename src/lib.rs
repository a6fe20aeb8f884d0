//! Semantic knowledge store for AI assistants — a write-through memory of short
//! text facts with hybrid retrieval, time-based confidence decay, and periodic
//! deduplication.
//!
//! Facts are stored as JSON records in a pluggable key-value store under the
//! `knowledge:` namespace. Retrieval blends four signals per candidate:
//!
//! | Signal | Weight | Source |
//! |--------|--------|--------|
//! | **Cosine similarity** | 0.65 | item embedding vs. query embedding |
//! | **Keyword overlap** | 0.20 | shared tokens / query tokens |
//! | **Recency boost** | 0.10 | step function of item age |
//! | **Importance** | 0.05 | stored per-item scalar |
//!
//! The blended score is then dampened by `1 - decay`, where decay grows along
//! an exponential half-life curve applied by the maintenance pass.
//!
//! # Architecture
//!
//! - **Storage**: any [`kv::KeyValueStore`] — a SQLite-backed implementation
//!   and an in-memory one ship with the crate
//! - **Embeddings**: any [`embedding::EmbeddingProvider`] — a deterministic
//!   token-hashing provider ships for development and testing
//! - **Operations**: ingest, query, consolidate, decay — all scan-based,
//!   exposed on [`knowledge::KnowledgeStore`]
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`embedding`] — Text-to-vector embedding boundary and the hash provider
//! - [`error`] — The error taxonomy callers see
//! - [`knowledge`] — Core engine: ingest, query, consolidation, decay, stats
//! - [`kv`] — Durable key-value storage boundary

pub mod config;
pub mod embedding;
pub mod error;
pub mod knowledge;
pub mod kv;

pub use error::{KnowledgeError, Result};
