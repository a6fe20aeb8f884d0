//! Text-to-vector embedding boundary.
//!
//! Provides the [`EmbeddingProvider`] trait and a deterministic token-hashing
//! implementation. The provider is created via [`create_provider`] from
//! configuration.

pub mod hash;

use anyhow::Result;

pub use hash::HashEmbeddingProvider;

/// Default number of dimensions for the hash provider.
pub const DEFAULT_DIMENSIONS: usize = 256;

/// Trait for embedding text into vectors.
///
/// Implementations must produce vectors of the same dimensionality on every
/// call for the lifetime of a store instance — mixing providers over one
/// store's records is undefined behavior. Blank input must not fail; a zero
/// vector is the defined result (similarity against it scores 0).
///
/// All methods are synchronous — callers in async contexts should use
/// `tokio::task::spawn_blocking`.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text string into a vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Return the number of dimensions this provider produces.
    fn dimensions(&self) -> usize;
}

/// Create an embedding provider from config.
///
/// Currently only `"hash"` is supported — deterministic token hashing, no
/// model runtime required. Swap in a real model provider behind the same
/// trait when one is available.
pub fn create_provider(
    config: &crate::config::EmbeddingConfig,
) -> Result<Box<dyn EmbeddingProvider>> {
    match config.provider.as_str() {
        "hash" => Ok(Box::new(HashEmbeddingProvider::new(config.dimensions))),
        other => anyhow::bail!("unknown embedding provider: {other}. Supported: hash"),
    }
}
