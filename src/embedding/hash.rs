//! Deterministic token-hashing embedding provider.
//!
//! Each token hashes to a dimension index and bumps that component; the
//! result is L2-normalized. Not a semantic model — two texts score high only
//! when they share tokens — but it is deterministic, dependency-free, and
//! good enough for development, tests, and keyword-heavy corpora.

use anyhow::Result;

use super::EmbeddingProvider;

/// Minimum accepted dimensionality; smaller requests are bumped up.
const MIN_DIMENSIONS: usize = 64;

pub struct HashEmbeddingProvider {
    dimensions: usize,
}

impl HashEmbeddingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(MIN_DIMENSIONS),
        }
    }
}

impl EmbeddingProvider for HashEmbeddingProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vec = vec![0.0f32; self.dimensions];
        if text.trim().is_empty() {
            // Defined behavior for blank input: zero vector, similarity 0.
            return Ok(vec);
        }

        for token in text.to_lowercase().split(|c: char| {
            c.is_whitespace()
                || matches!(
                    c,
                    ',' | '.' | ';' | ':' | '-' | '/' | '"' | '\'' | '(' | ')' | '[' | ']'
                )
        }) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let idx = (fnv1a(token.as_bytes()) as usize) % self.dimensions;
            vec[idx] += 1.0;
        }

        // L2 normalize
        let sum: f32 = vec.iter().map(|x| x * x).sum();
        if sum > 1e-9 {
            let inv = 1.0 / sum.sqrt();
            for x in &mut vec {
                *x *= inv;
            }
        }

        Ok(vec)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// FNV-1a: stable across platforms and releases, unlike `DefaultHasher`.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut hash = OFFSET;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_is_deterministic() {
        let provider = HashEmbeddingProvider::new(256);
        let a = provider.embed("the cat sat on the mat").unwrap();
        let b = provider.embed("the cat sat on the mat").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn embed_is_l2_normalized() {
        let provider = HashEmbeddingProvider::new(256);
        let v = provider.embed("normalize this vector please").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn blank_text_embeds_to_zero_vector() {
        let provider = HashEmbeddingProvider::new(256);
        let v = provider.embed("   ").unwrap();
        assert_eq!(v.len(), 256);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn dimension_floor_applies() {
        let provider = HashEmbeddingProvider::new(8);
        assert_eq!(provider.dimensions(), MIN_DIMENSIONS);
        assert_eq!(provider.embed("hello").unwrap().len(), MIN_DIMENSIONS);
    }

    #[test]
    fn shared_tokens_raise_similarity() {
        let provider = HashEmbeddingProvider::new(256);
        let a = provider.embed("rust systems programming").unwrap();
        let b = provider.embed("rust systems language").unwrap();
        let c = provider.embed("baking sourdough bread").unwrap();

        let dot = |x: &[f32], y: &[f32]| -> f32 { x.iter().zip(y).map(|(p, q)| p * q).sum() };
        assert!(dot(&a, &b) > dot(&a, &c));
    }
}
