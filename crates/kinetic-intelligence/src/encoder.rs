// ABOUTME: Text encoder boundary and the encoders shipped with the planner
// ABOUTME: An empty vector from encode() means no semantic signal is available
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Turns text into an embedding vector
///
/// Implementations never fail: when no vector can be produced they return an
/// empty `Vec`, and the engine falls back to unranked candidates. Retries, if
/// any, belong inside the implementation.
pub trait TextEncoder: Send + Sync {
    /// Encode `text`, or return an empty vector when unavailable
    fn encode(&self, text: &str) -> Vec<f32>;

    /// Dimension of produced vectors (0 when the encoder never produces any)
    fn dimension(&self) -> usize;

    /// Encoder name for logging
    fn name(&self) -> &str;
}

/// Deterministic bag-of-words encoder using signed feature hashing
///
/// Each lower-cased alphanumeric token is hashed with SHA-256 to pick a
/// bucket and a sign; the accumulated vector is L2-normalized. Texts sharing
/// words score higher cosine similarity. Stable across runs and platforms.
#[derive(Debug, Clone)]
pub struct HashingEncoder {
    dimension: usize,
}

impl HashingEncoder {
    /// Create an encoder producing `dimension`-length vectors
    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl TextEncoder for HashingEncoder {
    #[allow(clippy::cast_possible_truncation)] // Safe: bucket < dimension, which is a usize
    fn encode(&self, text: &str) -> Vec<f32> {
        if self.dimension == 0 {
            return Vec::new();
        }

        let mut vector = vec![0.0_f32; self.dimension];
        let lowered = text.to_lowercase();
        for token in lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
        {
            let digest = Sha256::digest(token.as_bytes());
            let mut bucket_bytes = [0_u8; 8];
            bucket_bytes.copy_from_slice(&digest[..8]);
            let bucket = (u64::from_le_bytes(bucket_bytes) % self.dimension as u64) as usize;
            let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "hashing"
    }
}

/// Encoder that is never available (model not loaded)
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableEncoder;

impl TextEncoder for UnavailableEncoder {
    fn encode(&self, _text: &str) -> Vec<f32> {
        Vec::new()
    }

    fn dimension(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

/// Encoder returning preset vectors, for tests and fixtures
///
/// Texts registered with [`FixedVectorEncoder::with_text`] map to their own
/// vector; every other text maps to the default vector.
#[derive(Debug, Clone, Default)]
pub struct FixedVectorEncoder {
    default: Vec<f32>,
    by_text: HashMap<String, Vec<f32>>,
}

impl FixedVectorEncoder {
    /// Encoder returning `default` for every text
    #[must_use]
    pub fn new(default: Vec<f32>) -> Self {
        Self {
            default,
            by_text: HashMap::new(),
        }
    }

    /// Return `vector` for exactly `text`
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.by_text.insert(text.into(), vector);
        self
    }
}

impl TextEncoder for FixedVectorEncoder {
    fn encode(&self, text: &str) -> Vec<f32> {
        self.by_text
            .get(text)
            .unwrap_or(&self.default)
            .clone()
    }

    fn dimension(&self) -> usize {
        self.default.len()
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
