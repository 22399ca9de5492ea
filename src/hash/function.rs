//! String hash functions for bucket selection.

use serde::{Deserialize, Serialize};

/// Hash function variants for mapping a key to a bucket.
///
/// Both variants are deliberately weak: the table relies on chaining,
/// not hash quality, for correctness. They are deterministic, pure, and
/// defined over the full key, which is all the bucket selection needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HashKind {
    /// Plain sum of the key's bytes.
    CharSum,
    /// Position-weighted sum: `sum((i + 1) * byte[i])`.
    #[default]
    PositionWeighted,
}

impl HashKind {
    /// Hash a key to a signed 64-bit value.
    ///
    /// Accumulation wraps, so long keys can produce negative sums; use
    /// [`HashKind::bucket_index`] to turn the result into a valid index.
    pub fn hash(&self, key: &str) -> i64 {
        match self {
            HashKind::CharSum => {
                let mut h: i64 = 0;
                for b in key.bytes() {
                    h = h.wrapping_add(b as i64);
                }
                h
            }
            HashKind::PositionWeighted => {
                let mut h: i64 = 0;
                for (i, b) in key.bytes().enumerate() {
                    h = h.wrapping_add((i as i64 + 1).wrapping_mul(b as i64));
                }
                h
            }
        }
    }

    /// Map a key to a bucket index in `0..capacity`.
    ///
    /// `rem_euclid` keeps the index non-negative even when the hash sum
    /// has wrapped negative.
    pub fn bucket_index(&self, key: &str, capacity: usize) -> usize {
        self.hash(key).rem_euclid(capacity as i64) as usize
    }

    /// Human-readable name of the hash function.
    pub fn name(&self) -> &'static str {
        match self {
            HashKind::CharSum => "char_sum",
            HashKind::PositionWeighted => "position_weighted",
        }
    }
}
