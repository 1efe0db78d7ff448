//! Deterministic Random Number Generator
//!
//! Uses the Xorshift128+ algorithm for fast, deterministic randomness.
//! Entities never reach for a global random source: spawn positions are
//! drawn from an instance of this generator handed in by the caller.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::bounds::MapBounds;
use super::vec2::Vec2;

/// Seedable PRNG using Xorshift128+.
///
/// Given the same seed, produces the same sequence on every platform.
///
/// # Example
///
/// ```
/// use arena_core::core::rng::DeterministicRng;
///
/// let mut a = DeterministicRng::new(12345);
/// let mut b = DeterministicRng::new(12345);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeterministicRng {
    state: [u64; 2],
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit seed.
    ///
    /// Uses SplitMix64 to initialize the internal state, ensuring
    /// good distribution even from weak seeds.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // State must never be all zeros
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    /// Generate the next 64-bit random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Generate a random float in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        // Top 53 bits fill the mantissa exactly
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Pick a spawn position for a new entity.
    ///
    /// Spawns land in the far half of each axis, `[size / 2, size)`.
    pub fn spawn_position(&mut self, bounds: &MapBounds) -> Vec2 {
        let x = (self.next_f64() + 1.0) * bounds.width / 2.0;
        let y = (self.next_f64() + 1.0) * bounds.height / 2.0;
        Vec2::new(x, y)
    }
}

/// SplitMix64 for seed initialization.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Derive a 64-bit seed from a text label (e.g. a world or lobby name).
pub fn seed_from_label(label: &str) -> u64 {
    let mut hasher = Sha256::new();

    // Domain separator
    hasher.update(b"ARENA_SEED_V1");
    hasher.update(label.as_bytes());

    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(bytes)
}

// =============================================================================
// TESTS
// =============================================================================
