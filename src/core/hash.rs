//! State Hashing
//!
//! SHA-256 digest of world state, used to confirm that two runs started from
//! the same seed ended in the same place. Floats are hashed by bit pattern,
//! so `0.0` and `-0.0` hash differently.

use sha2::{Digest, Sha256};

use super::hitbox::Hitbox;
use super::vec2::Vec2;

/// Hash output type (256 bits / 32 bytes)
pub type StateHash = [u8; 32];

/// Ordered hasher for world state.
///
/// Order of updates is part of the hash.
pub struct StateHasher {
    hasher: Sha256,
}

impl StateHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for world state.
    pub fn for_world_state() -> Self {
        Self::new(b"ARENA_WORLD_STATE_V1")
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a u64 value (little-endian).
    #[inline]
    pub fn update_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an f64 by bit pattern.
    #[inline]
    pub fn update_f64(&mut self, value: f64) {
        self.update_u64(value.to_bits());
    }

    /// Update with a Vec2.
    #[inline]
    pub fn update_vec2(&mut self, value: Vec2) {
        self.update_f64(value.x);
        self.update_f64(value.y);
    }

    /// Update with a hitbox (shape tag then measurements).
    pub fn update_hitbox(&mut self, hitbox: &Hitbox) {
        match *hitbox {
            Hitbox::Circle { radius } => {
                self.update_u8(0);
                self.update_f64(radius);
            }
            Hitbox::Rect { width, height } => {
                self.update_u8(1);
                self.update_f64(width);
                self.update_f64(height);
            }
        }
    }

    /// Update with a length-prefixed string.
    pub fn update_str(&mut self, value: &str) {
        self.update_u32(value.len() as u32);
        self.hasher.update(value.as_bytes());
    }

    /// Update with a boolean.
    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.update_u8(value as u8);
    }

    /// Update with a UUID (16 bytes).
    #[inline]
    pub fn update_uuid(&mut self, uuid: &[u8; 16]) {
        self.hasher.update(uuid);
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> StateHash {
        self.hasher.finalize().into()
    }
}

/// Compute a world state hash.
///
/// The closure adds entity data after the tick counter and seed.
pub fn compute_state_hash<F>(tick: u64, seed: u64, add_state: F) -> StateHash
where
    F: FnOnce(&mut StateHasher),
{
    let mut hasher = StateHasher::for_world_state();

    // Always hash tick and seed first
    hasher.update_u64(tick);
    hasher.update_u64(seed);

    add_state(&mut hasher);

    hasher.finalize()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_hasher_determinism() {
        let make_hash = || {
            let mut hasher = StateHasher::for_world_state();
            hasher.update_u32(100);
            hasher.update_vec2(Vec2::new(1.0, 2.0));
            hasher.update_hitbox(&Hitbox::Rect { width: 2.0, height: 1.0 });
            hasher.update_str("tree");
            hasher.update_bool(true);
            hasher.finalize()
        };

        assert_eq!(make_hash(), make_hash());
    }

    #[test]
    fn test_hash_order_matters() {
        let hash1 = {
            let mut h = StateHasher::new(b"test");
            h.update_f64(1.0);
            h.update_f64(2.0);
            h.finalize()
        };

        let hash2 = {
            let mut h = StateHasher::new(b"test");
            h.update_f64(2.0);
            h.update_f64(1.0);
            h.finalize()
        };

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_compute_state_hash() {
        let hash = compute_state_hash(100, 12345, |hasher| {
            hasher.update_vec2(Vec2::new(5.0, 5.0));
        });
        let same = compute_state_hash(100, 12345, |hasher| {
            hasher.update_vec2(Vec2::new(5.0, 5.0));
        });
        let later = compute_state_hash(101, 12345, |hasher| {
            hasher.update_vec2(Vec2::new(5.0, 5.0));
        });

        assert_eq!(hash, same);
        assert_ne!(hash, later);
    }
}
