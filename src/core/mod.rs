//! Core primitives.
//!
//! Pure value types with no knowledge of entities: vectors, hitbox shapes,
//! map bounds, the seedable RNG and the state hasher.

pub mod vec2;
pub mod hitbox;
pub mod bounds;
pub mod rng;
pub mod hash;

// Re-export core types
pub use vec2::{GeometryError, Vec2};
pub use hitbox::{Hitbox, HitboxError, ShapeKind};
pub use bounds::MapBounds;
pub use rng::DeterministicRng;
pub use hash::{compute_state_hash, StateHash, StateHasher};
