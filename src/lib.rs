//! # Arena Core
//!
//! Entity and hitbox model for a 2D top-down arena shooter: movement,
//! map-bound clamping and shape-vs-shape collision.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       ARENA CORE                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Pure primitives                           │
//! │  ├── vec2.rs     - 2D vector math                            │
//! │  ├── hitbox.rs   - Circle / rect shapes                      │
//! │  ├── bounds.rs   - Map rectangle and clamping                │
//! │  ├── rng.rs      - Seedable Xorshift128+ PRNG                │
//! │  └── hash.rs     - State hashing                             │
//! │                                                              │
//! │  game/           - Entities                                  │
//! │  ├── entity.rs   - EntityState + Entity trait                │
//! │  ├── collision.rs- Shape-pair dispatch                       │
//! │  ├── player.rs   - Boosted player                            │
//! │  ├── bullet.rs   - Timed projectile                          │
//! │  ├── obstacle.rs - Obstacles and supplier registry           │
//! │  ├── minimized.rs- Serializable snapshots                    │
//! │  ├── render.rs   - Sprite placement math                     │
//! │  └── world.rs    - Reference tick loop                       │
//! │                                                              │
//! │  config.rs       - World configuration                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! Nothing in `core/` or `game/` reads a clock or a global random source.
//! Spawn positions come from an injected [`DeterministicRng`] and entity
//! maps are `BTreeMap`s, so a world built from the same seed and driven by
//! the same calls hashes identically.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::config::{ConfigError, WorldConfig};
pub use crate::core::bounds::MapBounds;
pub use crate::core::hitbox::{Hitbox, HitboxError};
pub use crate::core::rng::DeterministicRng;
pub use crate::core::vec2::{GeometryError, Vec2};
pub use crate::game::entity::{Entity, EntityState};
pub use crate::game::collision::collided;
pub use crate::game::player::{Player, PlayerId};
pub use crate::game::bullet::Bullet;
pub use crate::game::world::World;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default map size in map units (width, height)
pub const MAP_SIZE: [f64; 2] = [1000.0, 1000.0];

/// Default simulation tick rate (Hz)
pub const TICK_RATE: u32 = 30;
