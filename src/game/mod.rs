//! Game Module
//!
//! Entities, collision and the reference world loop.
//!
//! ## Module Structure
//!
//! - `entity`: Shared entity state and the `Entity` trait
//! - `collision`: Shape-pair overlap tests
//! - `player`, `bullet`, `obstacle`: Entity variants
//! - `minimized`: Serializable entity snapshots
//! - `render`: Screen placement for an external renderer
//! - `world`: Owns entities and runs ticks
//! - `events`: What a tick reports

pub mod entity;
pub mod collision;
pub mod player;
pub mod bullet;
pub mod obstacle;
pub mod minimized;
pub mod render;
pub mod world;
pub mod events;

// Re-export key types
pub use entity::{Entity, EntityError, EntityState};
pub use collision::collided;
pub use player::{Player, PlayerId};
pub use bullet::Bullet;
pub use obstacle::{Obstacle, ObstacleError, ObstacleRegistry, ObstacleSupplier};
pub use minimized::{MinEntity, MinObstacle};
pub use world::{TickResult, World};
pub use events::{GameEvent, GameEventData};
