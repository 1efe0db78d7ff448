//! Game Events
//!
//! What happened during a world tick. The world only reports; applying
//! damage or scoring is up to the caller.

use serde::{Deserialize, Serialize};

use crate::game::player::PlayerId;

/// Game event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// Bullet overlapped a player
    BulletHitPlayer {
        /// Bullet that hit
        bullet_id: u32,
        /// Player that was hit
        player_id: PlayerId,
        /// Damage the bullet carries
        damage: f64,
    },

    /// Bullet overlapped a standing obstacle
    BulletHitObstacle {
        /// Bullet that hit
        bullet_id: u32,
        /// Obstacle that was hit
        obstacle_id: u32,
    },

    /// Player overlapped a standing obstacle
    PlayerTouchedObstacle {
        /// Player touching the obstacle
        player_id: PlayerId,
        /// Obstacle being touched
        obstacle_id: u32,
    },

    /// Bullet ran out of lifetime and was removed
    BulletExpired {
        /// Bullet that was removed
        bullet_id: u32,
    },
}

/// A game event stamped with the tick it happened on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick number
    pub tick: u64,
    /// Event payload
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(tick: u64, data: GameEventData) -> Self {
        Self { tick, data }
    }
}
