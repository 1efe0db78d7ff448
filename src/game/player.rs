//! Player Entity

use serde::{Deserialize, Serialize};

use crate::core::bounds::MapBounds;
use crate::core::hitbox::Hitbox;
use crate::core::rng::DeterministicRng;
use crate::core::vec2::Vec2;
use crate::game::entity::{Entity, EntityError, EntityState};

// =============================================================================
// PLAYER ID
// =============================================================================

/// Unique player identifier (UUID as bytes).
///
/// Implements Ord for deterministic BTreeMap ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub [u8; 16]);

impl PlayerId {
    /// Create from raw bytes.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Draw a random (version 4) UUID from a seeded generator.
    pub fn from_rng(rng: &mut DeterministicRng) -> Self {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&rng.next_u64().to_le_bytes());
        bytes[8..].copy_from_slice(&rng.next_u64().to_le_bytes());
        let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
        Self(*uuid.as_bytes())
    }

    /// Create from UUID string.
    pub fn from_uuid_str(s: &str) -> Option<Self> {
        uuid::Uuid::parse_str(s)
            .ok()
            .map(|u| Self(*u.as_bytes()))
    }

    /// Convert to UUID string.
    pub fn to_uuid_string(&self) -> String {
        uuid::Uuid::from_bytes(self.0).to_string()
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

// =============================================================================
// PLAYER
// =============================================================================

/// Player hitbox radius.
pub const PLAYER_RADIUS: f64 = 1.0;

/// Starting and maximum health.
pub const DEFAULT_MAX_HEALTH: f64 = 100.0;

/// A player-controlled entity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Unique player ID
    pub id: PlayerId,

    /// Current health (0 to `max_health`)
    pub health: f64,

    /// Maximum health
    pub max_health: f64,

    /// Velocity multiplier applied when a velocity is set
    pub boost: f64,

    /// View zoom level
    pub scope: f64,

    state: EntityState,
}

impl Player {
    /// Create a player at `position`.
    pub fn new(id: PlayerId, position: Vec2) -> Self {
        Self {
            id,
            health: DEFAULT_MAX_HEALTH,
            max_health: DEFAULT_MAX_HEALTH,
            boost: 1.0,
            scope: 1.0,
            state: EntityState::at(position)
                .with_hitbox(Hitbox::Circle { radius: PLAYER_RADIUS }),
        }
    }

    /// Create a player at a random spawn point.
    pub fn spawn(id: PlayerId, rng: &mut DeterministicRng, bounds: &MapBounds) -> Self {
        Self::new(id, rng.spawn_position(bounds))
    }

    /// Set health, clamped to `0..=max_health`.
    pub fn set_health(&mut self, health: f64) {
        self.health = health.clamp(0.0, self.max_health);
    }

}

impl Entity for Player {
    fn entity_type(&self) -> &str {
        "player"
    }

    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }

    /// Boost is applied now; later boost changes leave this velocity alone.
    /// A non-finite boosted velocity (e.g. infinite boost) is rejected.
    fn set_velocity(&mut self, velocity: Vec2) -> Result<(), EntityError> {
        let boosted = velocity.scale_all(self.boost);
        self.state.store_velocity(boosted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_player() -> Player {
        Player::new(PlayerId::new([1; 16]), Vec2::new(50.0, 50.0))
    }

    #[test]
    fn test_player_defaults() {
        let player = test_player();
        assert_eq!(player.health, 100.0);
        assert_eq!(player.max_health, 100.0);
        assert_eq!(player.boost, 1.0);
        assert_eq!(player.scope, 1.0);
        assert_eq!(player.entity_type(), "player");
        assert_eq!(*player.hitbox(), Hitbox::Circle { radius: 1.0 });
    }

    #[test]
    fn test_boost_applies_at_set_time() {
        let mut player = test_player();
        player.boost = 2.0;
        player.set_velocity(Vec2::new(1.0, 0.0)).unwrap();
        assert_eq!(player.velocity(), Vec2::new(2.0, 0.0));

        player.boost = 3.0;
        assert_eq!(player.velocity(), Vec2::new(2.0, 0.0));

        player.tick(&MapBounds::new(100.0, 100.0));
        assert_eq!(player.position(), Vec2::new(52.0, 50.0));
    }

    #[test]
    fn test_infinite_boost_rejected() {
        let mut player = test_player();
        player.set_velocity(Vec2::new(0.5, 0.0)).unwrap();

        // inf * 0 is NaN
        player.boost = f64::INFINITY;
        assert_eq!(
            player.set_velocity(Vec2::ZERO),
            Err(EntityError::NonFinite("velocity"))
        );
        assert_eq!(player.velocity(), Vec2::new(0.5, 0.0));

        let bounds = MapBounds::new(100.0, 100.0);
        player.tick(&bounds);
        assert!(bounds.contains(player.position()));
    }

    #[test]
    fn test_set_health_clamps() {
        let mut player = test_player();
        player.set_health(150.0);
        assert_eq!(player.health, 100.0);
        player.set_health(-5.0);
        assert_eq!(player.health, 0.0);
        player.set_health(25.0);
        assert_eq!(player.health, 25.0);
    }

    #[test]
    fn test_player_id_from_rng() {
        let a = PlayerId::from_rng(&mut DeterministicRng::new(3));
        let b = PlayerId::from_rng(&mut DeterministicRng::new(3));
        assert_eq!(a, b);

        let parsed = PlayerId::from_uuid_str(&a.to_uuid_string()).unwrap();
        assert_eq!(parsed, a);
        assert_eq!(uuid::Uuid::from_bytes(a.0).get_version_num(), 4);
    }
}
