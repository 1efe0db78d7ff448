//! Bullet Entity
//!
//! Bullets move with the velocity they were fired with. The owning loop
//! counts their lifetime down and removes them when it runs out.

use serde::{Deserialize, Serialize};

use crate::core::bounds::MapBounds;
use crate::core::hitbox::Hitbox;
use crate::core::rng::DeterministicRng;
use crate::core::vec2::Vec2;
use crate::game::entity::{Entity, EntityError, EntityState};

/// Bullet hitbox radius.
pub const BULLET_RADIUS: f64 = 0.1;

/// A projectile with fixed damage and a lifetime in ticks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Bullet {
    damage: f64,

    /// Remaining lifetime in ticks
    pub ticks: u32,

    state: EntityState,
}

impl Bullet {
    /// Create a bullet at `position`.
    pub fn new(damage: f64, velocity: Vec2, ticks: u32, position: Vec2) -> Result<Self, EntityError> {
        if !damage.is_finite() || damage <= 0.0 {
            return Err(EntityError::NonPositiveDamage(damage));
        }
        if !velocity.is_finite() {
            return Err(EntityError::NonFinite("velocity"));
        }

        Ok(Self {
            damage,
            ticks,
            state: EntityState::at(position)
                .with_hitbox(Hitbox::Circle { radius: BULLET_RADIUS })
                .with_velocity(velocity),
        })
    }

    /// Create a bullet at a random spawn point.
    pub fn spawn(
        damage: f64,
        velocity: Vec2,
        ticks: u32,
        rng: &mut DeterministicRng,
        bounds: &MapBounds,
    ) -> Result<Self, EntityError> {
        Self::new(damage, velocity, ticks, rng.spawn_position(bounds))
    }

    /// Damage dealt on hit.
    pub fn damage(&self) -> f64 {
        self.damage
    }

    /// Count one tick of lifetime down. Returns true once expired.
    pub fn decrement_ticks(&mut self) -> bool {
        self.ticks = self.ticks.saturating_sub(1);
        self.is_expired()
    }

    /// Lifetime has run out.
    pub fn is_expired(&self) -> bool {
        self.ticks == 0
    }
}

impl Entity for Bullet {
    fn entity_type(&self) -> &str {
        "bullet"
    }

    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_construction() {
        let bullet = Bullet::new(10.0, Vec2::new(2.0, 0.0), 30, Vec2::new(5.0, 5.0)).unwrap();
        assert_eq!(bullet.damage(), 10.0);
        assert_eq!(bullet.ticks, 30);
        assert_eq!(bullet.velocity(), Vec2::new(2.0, 0.0));
        assert_eq!(*bullet.hitbox(), Hitbox::Circle { radius: 0.1 });
        assert_eq!(bullet.entity_type(), "bullet");
    }

    #[test]
    fn test_bullet_rejects_bad_damage() {
        for damage in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Bullet::new(damage, Vec2::ZERO, 1, Vec2::ZERO);
            assert!(matches!(result, Err(EntityError::NonPositiveDamage(_))));
        }
    }

    #[test]
    fn test_bullets_collide() {
        let a = Bullet::new(1.0, Vec2::ZERO, 10, Vec2::new(0.0, 0.0)).unwrap();
        let b = Bullet::new(1.0, Vec2::ZERO, 10, Vec2::new(0.15, 0.0)).unwrap();
        assert!(a.entity_collided(&b));
        assert!(b.entity_collided(&a));
    }

    #[test]
    fn test_lifetime_countdown() {
        let mut bullet = Bullet::new(1.0, Vec2::ZERO, 2, Vec2::ZERO).unwrap();
        assert!(!bullet.decrement_ticks());
        assert!(bullet.decrement_ticks());
        assert!(bullet.decrement_ticks());
        assert_eq!(bullet.ticks, 0);
    }

    #[test]
    fn test_bullet_moves_and_clamps() {
        let bounds = MapBounds::new(10.0, 10.0);
        let mut bullet = Bullet::new(1.0, Vec2::new(4.0, -4.0), 5, Vec2::new(8.0, 2.0)).unwrap();
        bullet.tick(&bounds);
        assert_eq!(bullet.position(), Vec2::new(10.0, 0.0));
    }
}
