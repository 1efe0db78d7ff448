//! Entity Base
//!
//! Shared movement state plus the [`Entity`] trait that every variant
//! implements. Variants own an [`EntityState`] and override individual trait
//! methods where their behavior differs (see `Player::set_velocity`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::bounds::MapBounds;
use crate::core::hitbox::{Hitbox, HitboxError};
use crate::core::rng::DeterministicRng;
use crate::core::vec2::{GeometryError, Vec2};
use crate::game::collision::collided;
use crate::game::minimized::MinEntity;

/// Errors raised while building or mutating entities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntityError {
    /// Vector operation failed (e.g. zero direction).
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Hitbox measurements were rejected.
    #[error(transparent)]
    Hitbox(#[from] HitboxError),

    /// Bullets must deal positive damage.
    #[error("bullet damage must be positive, got {0}")]
    NonPositiveDamage(f64),

    /// Vector field was NaN or infinite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

/// Position, velocity, direction and hitbox of an entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    position: Vec2,
    velocity: Vec2,
    direction: Vec2,
    hitbox: Hitbox,
}

impl EntityState {
    /// State at `position` with zero velocity, +X direction and a
    /// zero-radius circle hitbox.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            direction: Vec2::RIGHT,
            hitbox: Hitbox::ZERO,
        }
    }

    /// State at a random spawn point drawn from `rng`.
    pub fn spawn(rng: &mut DeterministicRng, bounds: &MapBounds) -> Self {
        Self::at(rng.spawn_position(bounds))
    }

    /// Rebuild state from a minimized entity.
    ///
    /// Velocity is not part of the minimized form and starts at zero.
    pub fn from_min(min: &MinEntity) -> Result<Self, EntityError> {
        min.validate()?;
        Ok(Self {
            position: min.position,
            velocity: Vec2::ZERO,
            direction: min.direction,
            hitbox: min.hitbox,
        })
    }

    /// Replace the hitbox.
    pub fn with_hitbox(mut self, hitbox: Hitbox) -> Self {
        self.hitbox = hitbox;
        self
    }

    /// Replace the velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity (per tick).
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Facing direction, unit length once set.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Collision shape.
    #[inline]
    pub fn hitbox(&self) -> &Hitbox {
        &self.hitbox
    }

    /// Integrate velocity and clamp into `bounds`.
    #[inline]
    pub fn integrate(&mut self, bounds: &MapBounds) {
        self.position = bounds.clamp(self.position.add(self.velocity));
    }

    /// Store velocity verbatim. NaN or infinite velocities are rejected and
    /// the previous velocity is kept, so integration stays inside the map.
    #[inline]
    pub fn store_velocity(&mut self, velocity: Vec2) -> Result<(), EntityError> {
        if !velocity.is_finite() {
            return Err(EntityError::NonFinite("velocity"));
        }
        self.velocity = velocity;
        Ok(())
    }

    /// Store the unit of `direction`. A zero vector leaves the old direction.
    pub fn store_direction(&mut self, direction: Vec2) -> Result<(), GeometryError> {
        self.direction = direction.unit()?;
        Ok(())
    }
}

/// Behavior shared by players, bullets and obstacles.
///
/// The default method bodies are the base behavior; variants override only
/// what they change.
pub trait Entity {
    /// Type tag such as `"player"`, `"bullet"` or `"tree"`.
    fn entity_type(&self) -> &str;

    /// Shared movement state.
    fn state(&self) -> &EntityState;

    /// Mutable movement state.
    fn state_mut(&mut self) -> &mut EntityState;

    /// Current position.
    fn position(&self) -> Vec2 {
        self.state().position()
    }

    /// Current velocity.
    fn velocity(&self) -> Vec2 {
        self.state().velocity()
    }

    /// Facing direction.
    fn direction(&self) -> Vec2 {
        self.state().direction()
    }

    /// Collision shape.
    fn hitbox(&self) -> &Hitbox {
        self.state().hitbox()
    }

    /// Advance one tick: `position += velocity`, then clamp to the map.
    fn tick(&mut self, bounds: &MapBounds) {
        self.state_mut().integrate(bounds);
    }

    /// Set the per-tick velocity.
    fn set_velocity(&mut self, velocity: Vec2) -> Result<(), EntityError> {
        self.state_mut().store_velocity(velocity)
    }

    /// Set the facing direction, normalized to unit length.
    fn set_direction(&mut self, direction: Vec2) -> Result<(), GeometryError> {
        self.state_mut().store_direction(direction)
    }

    /// Whether this entity's hitbox overlaps `other`'s.
    fn entity_collided(&self, other: &dyn Entity) -> bool {
        collided(self.state(), other.state())
    }

    /// Minimized representation for save data or the wire.
    fn minimize(&self) -> MinEntity {
        MinEntity::from_state(self.entity_type(), self.state())
    }
}
