//! Obstacles and the Obstacle Registry
//!
//! Obstacles are static entities (trees, rocks, ...) rebuilt from minimized
//! snapshots. Each obstacle type has a supplier registered in an
//! [`ObstacleRegistry`] owned by whoever loads the map; there is no global
//! table.

use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::hitbox::{Hitbox, HitboxError};
use crate::game::entity::{Entity, EntityError, EntityState};
use crate::game::minimized::{MinEntity, MinObstacle};

/// Errors raised while building obstacles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObstacleError {
    /// No supplier registered for this type tag.
    #[error("unknown obstacle type: {0:?}")]
    UnknownType(String),

    /// Snapshot failed validation.
    #[error("invalid obstacle snapshot: {0}")]
    Invalid(#[from] EntityError),

    /// Snapshot hitbox is not usable for this obstacle type.
    #[error(transparent)]
    Hitbox(#[from] HitboxError),
}

/// A static map entity.
#[derive(Clone, Debug)]
pub struct Obstacle {
    obstacle_type: String,
    state: EntityState,

    /// Destroyed; renders as residue and no longer blocks
    pub despawn: bool,

    /// Draw order, higher draws on top
    pub z_index: i32,

    /// Sprite size relative to the hitbox while standing
    pub standing_scale: f64,

    /// Minimap marker radius in map units, if shown on the minimap
    pub marker_radius: Option<f64>,
}

impl Obstacle {
    /// Build an obstacle from a snapshot.
    pub fn from_min(
        min: &MinObstacle,
        z_index: i32,
        standing_scale: f64,
    ) -> Result<Self, ObstacleError> {
        Ok(Self {
            obstacle_type: min.obstacle_type().to_string(),
            state: EntityState::from_min(&min.entity)?,
            despawn: min.despawn,
            z_index,
            standing_scale,
            marker_radius: None,
        })
    }

    /// Whether this obstacle still takes part in collisions.
    pub fn is_solid(&self) -> bool {
        !self.despawn
    }

    /// Sprite size factor for the current state.
    pub fn sprite_scale(&self) -> f64 {
        if self.despawn {
            1.0
        } else {
            self.standing_scale
        }
    }

    /// Snapshot including the despawn flag.
    pub fn minimize_obstacle(&self) -> MinObstacle {
        MinObstacle {
            entity: MinEntity::from_state(&self.obstacle_type, &self.state),
            despawn: self.despawn,
        }
    }
}

impl Entity for Obstacle {
    fn entity_type(&self) -> &str {
        &self.obstacle_type
    }

    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }
}

// =============================================================================
// SUPPLIERS
// =============================================================================

/// Builds obstacles of one type from snapshots.
pub trait ObstacleSupplier: Send + Sync {
    /// Create the obstacle described by `min`.
    fn create(&self, min: &MinObstacle) -> Result<Obstacle, ObstacleError>;
}

/// Tree type tag.
pub const TREE_TYPE: &str = "tree";

/// Trees draw above players and bullets.
pub const TREE_Z_INDEX: i32 = 1000;

/// Canopy sprite is five times the trunk hitbox.
pub const TREE_CANOPY_SCALE: f64 = 5.0;

/// Minimap radius of a tree canopy.
pub const TREE_MARKER_RADIUS: f64 = 1.5 * 3.6;

/// Supplier for trees. Trees collide with a circular trunk.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSupplier;

impl ObstacleSupplier for TreeSupplier {
    fn create(&self, min: &MinObstacle) -> Result<Obstacle, ObstacleError> {
        if let Hitbox::Rect { .. } = min.entity.hitbox {
            return Err(HitboxError::UnsupportedShape(format!(
                "{} hitbox on {}",
                min.entity.hitbox.kind(),
                TREE_TYPE
            ))
            .into());
        }
        let mut tree = Obstacle::from_min(min, TREE_Z_INDEX, TREE_CANOPY_SCALE)?;
        tree.marker_radius = Some(TREE_MARKER_RADIUS);
        Ok(tree)
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Maps obstacle type tags to their suppliers.
#[derive(Default)]
pub struct ObstacleRegistry {
    suppliers: BTreeMap<String, Box<dyn ObstacleSupplier>>,
}

impl ObstacleRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in obstacle types.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TREE_TYPE, TreeSupplier);
        registry
    }

    /// Register a supplier, replacing any previous one for the same type.
    pub fn register<S>(&mut self, obstacle_type: &str, supplier: S)
    where
        S: ObstacleSupplier + 'static,
    {
        let previous = self
            .suppliers
            .insert(obstacle_type.to_string(), Box::new(supplier));
        if previous.is_some() {
            warn!("Replaced obstacle supplier for {:?}", obstacle_type);
        } else {
            debug!("Registered obstacle supplier for {:?}", obstacle_type);
        }
    }

    /// Whether a supplier exists for `obstacle_type`.
    pub fn contains(&self, obstacle_type: &str) -> bool {
        self.suppliers.contains_key(obstacle_type)
    }

    /// Registered type tags in sorted order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.suppliers.keys().map(String::as_str)
    }

    /// Build an obstacle using the supplier for its type tag.
    pub fn create(&self, min: &MinObstacle) -> Result<Obstacle, ObstacleError> {
        let supplier = self
            .suppliers
            .get(min.obstacle_type())
            .ok_or_else(|| ObstacleError::UnknownType(min.obstacle_type().to_string()))?;
        supplier.create(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;

    fn tree_min(despawn: bool) -> MinObstacle {
        MinObstacle {
            entity: MinEntity {
                entity_type: TREE_TYPE.to_string(),
                position: Vec2::new(20.0, 20.0),
                direction: Vec2::RIGHT,
                hitbox: Hitbox::Circle { radius: 1.5 },
            },
            despawn,
        }
    }

    #[test]
    fn test_registry_creates_tree() {
        let registry = ObstacleRegistry::with_defaults();
        assert!(registry.contains("tree"));

        let tree = registry.create(&tree_min(false)).unwrap();
        assert_eq!(tree.entity_type(), "tree");
        assert_eq!(tree.z_index, TREE_Z_INDEX);
        assert_eq!(tree.position(), Vec2::new(20.0, 20.0));
        assert_eq!(tree.sprite_scale(), 5.0);
        assert!(tree.is_solid());
    }

    #[test]
    fn test_despawned_tree() {
        let registry = ObstacleRegistry::with_defaults();
        let tree = registry.create(&tree_min(true)).unwrap();
        assert!(!tree.is_solid());
        assert_eq!(tree.sprite_scale(), 1.0);
        assert_eq!(tree.minimize_obstacle(), tree_min(true));
    }

    #[test]
    fn test_unknown_type() {
        let registry = ObstacleRegistry::new();
        assert!(matches!(
            registry.create(&tree_min(false)),
            Err(ObstacleError::UnknownType(t)) if t == "tree"
        ));
    }

    #[test]
    fn test_tree_rejects_rect_hitbox() {
        let mut min = tree_min(false);
        min.entity.hitbox = Hitbox::Rect { width: 1.0, height: 1.0 };
        let result = ObstacleRegistry::with_defaults().create(&min);
        assert!(matches!(result, Err(ObstacleError::Hitbox(HitboxError::UnsupportedShape(_)))));
    }

    #[test]
    fn test_custom_supplier() {
        struct CrateSupplier;
        impl ObstacleSupplier for CrateSupplier {
            fn create(&self, min: &MinObstacle) -> Result<Obstacle, ObstacleError> {
                Obstacle::from_min(min, 10, 1.0)
            }
        }

        let mut registry = ObstacleRegistry::with_defaults();
        registry.register("crate", CrateSupplier);
        assert_eq!(registry.types().collect::<Vec<_>>(), vec!["crate", "tree"]);

        let mut min = tree_min(false);
        min.entity.entity_type = "crate".to_string();
        min.entity.hitbox = Hitbox::Rect { width: 2.0, height: 2.0 };
        let obstacle = registry.create(&min).unwrap();
        assert_eq!(obstacle.z_index, 10);
        assert_eq!(obstacle.entity_type(), "crate");
        assert_eq!(obstacle.marker_radius, None);
    }
}
