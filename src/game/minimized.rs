//! Minimized Entities
//!
//! Compact serializable snapshots used to rebuild entities from save data or
//! from another process. Velocity is not carried; rebuilt entities start at
//! rest.

use serde::{Deserialize, Serialize};

use crate::core::hitbox::Hitbox;
use crate::core::vec2::Vec2;
use crate::game::entity::{EntityError, EntityState};

/// Snapshot of any entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinEntity {
    /// Type tag (`"player"`, `"bullet"`, `"tree"`, ...)
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Position on the map
    pub position: Vec2,
    /// Facing direction
    pub direction: Vec2,
    /// Collision shape
    pub hitbox: Hitbox,
}

impl MinEntity {
    /// Snapshot an entity's state under the given type tag.
    pub fn from_state(entity_type: &str, state: &EntityState) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            position: state.position(),
            direction: state.direction(),
            hitbox: *state.hitbox(),
        }
    }

    /// Reject non-finite vectors and bad hitbox measurements.
    pub fn validate(&self) -> Result<(), EntityError> {
        if !self.position.is_finite() {
            return Err(EntityError::NonFinite("position"));
        }
        if !self.direction.is_finite() {
            return Err(EntityError::NonFinite("direction"));
        }
        self.hitbox.validate()?;
        Ok(())
    }
}

/// Snapshot of an obstacle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinObstacle {
    /// Shared entity fields
    #[serde(flatten)]
    pub entity: MinEntity,
    /// Obstacle has been destroyed and renders as residue
    #[serde(default)]
    pub despawn: bool,
}

impl MinObstacle {
    /// Parse a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a JSON array of snapshots.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Obstacle type tag.
    pub fn obstacle_type(&self) -> &str {
        &self.entity.entity_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE_JSON: &str = r#"{
        "type": "tree",
        "position": {"x": 12.0, "y": 30.5},
        "direction": {"x": 0.0, "y": 1.0},
        "hitbox": {"type": "circle", "radius": 1.5},
        "despawn": true
    }"#;

    #[test]
    fn test_parse_obstacle() {
        let min = MinObstacle::from_json(TREE_JSON).unwrap();
        assert_eq!(min.obstacle_type(), "tree");
        assert_eq!(min.entity.position, Vec2::new(12.0, 30.5));
        assert_eq!(min.entity.hitbox, Hitbox::Circle { radius: 1.5 });
        assert!(min.despawn);
    }

    #[test]
    fn test_despawn_defaults_to_false() {
        let json = r#"{"type":"tree","position":{"x":1.0,"y":1.0},
            "direction":{"x":1.0,"y":0.0},"hitbox":{"type":"rect","width":2.0,"height":1.0}}"#;
        let min = MinObstacle::from_json(json).unwrap();
        assert!(!min.despawn);
    }

    #[test]
    fn test_unknown_hitbox_tag_rejected() {
        let json = r#"{"type":"tree","position":{"x":1.0,"y":1.0},
            "direction":{"x":1.0,"y":0.0},"hitbox":{"type":"hexagon","side":2.0}}"#;
        assert!(MinObstacle::from_json(json).is_err());
    }

    #[test]
    fn test_validate() {
        let mut min = MinObstacle::from_json(TREE_JSON).unwrap().entity;
        assert!(min.validate().is_ok());

        min.hitbox = Hitbox::Circle { radius: -1.0 };
        assert!(matches!(min.validate(), Err(EntityError::Hitbox(_))));

        min.position = Vec2::new(f64::NAN, 0.0);
        assert!(matches!(min.validate(), Err(EntityError::NonFinite("position"))));
    }

    #[test]
    fn test_state_roundtrip() {
        let state = EntityState::at(Vec2::new(3.0, 4.0))
            .with_hitbox(Hitbox::Rect { width: 1.0, height: 2.0 })
            .with_velocity(Vec2::new(9.0, 9.0));
        let min = MinEntity::from_state("crate", &state);
        let rebuilt = EntityState::from_min(&min).unwrap();
        assert_eq!(rebuilt.position(), state.position());
        assert_eq!(rebuilt.hitbox(), state.hitbox());
        assert_eq!(rebuilt.velocity(), Vec2::ZERO);
    }
}
