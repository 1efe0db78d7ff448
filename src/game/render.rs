//! Render Placement
//!
//! Screen-space math for an external renderer. Nothing here draws; it only
//! says where a sprite goes relative to the viewing player and how large it
//! is, and where a minimap marker sits.

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;
use crate::game::entity::{Entity, EntityState};
use crate::game::obstacle::Obstacle;

/// Canvas size and world-to-pixel scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Pixels per map unit
    pub scale: f64,
}

/// Where and how large to draw a sprite.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpritePlacement {
    /// Sprite center X in pixels
    pub x: f64,
    /// Sprite center Y in pixels
    pub y: f64,
    /// Canvas rotation in radians
    pub rotation: f64,
    /// Sprite width in pixels
    pub width: f64,
    /// Draw order
    pub z_index: i32,
}

impl SpritePlacement {
    /// Height for an image with the given natural `width / height` ratio.
    pub fn height_for(&self, aspect: f64) -> f64 {
        self.width * aspect
    }
}

/// A circle on the minimap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    /// Center X in minimap pixels
    pub x: f64,
    /// Center Y in minimap pixels
    pub y: f64,
    /// Radius in minimap pixels
    pub radius: f64,
}

/// Place `entity` on a canvas centered on `viewer`.
///
/// `size_factor` multiplies the hitbox diameter to get the sprite width.
pub fn sprite_placement(
    entity: &EntityState,
    viewer: &EntityState,
    viewport: &Viewport,
    size_factor: f64,
) -> SpritePlacement {
    let relative = entity.position().add(viewer.position().inverse());
    SpritePlacement {
        x: viewport.width / 2.0 + relative.x * viewport.scale,
        y: viewport.height / 2.0 + relative.y * viewport.scale,
        rotation: -entity.direction().angle(),
        width: viewport.scale * entity.hitbox().comparable() * 2.0 * size_factor,
        z_index: 0,
    }
}

/// Minimap circle at `position` scaled by `scale`.
pub fn map_marker(position: Vec2, scale: f64, radius: f64) -> MapMarker {
    let scaled = position.scale_all(scale);
    MapMarker {
        x: scaled.x,
        y: scaled.y,
        radius: radius * scale,
    }
}

/// Entities an external renderer can draw.
pub trait Renderable: Entity {
    /// Draw order, higher draws on top.
    fn z_index(&self) -> i32;

    /// Sprite width relative to the hitbox diameter.
    fn size_factor(&self) -> f64 {
        1.0
    }

    /// Minimap marker radius in map units, `None` to stay off the minimap.
    fn marker_radius(&self) -> Option<f64> {
        None
    }

    /// Sprite placement relative to `viewer`.
    fn sprite(&self, viewer: &dyn Entity, viewport: &Viewport) -> SpritePlacement {
        SpritePlacement {
            z_index: self.z_index(),
            ..sprite_placement(self.state(), viewer.state(), viewport, self.size_factor())
        }
    }

    /// Minimap marker.
    fn map_marker(&self, scale: f64) -> Option<MapMarker> {
        self.marker_radius()
            .map(|radius| map_marker(self.position(), scale, radius))
    }
}

impl Renderable for Obstacle {
    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn size_factor(&self) -> f64 {
        self.sprite_scale()
    }

    fn marker_radius(&self) -> Option<f64> {
        self.marker_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hitbox::Hitbox;
    use crate::game::minimized::{MinEntity, MinObstacle};
    use crate::game::obstacle::ObstacleRegistry;
    use crate::game::player::{Player, PlayerId};

    const VIEWPORT: Viewport = Viewport { width: 800.0, height: 600.0, scale: 10.0 };

    #[test]
    fn test_sprite_relative_to_viewer() {
        let viewer = EntityState::at(Vec2::new(50.0, 50.0));
        let entity = EntityState::at(Vec2::new(52.0, 47.0))
            .with_hitbox(Hitbox::Circle { radius: 1.5 });

        let placement = sprite_placement(&entity, &viewer, &VIEWPORT, 5.0);
        assert_eq!(placement.x, 420.0);
        assert_eq!(placement.y, 270.0);
        assert_eq!(placement.width, 150.0);
        assert_eq!(placement.height_for(0.5), 75.0);
    }

    #[test]
    fn test_rotation_follows_direction() {
        let viewer = EntityState::at(Vec2::ZERO);
        let mut entity = EntityState::at(Vec2::ZERO);
        entity.store_direction(Vec2::new(0.0, 3.0)).unwrap();
        let placement = sprite_placement(&entity, &viewer, &VIEWPORT, 1.0);
        assert!((placement.rotation + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_tree_renderable() {
        let min = MinObstacle {
            entity: MinEntity {
                entity_type: "tree".to_string(),
                position: Vec2::new(10.0, 20.0),
                direction: Vec2::RIGHT,
                hitbox: Hitbox::Circle { radius: 1.0 },
            },
            despawn: false,
        };
        let mut tree = ObstacleRegistry::with_defaults().create(&min).unwrap();
        let viewer = Player::new(PlayerId::new([7; 16]), Vec2::new(10.0, 20.0));

        let standing = tree.sprite(&viewer, &VIEWPORT);
        assert_eq!((standing.x, standing.y), (400.0, 300.0));
        assert_eq!(standing.width, 100.0);
        assert_eq!(standing.z_index, 1000);

        tree.despawn = true;
        assert_eq!(tree.sprite(&viewer, &VIEWPORT).width, 20.0);

        let marker = tree.map_marker(2.0).unwrap();
        assert_eq!((marker.x, marker.y), (20.0, 40.0));
        assert!((marker.radius - 10.8).abs() < 1e-12);
    }
}
