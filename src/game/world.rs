//! World Container
//!
//! Owns every entity and advances them one tick at a time, in key order.
//! Collision checks only produce events; the world never applies damage.

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::config::{ConfigError, WorldConfig};
use crate::core::bounds::MapBounds;
use crate::core::hash::{compute_state_hash, StateHash, StateHasher};
use crate::core::rng::DeterministicRng;
use crate::core::vec2::Vec2;
use crate::game::bullet::Bullet;
use crate::game::entity::{Entity, EntityError};
use crate::game::events::{GameEvent, GameEventData};
use crate::game::minimized::MinObstacle;
use crate::game::obstacle::{Obstacle, ObstacleError, ObstacleRegistry};
use crate::game::player::{Player, PlayerId};
use crate::game::render::{Renderable, SpritePlacement, Viewport};

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
}

/// All entities on one map.
pub struct World {
    config: WorldConfig,
    bounds: MapBounds,
    rng: DeterministicRng,
    tick: u64,

    /// Players by ID
    pub players: BTreeMap<PlayerId, Player>,
    /// Live bullets by sequential ID
    pub bullets: BTreeMap<u32, Bullet>,
    /// Obstacles by sequential ID
    pub obstacles: BTreeMap<u32, Obstacle>,

    next_bullet_id: u32,
    next_obstacle_id: u32,
}

impl World {
    /// Create an empty world. The config is validated first.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = config.bounds();
        let rng = DeterministicRng::new(config.world_seed());
        Ok(Self {
            config,
            bounds,
            rng,
            tick: 0,
            players: BTreeMap::new(),
            bullets: BTreeMap::new(),
            obstacles: BTreeMap::new(),
            next_bullet_id: 0,
            next_obstacle_id: 0,
        })
    }

    /// Map bounds.
    pub fn bounds(&self) -> &MapBounds {
        &self.bounds
    }

    /// Configuration the world was built with.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Ticks simulated so far.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Spawn a player with a seeded ID at a random point.
    pub fn spawn_player(&mut self) -> PlayerId {
        let id = PlayerId::from_rng(&mut self.rng);
        let player = Player::spawn(id, &mut self.rng, &self.bounds);
        debug!("Spawned player {} at {}", id.to_uuid_string(), player.position());
        self.players.insert(id, player);
        id
    }

    /// Get player by ID.
    pub fn get_player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Get mutable player by ID.
    pub fn get_player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    /// Remove a player.
    pub fn remove_player(&mut self, id: &PlayerId) -> Option<Player> {
        self.players.remove(id)
    }

    /// Fire a bullet from `origin`, or from a random spawn point if `None`.
    pub fn fire_bullet(
        &mut self,
        damage: f64,
        velocity: Vec2,
        ticks: u32,
        origin: Option<Vec2>,
    ) -> Result<u32, EntityError> {
        let bullet = match origin {
            Some(position) => Bullet::new(damage, velocity, ticks, position)?,
            None => Bullet::spawn(damage, velocity, ticks, &mut self.rng, &self.bounds)?,
        };
        let id = self.next_bullet_id;
        self.next_bullet_id = self.next_bullet_id.wrapping_add(1);
        self.bullets.insert(id, bullet);
        Ok(id)
    }

    /// Build an obstacle from a snapshot and place it.
    pub fn add_obstacle(
        &mut self,
        registry: &ObstacleRegistry,
        min: &MinObstacle,
    ) -> Result<u32, ObstacleError> {
        let obstacle = registry.create(min)?;
        let id = self.next_obstacle_id;
        self.next_obstacle_id = self.next_obstacle_id.wrapping_add(1);
        self.obstacles.insert(id, obstacle);
        Ok(id)
    }

    /// Run one simulation tick.
    ///
    /// 1. Move every entity and clamp it to the map.
    /// 2. Report overlaps: bullet/player, bullet/obstacle, player/obstacle.
    ///    Despawned obstacles are skipped.
    /// 3. Count bullet lifetimes down and remove the expired ones. A bullet
    ///    on its last tick can still hit.
    pub fn tick(&mut self) -> TickResult {
        let mut result = TickResult::default();
        self.tick += 1;

        let bounds = self.bounds;
        for player in self.players.values_mut() {
            player.tick(&bounds);
        }
        for bullet in self.bullets.values_mut() {
            bullet.tick(&bounds);
        }
        for obstacle in self.obstacles.values_mut() {
            obstacle.tick(&bounds);
        }

        self.detect_collisions(&mut result);
        self.expire_bullets(&mut result);

        #[cfg(feature = "debug-tracing")]
        for (id, player) in &self.players {
            tracing::trace!(
                tick = self.tick,
                "player {} at {} vel {}",
                id.to_uuid_string(),
                player.position(),
                player.velocity()
            );
        }

        result
    }

    fn detect_collisions(&self, result: &mut TickResult) {
        for (bullet_id, bullet) in &self.bullets {
            for (player_id, player) in &self.players {
                if bullet.entity_collided(player) {
                    result.events.push(GameEvent::new(
                        self.tick,
                        GameEventData::BulletHitPlayer {
                            bullet_id: *bullet_id,
                            player_id: *player_id,
                            damage: bullet.damage(),
                        },
                    ));
                }
            }
            for (obstacle_id, obstacle) in &self.obstacles {
                if obstacle.is_solid() && bullet.entity_collided(obstacle) {
                    result.events.push(GameEvent::new(
                        self.tick,
                        GameEventData::BulletHitObstacle {
                            bullet_id: *bullet_id,
                            obstacle_id: *obstacle_id,
                        },
                    ));
                }
            }
        }

        for (player_id, player) in &self.players {
            for (obstacle_id, obstacle) in &self.obstacles {
                if obstacle.is_solid() && player.entity_collided(obstacle) {
                    result.events.push(GameEvent::new(
                        self.tick,
                        GameEventData::PlayerTouchedObstacle {
                            player_id: *player_id,
                            obstacle_id: *obstacle_id,
                        },
                    ));
                }
            }
        }
    }

    fn expire_bullets(&mut self, result: &mut TickResult) {
        let expired: Vec<u32> = self
            .bullets
            .iter_mut()
            .filter_map(|(id, bullet)| bullet.decrement_ticks().then_some(*id))
            .collect();

        for bullet_id in expired {
            self.bullets.remove(&bullet_id);
            debug!("Bullet {} expired at tick {}", bullet_id, self.tick);
            result
                .events
                .push(GameEvent::new(self.tick, GameEventData::BulletExpired { bullet_id }));
        }
    }

    /// Obstacle sprites as seen by `viewer`, in draw order.
    pub fn obstacle_sprites(&self, viewer: &PlayerId, viewport: &Viewport) -> Vec<SpritePlacement> {
        let Some(viewer) = self.players.get(viewer) else {
            return Vec::new();
        };
        let mut sprites: Vec<SpritePlacement> = self
            .obstacles
            .values()
            .map(|obstacle| obstacle.sprite(viewer, viewport))
            .collect();
        sprites.sort_by_key(|sprite| sprite.z_index);
        sprites
    }

    /// Hash of the full world state.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.tick, self.config.world_seed(), |hasher| {
            for (id, player) in &self.players {
                hasher.update_uuid(id.as_bytes());
                hash_entity(hasher, player);
                hasher.update_f64(player.health);
                hasher.update_f64(player.boost);
            }
            for (id, bullet) in &self.bullets {
                hasher.update_u32(*id);
                hash_entity(hasher, bullet);
                hasher.update_u32(bullet.ticks);
            }
            for (id, obstacle) in &self.obstacles {
                hasher.update_u32(*id);
                hash_entity(hasher, obstacle);
                hasher.update_bool(obstacle.despawn);
            }
        })
    }

    /// Log a one-line summary.
    pub fn log_summary(&self) {
        info!(
            "Tick {}: {} players, {} bullets, {} obstacles",
            self.tick,
            self.players.len(),
            self.bullets.len(),
            self.obstacles.len()
        );
    }
}

fn hash_entity(hasher: &mut StateHasher, entity: &dyn Entity) {
    hasher.update_str(entity.entity_type());
    hasher.update_vec2(entity.position());
    hasher.update_vec2(entity.velocity());
    hasher.update_vec2(entity.direction());
    hasher.update_hitbox(entity.hitbox());
}
