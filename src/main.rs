//! Arena Core demo runner
//!
//! Runs a seeded headless simulation, logs what happened, then replays it
//! and checks that both runs hash the same.
//!
//! Usage: `arena-core [config.json]`

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use arena_core::{
    game::{
        events::GameEventData,
        minimized::MinObstacle,
        obstacle::ObstacleRegistry,
    },
    Entity, Vec2, World, WorldConfig, TICK_RATE, VERSION,
};

/// Demo length: one minute of game time.
const DEMO_TICKS: u64 = 60 * TICK_RATE as u64;

const DEMO_OBSTACLES: &str = r#"[
    {"type":"tree","position":{"x":600.0,"y":600.0},"direction":{"x":1.0,"y":0.0},
     "hitbox":{"type":"circle","radius":1.5}},
    {"type":"tree","position":{"x":700.0,"y":650.0},"direction":{"x":0.0,"y":1.0},
     "hitbox":{"type":"circle","radius":1.5}},
    {"type":"tree","position":{"x":820.0,"y":540.0},"direction":{"x":1.0,"y":0.0},
     "hitbox":{"type":"circle","radius":1.5},"despawn":true}
]"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Arena Core v{}", VERSION);

    let config = match std::env::args().nth(1) {
        Some(path) => WorldConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => WorldConfig::default(),
    };
    info!(
        "Map {}x{}, {} Hz, seed {}",
        config.map_width,
        config.map_height,
        config.tick_rate,
        config.world_seed()
    );

    let hash = run_demo(&config)?;
    info!("Final State Hash: {}", hex::encode(hash));

    info!("=== Verifying Determinism ===");
    let replay_hash = run_demo(&config)?;
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash == replay_hash {
        info!("DETERMINISM VERIFIED: Hashes match!");
    } else {
        warn!("DETERMINISM FAILURE: Hashes differ!");
    }

    Ok(())
}

/// Build a world, drive it for `DEMO_TICKS`, and return its final hash.
fn run_demo(config: &WorldConfig) -> Result<[u8; 32]> {
    let registry = ObstacleRegistry::with_defaults();
    let mut world = World::new(config.clone()).context("building world")?;

    for min in MinObstacle::list_from_json(DEMO_OBSTACLES).context("parsing demo obstacles")? {
        world
            .add_obstacle(&registry, &min)
            .with_context(|| format!("placing {}", min.obstacle_type()))?;
    }

    let player_ids: Vec<_> = (0..4).map(|_| world.spawn_player()).collect();
    for id in &player_ids {
        if let Some(player) = world.get_player(id) {
            info!("Added player {} at {}", &id.to_uuid_string()[..8], player.position());
        }
    }

    let mut hits = 0usize;
    let mut expired = 0usize;

    for t in 0..DEMO_TICKS {
        // Steer players around in slow circles
        for (i, id) in player_ids.iter().enumerate() {
            let angle = (t as f64 * 0.02) * (i as f64 + 1.0);
            let heading = Vec2::new(angle.cos(), angle.sin());
            if let Some(player) = world.get_player_mut(id) {
                player.boost = if i % 2 == 0 { 1.0 } else { 1.5 };
                player.set_velocity(heading.scale_all(0.5))?;
                player.set_direction(heading)?;
            }
        }

        // Every second, each player fires along its facing direction
        if t % TICK_RATE as u64 == 0 {
            let shots: Vec<(Vec2, Vec2)> = player_ids
                .iter()
                .filter_map(|id| world.get_player(id))
                .map(|p| (p.position().add(p.direction().scale_all(1.2)), p.direction()))
                .collect();
            for (origin, direction) in shots {
                world.fire_bullet(10.0, direction.scale_all(3.0), TICK_RATE, Some(origin))?;
            }
        }

        let result = world.tick();
        for event in &result.events {
            match &event.data {
                GameEventData::BulletHitPlayer { player_id, damage, .. } => {
                    hits += 1;
                    info!(
                        "Tick {}: player {} hit for {}",
                        event.tick,
                        &player_id.to_uuid_string()[..8],
                        damage
                    );
                }
                GameEventData::BulletExpired { .. } => expired += 1,
                _ => {}
            }
        }

        if (t + 1) % (10 * TICK_RATE as u64) == 0 {
            world.log_summary();
        }
    }

    info!("Hits: {}, expired bullets: {}", hits, expired);
    Ok(world.compute_hash())
}
