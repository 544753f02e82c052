//! Headless arena: world setup, the update schedule and the fixed-step loop.
//!
//! An arena is one player and a crowd of enemies. Each step the player
//! acquires the nearest enemy through the
//! [`CurrentEnemy`](crate::resources::currentenemy::CurrentEnemy) guard, hits
//! it until it dies, and moves on. Dead enemies linger as corpses and are then
//! despawned, which exercises the destruction path of the guard.
//!
//! # Step order
//!
//! 1. [`update_world_time`] advances [`WorldTime`] by the configured step
//! 2. [`acquire_target_system`] fills an empty guard
//! 3. [`attack_current_enemy_system`] raises a [`DamageEvent`](crate::events::damage::DamageEvent)
//! 4. [`death_system`] tags dead enemies and raises
//!    [`EnemyDied`](crate::events::death::EnemyDied)
//! 5. [`corpse_system`] despawns expired corpses

use std::fmt;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use log::info;
use serde::Serialize;

use crate::components::enemy::{Enemy, Player};
use crate::components::health::{Dead, Health};
use crate::components::mapposition::MapPosition;
use crate::events::currentenemy::observe_current_enemy_changed;
use crate::events::damage::apply_damage_observer;
use crate::resources::currentenemy::CurrentEnemy;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rng::ArenaRng;
use crate::resources::stats::ArenaStats;
use crate::resources::worldtime::WorldTime;
use crate::systems::attack::attack_current_enemy_system;
use crate::systems::corpse::corpse_system;
use crate::systems::death::death_system;
use crate::systems::targeting::{acquire_target_system, observe_enemy_despawned};
use crate::systems::time::update_world_time;

const ENEMY_KINDS: [&str; 4] = ["goblin", "skeleton", "slime", "bat"];

/// Insert every resource the arena systems read.
pub fn insert_resources(world: &mut World, config: GameConfig) {
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.insert_resource(ArenaRng::with_seed(config.seed));
    world.insert_resource(CurrentEnemy::new());
    world.insert_resource(ArenaStats::default());
    world.insert_resource(config);
}

/// Spawn the global observers the arena relies on.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(apply_damage_observer));
    world.spawn(Observer::new(observe_enemy_despawned));
    world.spawn(Observer::new(observe_current_enemy_changed));
    // Ensure the observers are registered before any system triggers events.
    world.flush();
}

/// Spawn the player in the middle of the arena and the configured enemies
/// at random positions.
pub fn setup(world: &mut World) {
    let config = world.resource::<GameConfig>().clone();
    let (width, height) = config.arena_size();

    world.spawn((
        Player {
            damage: config.player_damage,
        },
        MapPosition::new(width * 0.5, height * 0.5),
    ));

    let positions: Vec<MapPosition> = {
        let mut rng = world.resource_mut::<ArenaRng>();
        (0..config.enemies)
            .map(|_| MapPosition::new(rng.0.f32() * width, rng.0.f32() * height))
            .collect()
    };
    for (i, pos) in positions.into_iter().enumerate() {
        let name = format!("{}-{}", ENEMY_KINDS[i % ENEMY_KINDS.len()], i);
        world.spawn((Enemy::new(name), Health::new(config.enemy_health), pos));
    }

    info!(
        "Arena {}x{} set up with {} enemies",
        width, height, config.enemies
    );
}

/// Build the per-step schedule. Systems run in a fixed order on one thread.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.set_executor_kind(ExecutorKind::SingleThreaded);
    update.add_systems(
        (
            acquire_target_system,
            attack_current_enemy_system,
            death_system,
            corpse_system,
        )
            .chain(),
    );
    update
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArenaReport {
    pub ticks: u32,
    pub elapsed: f32,
    pub kills: u32,
    pub current_enemy_kills: u32,
    pub retargets: u32,
    /// Enemies still alive at the end.
    pub survivors: u32,
}

impl fmt::Display for ArenaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ticks:               {}", self.ticks)?;
        writeln!(f, "elapsed:             {:.2}s", self.elapsed)?;
        writeln!(f, "kills:               {}", self.kills)?;
        writeln!(f, "current enemy kills: {}", self.current_enemy_kills)?;
        writeln!(f, "retargets:           {}", self.retargets)?;
        write!(f, "survivors:           {}", self.survivors)
    }
}

/// A ready-to-run world plus its schedule.
pub struct Arena {
    world: World,
    update: Schedule,
    step: f32,
    max_ticks: u32,
}

impl Arena {
    /// Build the world from `config` and spawn the combatants.
    pub fn new(config: GameConfig) -> Result<Self, String> {
        let step = config.step;
        let max_ticks = config.ticks;

        let mut world = World::new();
        insert_resources(&mut world, config);
        register_observers(&mut world);
        setup(&mut world);

        let mut update = build_schedule();
        update
            .initialize(&mut world)
            .map_err(|e| format!("Failed to initialize schedule: {}", e))?;

        Ok(Arena {
            world,
            update,
            step,
            max_ticks,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self) {
        update_world_time(&mut self.world, self.step);
        self.update.run(&mut self.world);
        self.world.resource_mut::<ArenaStats>().ticks += 1;
        self.world.clear_trackers();
    }

    /// Enemy entities still in the world, corpses included.
    pub fn enemies_left(&mut self) -> usize {
        self.world
            .query_filtered::<(), With<Enemy>>()
            .iter(&self.world)
            .count()
    }

    /// Step until every enemy is gone or the tick limit is reached.
    pub fn run(&mut self) -> ArenaReport {
        while self.world.resource::<ArenaStats>().ticks < self.max_ticks {
            if self.enemies_left() == 0 {
                info!("All enemies cleared");
                break;
            }
            self.step();
        }
        self.report()
    }

    pub fn report(&mut self) -> ArenaReport {
        let survivors = self
            .world
            .query_filtered::<(), (With<Enemy>, Without<Dead>)>()
            .iter(&self.world)
            .count() as u32;
        let stats = *self.world.resource::<ArenaStats>();
        ArenaReport {
            ticks: stats.ticks,
            elapsed: self.world.resource::<WorldTime>().elapsed,
            kills: stats.kills,
            current_enemy_kills: stats.current_enemy_kills,
            retargets: stats.retargets,
            survivors,
        }
    }
}
