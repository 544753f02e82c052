//! Arena tick integration tests for targeting, attack, death and corpse systems.

use bevy_ecs::prelude::*;

use enemywatch::arena::{Arena, register_observers};
use enemywatch::components::corpse::Corpse;
use enemywatch::components::enemy::{Enemy, Player};
use enemywatch::components::health::{Dead, Health};
use enemywatch::components::mapposition::MapPosition;
use enemywatch::resources::currentenemy::{CurrentEnemy, set_current_enemy};
use enemywatch::resources::gameconfig::GameConfig;
use enemywatch::resources::rng::ArenaRng;
use enemywatch::resources::stats::ArenaStats;
use enemywatch::resources::worldtime::WorldTime;
use enemywatch::systems::attack::attack_current_enemy_system;
use enemywatch::systems::corpse::corpse_system;
use enemywatch::systems::death::death_system;
use enemywatch::systems::targeting::acquire_target_system;
use enemywatch::systems::time::update_world_time;

fn flat_config() -> GameConfig {
    let mut config = GameConfig::new();
    config.damage_spread = 0.0;
    config.corpse_linger = 0.5;
    config
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ArenaRng::with_seed(1));
    world.insert_resource(CurrentEnemy::new());
    world.insert_resource(ArenaStats::default());
    world.insert_resource(flat_config());
    register_observers(&mut world);
    world
}

fn spawn_enemy(world: &mut World, name: &str, x: f32, y: f32, hp: u32) -> Entity {
    world
        .spawn((Enemy::new(name), Health::new(hp), MapPosition::new(x, y)))
        .id()
}

fn tick_acquire(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(acquire_target_system);
    schedule.run(world);
}

fn tick_attack(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(attack_current_enemy_system);
    schedule.run(world);
}

fn tick_death(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(death_system);
    schedule.run(world);
}

fn tick_corpse(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(corpse_system);
    schedule.run(world);
}

#[test]
fn acquire_picks_nearest_living_enemy() {
    let mut world = make_world();
    world.spawn((Player { damage: 1 }, MapPosition::new(0.0, 0.0)));
    spawn_enemy(&mut world, "far", 10.0, 0.0, 5);
    let near = spawn_enemy(&mut world, "near", 3.0, 4.0, 5);
    let dead = spawn_enemy(&mut world, "dead", 1.0, 0.0, 5);
    world.entity_mut(dead).insert(Dead);

    tick_acquire(&mut world);

    assert_eq!(world.resource::<CurrentEnemy>().get(), Some(near));
    assert_eq!(world.resource::<ArenaStats>().retargets, 1);
}

#[test]
fn acquire_keeps_existing_target() {
    let mut world = make_world();
    world.spawn((Player { damage: 1 }, MapPosition::new(0.0, 0.0)));
    let far = spawn_enemy(&mut world, "far", 10.0, 0.0, 5);
    spawn_enemy(&mut world, "near", 1.0, 0.0, 5);
    set_current_enemy(&mut world, far);

    tick_acquire(&mut world);

    assert_eq!(world.resource::<CurrentEnemy>().get(), Some(far));
    assert_eq!(world.resource::<ArenaStats>().retargets, 0);
}

#[test]
fn acquire_without_player_does_nothing() {
    let mut world = make_world();
    spawn_enemy(&mut world, "lonely", 1.0, 0.0, 5);

    tick_acquire(&mut world);

    assert!(!world.resource::<CurrentEnemy>().is_set());
}

#[test]
fn attack_damages_only_current_enemy() {
    let mut world = make_world();
    world.spawn((Player { damage: 4 }, MapPosition::new(0.0, 0.0)));
    let target = spawn_enemy(&mut world, "target", 1.0, 0.0, 10);
    let bystander = spawn_enemy(&mut world, "bystander", 2.0, 0.0, 10);
    set_current_enemy(&mut world, target);

    tick_attack(&mut world);

    assert_eq!(world.get::<Health>(target).unwrap().current, 6);
    assert_eq!(world.get::<Health>(bystander).unwrap().current, 10);
}

#[test]
fn attack_without_target_does_nothing() {
    let mut world = make_world();
    world.spawn((Player { damage: 4 }, MapPosition::new(0.0, 0.0)));
    let enemy = spawn_enemy(&mut world, "idle", 1.0, 0.0, 10);

    tick_attack(&mut world);

    assert_eq!(world.get::<Health>(enemy).unwrap().current, 10);
}

#[test]
fn death_is_reported_once_and_clears_guard() {
    let mut world = make_world();
    let enemy = spawn_enemy(&mut world, "doomed", 1.0, 0.0, 0);
    set_current_enemy(&mut world, enemy);

    tick_death(&mut world);
    tick_death(&mut world);

    let stats = *world.resource::<ArenaStats>();
    assert_eq!(stats.kills, 1);
    assert_eq!(stats.current_enemy_kills, 1);
    assert!(world.get::<Dead>(enemy).is_some());
    assert!(world.get::<Corpse>(enemy).is_some());
    assert!(!world.resource::<CurrentEnemy>().is_set());
}

#[test]
fn corpse_despawns_after_linger() {
    let mut world = make_world();
    let enemy = spawn_enemy(&mut world, "corpse", 1.0, 0.0, 0);
    world.entity_mut(enemy).insert((Dead, Corpse::new(0.5)));

    update_world_time(&mut world, 0.3);
    tick_corpse(&mut world);
    assert!(world.get_entity(enemy).is_ok());

    update_world_time(&mut world, 0.3);
    tick_corpse(&mut world);
    assert!(world.get_entity(enemy).is_err());
}

#[test]
fn full_run_kills_every_enemy_through_the_guard() {
    let mut config = flat_config();
    config.enemies = 5;
    config.ticks = 2_000;
    config.seed = 3;

    let mut arena = Arena::new(config).unwrap();
    let report = arena.run();

    assert_eq!(report.kills, 5);
    assert_eq!(report.current_enemy_kills, 5);
    assert_eq!(report.retargets, 5);
    assert_eq!(report.survivors, 0);
    assert!(report.ticks < 2_000);
    assert_eq!(arena.enemies_left(), 0);
    assert!(!arena.world().resource::<CurrentEnemy>().is_set());
}

#[test]
fn run_stops_at_tick_limit() {
    let mut config = flat_config();
    config.enemies = 4;
    config.ticks = 3;

    let mut arena = Arena::new(config).unwrap();
    let report = arena.run();

    assert_eq!(report.ticks, 3);
    assert_eq!(report.survivors, 4);
    assert!(arena.world().resource::<CurrentEnemy>().is_set());
}

#[test]
fn same_seed_same_report() {
    let mut config = GameConfig::new();
    config.enemies = 6;
    config.seed = 11;

    let a = Arena::new(config.clone()).unwrap().run();
    let b = Arena::new(config).unwrap().run();

    assert_eq!(a, b);
}
