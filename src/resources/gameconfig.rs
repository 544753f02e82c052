//! Arena configuration resource.
//!
//! Holds the tunables of a headless arena run, loaded from an INI file.
//! Defaults are safe to run with when no file is present.
//!
//! # Configuration File Format
//!
//! ```ini
//! [arena]
//! enemies = 8
//! ticks = 600
//! seed = 42
//! width = 640
//! height = 360
//!
//! [combat]
//! player_damage = 7
//! damage_spread = 0.25
//! enemy_health = 30
//! corpse_linger = 0.5
//!
//! [time]
//! step = 0.016666
//! time_scale = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_ENEMIES: u32 = 8;
const DEFAULT_TICKS: u32 = 600;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_WIDTH: f32 = 640.0;
const DEFAULT_HEIGHT: f32 = 360.0;
const DEFAULT_PLAYER_DAMAGE: u32 = 7;
const DEFAULT_DAMAGE_SPREAD: f32 = 0.25;
const DEFAULT_ENEMY_HEALTH: u32 = 30;
const DEFAULT_CORPSE_LINGER: f32 = 0.5;
const DEFAULT_STEP: f32 = 1.0 / 60.0;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Arena configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Number of enemies spawned at setup.
    pub enemies: u32,
    /// Maximum number of simulation steps.
    pub ticks: u32,
    /// Seed for spawn positions and damage rolls.
    pub seed: u64,
    /// Arena width in world units.
    pub width: f32,
    /// Arena height in world units.
    pub height: f32,
    /// Base damage the player deals per tick.
    pub player_damage: u32,
    /// Relative damage variance, `0.0` for none.
    pub damage_spread: f32,
    /// Starting health of every enemy.
    pub enemy_health: u32,
    /// Seconds a dead enemy stays before being despawned.
    pub corpse_linger: f32,
    /// Fixed simulation step in seconds.
    pub step: f32,
    /// Multiplier applied to every step.
    pub time_scale: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            enemies: DEFAULT_ENEMIES,
            ticks: DEFAULT_TICKS,
            seed: DEFAULT_SEED,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            player_damage: DEFAULT_PLAYER_DAMAGE,
            damage_spread: DEFAULT_DAMAGE_SPREAD,
            enemy_health: DEFAULT_ENEMY_HEALTH,
            corpse_linger: DEFAULT_CORPSE_LINGER,
            step: DEFAULT_STEP,
            time_scale: DEFAULT_TIME_SCALE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [arena] section
        if let Some(enemies) = config.getuint("arena", "enemies").ok().flatten() {
            self.enemies = enemies as u32;
        }
        if let Some(ticks) = config.getuint("arena", "ticks").ok().flatten() {
            self.ticks = ticks as u32;
        }
        if let Some(seed) = config.getuint("arena", "seed").ok().flatten() {
            self.seed = seed;
        }
        if let Some(width) = config.getfloat("arena", "width").ok().flatten() {
            self.width = width as f32;
        }
        if let Some(height) = config.getfloat("arena", "height").ok().flatten() {
            self.height = height as f32;
        }

        // [combat] section
        if let Some(damage) = config.getuint("combat", "player_damage").ok().flatten() {
            self.player_damage = damage as u32;
        }
        if let Some(spread) = config.getfloat("combat", "damage_spread").ok().flatten() {
            self.damage_spread = (spread as f32).clamp(0.0, 1.0);
        }
        if let Some(health) = config.getuint("combat", "enemy_health").ok().flatten() {
            self.enemy_health = health as u32;
        }
        if let Some(linger) = config.getfloat("combat", "corpse_linger").ok().flatten() {
            self.corpse_linger = linger as f32;
        }

        // [time] section
        if let Some(step) = config.getfloat("time", "step").ok().flatten() {
            self.step = step as f32;
        }
        if let Some(scale) = config.getfloat("time", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }

        info!(
            "Loaded config: {} enemies, {} ticks, seed={}, damage={}±{}, enemy_health={}",
            self.enemies,
            self.ticks,
            self.seed,
            self.player_damage,
            self.damage_spread,
            self.enemy_health
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [arena] section
        config.set("arena", "enemies", Some(self.enemies.to_string()));
        config.set("arena", "ticks", Some(self.ticks.to_string()));
        config.set("arena", "seed", Some(self.seed.to_string()));
        config.set("arena", "width", Some(self.width.to_string()));
        config.set("arena", "height", Some(self.height.to_string()));

        // [combat] section
        config.set("combat", "player_damage", Some(self.player_damage.to_string()));
        config.set("combat", "damage_spread", Some(self.damage_spread.to_string()));
        config.set("combat", "enemy_health", Some(self.enemy_health.to_string()));
        config.set("combat", "corpse_linger", Some(self.corpse_linger.to_string()));

        // [time] section
        config.set("time", "step", Some(self.step.to_string()));
        config.set("time", "time_scale", Some(self.time_scale.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Arena bounds as `(width, height)`.
    pub fn arena_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("enemywatch_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.enemies, DEFAULT_ENEMIES);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(config.arena_size(), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.enemies, DEFAULT_ENEMIES);
        assert_eq!(config.player_damage, DEFAULT_PLAYER_DAMAGE);
    }

    #[test]
    fn test_load_overrides_present_keys_only() {
        let path = temp_path("partial");
        std::fs::write(&path, "[arena]\nenemies = 3\nseed = 9\n\n[combat]\ndamage_spread = 0\n")
            .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.enemies, 3);
        assert_eq!(config.seed, 9);
        assert_eq!(config.damage_spread, 0.0);
        assert_eq!(config.ticks, DEFAULT_TICKS);
        assert_eq!(config.enemy_health, DEFAULT_ENEMY_HEALTH);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let mut saved = GameConfig::with_path(&path);
        saved.enemies = 5;
        saved.player_damage = 11;
        saved.corpse_linger = 2.0;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.enemies, 5);
        assert_eq!(loaded.player_damage, 11);
        assert_eq!(loaded.corpse_linger, 2.0);
    }
}
