//! enemywatch entry point.
//!
//! Runs a headless arena in which a player locks onto the nearest enemy,
//! fights it until it dies, and retargets. Built on **bevy_ecs**; the
//! current-enemy guard lives in `enemywatch::resources::currentenemy`.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --enemies 12 --seed 7
//! ```

use clap::Parser;
use enemywatch::arena::Arena;
use enemywatch::resources::gameconfig::GameConfig;
use std::path::PathBuf;

/// Headless current-enemy arena
#[derive(Parser)]
#[command(version, about = "Runs a headless arena and reports how the current enemy was tracked.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Override the number of enemies.
    #[arg(long)]
    enemies: Option<u32>,

    /// Override the maximum number of steps.
    #[arg(long)]
    ticks: Option<u32>,

    /// Override the random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final report as JSON.
    #[arg(long)]
    json: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(enemies) = cli.enemies {
        config.enemies = enemies;
    }
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    // Early-exit: persist the effective configuration and quit
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    let mut arena = match Arena::new(config) {
        Ok(arena) => arena,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let report = arena.run();

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{report}");
    }
}
