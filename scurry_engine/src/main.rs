#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Scurry **
//! Squirrel-survival trek game / engine project

use std::env;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use scurry_engine::{load_map, run_repl};

/// Map shipped with the engine, used when no path is given on the command line.
const DEFAULT_MAP_PATH: &str = "scurry_engine/data/campus.toml";

fn main() -> Result<()> {
    env_logger::init();
    let map_path = env::args().nth(1).map_or_else(|| PathBuf::from(DEFAULT_MAP_PATH), PathBuf::from);

    info!("Start: loading map from {}...", map_path.display());
    let map = load_map(&map_path).context("while loading map layout")?;
    info!("map loaded successfully");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;
    info!("Starting the game!");

    run_repl(&map)
}
