#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Protocol Eclipse **
//! Branching interactive fiction in the terminal

use eclipse_engine::config::{config_path, load_config};
use eclipse_engine::data_paths::data_root;
use eclipse_engine::style::GameStyle;
use eclipse_engine::{ECLIPSE_VERSION, Engine, load_world, run_repl};

use anyhow::{Context, Result};
use log::info;

use std::io::Write;
use std::sync::Arc;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: eclipse engine v{ECLIPSE_VERSION}");
    info!("data directory: '{}'", data_root().display());
    let config = load_config(&config_path());
    let world = load_world(&config).context("while loading story world")?;
    info!("World \"{}\" loaded successfully.", world.title());
    let engine = Engine::from_config(Arc::new(world), &config);

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;
    info!("Starting the game! ({} matcher)", engine.matcher().name());

    println!("{:^72}", engine.world().title().to_uppercase().title_style());
    if !engine.world().intro().is_empty() {
        println!("\n{}", engine.world().intro().description_style());
    }

    run_repl(&engine, &config)
}
