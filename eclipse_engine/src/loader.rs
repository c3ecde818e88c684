//! Loader utilities for building a `WorldGraph`.
//!
//! Story content comes either from a RON-serialized `WorldDef` named in the settings, or from
//! the bundled *Protocol Eclipse* story. Either way it is validated before the graph is built,
//! and every validation problem is reported at once.

use crate::config::EngineConfig;
use crate::story::protocol_eclipse;
use crate::world::WorldGraph;

use anyhow::{Context, Result};
use eclipse_data::WorldDef;
use log::info;
use std::fs;
use std::path::Path;

/// Load the world named by `config`, or the bundled story if none is configured.
///
/// # Errors
/// Errors bubble up from file IO, RON parsing, or validation of the story content.
pub fn load_world(config: &EngineConfig) -> Result<WorldGraph> {
    let def = match config.world_path() {
        Some(path) => load_worlddef(&path).context("while loading story from file")?,
        None => {
            info!("no story file configured, using bundled story");
            protocol_eclipse()
        },
    };
    build_world(&def)
}

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - if the file cannot be read or is not a valid RON `WorldDef`
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    let def = parse_worlddef(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))?;
    info!("worlddef \"{}\" read from '{}'", def.game.title, path.display());
    Ok(def)
}

/// Parse a `WorldDef` from RON text.
///
/// # Errors
/// - on malformed RON, or effects / fields the data model does not know
pub fn parse_worlddef(text: &str) -> Result<WorldDef> {
    Ok(ron::from_str(text)?)
}

/// Validate a `WorldDef` and build the runtime graph.
///
/// # Errors
/// - with one aggregated message listing every validation problem
pub fn build_world(def: &WorldDef) -> Result<WorldGraph> {
    let world = WorldGraph::from_def(def).context("while building world graph")?;
    info!(
        "{} scenes added to world \"{}\" (start: \"{}\")",
        world.scene_count(),
        world.title(),
        world.start_scene()
    );
    Ok(world)
}
