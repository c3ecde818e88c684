#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const ECLIPSE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod effect;
pub mod engine;
pub mod history;
pub mod intent;
pub mod render;
pub mod session;
pub mod world;

// Host modules
pub mod command;
pub mod config;
pub mod data_paths;
pub mod idgen;
pub mod loader;
pub mod repl;
pub mod story;
pub mod style;

pub use eclipse_data::Id;

// Re-exports for convenience
pub use config::EngineConfig;
pub use effect::Effect;
pub use engine::Engine;
pub use intent::{IntentMatcher, KeywordMatcher, Resolution, StrictKeywordMatcher};
pub use loader::load_world;
pub use repl::run_repl;
pub use session::{HistoryRecord, SessionState};
pub use world::{Choice, Scene, WorldGraph};
