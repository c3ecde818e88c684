//! Engine settings.
//!
//! Settings live in an optional `eclipse.toml` in the runtime data directory (or wherever
//! `ECLIPSE_CONFIG` points). Every key is optional, and a missing or broken file never stops
//! the game: the hardcoded defaults are used instead.

use crate::data_paths::data_path;
use crate::engine::DEFAULT_PLAYER_NAME;
use crate::intent::MatcherKind;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings file name, looked up in the data directory.
pub const CONFIG_FILE: &str = "eclipse.toml";
/// Environment variable overriding the settings file location.
pub const CONFIG_ENV: &str = "ECLIPSE_CONFIG";

/// Engine and host settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Story file (RON `WorldDef`); the bundled story is used when unset.
    pub world_file: Option<PathBuf>,
    /// Name used when an adventure is started without one.
    pub default_player_name: String,
    /// Which intent matcher resolves commands.
    pub matcher: MatcherKind,
    /// Clear the journal when an adventure restarts (it is kept by default).
    pub clear_journal_on_restart: bool,
    /// Wrap REPL output at this column instead of the terminal width.
    pub wrap_width: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            world_file: None,
            default_player_name: DEFAULT_PLAYER_NAME.to_string(),
            matcher: MatcherKind::default(),
            clear_journal_on_restart: false,
            wrap_width: None,
        }
    }
}

impl EngineConfig {
    /// Resolve `world_file` against the data directory if it is relative.
    pub fn world_path(&self) -> Option<PathBuf> {
        self.world_file.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                data_path(path)
            }
        })
    }
}

/// Location of the settings file: `$ECLIPSE_CONFIG` if set, else `eclipse.toml` in the data directory.
pub fn config_path() -> PathBuf {
    env::var_os(CONFIG_ENV).map_or_else(|| data_path(CONFIG_FILE), PathBuf::from)
}

/// Load settings from `path`, falling back to defaults.
///
/// This function never fails: a missing file is normal (logged at `info`), an unreadable or
/// invalid one is logged at `warn`.
pub fn load_config(path: &Path) -> EngineConfig {
    if !path.exists() {
        info!("no settings file at '{}', using defaults", path.display());
        return EngineConfig::default();
    }
    match try_load_config(path) {
        Ok(config) => {
            info!("settings loaded from '{}'", path.display());
            config
        },
        Err(e) => {
            warn!(
                "Could not load settings from '{}': {e:#}. Using hardcoded defaults.",
                path.display()
            );
            EngineConfig::default()
        },
    }
}

/// Parse settings from TOML text.
///
/// # Errors
/// Returns an error if the text is not valid TOML or has a value of the wrong type.
pub fn parse_config(text: &str) -> Result<EngineConfig> {
    toml::from_str(text).context("parsing engine settings")
}

fn try_load_config(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("reading settings from '{}'", path.display()))?;
    parse_config(&text).with_context(|| format!("in '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.default_player_name, "Survivor");
        assert_eq!(config.matcher, MatcherKind::Keyword);
        assert!(!config.clear_journal_on_restart);
        assert!(config.world_file.is_none());
        assert!(config.world_path().is_none());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = parse_config("matcher = \"strict\"\nwrap_width = 72\n").unwrap();
        assert_eq!(config.matcher, MatcherKind::Strict);
        assert_eq!(config.wrap_width, Some(72));
        assert_eq!(config.default_player_name, "Survivor");
        assert!(!config.clear_journal_on_restart);
    }

    #[test]
    fn unknown_matcher_is_an_error() {
        assert!(parse_config("matcher = \"fuzzy\"").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.toml"));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn broken_file_yields_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "clear_journal_on_restart = \"sometimes\"").unwrap();
        assert_eq!(load_config(file.path()), EngineConfig::default());
    }

    #[test]
    fn loads_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_player_name = \"Ripley\"").unwrap();
        writeln!(file, "clear_journal_on_restart = true").unwrap();
        writeln!(file, "world_file = \"/tmp/story.ron\"").unwrap();
        let config = load_config(file.path());
        assert_eq!(config.default_player_name, "Ripley");
        assert!(config.clear_journal_on_restart);
        assert_eq!(config.world_path(), Some(PathBuf::from("/tmp/story.ron")));
    }
}
