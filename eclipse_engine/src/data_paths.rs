//! Runtime data directory discovery.
//!
//! The engine looks for `eclipse.toml` and story files in the first existing candidate:
//! `eclipse_engine/data` or `data` under the working directory, then the same two next to
//! (and one level above) the executable.
use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// The resolved data root itself.
pub fn data_root() -> &'static Path {
    DATA_ROOT.as_path()
}

fn detect_data_root() -> PathBuf {
    let mut candidates = vec![PathBuf::from("eclipse_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("eclipse_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("eclipse_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    first_existing_dir(candidates).unwrap_or_else(|| PathBuf::from("eclipse_engine/data"))
}

fn first_existing_dir(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|candidate| candidate.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_existing_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let present = dir.path().to_path_buf();
        assert_eq!(first_existing_dir(vec![missing, present.clone()]), Some(present));
    }

    #[test]
    fn none_when_nothing_exists() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(first_existing_dir(vec![dir.path().join("a"), dir.path().join("b")]), None);
    }

    #[test]
    fn data_path_joins_relative_path() {
        assert!(data_path("eclipse.toml").ends_with("eclipse.toml"));
        assert!(data_path("x").starts_with(data_root()));
    }
}
