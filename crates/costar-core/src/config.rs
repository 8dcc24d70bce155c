//! Configuration loading for costar
//!
//! Configuration lives in `costar.toml`. Lookup order:
//! an explicit path, `./costar.toml`, then `config.toml` in the user
//! config directory (`$COSTAR_CONFIG_DIR` or `<config_dir>/costar`).

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CostarError, Result};

pub use types::{CostarConfig, DataConfig, UniverseConfig, DEFAULT_CENTER};

/// File name searched for in the working directory
pub const LOCAL_CONFIG_FILE: &str = "costar.toml";

const CONFIG_DIR: &str = "costar";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "COSTAR_CONFIG_DIR";

impl CostarConfig {
    /// Load configuration from a file.
    ///
    /// Relative data paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CostarError::io_operation("read config", path.display(), e))?;
        let mut config: CostarConfig = toml::from_str(&content)?;

        if let Some(base) = path.parent() {
            config.data.resolve_relative_to(base);
        }

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Find and load configuration, falling back to defaults.
    ///
    /// An explicit path must exist; discovered locations are optional.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }

        if let Some(global) = global_config_path() {
            if global.is_file() {
                return Self::load(&global);
            }
        }

        tracing::debug!("no config file found, using defaults");
        let mut config = Self::default();
        config.data.resolve_relative_to(cwd);
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CostarError::Other(format!("failed to serialize config: {}", e)))
    }
}

impl DataConfig {
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.actors, &mut self.movies, &mut self.movie_actors] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

fn global_config_path() -> Option<PathBuf> {
    let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(env_dir) => PathBuf::from(env_dir),
        Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = CostarConfig::default();
        assert_eq!(config.universe.center, "Kevin Bacon");
        assert_eq!(config.data.actors, PathBuf::from("actors.txt"));
        assert_eq!(config.data.movie_actors, PathBuf::from("movie-actors.txt"));
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("costar.toml");
        fs::write(&path, "[universe]\ncenter = \"Alice\"\n").unwrap();

        let config = CostarConfig::load(&path).unwrap();
        assert_eq!(config.universe.center, "Alice");
        assert_eq!(config.data.movies, dir.path().join("movies.txt"));
    }

    #[test]
    fn test_load_keeps_absolute_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("costar.toml");
        let absolute = dir.path().join("elsewhere").join("cast.txt");
        fs::write(
            &path,
            format!("[data]\nactors = {:?}\n", absolute.display().to_string()),
        )
        .unwrap();

        let config = CostarConfig::load(&path).unwrap();
        assert_eq!(config.data.actors, absolute);
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("costar.toml");
        fs::write(&path, "[universe\ncenter = ").unwrap();

        let err = CostarConfig::load(&path).unwrap_err();
        assert!(matches!(err, CostarError::Toml(_)));
    }

    #[test]
    fn test_discover_explicit_missing_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(CostarConfig::discover(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_discover_local_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(LOCAL_CONFIG_FILE),
            "[universe]\ncenter = \"Bob\"\n",
        )
        .unwrap();

        let config = CostarConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.universe.center, "Bob");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CostarConfig::default();
        let text = config.to_toml().unwrap();
        let parsed: CostarConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
