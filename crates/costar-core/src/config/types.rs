//! Configuration types for costar

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Actor the universe is centered on when nothing else is configured
pub const DEFAULT_CENTER: &str = "Kevin Bacon";

/// Top-level costar configuration (`costar.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostarConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub universe: UniverseConfig,
}

/// Locations of the three pipe-delimited input files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// `id|name` records for actors
    #[serde(default = "default_actors")]
    pub actors: PathBuf,
    /// `id|name` records for movies
    #[serde(default = "default_movies")]
    pub movies: PathBuf,
    /// `movie_id|actor_id` records
    #[serde(default = "default_movie_actors")]
    pub movie_actors: PathBuf,
}

/// Query session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseConfig {
    #[serde(default = "default_center")]
    pub center: String,
}

fn default_actors() -> PathBuf {
    PathBuf::from("actors.txt")
}

fn default_movies() -> PathBuf {
    PathBuf::from("movies.txt")
}

fn default_movie_actors() -> PathBuf {
    PathBuf::from("movie-actors.txt")
}

fn default_center() -> String {
    DEFAULT_CENTER.to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            actors: default_actors(),
            movies: default_movies(),
            movie_actors: default_movie_actors(),
        }
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
        }
    }
}
