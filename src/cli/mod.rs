//! CLI argument parsing for costar
//!
//! Global flags pick the data files, the starting center and the output
//! format; subcommands run a single query. With no subcommand the
//! interactive game is started.

pub mod output;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Costar - how many movies away is everyone from Kevin Bacon?
#[derive(Parser, Debug)]
#[command(name = "costar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./costar.toml, then the user config dir)
    #[arg(long, global = true, env = "COSTAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Actors file (`id|name` per line)
    #[arg(long, global = true)]
    pub actors: Option<PathBuf>,

    /// Movies file (`id|title` per line)
    #[arg(long, global = true)]
    pub movies: Option<PathBuf>,

    /// Appearances file (`movie_id|actor_id` per line)
    #[arg(long, global = true)]
    pub movie_actors: Option<PathBuf>,

    /// Actor at the center of the universe
    #[arg(long, global = true)]
    pub center: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. `trace`, `costar_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the interactive game on stdin (the default)
    Play,

    /// Show the current center, how many actors it reaches and their average separation
    Summary,

    /// Show how an actor is connected to the center
    Path {
        /// Actor name; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List actors with no path to the center
    Missing,

    /// List connected actors by separation from the center
    Separation {
        /// Lowest separation to include
        low: usize,
        /// Highest separation to include
        high: usize,
    },

    /// List actors by number of distinct costars
    Degree {
        /// Lowest degree to include
        low: usize,
        /// Highest degree to include
        high: usize,
    },

    /// Rank every actor as a potential center by average separation
    Centers {
        /// How many to list: positive for the best centers, negative for the worst
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },
}
