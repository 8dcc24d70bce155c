//! Command trait and context for dispatching commands

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use crate::commands::play::Game;
use costar_core::config::CostarConfig;
use costar_core::dataset::Dataset;
use costar_core::error::Result;
use costar_core::universe::Universe;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Discovered configuration with command-line overrides applied.
    pub fn config(&self) -> Result<CostarConfig> {
        let explicit = self
            .cli
            .config
            .as_deref()
            .map(|path| resolve_against(self.root, path));
        let mut config = CostarConfig::discover(explicit.as_deref(), self.root)?;

        let data = &mut config.data;
        for (flag, target) in [
            (&self.cli.actors, &mut data.actors),
            (&self.cli.movies, &mut data.movies),
            (&self.cli.movie_actors, &mut data.movie_actors),
        ] {
            if let Some(path) = flag {
                *target = resolve_against(self.root, path);
            }
        }
        if let Some(center) = &self.cli.center {
            config.universe.center = center.clone();
        }

        debug!(elapsed = ?self.start.elapsed(), center = %config.universe.center, "load_config");
        Ok(config)
    }

    /// Load the data files and center the universe.
    pub fn open_universe(&self) -> Result<Universe> {
        let config = self.config()?;
        let graph = Dataset::load(&config.data)?.collaboration_graph();
        let universe = Universe::new(graph, &config.universe.center)?;
        debug!(elapsed = ?self.start.elapsed(), "open_universe");
        Ok(universe)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Interactive game on stdin (also used when no subcommand is given)
pub struct PlayCommand;

impl Command for PlayCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let mut universe = ctx.open_universe()?;
        let mut stdout = io::stdout().lock();
        Game::new(&mut universe, ctx.cli.format, ctx.cli.quiet).run(io::stdin().lock(), &mut stdout)
    }
}
