//! Command dispatch logic for costar

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use costar_core::error::Result;
use tracing::debug;

mod command;
mod commands;

use command::{Command, CommandContext, PlayCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path();

    debug!(elapsed = ?start.elapsed(), root = %root.display(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    match &cli.command {
        None => PlayCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
