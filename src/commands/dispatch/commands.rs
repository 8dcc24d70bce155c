//! Command implementations for all costar subcommands

use std::io::{self, Write};

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext, PlayCommand};
use crate::commands::format::{render, Reply};
use crate::commands::query;
use costar_core::error::Result;
use costar_core::universe::Universe;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Play => PlayCommand.execute(ctx),
            Commands::Summary => answer(ctx, |u| Ok(query::summary(u))),
            Commands::Path { name } => answer(ctx, |u| query::path(u, name)),
            Commands::Missing => answer(ctx, |u| Ok(query::missing(u))),
            Commands::Separation { low, high } => {
                answer(ctx, |u| query::separation(u, *low, *high))
            }
            Commands::Degree { low, high } => answer(ctx, |u| query::degree(u, *low, *high)),
            Commands::Centers { count } => answer(ctx, |u| query::centers(u, *count)),
        }
    }
}

/// Open the universe, run one query and print its reply.
fn answer<F>(ctx: &CommandContext, query: F) -> Result<()>
where
    F: FnOnce(&Universe) -> Result<Reply>,
{
    let universe = ctx.open_universe()?;
    let reply = query(&universe)?;

    let mut stdout = io::stdout().lock();
    render(&mut stdout, &reply, ctx.cli.format)?;
    stdout.flush()?;

    tracing::debug!(elapsed = ?ctx.start.elapsed(), "query complete");
    Ok(())
}
