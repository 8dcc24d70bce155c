//! Interactive game: one command per line on stdin
//!
//! Bad input (unknown commands, unparsable numbers, unknown actors) is
//! answered with a message and the game goes on. End of input quits.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::format::{render, Reply};
use costar_core::bail_usage;
use costar_core::error::{CostarError, Result};
use costar_core::universe::Universe;

pub const MENU: &str = "Commands:
c <#>: list top (positive number) or bottom (negative) <#> centers of the universe, sorted by average separation
d <low> <high>: list actors sorted by degree, with degree between low and high
i: list actors with infinite separation from the current center
p <name>: find path from <name> to current center of the universe
s <low> <high>: list actors sorted by non-infinite separation from the current center, with separation between low and high
u <name>: make <name> the center of the universe
q: quit game";

const FAREWELL: &str = "thanks for playing.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Centers(i64),
    Degree { low: usize, high: usize },
    Infinite,
    Path(String),
    Separation { low: usize, high: usize },
    Universe(String),
    Quit,
}

fn range<'a>(mut args: impl Iterator<Item = &'a str>) -> Result<(usize, usize)> {
    match (
        args.next().map(str::parse::<usize>),
        args.next().map(str::parse::<usize>),
    ) {
        (Some(Ok(low)), Some(Ok(high))) => Ok((low, high)),
        _ => bail_usage!("high and low must be numbers."),
    }
}

/// Everything after the command letter, so names may contain spaces.
fn actor_name(line: &str) -> Result<String> {
    let name = line
        .trim()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim())
        .unwrap_or_default();
    if name.is_empty() {
        bail_usage!("invalid actor");
    }
    Ok(name.to_string())
}

impl FromStr for GameCommand {
    type Err = CostarError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some("c") => match words.next().map(str::parse::<i64>) {
                Some(Ok(count)) => GameCommand::Centers(count),
                _ => bail_usage!("centers amount must be a number."),
            },
            Some("d") => {
                let (low, high) = range(words)?;
                GameCommand::Degree { low, high }
            }
            Some("i") => GameCommand::Infinite,
            Some("p") => GameCommand::Path(actor_name(line)?),
            Some("s") => {
                let (low, high) = range(words)?;
                GameCommand::Separation { low, high }
            }
            Some("u") => GameCommand::Universe(actor_name(line)?),
            Some("q") => GameCommand::Quit,
            _ => bail_usage!("invalid command."),
        };
        Ok(command)
    }
}

/// Message for errors the game answers instead of aborting on.
fn recoverable(error: &CostarError) -> Option<String> {
    match error {
        CostarError::UsageError(message) => Some(message.clone()),
        CostarError::NotFound { .. } => Some("invalid actor".to_string()),
        CostarError::InvalidValue { .. } => Some(error.to_string()),
        _ => None,
    }
}

/// A game session over a universe
pub struct Game<'u> {
    universe: &'u mut Universe,
    format: OutputFormat,
    quiet: bool,
}

impl<'u> Game<'u> {
    pub fn new(universe: &'u mut Universe, format: OutputFormat, quiet: bool) -> Self {
        Self {
            universe,
            format,
            quiet,
        }
    }

    fn chatty(&self) -> bool {
        self.format == OutputFormat::Human && !self.quiet
    }

    pub fn respond(&mut self, command: GameCommand) -> Result<Reply> {
        let universe = &mut *self.universe;
        let reply = match command {
            GameCommand::Centers(count) => Reply::Centers(universe.rank_centers(count)?),
            GameCommand::Degree { low, high } => Reply::Degree {
                actors: universe.by_degree(low, high)?,
            },
            GameCommand::Infinite => Reply::Missing {
                center: universe.center().to_string(),
                actors: universe.missing(),
            },
            GameCommand::Path(name) => Reply::Path(universe.path_to_center(&name)?),
            GameCommand::Separation { low, high } => Reply::Separation {
                center: universe.center().to_string(),
                actors: universe.by_separation(low, high)?,
            },
            GameCommand::Universe(name) => {
                if universe.set_center(&name)? {
                    Reply::Summary(universe.summary())
                } else {
                    Reply::message("this actor is already the center.")
                }
            }
            GameCommand::Quit => Reply::message(FAREWELL),
        };
        Ok(reply)
    }

    /// Answer one input line; `Ok(false)` once the player quits.
    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        let outcome = line.parse::<GameCommand>().and_then(|command| {
            debug!(?command, "game command");
            let keep_going = command != GameCommand::Quit;
            self.respond(command).map(|reply| (reply, keep_going))
        });

        match outcome {
            Ok((reply, keep_going)) => {
                render(out, &reply, self.format)?;
                Ok(keep_going)
            }
            Err(e) => match recoverable(&e) {
                Some(message) => {
                    render(out, &Reply::message(message), self.format)?;
                    Ok(true)
                }
                None => Err(e),
            },
        }
    }

    /// Read commands from `input` until `q` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        if self.chatty() {
            writeln!(out, "{}", MENU)?;
            writeln!(out)?;
        }
        render(out, &Reply::Summary(self.universe.summary()), self.format)?;

        let mut line = String::new();
        loop {
            if self.chatty() {
                writeln!(out, "{} game>", self.universe.center())?;
            }
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                render(out, &self.respond(GameCommand::Quit)?, self.format)?;
                return Ok(());
            }

            if !self.handle_line(&line, out)? {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests;
