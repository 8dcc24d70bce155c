//! One-shot queries against a centered universe

use costar_core::bail_usage;
use costar_core::error::Result;
use costar_core::universe::Universe;

use crate::commands::format::Reply;

pub fn summary(universe: &Universe) -> Reply {
    Reply::Summary(universe.summary())
}

/// Words of a multi-word actor name, joined with single spaces.
pub fn actor_name(words: &[String]) -> Result<String> {
    let name = words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if name.is_empty() {
        bail_usage!("actor name must not be empty");
    }
    Ok(name)
}

pub fn path(universe: &Universe, words: &[String]) -> Result<Reply> {
    let name = actor_name(words)?;
    Ok(Reply::Path(universe.path_to_center(&name)?))
}

pub fn missing(universe: &Universe) -> Reply {
    Reply::Missing {
        center: universe.center().to_string(),
        actors: universe.missing(),
    }
}

pub fn separation(universe: &Universe, low: usize, high: usize) -> Result<Reply> {
    Ok(Reply::Separation {
        center: universe.center().to_string(),
        actors: universe.by_separation(low, high)?,
    })
}

pub fn degree(universe: &Universe, low: usize, high: usize) -> Result<Reply> {
    Ok(Reply::Degree {
        actors: universe.by_degree(low, high)?,
    })
}

pub fn centers(universe: &Universe, count: i64) -> Result<Reply> {
    Ok(Reply::Centers(universe.rank_centers(count)?))
}
