//! Rendering of query results as human-readable lines or JSON

use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use costar_core::error::Result;
use costar_core::graph::RankOrder;
use costar_core::universe::{CenterRanking, CenterSummary, PathReport, RankedActor};

/// Result of one query, in either interface
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    Summary(CenterSummary),
    Path(PathReport),
    Missing {
        center: String,
        actors: BTreeSet<String>,
    },
    Separation {
        center: String,
        actors: Vec<RankedActor>,
    },
    Degree {
        actors: Vec<RankedActor>,
    },
    Centers(CenterRanking),
    Message {
        message: String,
    },
}

impl Reply {
    pub fn message(text: impl Into<String>) -> Self {
        Reply::Message {
            message: text.into(),
        }
    }
}

/// Write `reply` to `out` in the requested format.
pub fn render<W: Write>(out: &mut W, reply: &Reply, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, reply),
        OutputFormat::Human => {
            for line in human_lines(reply) {
                writeln!(out, "{}", line)?;
            }
            Ok(())
        }
    }
}

/// One JSON document per line.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// `[a, b, c]`
pub fn bracketed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let joined: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", joined.join(", "))
}

/// Averages print with at least one decimal place (`1.0`, `1.75`).
fn average(value: Option<f64>) -> String {
    match value {
        Some(avg) => format!("{:?}", avg),
        None => "undefined".to_string(),
    }
}

pub fn summary_line(summary: &CenterSummary) -> String {
    format!(
        "{} is now the center of the acting universe, connected to {}/{} actors with average separation {}",
        summary.center,
        summary.connected,
        summary.total_actors,
        average(summary.average_separation)
    )
}

/// Separation line followed by one line per hop, starting at the center.
pub fn path_lines(report: &PathReport) -> Vec<String> {
    if report.is_center() {
        return vec!["no path because this actor is the center.".to_string()];
    }
    let Some(separation) = report.separation else {
        return vec!["actor not connected to center of the universe.".to_string()];
    };

    let mut lines = vec![format!("{}'s number is {}", report.actor, separation)];
    lines.extend(report.steps.iter().rev().map(|step| {
        format!(
            "{} appeared in {} with {}",
            step.vertex,
            bracketed(&step.label),
            step.parent
        )
    }));
    lines
}

pub fn centers_line(ranking: &CenterRanking) -> String {
    let which = match ranking.order {
        RankOrder::Best => "best",
        RankOrder::Worst => "worst",
    };
    format!(
        "{} centers by average separation: {}",
        which,
        bracketed(ranking.centers.iter().map(|c| &c.vertex))
    )
}

fn names(actors: &[RankedActor]) -> String {
    bracketed(actors.iter().map(|a| &a.actor))
}

fn human_lines(reply: &Reply) -> Vec<String> {
    match reply {
        Reply::Summary(summary) => vec![summary_line(summary)],
        Reply::Path(report) => path_lines(report),
        Reply::Missing { actors, .. } => vec![bracketed(actors)],
        Reply::Separation { actors, .. } | Reply::Degree { actors } => vec![names(actors)],
        Reply::Centers(ranking) => vec![centers_line(ranking)],
        Reply::Message { message } => vec![message.clone()],
    }
}
