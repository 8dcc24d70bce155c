//! Query session over a collaboration graph centered on one actor

use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Instant;

use crate::dataset::{CollaborationGraph, MovieSet};
use crate::error::{CostarError, Result};
use crate::graph::{
    self, average_separation, missing_vertices, path_steps, CenterScore, Graph, PathStep,
    RankOrder, SpanningTree,
};

/// Snapshot of the current center
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterSummary {
    pub center: String,
    /// Actors with a path to the center, excluding the center
    pub connected: usize,
    pub total_actors: usize,
    /// `None` when nobody is connected
    pub average_separation: Option<f64>,
}

/// Path from an actor to the current center
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub actor: String,
    pub center: String,
    /// `None` when the actor cannot reach the center
    pub separation: Option<usize>,
    pub steps: Vec<PathStep<String, MovieSet>>,
}

impl PathReport {
    pub fn is_center(&self) -> bool {
        self.actor == self.center
    }
}

/// An actor paired with a separation or degree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedActor {
    pub actor: String,
    pub value: usize,
}

/// Ranked centers plus the order they were ranked in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterRanking {
    pub order: RankOrder,
    pub centers: Vec<CenterScore<String>>,
}

/// The collaboration graph, its current center and the BFS tree rooted there
#[derive(Debug)]
pub struct Universe {
    graph: CollaborationGraph,
    center: String,
    tree: SpanningTree<String, MovieSet>,
    total_actors: usize,
}

impl Universe {
    /// Build a universe centered on `center`.
    pub fn new(graph: CollaborationGraph, center: &str) -> Result<Self> {
        let center = center.to_string();
        if !graph.has_vertex(&center) {
            return Err(CostarError::not_found("actor", &center));
        }

        let start = Instant::now();
        let tree = graph::bfs(&graph, &center)?;
        crate::trace_time!(start, "initial_bfs", reachable = tree.num_vertices());

        let total_actors = graph.num_vertices();
        Ok(Self {
            graph,
            center,
            tree,
            total_actors,
        })
    }

    pub fn center(&self) -> &str {
        &self.center
    }

    pub fn contains(&self, actor: &str) -> bool {
        self.graph.has_vertex(&actor.to_string())
    }

    /// Re-root on `actor`. Returns `false` if it already is the center.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_center(&mut self, actor: &str) -> Result<bool> {
        if !self.contains(actor) {
            return Err(CostarError::not_found("actor", actor));
        }
        if actor == self.center {
            return Ok(false);
        }

        let center = actor.to_string();
        self.tree = graph::bfs(&self.graph, &center)?;
        self.center = center;
        tracing::debug!(reachable = self.tree.num_vertices(), "re-rooted");
        Ok(true)
    }

    pub fn summary(&self) -> CenterSummary {
        CenterSummary {
            center: self.center.clone(),
            connected: self.tree.num_vertices().saturating_sub(1),
            total_actors: self.total_actors,
            average_separation: average_separation(&self.tree, &self.center),
        }
    }

    /// Path from `actor` to the center, one step per shared-movie hop.
    pub fn path_to_center(&self, actor: &str) -> Result<PathReport> {
        if !self.contains(actor) {
            return Err(CostarError::not_found("actor", actor));
        }
        let actor = actor.to_string();

        let (separation, steps) = if actor == self.center {
            (Some(0), Vec::new())
        } else if self.tree.has_vertex(&actor) {
            let steps = path_steps(&self.tree, &actor)?;
            (Some(steps.len()), steps)
        } else {
            (None, Vec::new())
        };

        Ok(PathReport {
            actor,
            center: self.center.clone(),
            separation,
            steps,
        })
    }

    /// Actors with no path to the center
    pub fn missing(&self) -> BTreeSet<String> {
        missing_vertices(&self.graph, &self.tree)
    }

    /// Connected actors whose separation lies in `[low, high]`.
    pub fn by_separation(&self, low: usize, high: usize) -> Result<Vec<RankedActor>> {
        let matched = graph::vertices_by_separation(&self.tree, &self.center, low, high)?;
        Ok(ranked(matched))
    }

    /// Actors whose number of distinct costars lies in `[low, high]`.
    pub fn by_degree(&self, low: usize, high: usize) -> Result<Vec<RankedActor>> {
        let matched = graph::vertices_by_degree(&self.graph, low, high)?;
        Ok(ranked(matched))
    }

    /// Best (positive `count`) or worst (negative `count`) centers.
    pub fn rank_centers(&self, count: i64) -> Result<CenterRanking> {
        let (order, limit) = RankOrder::from_signed(count);
        let centers = graph::rank_centers(&self.graph, order, limit)?;
        Ok(CenterRanking { order, centers })
    }
}

fn ranked(pairs: Vec<(String, usize)>) -> Vec<RankedActor> {
    pairs
        .into_iter()
        .map(|(actor, value)| RankedActor { actor, value })
        .collect()
}
