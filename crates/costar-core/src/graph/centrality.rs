//! Ranking vertices as candidate centers by average separation

use rayon::prelude::*;
use std::time::Instant;

use crate::error::Result;
use crate::graph::bfs::bfs;
use crate::graph::query::average_separation;
use crate::graph::types::{CenterScore, Graph, RankOrder, Vertex};

impl RankOrder {
    /// Map a signed count to an order and a limit: positive asks for the
    /// best centers, negative for the worst.
    pub fn from_signed(count: i64) -> (RankOrder, usize) {
        let limit = usize::try_from(count.unsigned_abs()).unwrap_or(usize::MAX);
        if count < 0 {
            (RankOrder::Worst, limit)
        } else {
            (RankOrder::Best, limit)
        }
    }
}

/// Score one candidate: its own spanning tree and average separation.
fn score<V, E, G>(graph: &G, candidate: &V) -> Result<Option<CenterScore<V>>>
where
    V: Vertex,
    E: Clone,
    G: Graph<V, E> + ?Sized,
{
    let tree = bfs(graph, candidate)?;
    Ok(
        average_separation(&tree, candidate).map(|avg| CenterScore {
            vertex: candidate.clone(),
            average_separation: avg,
            reachable: tree.num_vertices() - 1,
        }),
    )
}

/// Rank every vertex of `graph` as a center and keep the first `limit`.
///
/// Each candidate gets an independent BFS over the shared, read-only graph,
/// so candidates are scored in parallel. Vertices with no reachable
/// neighbor have no defined average separation and are left out. Ties are
/// broken by vertex order.
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.num_vertices()))]
pub fn rank_centers<V, E, G>(graph: &G, order: RankOrder, limit: usize) -> Result<Vec<CenterScore<V>>>
where
    V: Vertex + Send + Sync,
    E: Clone + Send + Sync,
    G: Graph<V, E> + Sync + ?Sized,
{
    let start = Instant::now();

    if limit == 0 {
        return Ok(Vec::new());
    }

    let candidates = graph.vertices();
    let scored: Vec<Option<CenterScore<V>>> = candidates
        .par_iter()
        .map(|candidate| score::<V, E, G>(graph, candidate))
        .collect::<Result<_>>()?;

    let mut ranked: Vec<CenterScore<V>> = scored.into_iter().flatten().collect();
    ranked.sort_by(|a, b| {
        let by_avg = a.average_separation.total_cmp(&b.average_separation);
        let by_avg = match order {
            RankOrder::Best => by_avg,
            RankOrder::Worst => by_avg.reverse(),
        };
        by_avg.then_with(|| a.vertex.cmp(&b.vertex))
    });
    ranked.truncate(limit);

    tracing::debug!(elapsed = ?start.elapsed(), ranked = ranked.len(), "rank_centers");
    Ok(ranked)
}
