mod path;

use crate::error::Result;
use crate::graph::adjacency::SpanningTree;
use crate::graph::types::{Graph, Vertex};
use std::collections::{BTreeSet, VecDeque};
use std::time::Instant;

pub use path::{get_path, path_steps};

/// Breadth-first spanning tree rooted at `source`.
///
/// Every vertex reachable from `source` appears in the tree; each one except
/// `source` carries exactly one edge pointing at the vertex it was discovered
/// from, labeled with the graph's `discovered -> discoverer` label. Neighbors
/// are expanded in `out_neighbors` order, so the tree shape is deterministic.
///
/// An absent `source` yields an empty tree. Unreachable vertices are simply
/// absent from the result.
pub fn bfs<V, E, G>(graph: &G, source: &V) -> Result<SpanningTree<V, E>>
where
    V: Vertex,
    E: Clone,
    G: Graph<V, E> + ?Sized,
{
    let start = Instant::now();
    let mut tree = SpanningTree::new();

    if !graph.has_vertex(source) {
        tracing::debug!(source = ?source, "bfs source not in graph");
        return Ok(tree);
    }

    let mut visited: BTreeSet<&V> = BTreeSet::new();
    let mut queue: VecDeque<&V> = VecDeque::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        tree.insert_vertex(current.clone());

        for neighbor in graph.out_neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
                let label = graph.get_label(neighbor, current)?.clone();
                tree.insert_directed(neighbor.clone(), current.clone(), label);
            }
        }
    }

    crate::trace_time!(start, "bfs", vertices = tree.num_vertices());
    Ok(tree)
}
