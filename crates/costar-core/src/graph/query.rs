//! Reachability and separation queries over a graph and its spanning trees

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::types::{Graph, Vertex};
use std::collections::{BTreeMap, BTreeSet};

/// Vertices of `graph` that `subgraph` does not contain.
///
/// With `subgraph = bfs(graph, s)` these are the vertices with no path to `s`.
pub fn missing_vertices<V, E, G, S>(graph: &G, subgraph: &S) -> BTreeSet<V>
where
    V: Vertex,
    G: Graph<V, E> + ?Sized,
    S: Graph<V, E> + ?Sized,
{
    graph
        .vertices()
        .into_iter()
        .filter(|v| !subgraph.has_vertex(v))
        .cloned()
        .collect()
}

/// Depth of every vertex reachable from `root` by following tree edges
/// backwards (children of a vertex are its in-neighbors). `root` maps to 0.
///
/// Uses an explicit worklist; a vertex reached twice is counted once.
pub fn separations<V, E, T>(tree: &T, root: &V) -> BTreeMap<V, usize>
where
    V: Vertex,
    T: Graph<V, E> + ?Sized,
{
    let mut depths = BTreeMap::new();
    if !tree.has_vertex(root) {
        return depths;
    }

    let mut stack: Vec<(&V, usize)> = vec![(root, 0)];
    while let Some((vertex, depth)) = stack.pop() {
        if depths.contains_key(vertex) {
            continue;
        }
        depths.insert(vertex.clone(), depth);
        for child in tree.in_neighbors(vertex) {
            stack.push((child, depth + 1));
        }
    }

    depths
}

/// Mean separation from `root` over every other vertex of `tree`.
///
/// `None` when `tree` holds no vertex besides `root`, or lacks `root`.
pub fn average_separation<V, E, T>(tree: &T, root: &V) -> Option<f64>
where
    V: Vertex,
    T: Graph<V, E> + ?Sized,
{
    let others = tree.num_vertices().checked_sub(1)?;
    if others == 0 || !tree.has_vertex(root) {
        return None;
    }

    let total: usize = separations::<V, E, T>(tree, root).values().sum();
    Some(total as f64 / others as f64)
}

/// Vertices whose separation from `root` lies in `[low, high]`,
/// ordered by separation and then by vertex.
pub fn vertices_by_separation<V, E, T>(
    tree: &T,
    root: &V,
    low: usize,
    high: usize,
) -> Result<Vec<(V, usize)>>
where
    V: Vertex,
    T: Graph<V, E> + ?Sized,
{
    if low > high {
        bail_invalid!("separation range", format!("{}..{}", low, high));
    }

    let mut matched: Vec<(V, usize)> = separations::<V, E, T>(tree, root)
        .into_iter()
        .filter(|(_, depth)| (low..=high).contains(depth))
        .collect();
    matched.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    Ok(matched)
}

/// Vertices whose out-degree in `graph` lies in `[low, high]`,
/// ordered by degree (highest first) and then by vertex.
pub fn vertices_by_degree<V, E, G>(graph: &G, low: usize, high: usize) -> Result<Vec<(V, usize)>>
where
    V: Vertex,
    G: Graph<V, E> + ?Sized,
{
    if low > high {
        bail_invalid!("degree range", format!("{}..{}", low, high));
    }

    let mut matched: Vec<(V, usize)> = graph
        .vertices()
        .into_iter()
        .map(|v| (v.clone(), graph.out_degree(v)))
        .filter(|(_, degree)| (low..=high).contains(degree))
        .collect();
    matched.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(matched)
}
