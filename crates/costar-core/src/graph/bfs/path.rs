//! Path reconstruction over breadth-first spanning trees

use crate::error::{CostarError, Result};
use crate::graph::types::{Graph, PathStep, Vertex};
use std::collections::BTreeSet;

/// Walk parent edges from `v` until reaching a vertex with none, collecting
/// `(vertex, parent)` pairs.
///
/// Fails with `MalformedTree` on a revisited vertex or a vertex with more
/// than one parent edge, so a corrupted tree cannot hang the walk.
fn walk_to_root<'t, V, E, T>(tree: &'t T, v: &'t V) -> Result<Vec<(&'t V, &'t V)>>
where
    V: Vertex,
    T: Graph<V, E> + ?Sized,
{
    let mut hops = Vec::new();
    let mut seen: BTreeSet<&V> = BTreeSet::new();
    let mut current = v;

    loop {
        let parents = tree.out_neighbors(current);
        let parent = match parents.as_slice() {
            [] => break,
            [parent] => *parent,
            _ => return Err(CostarError::malformed_tree(current, "multiple parent edges")),
        };
        if !seen.insert(current) {
            return Err(CostarError::malformed_tree(current, "cycle in parent edges"));
        }
        hops.push((current, parent));
        current = parent;
    }

    Ok(hops)
}

/// Path from `v` toward the root of `tree`, root excluded.
///
/// The first element is `v` itself and the length equals the separation of
/// `v` from the root. Returns an empty path when the tree is empty, does not
/// contain `v`, or `v` has no parent edge (the root).
pub fn get_path<V, E, T>(tree: &T, v: &V) -> Result<Vec<V>>
where
    V: Vertex,
    T: Graph<V, E> + ?Sized,
{
    if tree.num_vertices() == 0 || !tree.has_vertex(v) || tree.out_degree(v) == 0 {
        return Ok(Vec::new());
    }

    let hops = walk_to_root::<V, E, T>(tree, v)?;
    Ok(hops.into_iter().map(|(vertex, _)| vertex.clone()).collect())
}

/// Same walk as [`get_path`], with each hop's parent and edge label.
pub fn path_steps<V, E, T>(tree: &T, v: &V) -> Result<Vec<PathStep<V, E>>>
where
    V: Vertex,
    E: Clone,
    T: Graph<V, E> + ?Sized,
{
    if tree.num_vertices() == 0 || !tree.has_vertex(v) || tree.out_degree(v) == 0 {
        return Ok(Vec::new());
    }

    walk_to_root::<V, E, T>(tree, v)?
        .into_iter()
        .map(|(vertex, parent)| -> Result<PathStep<V, E>> {
            Ok(PathStep {
                vertex: vertex.clone(),
                parent: parent.clone(),
                label: tree.get_label(vertex, parent)?.clone(),
            })
        })
        .collect()
}
