use std::collections::{BTreeMap, BTreeSet};

use crate::error::{CostarError, Result};
use crate::graph::types::{Graph, Vertex};

/// Ordered map-of-maps graph.
///
/// `outgoing[u][v]` holds the label of `u -> v`; `incoming[v]` indexes the
/// sources of edges into `v`. Every vertex has an entry in both maps.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMapGraph<V: Vertex, E> {
    outgoing: BTreeMap<V, BTreeMap<V, E>>,
    incoming: BTreeMap<V, BTreeSet<V>>,
}

/// Output of breadth-first search: child -> parent edges, root has none.
pub type SpanningTree<V, E> = AdjacencyMapGraph<V, E>;

impl<V: Vertex, E> AdjacencyMapGraph<V, E> {
    pub fn new() -> Self {
        Self {
            outgoing: BTreeMap::new(),
            incoming: BTreeMap::new(),
        }
    }

    /// Outgoing edges of `u` with their labels, in neighbor order
    pub fn out_edges(&self, u: &V) -> impl Iterator<Item = (&V, &E)> {
        self.outgoing.get(u).into_iter().flat_map(|edges| edges.iter())
    }
}

impl<V: Vertex, E> Default for AdjacencyMapGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, E> Graph<V, E> for AdjacencyMapGraph<V, E> {
    fn insert_vertex(&mut self, v: V) {
        if self.outgoing.contains_key(&v) {
            return;
        }
        self.incoming.insert(v.clone(), BTreeSet::new());
        self.outgoing.insert(v, BTreeMap::new());
    }

    fn insert_directed(&mut self, from: V, to: V, label: E) {
        self.insert_vertex(from.clone());
        self.insert_vertex(to.clone());
        self.incoming
            .entry(to.clone())
            .or_default()
            .insert(from.clone());
        self.outgoing.entry(from).or_default().insert(to, label);
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.outgoing.contains_key(v)
    }

    fn vertices(&self) -> Vec<&V> {
        self.outgoing.keys().collect()
    }

    fn out_neighbors(&self, u: &V) -> Vec<&V> {
        self.outgoing
            .get(u)
            .map(|edges| edges.keys().collect())
            .unwrap_or_default()
    }

    fn in_neighbors(&self, u: &V) -> Vec<&V> {
        self.incoming
            .get(u)
            .map(|sources| sources.iter().collect())
            .unwrap_or_default()
    }

    fn out_degree(&self, u: &V) -> usize {
        self.outgoing.get(u).map_or(0, BTreeMap::len)
    }

    fn in_degree(&self, u: &V) -> usize {
        self.incoming.get(u).map_or(0, BTreeSet::len)
    }

    fn num_vertices(&self) -> usize {
        self.outgoing.len()
    }

    fn num_edges(&self) -> usize {
        self.outgoing.values().map(BTreeMap::len).sum()
    }

    fn get_label(&self, u: &V, v: &V) -> Result<&E> {
        self.outgoing
            .get(u)
            .and_then(|edges| edges.get(v))
            .ok_or_else(|| CostarError::no_such_edge(u, v))
    }
}
