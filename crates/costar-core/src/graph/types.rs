use crate::error::Result;
use serde::Serialize;
use std::fmt::Debug;

/// Vertex identity: ordered so that neighbor enumeration is deterministic,
/// debuggable so that contract violations can name the offending vertex.
pub trait Vertex: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Vertex for T {}

/// Labeled-edge graph capability.
///
/// Edges are directed; an undirected edge is a pair of directed entries
/// carrying the same label. Neighbor sequences come back in ascending
/// vertex order.
pub trait Graph<V: Vertex, E> {
    /// Add `v` with no edges. No-op if already present.
    fn insert_vertex(&mut self, v: V);

    /// Add or relabel the directed edge `from -> to`, inserting missing endpoints.
    fn insert_directed(&mut self, from: V, to: V, label: E);

    /// Add or relabel both `u -> v` and `v -> u` with the same label.
    fn insert_undirected(&mut self, u: V, v: V, label: E)
    where
        E: Clone,
    {
        self.insert_directed(u.clone(), v.clone(), label.clone());
        self.insert_directed(v, u, label);
    }

    fn has_vertex(&self, v: &V) -> bool;

    fn vertices(&self) -> Vec<&V>;

    fn out_neighbors(&self, u: &V) -> Vec<&V>;

    fn in_neighbors(&self, u: &V) -> Vec<&V>;

    fn out_degree(&self, u: &V) -> usize;

    fn in_degree(&self, u: &V) -> usize;

    fn num_vertices(&self) -> usize;

    /// Number of directed edges (an undirected edge counts twice).
    fn num_edges(&self) -> usize;

    /// Label of the directed edge `u -> v`; `NoSuchEdge` if absent.
    fn get_label(&self, u: &V, v: &V) -> Result<&E>;
}

/// One hop of a path toward the root of a spanning tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStep<V, E> {
    pub vertex: V,
    pub parent: V,
    pub label: E,
}

/// Which end of the average-separation ranking to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankOrder {
    /// Lowest average separation first
    Best,
    /// Highest average separation first
    Worst,
}

/// A candidate center and its average separation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterScore<V> {
    pub vertex: V,
    pub average_separation: f64,
    /// Vertices reachable from this center, excluding itself
    pub reachable: usize,
}
