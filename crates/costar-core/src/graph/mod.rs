//! Collaboration graph and breadth-first queries
//!
//! - Generic labeled-edge graph (`Graph` trait, `AdjacencyMapGraph`)
//! - BFS spanning trees and path reconstruction
//! - Reachability, separation and degree queries
//! - Center ranking by average separation

pub mod adjacency;
pub mod bfs;
pub mod centrality;
pub mod query;
pub mod types;

pub use adjacency::{AdjacencyMapGraph, SpanningTree};
pub use bfs::{bfs, get_path, path_steps};
pub use centrality::rank_centers;
pub use query::{
    average_separation, missing_vertices, separations, vertices_by_degree,
    vertices_by_separation,
};
pub use types::{CenterScore, Graph, PathStep, RankOrder, Vertex};
