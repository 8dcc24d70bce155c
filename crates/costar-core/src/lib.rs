//! Costar Core Library
//!
//! Collaboration graphs of actors, breadth-first spanning trees rooted at a
//! chosen center, and the separation queries built on top of them.

pub mod config;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod logging;
pub mod universe;
