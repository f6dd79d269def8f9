//! # Navigation Module
//!
//! The pathfinding hint: a lattice over the arena, a breadth-first search
//! across it, and a publisher that runs searches on a worker thread.

pub mod bfs;
pub mod grid;
pub mod publisher;
pub mod snapshot;

pub use bfs::*;
pub use grid::*;
pub use publisher::*;
pub use snapshot::*;
