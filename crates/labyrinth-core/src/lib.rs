//! **labyrinth-core** — shared building blocks for maze generation and search.
//!
//! - [`Stack`]: the LIFO container used by the generator and depth-first search.
//! - [`Graph`] / [`WeightedGraph`]: one behavioural contract with four
//!   representations ([`DenseGraph`], [`SparseGraph`], [`WeightedDenseGraph`],
//!   [`WeightedSparseGraph`]).
//! - [`GridSize`] / [`Direction`]: the row-major cell encoding of grid graphs.

pub mod adjacency;
pub mod geom;
pub mod graph;
pub mod matrix;
pub mod stack;

pub use adjacency::{SparseGraph, WeightedSparseGraph};
pub use geom::{Direction, GridSize};
pub use graph::{Graph, GraphError, NO_EDGE, Vertex, WeightedGraph};
pub use matrix::{DenseGraph, WeightedDenseGraph};
pub use stack::{Stack, StackError};
