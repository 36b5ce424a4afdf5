//! Maze generation for labyrinth: randomized depth-first backtracking over a
//! grid, producing a spanning-tree [`labyrinth_core::DenseGraph`].

pub mod mapgen;

pub use mapgen::{GenerateError, MazeGen, generate};
