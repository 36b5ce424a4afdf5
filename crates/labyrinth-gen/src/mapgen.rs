//! Randomized depth-first backtracking maze generation.
//!
//! The generator walks the grid with an explicit [`Stack`] of cells. From the
//! cell on top it knocks down the wall to a random unvisited orthogonal
//! neighbour and moves there; when no such neighbour is left it backtracks by
//! popping. Every cell is entered exactly once through exactly one new edge,
//! so the result is a spanning tree of the grid: `width * height - 1` edges,
//! connected and acyclic.

use std::fmt;

use labyrinth_core::{DenseGraph, Graph, GridSize, Stack, Vertex};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

/// Maze generator drawing its random choices from `rng`.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `width × height` maze.
    ///
    /// The returned graph has one vertex per cell (row-major, see
    /// [`GridSize`]) and an edge wherever the wall between two cells was
    /// removed.
    pub fn generate(&mut self, width: usize, height: usize) -> Result<DenseGraph, GenerateError> {
        if width == 0 || height == 0 {
            return Err(GenerateError::InvalidSize { width, height });
        }
        let grid = GridSize::new(width, height);
        let mut maze = DenseGraph::with_grid(grid);
        let mut visited = vec![false; grid.len()];

        let start = self.rng.random_range(0..grid.len());
        visited[start] = true;
        let mut trail: Stack<Vertex> = Stack::with_capacity(grid.len());
        trail.push(start);

        let mut candidates = Vec::with_capacity(4);

        while let Ok(pos) = trail.pop() {
            candidates.clear();
            grid.cardinal(pos, &mut candidates);
            candidates.retain(|&c| !visited[c]);

            if candidates.is_empty() {
                // Dead end: leave it popped and backtrack.
                continue;
            }

            trail.push(pos);
            let next = candidates[self.rng.random_range(0..candidates.len())];
            visited[next] = true;
            maze.add_edge(pos, next);
            trail.push(next);
        }

        log::debug!(
            "generated {grid} maze from cell {start}: {} edges",
            maze.edge_count()
        );
        Ok(maze)
    }
}

impl MazeGen<StdRng> {
    /// A generator whose mazes are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

/// Generate a `width × height` maze using the thread-local RNG.
pub fn generate(width: usize, height: usize) -> Result<DenseGraph, GenerateError> {
    MazeGen::new(rand::rng()).generate(width, height)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when generating a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// One of the dimensions is zero.
    InvalidSize { width: usize, height: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "invalid maze size {width}x{height}: both sides must be at least 1")
            }
        }
    }
}

impl std::error::Error for GenerateError {}
