//! Shared pieces of the labyrinth command-line demo: option parsing, search
//! selection and a plain-text maze picture.

use clap::{Parser, ValueEnum};
use labyrinth_core::{DenseGraph, Graph, GridSize, Vertex};
use labyrinth_paths::{Outcome, PathFinder};

const WALL: char = '#';
const OPEN: char = ' ';
const STEP: char = '.';
const START: char = 'S';
const GOAL: char = 'E';

/// Command-line options.
#[derive(Parser, Debug)]
#[command(version, about = "Generate a random maze and solve it")]
pub struct Args {
    /// Number of columns.
    #[arg(short = 'W', long, default_value_t = 20)]
    pub width: usize,
    /// Number of rows.
    #[arg(short = 'H', long, default_value_t = 10)]
    pub height: usize,
    /// Seed for a reproducible maze.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Search used to draw the path.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Astar)]
    pub algorithm: Algorithm,
    /// Print the order in which each search finalized vertices.
    #[arg(short, long)]
    pub trace: bool,
}

/// The available searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Dfs,
    Dijkstra,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Self::Dfs, Self::Dijkstra, Self::Astar];

    pub fn name(self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::Astar => "astar",
        }
    }

    /// Run this search with trace recording.
    pub fn run<G: Graph>(
        self,
        pf: &mut PathFinder,
        graph: &G,
        start: Vertex,
        goal: Vertex,
    ) -> Outcome {
        let found = match self {
            Self::Dfs => pf.dfs_with_trace(graph, start, goal),
            Self::Dijkstra => pf.dijkstra_with_trace(graph, start, goal),
            Self::Astar => pf.astar_with_trace(graph, start, goal),
        };
        Outcome::from(found)
    }
}

/// Draw `maze` as text, one character per cell and per wall, marking the
/// cells and openings along `path`.
///
/// Returns an empty string for graphs without a grid layout.
pub fn render(maze: &DenseGraph, path: &[Vertex]) -> String {
    let Some(grid) = maze.grid() else {
        return String::new();
    };
    let cols = 2 * grid.width + 1;
    let rows = 2 * grid.height + 1;
    let mut canvas = vec![vec![WALL; cols]; rows];

    let at = |v: Vertex| {
        let (r, c) = grid.coords(v);
        (2 * r + 1, 2 * c + 1)
    };

    for v in 0..grid.len() {
        let (r, c) = at(v);
        canvas[r][c] = OPEN;
        for n in maze.neighbors(v) {
            let (nr, nc) = at(n);
            canvas[(r + nr) / 2][(c + nc) / 2] = OPEN;
        }
    }

    for pair in path.windows(2) {
        let ((r, c), (nr, nc)) = (at(pair[0]), at(pair[1]));
        canvas[r][c] = STEP;
        canvas[nr][nc] = STEP;
        canvas[(r + nr) / 2][(c + nc) / 2] = STEP;
    }
    if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
        let (r, c) = at(first);
        canvas[r][c] = START;
        let (r, c) = at(last);
        canvas[r][c] = GOAL;
    }

    let mut out = String::with_capacity(rows * (cols + 1));
    for line in canvas {
        out.extend(line);
        out.push('\n');
    }
    out
}

/// One-line summary of a search outcome.
pub fn summary(algorithm: Algorithm, outcome: &Outcome) -> String {
    match &outcome.path {
        Some(path) => format!(
            "{:<8} path {:>4} cells, {:>4} visited",
            algorithm.name(),
            path.len(),
            outcome.trace.len()
        ),
        None => format!(
            "{:<8} no path, {:>4} visited",
            algorithm.name(),
            outcome.trace.len()
        ),
    }
}

/// Grid size requested on the command line.
pub fn grid_size(args: &Args) -> GridSize {
    GridSize::new(args.width, args.height)
}
