//! Helpers shared by the search tests.

use labyrinth_core::{DenseGraph, Graph, GridSize, Vertex};

/// A `width × height` grid graph with every orthogonal edge present.
pub(crate) fn open_grid(width: usize, height: usize) -> DenseGraph {
    let grid = GridSize::new(width, height);
    let mut g = DenseGraph::with_grid(grid);
    let mut buf = Vec::new();
    for v in 0..grid.len() {
        buf.clear();
        grid.cardinal(v, &mut buf);
        for &n in &buf {
            g.add_edge(v, n);
        }
    }
    g
}

pub(crate) fn assert_valid_path<G: Graph>(g: &G, path: &[Vertex], start: Vertex, goal: Vertex) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for w in path.windows(2) {
        assert!(g.has_edge(w[0], w[1]), "{} and {} are not adjacent", w[0], w[1]);
    }
    let mut seen = path.to_vec();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), path.len(), "path revisits a vertex");
}
