//! Adjacency-matrix graphs over a fixed vertex range `0..n`.
//!
//! Both matrices are stored flat, row-major, `n * n` entries. Neighbours are
//! always enumerated in ascending index order.

use std::fmt;

use crate::geom::GridSize;
use crate::graph::{Graph, GraphError, NO_EDGE, Vertex, WeightedGraph, check_weight};

// ---------------------------------------------------------------------------
// DenseGraph
// ---------------------------------------------------------------------------

/// Unweighted graph backed by a boolean adjacency matrix.
///
/// This is the representation produced by the maze generator: built with
/// [`DenseGraph::with_grid`], vertex `v` is the cell at
/// `(v / width, v % width)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGraph {
    n: usize,
    adj: Vec<bool>,
    edges: usize,
    grid: Option<GridSize>,
}

impl DenseGraph {
    /// Create a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            adj: vec![false; n * n],
            edges: 0,
            grid: None,
        }
    }

    /// Create an edgeless graph with one vertex per cell of `grid`.
    pub fn with_grid(grid: GridSize) -> Self {
        Self {
            grid: Some(grid),
            ..Self::new(grid.len())
        }
    }

    /// Grid width, or 0 if this graph has no grid layout.
    pub fn grid_width(&self) -> usize {
        self.grid.map_or(0, |g| g.width)
    }

    /// Grid height, or 0 if this graph has no grid layout.
    pub fn grid_height(&self) -> usize {
        self.grid.map_or(0, |g| g.height)
    }

    #[inline]
    fn cell(&self, a: Vertex, b: Vertex) -> usize {
        assert!(
            a < self.n && b < self.n,
            "vertex out of range: ({a}, {b}) with {} vertices",
            self.n
        );
        a * self.n + b
    }
}

impl Graph for DenseGraph {
    fn vertex_count(&self) -> usize {
        self.n
    }

    fn contains(&self, v: Vertex) -> bool {
        v < self.n
    }

    fn add_edge(&mut self, a: Vertex, b: Vertex) {
        let ab = self.cell(a, b);
        if a == b || self.adj[ab] {
            return;
        }
        let ba = self.cell(b, a);
        self.adj[ab] = true;
        self.adj[ba] = true;
        self.edges += 1;
    }

    fn has_edge(&self, a: Vertex, b: Vertex) -> bool {
        self.adj[self.cell(a, b)]
    }

    fn remove_edge(&mut self, a: Vertex, b: Vertex) -> Result<(), GraphError> {
        let ab = self.cell(a, b);
        if !self.adj[ab] {
            return Err(GraphError::MissingEdge { a, b });
        }
        let ba = self.cell(b, a);
        self.adj[ab] = false;
        self.adj[ba] = false;
        self.edges -= 1;
        Ok(())
    }

    fn neighbors_into(&self, v: Vertex, buf: &mut Vec<Vertex>) {
        let row = self.cell(v, 0);
        buf.extend(
            self.adj[row..row + self.n]
                .iter()
                .enumerate()
                .filter_map(|(i, &e)| e.then_some(i)),
        );
    }

    fn degree(&self, v: Vertex) -> usize {
        let row = self.cell(v, 0);
        self.adj[row..row + self.n].iter().filter(|&&e| e).count()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn grid(&self) -> Option<GridSize> {
        self.grid
    }
}

impl fmt::Display for DenseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in 0..self.n {
            write!(f, "{v} ->")?;
            for n in self.neighbors(v) {
                write!(f, " {n}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// WeightedDenseGraph
// ---------------------------------------------------------------------------

/// Weighted graph backed by a matrix of weights.
///
/// Missing edges hold [`NO_EDGE`] (`+∞`) and the diagonal holds `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedDenseGraph {
    n: usize,
    adj: Vec<f64>,
    edges: usize,
}

impl WeightedDenseGraph {
    /// Create a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        let mut adj = vec![NO_EDGE; n * n];
        for v in 0..n {
            adj[v * n + v] = 0.0;
        }
        Self { n, adj, edges: 0 }
    }

    #[inline]
    fn cell(&self, a: Vertex, b: Vertex) -> usize {
        assert!(
            a < self.n && b < self.n,
            "vertex out of range: ({a}, {b}) with {} vertices",
            self.n
        );
        a * self.n + b
    }

    fn row(&self, v: Vertex) -> impl Iterator<Item = (Vertex, f64)> + '_ {
        let start = self.cell(v, 0);
        self.adj[start..start + self.n]
            .iter()
            .enumerate()
            .filter(move |&(i, &w)| i != v && w != NO_EDGE)
            .map(|(i, &w)| (i, w))
    }
}

impl Graph for WeightedDenseGraph {
    fn vertex_count(&self) -> usize {
        self.n
    }

    fn contains(&self, v: Vertex) -> bool {
        v < self.n
    }

    fn add_edge(&mut self, a: Vertex, b: Vertex) {
        if !self.has_edge(a, b) {
            self.add_weighted_edge(a, b, 1.0);
        }
    }

    fn has_edge(&self, a: Vertex, b: Vertex) -> bool {
        a != b && self.adj[self.cell(a, b)] != NO_EDGE
    }

    fn remove_edge(&mut self, a: Vertex, b: Vertex) -> Result<(), GraphError> {
        if !self.has_edge(a, b) {
            return Err(GraphError::MissingEdge { a, b });
        }
        let (ab, ba) = (self.cell(a, b), self.cell(b, a));
        self.adj[ab] = NO_EDGE;
        self.adj[ba] = NO_EDGE;
        self.edges -= 1;
        Ok(())
    }

    fn neighbors_into(&self, v: Vertex, buf: &mut Vec<Vertex>) {
        buf.extend(self.row(v).map(|(n, _)| n));
    }

    fn degree(&self, v: Vertex) -> usize {
        self.row(v).count()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }
}

impl WeightedGraph for WeightedDenseGraph {
    fn add_weighted_edge(&mut self, a: Vertex, b: Vertex, w: f64) {
        check_weight(w);
        let (ab, ba) = (self.cell(a, b), self.cell(b, a));
        if a == b {
            return;
        }
        if self.adj[ab] == NO_EDGE {
            self.edges += 1;
        }
        self.adj[ab] = w;
        self.adj[ba] = w;
    }

    fn weight(&self, a: Vertex, b: Vertex) -> f64 {
        self.adj[self.cell(a, b)]
    }

    fn weighted_neighbors_into(&self, v: Vertex, buf: &mut Vec<(Vertex, f64)>) {
        buf.extend(self.row(v));
    }
}

impl fmt::Display for WeightedDenseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in 0..self.n {
            write!(f, "{v} ->")?;
            for (n, w) in self.row(v) {
                write!(f, "  {n}, dist={w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
