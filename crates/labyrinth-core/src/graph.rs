//! The representation-independent graph interface.
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Graph`] | undirected edges, neighbour enumeration, counts |
//! | [`WeightedGraph`] : [`Graph`] | real-valued edge weights |
//!
//! Four implementations exist: [`DenseGraph`](crate::DenseGraph),
//! [`SparseGraph`](crate::SparseGraph),
//! [`WeightedDenseGraph`](crate::WeightedDenseGraph) and
//! [`WeightedSparseGraph`](crate::WeightedSparseGraph). Algorithms take
//! `&impl Graph` and never depend on a concrete representation.

use std::fmt;

use crate::geom::GridSize;

/// A vertex index. For grid graphs see [`GridSize`] for the cell encoding.
pub type Vertex = usize;

/// Weight reported by [`WeightedGraph::weight`] when there is no edge.
pub const NO_EDGE: f64 = f64::INFINITY;

/// Undirected graph over integer vertices.
///
/// Edges are symmetric: after `add_edge(a, b)` both `has_edge(a, b)` and
/// `has_edge(b, a)` hold. Self-loops are not represented.
///
/// Dense representations own the fixed vertex range `0..vertex_count()` and
/// panic on indices outside it. Sparse representations create vertices on
/// edge insertion and panic when asked for the neighbours or degree of a
/// vertex that was never created.
pub trait Graph {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Whether `v` is a vertex of this graph.
    fn contains(&self, v: Vertex) -> bool;

    /// Add an undirected edge between `a` and `b` (weight 1 on weighted
    /// graphs). Adding an existing edge changes nothing.
    fn add_edge(&mut self, a: Vertex, b: Vertex);

    /// Whether `a` and `b` are directly connected.
    fn has_edge(&self, a: Vertex, b: Vertex) -> bool;

    /// Remove the edge between `a` and `b` in both directions.
    ///
    /// Fails with [`GraphError::MissingEdge`] if there is no such edge.
    fn remove_edge(&mut self, a: Vertex, b: Vertex) -> Result<(), GraphError>;

    /// Append the neighbours of `v` into `buf`. The caller clears `buf`
    /// before calling.
    ///
    /// Sparse graphs yield neighbours in insertion order, dense graphs in
    /// ascending index order.
    fn neighbors_into(&self, v: Vertex, buf: &mut Vec<Vertex>);

    /// Number of neighbours of `v`.
    fn degree(&self, v: Vertex) -> usize;

    /// Number of undirected edges, each counted once.
    fn edge_count(&self) -> usize;

    /// Neighbours of `v` in the order described by
    /// [`neighbors_into`](Self::neighbors_into).
    fn neighbors(&self, v: Vertex) -> Vec<Vertex> {
        let mut buf = Vec::new();
        self.neighbors_into(v, &mut buf);
        buf
    }

    /// All vertices. Dense graphs list `0..vertex_count()`, sparse graphs
    /// list vertices in creation order.
    fn vertices(&self) -> Vec<Vertex> {
        (0..self.vertex_count()).collect()
    }

    /// Position of `v` in `0..vertex_count()`, or `None` if `v` is not a
    /// vertex. Searches index their per-vertex tables with this, so it must
    /// be distinct for every vertex.
    fn slot(&self, v: Vertex) -> Option<usize> {
        self.contains(v).then_some(v)
    }

    /// Grid layout, for graphs built over a grid of cells.
    fn grid(&self) -> Option<GridSize> {
        None
    }
}

/// Graph whose edges carry finite, non-negative real weights.
pub trait WeightedGraph: Graph {
    /// Add an undirected edge of weight `w`, replacing any previous weight.
    ///
    /// Panics if `w` is negative, infinite or NaN.
    fn add_weighted_edge(&mut self, a: Vertex, b: Vertex, w: f64);

    /// Weight of the edge between `a` and `b`: `0.0` when `a == b`,
    /// [`NO_EDGE`] when they are not connected.
    fn weight(&self, a: Vertex, b: Vertex) -> f64;

    /// Append `(neighbour, weight)` pairs of `v` into `buf`, in the same
    /// order as [`Graph::neighbors_into`].
    fn weighted_neighbors_into(&self, v: Vertex, buf: &mut Vec<(Vertex, f64)>);
}

pub(crate) fn check_weight(w: f64) {
    assert!(
        w.is_finite() && w >= 0.0,
        "edge weight must be finite and non-negative, got {w}"
    );
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by graph mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// `remove_edge` was called for vertices that are not connected.
    MissingEdge { a: Vertex, b: Vertex },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEdge { a, b } => write!(f, "no edge between {a} and {b}"),
        }
    }
}

impl std::error::Error for GraphError {}

// ---------------------------------------------------------------------------
// Shared contract tests
// ---------------------------------------------------------------------------

/// Checks every representation against the same behavioural contract.
#[cfg(test)]
pub(crate) mod contract {
    use super::*;

    /// `g` must contain (or be able to create) vertices `0..4` and start with
    /// no edges.
    pub(crate) fn exercise<G: Graph>(mut g: G) {
        g.add_edge(0, 1);
        g.add_edge(2, 0);
        g.add_edge(1, 3);

        for (a, b) in [(0, 1), (0, 2), (1, 3)] {
            assert!(g.has_edge(a, b), "{a}-{b}");
            assert!(g.has_edge(b, a), "{b}-{a}");
        }
        assert!(!g.has_edge(0, 3));
        assert!(!g.has_edge(2, 3));
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.degree(0), 2);
        assert_eq!(g.degree(3), 1);

        for v in 0..4 {
            assert_eq!(g.slot(v), Some(v));
        }
        assert_eq!(g.slot(4), None);

        let mut n0 = g.neighbors(0);
        n0.sort_unstable();
        assert_eq!(n0, vec![1, 2]);

        // Re-adding is idempotent, self-loops are ignored.
        g.add_edge(1, 0);
        g.add_edge(3, 3);
        assert_eq!(g.edge_count(), 3);
        assert!(!g.has_edge(3, 3));

        assert_eq!(g.remove_edge(1, 0), Ok(()));
        assert!(!g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.degree(1), 1);
        assert_eq!(
            g.remove_edge(0, 1),
            Err(GraphError::MissingEdge { a: 0, b: 1 })
        );
        assert_eq!(g.remove_edge(0, 3), Err(GraphError::MissingEdge { a: 0, b: 3 }));
    }

    /// Weighted extension of [`exercise`].
    pub(crate) fn exercise_weighted<G: WeightedGraph>(mut g: G) {
        g.add_weighted_edge(0, 1, 2.5);
        g.add_edge(1, 2);
        assert_eq!(g.weight(0, 1), 2.5);
        assert_eq!(g.weight(1, 0), 2.5);
        assert_eq!(g.weight(2, 1), 1.0);
        assert_eq!(g.weight(0, 2), NO_EDGE);
        assert_eq!(g.weight(1, 1), 0.0);

        g.add_weighted_edge(1, 0, 4.0);
        assert_eq!(g.weight(0, 1), 4.0);
        assert_eq!(g.edge_count(), 2);

        let mut buf = Vec::new();
        g.weighted_neighbors_into(1, &mut buf);
        buf.sort_by_key(|&(v, _)| v);
        assert_eq!(buf, vec![(0, 4.0), (2, 1.0)]);

        assert!(g.remove_edge(0, 1).is_ok());
        assert_eq!(g.weight(0, 1), NO_EDGE);
    }
}
