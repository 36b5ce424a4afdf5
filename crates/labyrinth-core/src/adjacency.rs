//! Adjacency-list graphs whose vertices are created on demand.
//!
//! Vertices keep their creation order and each neighbour list keeps
//! insertion order, so enumeration is deterministic.

use std::collections::HashMap;
use std::fmt;

use crate::graph::{Graph, GraphError, NO_EDGE, Vertex, WeightedGraph, check_weight};

/// Creation-ordered vertex table shared by both sparse graphs.
#[derive(Clone, Debug, Default)]
struct Table<E> {
    slots: HashMap<Vertex, usize>,
    order: Vec<Vertex>,
    lists: Vec<Vec<E>>,
}

impl<E> Table<E> {
    fn slot_or_insert(&mut self, v: Vertex) -> usize {
        if let Some(&s) = self.slots.get(&v) {
            return s;
        }
        let s = self.order.len();
        self.slots.insert(v, s);
        self.order.push(v);
        self.lists.push(Vec::new());
        s
    }

    fn list(&self, v: Vertex) -> Option<&Vec<E>> {
        let s = *self.slots.get(&v)?;
        Some(&self.lists[s])
    }

    fn list_mut(&mut self, v: Vertex) -> Option<&mut Vec<E>> {
        let s = *self.slots.get(&v)?;
        Some(&mut self.lists[s])
    }

    fn expect_list(&self, v: Vertex) -> &Vec<E> {
        self.list(v).unwrap_or_else(|| panic!("unknown vertex {v}"))
    }
}

// ---------------------------------------------------------------------------
// SparseGraph
// ---------------------------------------------------------------------------

/// Unweighted graph backed by insertion-ordered neighbour lists.
#[derive(Clone, Debug, Default)]
pub struct SparseGraph {
    table: Table<Vertex>,
    edges: usize,
}

impl SparseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `v` as an isolated vertex if it does not exist yet.
    pub fn add_vertex(&mut self, v: Vertex) {
        self.table.slot_or_insert(v);
    }
}

impl Graph for SparseGraph {
    fn vertex_count(&self) -> usize {
        self.table.order.len()
    }

    fn contains(&self, v: Vertex) -> bool {
        self.table.slots.contains_key(&v)
    }

    fn add_edge(&mut self, a: Vertex, b: Vertex) {
        let sa = self.table.slot_or_insert(a);
        let sb = self.table.slot_or_insert(b);
        if a == b || self.table.lists[sa].contains(&b) {
            return;
        }
        self.table.lists[sa].push(b);
        self.table.lists[sb].push(a);
        self.edges += 1;
    }

    fn has_edge(&self, a: Vertex, b: Vertex) -> bool {
        self.table.list(a).is_some_and(|l| l.contains(&b))
    }

    fn remove_edge(&mut self, a: Vertex, b: Vertex) -> Result<(), GraphError> {
        if !self.has_edge(a, b) {
            return Err(GraphError::MissingEdge { a, b });
        }
        for (from, to) in [(a, b), (b, a)] {
            if let Some(list) = self.table.list_mut(from) {
                list.retain(|&n| n != to);
            }
        }
        self.edges -= 1;
        Ok(())
    }

    fn neighbors_into(&self, v: Vertex, buf: &mut Vec<Vertex>) {
        buf.extend_from_slice(self.table.expect_list(v));
    }

    fn degree(&self, v: Vertex) -> usize {
        self.table.expect_list(v).len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn vertices(&self) -> Vec<Vertex> {
        self.table.order.clone()
    }

    fn slot(&self, v: Vertex) -> Option<usize> {
        self.table.slots.get(&v).copied()
    }
}

impl fmt::Display for SparseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, list) in self.table.order.iter().zip(&self.table.lists) {
            writeln!(f, "{v} {list:?}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// WeightedSparseGraph
// ---------------------------------------------------------------------------

/// Weighted graph backed by per-vertex `(neighbour, weight)` lists.
#[derive(Clone, Debug, Default)]
pub struct WeightedSparseGraph {
    table: Table<(Vertex, f64)>,
    edges: usize,
}

impl WeightedSparseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `v` as an isolated vertex if it does not exist yet.
    pub fn add_vertex(&mut self, v: Vertex) {
        self.table.slot_or_insert(v);
    }
}

impl Graph for WeightedSparseGraph {
    fn vertex_count(&self) -> usize {
        self.table.order.len()
    }

    fn contains(&self, v: Vertex) -> bool {
        self.table.slots.contains_key(&v)
    }

    fn add_edge(&mut self, a: Vertex, b: Vertex) {
        if self.has_edge(a, b) {
            return;
        }
        self.add_weighted_edge(a, b, 1.0);
    }

    fn has_edge(&self, a: Vertex, b: Vertex) -> bool {
        self.weight(a, b) != NO_EDGE && a != b
    }

    fn remove_edge(&mut self, a: Vertex, b: Vertex) -> Result<(), GraphError> {
        if !self.has_edge(a, b) {
            return Err(GraphError::MissingEdge { a, b });
        }
        for (from, to) in [(a, b), (b, a)] {
            if let Some(list) = self.table.list_mut(from) {
                list.retain(|&(n, _)| n != to);
            }
        }
        self.edges -= 1;
        Ok(())
    }

    fn neighbors_into(&self, v: Vertex, buf: &mut Vec<Vertex>) {
        buf.extend(self.table.expect_list(v).iter().map(|&(n, _)| n));
    }

    fn degree(&self, v: Vertex) -> usize {
        self.table.expect_list(v).len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn vertices(&self) -> Vec<Vertex> {
        self.table.order.clone()
    }

    fn slot(&self, v: Vertex) -> Option<usize> {
        self.table.slots.get(&v).copied()
    }
}

impl WeightedGraph for WeightedSparseGraph {
    fn add_weighted_edge(&mut self, a: Vertex, b: Vertex, w: f64) {
        check_weight(w);
        let sa = self.table.slot_or_insert(a);
        let sb = self.table.slot_or_insert(b);
        if a == b {
            return;
        }
        if let Some(entry) = self.table.lists[sa].iter_mut().find(|(n, _)| *n == b) {
            entry.1 = w;
            if let Some(back) = self.table.lists[sb].iter_mut().find(|(n, _)| *n == a) {
                back.1 = w;
            }
            return;
        }
        self.table.lists[sa].push((b, w));
        self.table.lists[sb].push((a, w));
        self.edges += 1;
    }

    fn weight(&self, a: Vertex, b: Vertex) -> f64 {
        if a == b {
            return 0.0;
        }
        self.table
            .list(a)
            .and_then(|l| l.iter().find(|&&(n, _)| n == b))
            .map_or(NO_EDGE, |&(_, w)| w)
    }

    fn weighted_neighbors_into(&self, v: Vertex, buf: &mut Vec<(Vertex, f64)>) {
        buf.extend_from_slice(self.table.expect_list(v));
    }
}

impl fmt::Display for WeightedSparseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, list) in self.table.order.iter().zip(&self.table.lists) {
            writeln!(f, "{v} {list:?}")?;
        }
        Ok(())
    }
}
