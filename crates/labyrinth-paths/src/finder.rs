use std::cmp::Ordering;

use labyrinth_core::{Graph, Vertex};

/// An ordered list of vertices from start to goal, both included.
pub type Path = Vec<Vertex>;

/// Vertices in the order a search finalized them.
pub type Trace = Vec<Vertex>;

/// Result of a traced search, bundled for replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// The path found, or `None` if the goal is unreachable.
    pub path: Option<Path>,
    pub trace: Trace,
}

impl Outcome {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

impl From<(Option<Path>, Trace)> for Outcome {
    fn from((path, trace): (Option<Path>, Trace)) -> Self {
        Self { path, trace }
    }
}

impl From<Outcome> for (Option<Path>, Trace) {
    fn from(o: Outcome) -> Self {
        (o.path, o.trace)
    }
}

// ---------------------------------------------------------------------------
// Per-vertex search state
// ---------------------------------------------------------------------------

/// Parent marker for the start vertex.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Search state of one vertex, stored at the vertex's [`Graph::slot`]. A node
/// whose `generation` differs from the current search is unvisited.
#[derive(Clone, Default)]
pub(crate) struct Node {
    pub(crate) vertex: Vertex,
    pub(crate) cost: usize,
    // slot of the vertex this one was reached from
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) finalized: bool,
}

/// Frontier entry for the priority-queue searches.
///
/// Ordered so that `BinaryHeap` pops the smallest `priority` first and, among
/// equal priorities, the entry pushed first.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) vertex: Vertex,
    pub(crate) slot: usize,
    pub(crate) parent: usize,
    pub(crate) cost: usize,
    pub(crate) priority: usize,
    pub(crate) seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Runs path searches over any [`Graph`].
///
/// `PathFinder` owns its per-vertex tables and scratch buffers so that
/// repeated searches do not reallocate once warmed up. The graph is only
/// borrowed for reading; one finder can serve many graphs.
#[derive(Default)]
pub struct PathFinder {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Vertex>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Start a new search over `graph` and return its generation.
    ///
    /// Grows the node table to the graph's vertex count and bumps the
    /// generation counter, which lazily invalidates every node.
    pub(crate) fn begin<G: Graph>(&mut self, graph: &G) -> u32 {
        let n = graph.vertex_count();
        if self.nodes.len() < n {
            self.nodes.resize(n, Node::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Counter wrapped: stale nodes could alias the new generation.
            self.nodes.fill(Node::default());
            self.generation = 1;
        }
        self.generation
    }

    #[inline]
    pub(crate) fn is_finalized(&self, slot: usize, generation: u32) -> bool {
        let n = &self.nodes[slot];
        n.generation == generation && n.finalized
    }

    /// Mark vertex `v` at `slot` as finalized, reached from the node at
    /// `parent` with `cost`.
    #[inline]
    pub(crate) fn finalize(
        &mut self,
        slot: usize,
        v: Vertex,
        parent: usize,
        cost: usize,
        generation: u32,
    ) {
        let n = &mut self.nodes[slot];
        n.vertex = v;
        n.generation = generation;
        n.cost = cost;
        n.parent = parent;
        n.finalized = true;
    }

    /// Rebuild the path to the finalized node at `goal` from parent links.
    pub(crate) fn path_to(&self, goal: usize) -> Path {
        let mut path = Vec::new();
        let mut s = goal;
        while s != NO_PARENT {
            let n = &self.nodes[s];
            path.push(n.vertex);
            s = n.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::{DenseGraph, SparseGraph};
    use std::collections::BinaryHeap;

    fn entry(vertex: Vertex, priority: usize, seq: u64) -> Entry {
        Entry {
            vertex,
            slot: vertex,
            parent: NO_PARENT,
            cost: 0,
            priority,
            seq,
        }
    }

    #[test]
    fn heap_pops_lowest_priority_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(1, 3, 0));
        heap.push(entry(2, 1, 1));
        heap.push(entry(3, 1, 2));
        heap.push(entry(4, 2, 3));
        let order: Vec<Vertex> = std::iter::from_fn(|| heap.pop().map(|e| e.vertex)).collect();
        assert_eq!(order, vec![2, 3, 4, 1]);
    }

    #[test]
    fn begin_grows_and_bumps_generation() {
        let mut pf = PathFinder::new();
        let g1 = pf.begin(&DenseGraph::new(4));
        assert_eq!(pf.nodes.len(), 4);
        let g2 = pf.begin(&DenseGraph::new(2));
        assert_eq!(pf.nodes.len(), 4);
        assert_ne!(g1, g2);
    }

    #[test]
    fn table_follows_vertex_count_not_ids() {
        let mut g = SparseGraph::new();
        g.add_edge(0, usize::MAX / 2);
        g.add_edge(usize::MAX / 2, usize::MAX);
        let mut pf = PathFinder::new();
        pf.begin(&g);
        assert_eq!(pf.nodes.len(), 3);
    }

    #[test]
    fn generation_wrap_resets_nodes() {
        let mut pf = PathFinder::new();
        let g = DenseGraph::new(3);
        pf.begin(&g);
        pf.finalize(1, 1, NO_PARENT, 0, pf.generation);
        pf.generation = u32::MAX;
        let cur = pf.begin(&g);
        assert_eq!(cur, 1);
        assert!(!pf.is_finalized(1, cur));
    }

    #[test]
    fn path_follows_parents() {
        let mut pf = PathFinder::new();
        let cur = pf.begin(&DenseGraph::new(5));
        pf.finalize(4, 40, NO_PARENT, 0, cur);
        pf.finalize(2, 20, 4, 1, cur);
        pf.finalize(0, 7, 2, 2, cur);
        assert_eq!(pf.path_to(0), vec![40, 20, 7]);
    }

    #[test]
    fn outcome_conversions() {
        let o = Outcome::from((Some(vec![0, 1]), vec![0, 1]));
        assert!(o.found());
        let (path, trace): (Option<Path>, Trace) = o.into();
        assert_eq!(path, Some(vec![0, 1]));
        assert_eq!(trace, vec![0, 1]);
        assert!(!Outcome::default().found());
    }
}
