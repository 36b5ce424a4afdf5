//! Reachability flood fill.

use labyrinth_core::{Graph, Stack, Vertex};

use crate::PathFinder;
use crate::finder::NO_PARENT;

impl PathFinder {
    /// Return every vertex connected to `start`, `start` first, in discovery
    /// order.
    ///
    /// Returns an empty list if `start` is not in the graph.
    pub fn reachable<G: Graph>(&mut self, graph: &G, start: Vertex) -> Vec<Vertex> {
        let mut result = Vec::new();
        let Some(start_slot) = graph.slot(start) else {
            return result;
        };
        let cur_gen = self.begin(graph);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let mut stack = Stack::new();
        stack.push((start, start_slot));
        self.finalize(start_slot, start, NO_PARENT, 0, cur_gen);
        result.push(start);

        while let Ok((v, s)) = stack.pop() {
            nbuf.clear();
            graph.neighbors_into(v, &mut nbuf);

            for &n in nbuf.iter() {
                let Some(ns) = graph.slot(n) else {
                    continue;
                };
                if !self.is_finalized(ns, cur_gen) {
                    let depth = self.nodes[s].cost + 1;
                    self.finalize(ns, n, s, depth, cur_gen);
                    stack.push((n, ns));
                    result.push(n);
                }
            }
        }

        self.nbuf = nbuf;
        result
    }
}
