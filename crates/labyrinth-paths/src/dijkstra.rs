use std::collections::BinaryHeap;

use labyrinth_core::{Graph, Vertex};

use crate::PathFinder;
use crate::finder::{Entry, NO_PARENT, Path, Trace};

impl PathFinder {
    /// Compute a shortest path (in edges) from `start` to `goal` using
    /// Dijkstra's algorithm with unit edge costs.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists. Among several shortest paths, ties are broken in favour of
    /// the frontier entry pushed first.
    pub fn dijkstra<G: Graph>(&mut self, graph: &G, start: Vertex, goal: Vertex) -> Option<Path> {
        self.best_first(graph, start, goal, |_| 0, None)
    }

    /// Like [`dijkstra`](Self::dijkstra), also returning the vertices in the
    /// order they were finalized.
    pub fn dijkstra_with_trace<G: Graph>(
        &mut self,
        graph: &G,
        start: Vertex,
        goal: Vertex,
    ) -> (Option<Path>, Trace) {
        let mut trace = Vec::new();
        let path = self.best_first(graph, start, goal, |_| 0, Some(&mut trace));
        (path, trace)
    }

    /// Priority-queue search keyed by `cost + estimate(v)`.
    ///
    /// With `estimate` returning 0 this is Dijkstra; with an admissible
    /// estimate of the remaining distance it is A*.
    pub(crate) fn best_first<G, H>(
        &mut self,
        graph: &G,
        start: Vertex,
        goal: Vertex,
        estimate: H,
        mut trace: Option<&mut Trace>,
    ) -> Option<Path>
    where
        G: Graph,
        H: Fn(Vertex) -> usize,
    {
        let (Some(start_slot), Some(goal_slot)) = (graph.slot(start), graph.slot(goal)) else {
            return None;
        };
        let cur_gen = self.begin(graph);

        // Record the start cost so it is never re-queued.
        {
            let node = &mut self.nodes[start_slot];
            node.generation = cur_gen;
            node.cost = 0;
            node.finalized = false;
        }

        let mut seq = 0u64;
        let mut open: BinaryHeap<Entry> = BinaryHeap::new();
        open.push(Entry {
            vertex: start,
            slot: start_slot,
            parent: NO_PARENT,
            cost: 0,
            priority: estimate(start),
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut finalized = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let (cv, cs) = (current.vertex, current.slot);

            // Skip stale entries.
            if self.is_finalized(cs, cur_gen) {
                continue;
            }

            self.finalize(cs, cv, current.parent, current.cost, cur_gen);
            finalized += 1;
            if let Some(t) = trace.as_deref_mut() {
                t.push(cv);
            }

            if cs == goal_slot {
                break 'search true;
            }

            nbuf.clear();
            graph.neighbors_into(cv, &mut nbuf);

            for &nv in nbuf.iter() {
                let Some(ns) = graph.slot(nv) else {
                    continue;
                };
                let tentative = current.cost + 1;

                let n = &mut self.nodes[ns];
                if n.generation == cur_gen {
                    if n.finalized || tentative >= n.cost {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.finalized = false;
                }
                n.cost = tentative;

                seq += 1;
                open.push(Entry {
                    vertex: nv,
                    slot: ns,
                    parent: cs,
                    cost: tentative,
                    priority: tentative + estimate(nv),
                    seq,
                });
            }
        };

        self.nbuf = nbuf;
        log::debug!("best-first {start} -> {goal}: found={found}, {finalized} vertices finalized");
        found.then(|| self.path_to(goal_slot))
    }
}

#[cfg(test)]
mod tests {
    use crate::PathFinder;
    use crate::testutil::{assert_valid_path, open_grid};
    use labyrinth_core::{DenseGraph, Graph, SparseGraph};
    use labyrinth_gen::MazeGen;

    #[test]
    fn shortest_on_open_grid() {
        let g = open_grid(4, 4);
        let mut pf = PathFinder::new();
        let path = pf.dijkstra(&g, 0, 15).unwrap();
        assert_eq!(path.len(), 7);
        assert_valid_path(&g, &path, 0, 15);
    }

    #[test]
    fn finalizes_in_cost_order_with_fifo_ties() {
        let g = open_grid(3, 3);
        let mut pf = PathFinder::new();
        let (path, trace) = pf.dijkstra_with_trace(&g, 0, 2);
        assert_eq!(path, Some(vec![0, 1, 2]));
        assert_eq!(trace, vec![0, 1, 3, 2]);

        let (path, trace) = pf.dijkstra_with_trace(&open_grid(2, 2), 0, 3);
        assert_eq!(path, Some(vec![0, 1, 3]));
        assert_eq!(trace, vec![0, 1, 2, 3]);
    }

    #[test]
    fn prefers_short_branch_over_long_detour() {
        // 0-1-2-3-4 and a shortcut 0-5-4.
        let mut g = SparseGraph::new();
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 5), (5, 4)] {
            g.add_edge(a, b);
        }
        let mut pf = PathFinder::new();
        assert_eq!(pf.dijkstra(&g, 0, 4), Some(vec![0, 5, 4]));
        assert_eq!(pf.dfs(&g, 0, 4).map(|p| p.len()), Some(3));
    }

    #[test]
    fn trace_has_no_duplicates() {
        let g = open_grid(6, 5);
        let mut pf = PathFinder::new();
        let (_, mut trace) = pf.dijkstra_with_trace(&g, 0, 29);
        let len = trace.len();
        trace.sort_unstable();
        trace.dedup();
        assert_eq!(trace.len(), len);
    }

    #[test]
    fn exhausts_disconnected_graph() {
        let mut g = DenseGraph::new(4);
        g.add_edge(0, 1);
        g.add_edge(2, 3);
        let mut pf = PathFinder::new();
        let (path, trace) = pf.dijkstra_with_trace(&g, 0, 3);
        assert_eq!(path, None);
        assert_eq!(trace, vec![0, 1]);
        assert_eq!(g.vertex_count(), 4);
    }

    #[test]
    fn repeated_runs_agree() {
        let maze = MazeGen::seeded(23).generate(11, 8).unwrap();
        let goal = maze.vertex_count() - 1;
        let mut pf = PathFinder::new();
        let first = pf.dijkstra_with_trace(&maze, 0, goal);
        assert!(first.0.is_some());
        for _ in 0..3 {
            assert_eq!(pf.dijkstra_with_trace(&maze, 0, goal), first);
        }
        assert_eq!(PathFinder::new().dijkstra_with_trace(&maze, 0, goal), first);
    }

    #[test]
    fn finder_is_reusable_across_graphs() {
        let mut pf = PathFinder::new();
        let big = open_grid(5, 5);
        let small = open_grid(2, 1);
        assert_eq!(pf.dijkstra(&big, 0, 24).map(|p| p.len()), Some(9));
        assert_eq!(pf.dijkstra(&small, 0, 1), Some(vec![0, 1]));
        assert_eq!(pf.dijkstra(&big, 24, 0).map(|p| p.len()), Some(9));
    }
}
