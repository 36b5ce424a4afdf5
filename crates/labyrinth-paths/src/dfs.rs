//! Stack-based depth-first search.

use labyrinth_core::{Graph, Stack, Vertex};

use crate::PathFinder;
use crate::finder::{NO_PARENT, Path, Trace};

impl PathFinder {
    /// Find some path from `start` to `goal` by depth-first search.
    ///
    /// The frontier is last-in, first-out, so the result depends on
    /// neighbour order and is not necessarily shortest. Returns `None` if
    /// `goal` is unreachable or either vertex is not in the graph.
    pub fn dfs<G: Graph>(&mut self, graph: &G, start: Vertex, goal: Vertex) -> Option<Path> {
        self.depth_first(graph, start, goal, None)
    }

    /// Like [`dfs`](Self::dfs), also returning the vertices in the order
    /// they were visited.
    pub fn dfs_with_trace<G: Graph>(
        &mut self,
        graph: &G,
        start: Vertex,
        goal: Vertex,
    ) -> (Option<Path>, Trace) {
        let mut trace = Vec::new();
        let path = self.depth_first(graph, start, goal, Some(&mut trace));
        (path, trace)
    }

    fn depth_first<G: Graph>(
        &mut self,
        graph: &G,
        start: Vertex,
        goal: Vertex,
        mut trace: Option<&mut Trace>,
    ) -> Option<Path> {
        let (Some(start_slot), Some(goal_slot)) = (graph.slot(start), graph.slot(goal)) else {
            return None;
        };
        let cur_gen = self.begin(graph);

        // Entries are (vertex, its slot, slot it was discovered from).
        let mut frontier: Stack<(Vertex, usize, usize)> = Stack::new();
        frontier.push((start, start_slot, NO_PARENT));

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut visited = 0usize;

        let found = loop {
            let Ok((v, s, parent)) = frontier.pop() else {
                break false;
            };
            if self.is_finalized(s, cur_gen) {
                continue;
            }

            let depth = if parent == NO_PARENT {
                0
            } else {
                self.nodes[parent].cost + 1
            };
            self.finalize(s, v, parent, depth, cur_gen);
            visited += 1;
            if let Some(t) = trace.as_deref_mut() {
                t.push(v);
            }

            if s == goal_slot {
                break true;
            }

            nbuf.clear();
            graph.neighbors_into(v, &mut nbuf);
            for &n in nbuf.iter() {
                let Some(ns) = graph.slot(n) else {
                    continue;
                };
                if !self.is_finalized(ns, cur_gen) {
                    frontier.push((n, ns, s));
                }
            }
        };

        self.nbuf = nbuf;
        log::debug!("dfs {start} -> {goal}: found={found}, {visited} vertices visited");
        found.then(|| self.path_to(goal_slot))
    }
}

#[cfg(test)]
mod tests {
    use crate::PathFinder;
    use crate::testutil::{assert_valid_path, open_grid};
    use labyrinth_core::{Graph, SparseGraph};

    #[test]
    fn lifo_exploration_order() {
        let g = open_grid(3, 3);
        let mut pf = PathFinder::new();
        let (path, trace) = pf.dfs_with_trace(&g, 0, 2);
        assert_eq!(trace, vec![0, 3, 6, 7, 8, 5, 4, 1, 2]);
        assert_eq!(path, Some(vec![0, 3, 6, 7, 8, 5, 4, 1, 2]));
    }

    #[test]
    fn path_is_valid() {
        let g = open_grid(5, 4);
        let mut pf = PathFinder::new();
        for goal in 0..g.vertex_count() {
            let path = pf.dfs(&g, 7, goal).unwrap();
            assert_valid_path(&g, &path, 7, goal);
        }
    }

    #[test]
    fn trivial_path() {
        let g = open_grid(1, 1);
        let mut pf = PathFinder::new();
        assert_eq!(pf.dfs_with_trace(&g, 0, 0), (Some(vec![0]), vec![0]));
    }

    #[test]
    fn unreachable_goal() {
        let mut g = SparseGraph::new();
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(10, 11);
        let mut pf = PathFinder::new();
        let (path, trace) = pf.dfs_with_trace(&g, 0, 11);
        assert_eq!(path, None);
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn huge_vertex_ids() {
        let far = usize::MAX / 2;
        let mut g = SparseGraph::new();
        g.add_edge(0, far);
        g.add_edge(far, usize::MAX);
        g.add_edge(0, 3);
        let mut pf = PathFinder::new();
        assert_eq!(pf.dfs(&g, 0, usize::MAX), Some(vec![0, far, usize::MAX]));
        assert_eq!(pf.dfs(&g, usize::MAX, 3), Some(vec![usize::MAX, far, 0, 3]));
        assert_eq!(pf.nodes.len(), 4);
    }

    #[test]
    fn unknown_endpoints() {
        let mut g = SparseGraph::new();
        g.add_edge(0, 1);
        let mut pf = PathFinder::new();
        assert_eq!(pf.dfs(&g, 0, 5), None);
        assert_eq!(pf.dfs_with_trace(&g, 7, 0), (None, vec![]));
    }
}
