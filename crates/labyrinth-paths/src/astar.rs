use labyrinth_core::{Graph, Vertex};

use crate::PathFinder;
use crate::distance::manhattan;
use crate::finder::{Path, Trace};

impl PathFinder {
    /// Compute a shortest path from `start` to `goal` using A*.
    ///
    /// On grid graphs (see [`Graph::grid`]) the estimate is the Manhattan
    /// distance between cells, which never overestimates as long as every
    /// edge joins two orthogonally adjacent cells. On graphs without a grid
    /// layout the estimate is 0 and the search behaves like
    /// [`dijkstra`](Self::dijkstra).
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists.
    pub fn astar<G: Graph>(&mut self, graph: &G, start: Vertex, goal: Vertex) -> Option<Path> {
        let grid = graph.grid();
        self.best_first(
            graph,
            start,
            goal,
            |v| grid.map_or(0, |g| manhattan(g, v, goal)),
            None,
        )
    }

    /// Like [`astar`](Self::astar), also returning the vertices in the order
    /// they were finalized.
    pub fn astar_with_trace<G: Graph>(
        &mut self,
        graph: &G,
        start: Vertex,
        goal: Vertex,
    ) -> (Option<Path>, Trace) {
        let grid = graph.grid();
        let mut trace = Vec::new();
        let path = self.best_first(
            graph,
            start,
            goal,
            |v| grid.map_or(0, |g| manhattan(g, v, goal)),
            Some(&mut trace),
        );
        (path, trace)
    }
}
