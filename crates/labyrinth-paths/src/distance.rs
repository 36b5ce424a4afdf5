use labyrinth_core::{GridSize, Vertex};

/// Manhattan (L1) distance between the cells of vertices `a` and `b`.
#[inline]
pub fn manhattan(grid: GridSize, a: Vertex, b: Vertex) -> usize {
    let (ra, ca) = grid.coords(a);
    let (rb, cb) = grid.coords(b);
    ra.abs_diff(rb) + ca.abs_diff(cb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_rows_and_columns() {
        let g = GridSize::new(4, 3);
        assert_eq!(manhattan(g, 0, 0), 0);
        assert_eq!(manhattan(g, 0, 11), 5);
        assert_eq!(manhattan(g, 3, 8), 5);
        assert_eq!(manhattan(g, 5, 6), 1);
        assert_eq!(manhattan(g, 6, 5), 1);
    }
}
