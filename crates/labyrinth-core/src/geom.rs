//! Grid geometry: [`GridSize`] and [`Direction`].
//!
//! Cells of a `width × height` grid are numbered in row-major order, so the
//! cell at `(row, col)` is vertex `row * width + col`. Every grid-aware part of
//! the workspace (maze generation, the A* heuristic, renderers) relies on this
//! single encoding.

use std::fmt;

use crate::graph::Vertex;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four orthogonal moves on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order neighbours are enumerated.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The opposite direction.
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// ---------------------------------------------------------------------------
// GridSize
// ---------------------------------------------------------------------------

/// Dimensions of a rectangular grid of cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `v` names a cell of this grid.
    #[inline]
    pub const fn contains(self, v: Vertex) -> bool {
        v < self.len()
    }

    /// Vertex index of the cell at `(row, col)`, or `None` if outside.
    #[inline]
    pub const fn index(self, row: usize, col: usize) -> Option<Vertex> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// `(row, col)` of vertex `v`.
    #[inline]
    pub const fn coords(self, v: Vertex) -> (usize, usize) {
        (v / self.width, v % self.width)
    }

    /// The vertex one step from `v` in direction `dir`, or `None` at the
    /// border.
    pub fn step(self, v: Vertex, dir: Direction) -> Option<Vertex> {
        if !self.contains(v) {
            return None;
        }
        let (row, col) = self.coords(v);
        match dir {
            Direction::Up => row.checked_sub(1).and_then(|r| self.index(r, col)),
            Direction::Down => self.index(row + 1, col),
            Direction::Left => col.checked_sub(1).and_then(|c| self.index(row, c)),
            Direction::Right => self.index(row, col + 1),
        }
    }

    /// Append the in-bounds orthogonal neighbours of `v` (up, down, left,
    /// right) to `buf`. The caller clears `buf` before calling.
    pub fn cardinal(self, v: Vertex, buf: &mut Vec<Vertex>) {
        for dir in Direction::ALL {
            if let Some(n) = self.step(v, dir) {
                buf.push(n);
            }
        }
    }

    /// Conventional entrance cell: the top-left corner.
    #[inline]
    pub const fn entrance(self) -> Vertex {
        0
    }

    /// Conventional exit cell: the bottom-right corner.
    #[inline]
    pub const fn exit(self) -> Vertex {
        self.len().saturating_sub(1)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_coords_round_trip() {
        let g = GridSize::new(4, 3);
        assert_eq!(g.len(), 12);
        for v in 0..g.len() {
            let (row, col) = g.coords(v);
            assert_eq!(g.index(row, col), Some(v));
        }
        assert_eq!(g.coords(5), (1, 1));
        assert_eq!(g.index(3, 0), None);
        assert_eq!(g.index(0, 4), None);
    }

    #[test]
    fn cardinal_order_and_bounds() {
        let g = GridSize::new(3, 3);
        let mut buf = Vec::new();
        g.cardinal(4, &mut buf);
        assert_eq!(buf, vec![1, 7, 3, 5]);

        buf.clear();
        g.cardinal(0, &mut buf);
        assert_eq!(buf, vec![3, 1]);

        buf.clear();
        g.cardinal(8, &mut buf);
        assert_eq!(buf, vec![5, 7]);
    }

    #[test]
    fn step_stops_at_border() {
        let g = GridSize::new(2, 2);
        assert_eq!(g.step(0, Direction::Up), None);
        assert_eq!(g.step(0, Direction::Left), None);
        assert_eq!(g.step(0, Direction::Right), Some(1));
        assert_eq!(g.step(0, Direction::Down), Some(2));
        assert_eq!(g.step(1, Direction::Right), None);
        assert_eq!(g.step(9, Direction::Up), None);
    }

    #[test]
    fn reverse_is_involution() {
        for d in Direction::ALL {
            assert_ne!(d.reverse(), d);
            assert_eq!(d.reverse().reverse(), d);
        }
    }

    #[test]
    fn entrance_and_exit() {
        let g = GridSize::new(5, 4);
        assert_eq!(g.entrance(), 0);
        assert_eq!(g.exit(), 19);
        assert_eq!(GridSize::new(1, 1).exit(), 0);
        assert_eq!(g.to_string(), "5x4");
    }
}
