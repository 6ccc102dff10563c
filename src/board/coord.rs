//! Grid coordinates and neighbour kernels.
//!
//! A `Coord` addresses a single cell: `x` is the row and `y` the column.
//! Both are signed so that neighbour offsets can be applied before the
//! result is bounds-checked against a grid.

use serde::{Deserialize, Serialize};

/// The 8-neighbourhood, scanned row by row (rows -1..=1, columns -1..=1)
/// with the centre skipped. All "first neighbour" selections use this order.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Step kernel used by the pathfinder: N, S, W, E, SE and a stay-in-place step.
pub const PATH_KERNEL: [(i32, i32); 6] = [(-1, 0), (1, 0), (0, -1), (0, 1), (1, 1), (0, 0)];

/// A cell position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index.
    pub x: i32,
    /// Column index.
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Returns the coordinate shifted by `(dx, dy)`. May leave the grid.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Coord::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev (king-move) distance.
    pub fn chebyshev(self, other: Coord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Iterates the 8 surrounding coordinates in scan order, without bounds checks.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_skip_centre_in_scan_order() {
        let n: Vec<Coord> = Coord::new(5, 5).neighbors().collect();
        assert_eq!(n.len(), 8);
        assert_eq!(n[0], Coord::new(4, 4));
        assert_eq!(n[3], Coord::new(5, 4));
        assert_eq!(n[7], Coord::new(6, 6));
        assert!(!n.contains(&Coord::new(5, 5)));
    }

    #[test]
    fn chebyshev_distance() {
        assert_eq!(Coord::new(0, 0).chebyshev(Coord::new(2, -3)), 3);
        assert_eq!(Coord::new(4, 4).chebyshev(Coord::new(4, 4)), 0);
    }

    #[test]
    fn kernel_ends_with_self_step() {
        assert_eq!(PATH_KERNEL[5], (0, 0));
        assert_eq!(PATH_KERNEL[4], (1, 1));
    }
}
