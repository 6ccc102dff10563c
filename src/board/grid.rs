//! Terrain grid.
//!
//! Stores land/sea, fog and city presence for every cell in row-major order.
//! Out-of-bounds indexing through `Index<Coord>` panics: callers are expected
//! to check `in_bounds` or use `get` when a coordinate may fall off the map.

use std::ops::{Index, IndexMut};

use super::coord::Coord;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub is_land: bool,
    pub is_fog: bool,
    pub has_city: bool,
}

impl Cell {
    /// An unexplored sea cell, the state of every cell in a fresh grid.
    pub const fn fogged_sea() -> Self {
        Cell {
            is_land: false,
            is_fog: true,
            has_city: false,
        }
    }
}

/// The terrain field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of fogged sea.
    pub fn new(rows: usize, columns: usize) -> Self {
        Grid {
            rows,
            columns,
            cells: vec![Cell::fogged_sea(); rows * columns],
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.rows
            && (coord.y as usize) < self.columns
    }

    #[inline]
    fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.x as usize * self.columns + coord.y as usize)
        } else {
            None
        }
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index_of(coord).map(move |i| &mut self.cells[i])
    }

    /// True for in-bounds land cells; false for sea and off-grid.
    pub fn is_land(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(|c| c.is_land)
    }

    /// Iterates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let columns = self.columns;
        (0..self.rows * columns).map(move |i| Coord::new((i / columns) as i32, (i % columns) as i32))
    }

    /// Iterates coordinates together with their cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.coords().zip(self.cells.iter())
    }

    /// Applies `f` to every cell. Used by map generation and test fixtures.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(Coord, &mut Cell)) {
        let columns = self.columns;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            f(Coord::new((i / columns) as i32, (i % columns) as i32), cell);
        }
    }

    /// In-bounds 8-neighbours of `coord` in scan order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        coord.neighbors().filter(move |c| self.in_bounds(*c))
    }

    /// Clears fog on every in-bounds cell within Chebyshev distance `radius`.
    /// Fog never returns once cleared, so repeated calls are idempotent.
    pub fn reveal_around(&mut self, coord: Coord, radius: i32) {
        for x in coord.x - radius..=coord.x + radius {
            for y in coord.y - radius..=coord.y + radius {
                if let Some(cell) = self.get_mut(Coord::new(x, y)) {
                    cell.is_fog = false;
                }
            }
        }
    }

    /// Reports whether any cell in the 3x3 block around `coord` holds a city.
    /// With `exclude_self` the centre cell is ignored.
    pub fn has_neighboring_city(&self, coord: Coord, exclude_self: bool) -> bool {
        for x in coord.x - 1..=coord.x + 1 {
            for y in coord.y - 1..=coord.y + 1 {
                let c = Coord::new(x, y);
                if exclude_self && c == coord {
                    continue;
                }
                if self.get(c).is_some_and(|cell| cell.has_city) {
                    return true;
                }
            }
        }
        false
    }

    /// True if a sea cell (without a city) touches `coord`.
    pub fn is_next_to_sea(&self, coord: Coord) -> bool {
        for x in coord.x - 1..=coord.x + 1 {
            for y in coord.y - 1..=coord.y + 1 {
                if let Some(cell) = self.get(Coord::new(x, y)) {
                    if !cell.has_city && !cell.is_land {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Number of land cells.
    pub fn land_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_land).count()
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Cell {
        match self.index_of(coord) {
            Some(i) => &self.cells[i],
            None => panic!(
                "coordinate {coord} outside {}x{} grid",
                self.rows, self.columns
            ),
        }
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut Cell {
        match self.index_of(coord) {
            Some(i) => &mut self.cells[i],
            None => panic!(
                "coordinate {coord} outside {}x{} grid",
                self.rows, self.columns
            ),
        }
    }
}
