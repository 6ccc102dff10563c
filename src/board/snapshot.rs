//! Read-only symbol snapshots of the board for renderers.
//!
//! One `String` per row, one character per cell: `?` fog (only when fog is
//! shown), `C` city, `L` land, `S` sea. Unit overlays use each unit type's
//! symbol.

use super::grid::Cell;
use super::state::Board;

pub const FOG_SYMBOL: char = '?';
pub const CITY_SYMBOL: char = 'C';
pub const LAND_SYMBOL: char = 'L';
pub const SEA_SYMBOL: char = 'S';

fn cell_symbol(cell: &Cell, show_fog: bool) -> char {
    if show_fog && cell.is_fog {
        FOG_SYMBOL
    } else if cell.has_city {
        CITY_SYMBOL
    } else if cell.is_land {
        LAND_SYMBOL
    } else {
        SEA_SYMBOL
    }
}

fn terrain_rows(board: &Board, show_fog: bool) -> Vec<Vec<char>> {
    let grid = &board.grid;
    let mut rows = vec![Vec::with_capacity(grid.columns()); grid.rows()];
    for (coord, cell) in grid.iter() {
        rows[coord.x as usize].push(cell_symbol(cell, show_fog));
    }
    rows
}

/// Terrain-only snapshot.
pub fn snapshot(board: &Board, show_fog: bool) -> Vec<String> {
    terrain_rows(board, show_fog)
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect()
}

/// Terrain snapshot with unit symbols drawn over visible cells. When several
/// units share a cell the one created last is shown.
pub fn snapshot_with_units(board: &Board, show_fog: bool) -> Vec<String> {
    let mut rows = terrain_rows(board, show_fog);
    for unit in &board.units {
        let Some(cell) = board.grid.get(unit.position) else {
            continue;
        };
        if !show_fog || !cell.is_fog {
            rows[unit.position.x as usize][unit.position.y as usize] = unit.symbol();
        }
    }
    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, Player, UnitType};

    #[test]
    fn fog_hides_everything_on_fresh_board() {
        let board = Board::new(2, 3);
        assert_eq!(snapshot(&board, true), vec!["???", "???"]);
        assert_eq!(snapshot(&board, false), vec!["SSS", "SSS"]);
    }

    #[test]
    fn terrain_symbols() {
        let mut board = Board::new(1, 3);
        board.grid[Coord::new(0, 1)].is_land = true;
        board.grid[Coord::new(0, 2)].is_land = true;
        board.add_city(Coord::new(0, 2));
        assert_eq!(snapshot(&board, false), vec!["SLC"]);
    }

    #[test]
    fn units_only_drawn_when_visible() {
        let mut board = Board::new(1, 4);
        board.grid.for_each_mut(|_, c| c.is_land = true);
        board.spawn_unit(UnitType::Tank, Player::One, Coord::new(0, 0));
        board.spawn_unit(UnitType::Battleship, Player::Two, Coord::new(0, 3));
        board.grid.reveal_around(Coord::new(0, 0), 0);

        assert_eq!(snapshot_with_units(&board, true), vec!["T???"]);
        assert_eq!(snapshot_with_units(&board, false), vec!["TLLL"]);
    }
}
