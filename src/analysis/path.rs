//! Shortest paths over the step kernel.
//!
//! Breadth-first search from the unit's cell toward a target, entering only
//! cells the unit type may occupy. The start cell itself is never checked, so
//! a unit standing on foreign terrain (a ship in port) can still path out.

use std::collections::{HashMap, VecDeque};

use crate::board::{Coord, Grid, UnitType, PATH_KERNEL};

/// Finds a shortest path from `start` to `target` for `unit_type`.
///
/// The returned path begins with `start` and ends with `target`. Among equal
/// length paths the one discovered first in kernel order wins.
pub fn find_path(grid: &Grid, start: Coord, target: Coord, unit_type: UnitType) -> Option<Vec<Coord>> {
    let mut parent: HashMap<Coord, Coord> = HashMap::new();
    let mut queue = VecDeque::new();
    parent.insert(start, start);
    queue.push_back(start);

    while let Some(cur) = queue.pop_front() {
        if cur == target {
            return Some(unwind(&parent, start, target));
        }
        for &(dx, dy) in PATH_KERNEL.iter() {
            let next = cur.offset(dx, dy);
            let Some(cell) = grid.get(next) else {
                continue;
            };
            if parent.contains_key(&next) || !unit_type.can_enter(cell) {
                continue;
            }
            parent.insert(next, cur);
            queue.push_back(next);
        }
    }

    None
}

fn unwind(parent: &HashMap<Coord, Coord>, start: Coord, target: Coord) -> Vec<Coord> {
    let mut path = vec![target];
    let mut cur = target;
    while cur != start {
        cur = parent[&cur];
        path.push(cur);
    }
    path.reverse();
    path
}

/// First step along `path`, i.e. the cell after the start.
pub fn next_step(path: &[Coord]) -> Option<Coord> {
    path.get(1).copied()
}
