//! # Breadth-First Pathfinder
//!
//! Shortest lattice path, by hop count, from a start point to a snapped goal.

use crate::game::Position;
use crate::navigation::{LatticeGrid, ObstacleSnapshot};
use std::collections::{HashMap, HashSet, VecDeque};

/// Finds the shortest sequence of lattice jumps from `start` to `goal`.
///
/// The goal is snapped onto the lattice first; the start is used as given.
/// The returned path runs start to goal inclusive. It is empty when the goal
/// cannot be reached, which includes a goal inside a footprint or outside the
/// arena. Unreachable is an ordinary outcome, not an error.
///
/// # Examples
///
/// ```
/// use coinrush::{find_path, LatticeGrid, ObstacleSnapshot, Position};
///
/// let grid = LatticeGrid::arena();
/// let start = Position::new(400, 300);
/// let path = find_path(&grid, start, start, &ObstacleSnapshot::empty());
/// assert_eq!(path, vec![start]);
/// ```
pub fn find_path(
    grid: &LatticeGrid,
    start: Position,
    goal: Position,
    snapshot: &ObstacleSnapshot,
) -> Vec<Position> {
    let goal = grid.snap(goal);

    let mut frontier = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut parents: HashMap<Position, Option<Position>> = HashMap::from([(start, None)]);

    while let Some(current) = frontier.pop_front() {
        if current == goal {
            break;
        }

        for neighbor in grid.neighbors(current) {
            if grid.contains(neighbor) && !visited.contains(&neighbor) && !snapshot.blocks(neighbor)
            {
                frontier.push_back(neighbor);
                visited.insert(neighbor);
                parents.insert(neighbor, Some(current));
            }
        }
    }

    reconstruct_path(&parents, goal)
}

/// Walks parent links back from `goal` and returns the path in forward order.
fn reconstruct_path(parents: &HashMap<Position, Option<Position>>, goal: Position) -> Vec<Position> {
    if !parents.contains_key(&goal) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut step = Some(goal);
    while let Some(cell) = step {
        path.push(cell);
        step = parents.get(&cell).copied().flatten();
    }
    path.reverse();
    path
}
