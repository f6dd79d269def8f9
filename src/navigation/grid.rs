//! # Lattice Grid
//!
//! Quantizes arena coordinates onto a fixed-step lattice and defines which
//! cells the pathfinder may jump to from a given cell.

use crate::config::{ARENA_HEIGHT, ARENA_WIDTH, GRID_STEP, NEIGHBOR_MULTIPLIERS};
use crate::game::{Direction, Position};

/// The movement graph over the arena.
///
/// A cell is connected to the cells 2, 3 and 4 steps away along each axis.
/// Jumps skip the cells in between, so an obstacle thinner than a jump can be
/// stepped over.
///
/// # Examples
///
/// ```
/// use coinrush::{LatticeGrid, Position};
///
/// let grid = LatticeGrid::arena();
/// assert_eq!(grid.snap(Position::new(417, 303)), Position::new(415, 300));
/// assert_eq!(grid.neighbors(Position::new(400, 300)).count(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeGrid {
    step: i32,
    width: i32,
    height: i32,
}

impl LatticeGrid {
    /// Creates a grid with the given step over `[0, width) x [0, height)`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not positive.
    pub fn new(step: i32, width: i32, height: i32) -> Self {
        assert!(step > 0, "lattice step must be positive, got {step}");
        Self {
            step,
            width,
            height,
        }
    }

    /// The reference 800x600 arena with a 5 pixel step.
    pub fn arena() -> Self {
        Self::new(GRID_STEP, ARENA_WIDTH, ARENA_HEIGHT)
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Snaps a point down onto the lattice.
    ///
    /// Uses floor division, so negative coordinates round toward negative
    /// infinity rather than toward zero. Results past `i32::MIN` saturate;
    /// they lie outside the arena either way.
    pub fn snap(&self, point: Position) -> Position {
        Position::new(
            point.x.div_euclid(self.step).saturating_mul(self.step),
            point.y.div_euclid(self.step).saturating_mul(self.step),
        )
    }

    /// Tests whether a point lies inside the arena bounds.
    pub fn contains(&self, point: Position) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    /// Candidate jumps from `cell`, unfiltered.
    ///
    /// Order is fixed: shorter jumps first, and within one jump length
    /// left, right, up, down. The pathfinder relies on this order for
    /// deterministic tie-breaking between equally short paths. Jumps that
    /// would overflow `i32` are left out.
    pub fn neighbors(&self, cell: Position) -> impl Iterator<Item = Position> {
        let step = self.step;
        NEIGHBOR_MULTIPLIERS.into_iter().flat_map(move |multiplier| {
            Direction::ALL.into_iter().filter_map(move |direction| {
                let distance = multiplier.checked_mul(step)?;
                let delta = direction.to_delta();
                Some(Position::new(
                    cell.x.checked_add(delta.x.checked_mul(distance)?)?,
                    cell.y.checked_add(delta.y.checked_mul(distance)?)?,
                ))
            })
        })
    }
}

impl Default for LatticeGrid {
    fn default() -> Self {
        Self::arena()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_on_lattice_is_identity() {
        let grid = LatticeGrid::arena();
        let cell = Position::new(400, 300);
        assert_eq!(grid.snap(cell), cell);
    }

    #[test]
    fn test_snap_floors() {
        let grid = LatticeGrid::arena();
        assert_eq!(grid.snap(Position::new(404, 299)), Position::new(400, 295));
        assert_eq!(grid.snap(Position::new(-1, -6)), Position::new(-5, -10));
    }

    #[test]
    fn test_contains_bounds() {
        let grid = LatticeGrid::arena();
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(799, 599)));
        assert!(!grid.contains(Position::new(800, 300)));
        assert!(!grid.contains(Position::new(400, 600)));
        assert!(!grid.contains(Position::new(-5, 10)));
    }

    #[test]
    fn test_neighbor_order() {
        let grid = LatticeGrid::arena();
        let neighbors: Vec<Position> = grid.neighbors(Position::new(100, 100)).collect();
        let expected: Vec<Position> = [
            (90, 100),
            (110, 100),
            (100, 90),
            (100, 110),
            (85, 100),
            (115, 100),
            (100, 85),
            (100, 115),
            (80, 100),
            (120, 100),
            (100, 80),
            (100, 120),
        ]
        .into_iter()
        .map(Position::from)
        .collect();
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn test_neighbors_never_diagonal() {
        let grid = LatticeGrid::new(10, 1000, 1000);
        let cell = Position::new(500, 500);
        for neighbor in grid.neighbors(cell) {
            let delta = neighbor - cell;
            assert!(delta.x == 0 || delta.y == 0);
            assert!(delta != Position::origin());
        }
    }

    #[test]
    #[should_panic(expected = "lattice step must be positive")]
    fn test_zero_step_rejected() {
        let _ = LatticeGrid::new(0, 10, 10);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let grid = LatticeGrid::arena();
        assert_eq!(
            grid.snap(Position::new(i32::MIN, i32::MAX)),
            Position::new(i32::MIN, i32::MAX - i32::MAX.rem_euclid(5))
        );

        // Rightward jumps past i32::MAX are dropped
        let edge = Position::new(i32::MAX - 5, 0);
        let neighbors: Vec<_> = grid.neighbors(edge).collect();
        assert_eq!(neighbors.len(), 9);
        assert!(neighbors.iter().all(|n| n.x <= edge.x));
    }
}
