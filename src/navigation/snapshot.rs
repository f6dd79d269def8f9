//! # Obstacle Snapshot
//!
//! Point-in-time copy of every footprint the pathfinder must route around.

use crate::game::Position;
use crate::utils::Rect;

/// Obstacle and hazard footprints frozen for the duration of one search.
///
/// The snapshot owns its rectangles, so a search running on another thread
/// never observes arena changes made after it was launched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleSnapshot {
    obstacles: Vec<Rect>,
    hazards: Vec<Rect>,
}

impl ObstacleSnapshot {
    /// Creates a snapshot from obstacle and hazard footprints.
    pub fn new(obstacles: Vec<Rect>, hazards: Vec<Rect>) -> Self {
        Self { obstacles, hazards }
    }

    /// A snapshot with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    pub fn hazards(&self) -> &[Rect] {
        &self.hazards
    }

    /// Tests whether `point` falls inside any obstacle or hazard footprint.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinrush::{ObstacleSnapshot, Position, Rect};
    ///
    /// let snapshot = ObstacleSnapshot::new(vec![Rect::new(0, 0, 10, 10)], vec![]);
    /// assert!(snapshot.blocks(Position::new(5, 5)));
    /// assert!(!snapshot.blocks(Position::new(10, 5)));
    /// ```
    pub fn blocks(&self, point: Position) -> bool {
        self.obstacles
            .iter()
            .chain(self.hazards.iter())
            .any(|footprint| footprint.contains_point(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_blocks_nothing() {
        let snapshot = ObstacleSnapshot::empty();
        assert!(!snapshot.blocks(Position::new(0, 0)));
        assert!(snapshot.obstacles().is_empty());
        assert!(snapshot.hazards().is_empty());
    }

    #[test]
    fn test_hazards_block_like_obstacles() {
        let snapshot = ObstacleSnapshot::new(
            vec![Rect::new(0, 0, 10, 10)],
            vec![Rect::new(100, 100, 30, 30)],
        );
        assert!(snapshot.blocks(Position::new(0, 9)));
        assert!(snapshot.blocks(Position::new(129, 100)));
        assert!(!snapshot.blocks(Position::new(130, 100)));
        assert!(!snapshot.blocks(Position::new(50, 50)));
    }
}
