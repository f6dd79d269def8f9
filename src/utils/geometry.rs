//! # Arena Geometry
//!
//! Integer axis-aligned rectangles used for sprite bounds, collision checks
//! and obstacle footprints.

use crate::game::Position;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in arena pixel space.
///
/// The rectangle covers `x..x + w` horizontally and `y..y + h` vertically,
/// so the right and bottom edges are exclusive.
///
/// # Examples
///
/// ```
/// use coinrush::{Position, Rect};
///
/// let rect = Rect::from_center(Position::new(100, 100), 50, 50);
/// assert_eq!(rect.left(), 75);
/// assert!(rect.contains_point(Position::new(75, 75)));
/// assert!(!rect.contains_point(Position::new(125, 100)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Creates a rectangle of the given size centered on `center`.
    pub fn from_center(center: Position, w: i32, h: i32) -> Self {
        Self::new(center.x - w / 2, center.y - h / 2, w, h)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Returns the center point, rounding toward the top-left for odd sizes.
    pub fn center(&self) -> Position {
        Position::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Returns the half-width and half-height.
    pub fn half_extents(&self) -> (i32, i32) {
        (self.w / 2, self.h / 2)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Tests whether a point lies inside the rectangle.
    pub fn contains_point(&self, point: Position) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Tests whether two rectangles overlap. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && self.top() < other.bottom()
            && self.right() > other.left()
            && self.bottom() > other.top()
    }

    /// Grows the rectangle by `dx` and `dy` in total, keeping it centered.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinrush::Rect;
    ///
    /// let grown = Rect::new(10, 10, 20, 20).inflate(10, 4);
    /// assert_eq!(grown, Rect::new(5, 8, 30, 24));
    /// ```
    pub fn inflate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x - dx / 2, self.y - dy / 2, self.w + dx, self.h + dy)
    }

    /// Returns the rectangle moved by the given offsets.
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Pushes the rectangle back inside `[0, width) x [0, height)`.
    pub fn clamp_inside(&self, width: i32, height: i32) -> Rect {
        let mut rect = *self;
        if rect.left() < 0 {
            rect.x = 0;
        }
        if rect.right() > width {
            rect.x = width - rect.w;
        }
        if rect.top() < 0 {
            rect.y = 0;
        }
        if rect.bottom() > height {
            rect.y = height - rect.h;
        }
        rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_and_back() {
        let rect = Rect::from_center(Position::new(400, 300), 30, 30);
        assert_eq!(rect, Rect::new(385, 285, 30, 30));
        assert_eq!(rect.center(), Position::new(400, 300));
        assert_eq!(rect.half_extents(), (15, 15));
    }

    #[test]
    fn test_contains_point_is_half_open() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.contains_point(Position::new(0, 0)));
        assert!(rect.contains_point(Position::new(9, 9)));
        assert!(!rect.contains_point(Position::new(10, 5)));
        assert!(!rect.contains_point(Position::new(5, 10)));
        assert!(!rect.contains_point(Position::new(-1, 5)));
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
        // Shared edge only
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 0, 0, 10)));
        assert!(!a.intersects(&Rect::new(50, 50, 5, 5)));
    }

    #[test]
    fn test_clamp_inside() {
        let rect = Rect::new(-5, 590, 30, 30).clamp_inside(800, 600);
        assert_eq!(rect, Rect::new(0, 570, 30, 30));

        let rect = Rect::new(790, -3, 30, 30).clamp_inside(800, 600);
        assert_eq!(rect, Rect::new(770, 0, 30, 30));
    }

    #[test]
    fn test_translate() {
        assert_eq!(Rect::new(1, 2, 3, 4).translate(5, -2), Rect::new(6, 0, 3, 4));
    }
}
