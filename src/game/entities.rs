//! # Entities
//!
//! The player, coins, obstacles and spikes that live in the arena.

use crate::config::{
    ARENA_HEIGHT, ARENA_WIDTH, COIN_SIZE, OBSTACLE_SIZE, PLAYER_SIZE, PLAYER_SPEED, SPIKE_SIZE,
};
use crate::game::{new_entity_id, EntityId, Position};
use crate::input::MoveInput;
use crate::utils::Rect;
use serde::{Deserialize, Serialize};

/// Common behavior for anything placed in the arena.
pub trait Entity {
    /// Gets the entity's unique identifier.
    fn id(&self) -> EntityId;

    /// Gets the entity's bounding rectangle.
    fn rect(&self) -> Rect;

    /// Gets the center of the bounding rectangle.
    fn center(&self) -> Position {
        self.rect().center()
    }
}

/// The player-controlled sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub rect: Rect,
    /// Pixels moved per tick along each axis
    pub speed: i32,
}

impl Player {
    /// Creates a player centered on `center`.
    pub fn new(center: Position) -> Self {
        Self {
            id: new_entity_id(),
            rect: Rect::from_center(center, PLAYER_SIZE, PLAYER_SIZE),
            speed: PLAYER_SPEED,
        }
    }

    /// Creates a player in the middle of the reference arena.
    pub fn at_arena_center() -> Self {
        Self::new(Position::new(ARENA_WIDTH / 2, ARENA_HEIGHT / 2))
    }

    /// Moves the player for one tick.
    ///
    /// The move is clamped to the arena and then thrown away entirely if the
    /// new rectangle overlaps an obstacle. Returns whether the player moved.
    pub fn update(
        &mut self,
        input: MoveInput,
        arena_width: i32,
        arena_height: i32,
        obstacles: &[Obstacle],
    ) -> bool {
        if input.is_idle() {
            return false;
        }

        let old_rect = self.rect;
        let moved = self
            .rect
            .translate(input.dx * self.speed, input.dy * self.speed)
            .clamp_inside(arena_width, arena_height);

        if obstacles.iter().any(|obstacle| obstacle.rect.intersects(&moved)) {
            self.rect = old_rect;
            return false;
        }

        self.rect = moved;
        moved != old_rect
    }
}

impl Entity for Player {
    fn id(&self) -> EntityId {
        self.id
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

/// A collectible coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: EntityId,
    pub rect: Rect,
}

impl Coin {
    pub fn new(center: Position) -> Self {
        Self {
            id: new_entity_id(),
            rect: Rect::from_center(center, COIN_SIZE, COIN_SIZE),
        }
    }
}

impl Entity for Coin {
    fn id(&self) -> EntityId {
        self.id
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

/// A solid block the player cannot walk through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: EntityId,
    pub rect: Rect,
}

impl Obstacle {
    pub fn new(center: Position) -> Self {
        Self {
            id: new_entity_id(),
            rect: Rect::from_center(center, OBSTACLE_SIZE, OBSTACLE_SIZE),
        }
    }
}

impl Entity for Obstacle {
    fn id(&self) -> EntityId {
        self.id
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

/// A hazard that ends the session on contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    pub id: EntityId,
    pub rect: Rect,
}

impl Spike {
    pub fn new(center: Position) -> Self {
        Self {
            id: new_entity_id(),
            rect: Rect::from_center(center, SPIKE_SIZE, SPIKE_SIZE),
        }
    }
}

impl Entity for Spike {
    fn id(&self) -> EntityId {
        self.id
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_centered() {
        let player = Player::at_arena_center();
        assert_eq!(player.center(), Position::new(400, 300));
        assert_eq!(player.rect.w, PLAYER_SIZE);
    }

    #[test]
    fn test_player_moves_by_speed() {
        let mut player = Player::at_arena_center();
        let moved = player.update(MoveInput::new(1, -1), 800, 600, &[]);
        assert!(moved);
        assert_eq!(player.center(), Position::new(405, 295));
    }

    #[test]
    fn test_player_idle_input_does_nothing() {
        let mut player = Player::at_arena_center();
        assert!(!player.update(MoveInput::default(), 800, 600, &[]));
        assert_eq!(player.center(), Position::new(400, 300));
    }

    #[test]
    fn test_player_clamped_to_arena() {
        let mut player = Player::new(Position::new(16, 16));
        player.update(MoveInput::new(-1, -1), 800, 600, &[]);
        assert_eq!(player.rect.left(), 0);
        assert_eq!(player.rect.top(), 0);

        // Pinned against the corner, further pushes change nothing
        assert!(!player.update(MoveInput::new(-1, -1), 800, 600, &[]));
    }

    #[test]
    fn test_player_blocked_by_obstacle() {
        let mut player = Player::new(Position::new(400, 300));
        // Obstacle spans x 420..470, player right edge is at 415
        let obstacle = Obstacle::new(Position::new(445, 300));

        assert!(player.update(MoveInput::new(1, 0), 800, 600, &[obstacle.clone()]));
        assert_eq!(player.rect.right(), 420);

        // One more step would overlap, so the move is reverted
        assert!(!player.update(MoveInput::new(1, 0), 800, 600, &[obstacle]));
        assert_eq!(player.rect.right(), 420);
    }

    #[test]
    fn test_entity_sizes() {
        let center = Position::new(100, 100);
        assert_eq!(Coin::new(center).rect().w, COIN_SIZE);
        assert_eq!(Obstacle::new(center).rect().w, OBSTACLE_SIZE);
        assert_eq!(Spike::new(center).rect().h, SPIKE_SIZE);
        assert_eq!(Obstacle::new(center).center(), center);
    }
}
