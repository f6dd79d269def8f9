//! # Arena
//!
//! The bounded playfield and every entity in it.

use crate::config::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::game::{Coin, Entity, EntityId, Obstacle, Player, Position, Spike};
use crate::navigation::ObstacleSnapshot;
use crate::utils::Rect;

/// The playfield: bounds, the player, and the coins, obstacles and spikes.
///
/// Coins are kept in spawn order, so the first coin is always the oldest.
#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
    pub player: Player,
    pub coins: Vec<Coin>,
    pub obstacles: Vec<Obstacle>,
    pub spikes: Vec<Spike>,
}

impl Arena {
    /// Creates an empty arena with the player in the middle.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            player: Player::new(Position::new(width / 2, height / 2)),
            coins: Vec::new(),
            obstacles: Vec::new(),
            spikes: Vec::new(),
        }
    }

    /// Creates an empty 800x600 arena.
    pub fn reference() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }

    /// The arena bounds as a rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Bounding rectangles of every entity, the player included.
    pub fn occupied_rects(&self) -> Vec<Rect> {
        std::iter::once(self.player.rect)
            .chain(self.coins.iter().map(Entity::rect))
            .chain(self.obstacles.iter().map(Entity::rect))
            .chain(self.spikes.iter().map(Entity::rect))
            .collect()
    }

    /// The coin nearest to `from` by Manhattan distance.
    ///
    /// Distance is measured between centers. On a tie the older coin wins.
    pub fn closest_coin(&self, from: Position) -> Option<&Coin> {
        self.coins
            .iter()
            .min_by_key(|coin| coin.center().manhattan_distance(from))
    }

    /// Freezes the current obstacle and spike footprints for a path search.
    pub fn obstacle_snapshot(&self) -> ObstacleSnapshot {
        ObstacleSnapshot::new(
            self.obstacles.iter().map(Entity::rect).collect(),
            self.spikes.iter().map(Entity::rect).collect(),
        )
    }

    /// Removes and returns every coin the player is touching.
    pub fn collect_coins(&mut self) -> Vec<Coin> {
        let player_rect = self.player.rect;
        let (collected, remaining) = std::mem::take(&mut self.coins)
            .into_iter()
            .partition(|coin| coin.rect.intersects(&player_rect));
        self.coins = remaining;
        collected
    }

    /// The first spike the player is touching, if any.
    pub fn touching_spike(&self) -> Option<EntityId> {
        self.spikes
            .iter()
            .find(|spike| spike.rect.intersects(&self.player.rect))
            .map(Entity::id)
    }

    /// Removes the oldest coin.
    pub fn expire_oldest_coin(&mut self) -> Option<Coin> {
        if self.coins.is_empty() {
            None
        } else {
            Some(self.coins.remove(0))
        }
    }

    /// Moves the player one tick, respecting bounds and obstacles.
    pub fn move_player(&mut self, input: crate::input::MoveInput) -> bool {
        self.player
            .update(input, self.width, self.height, &self.obstacles)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::reference()
    }
}
