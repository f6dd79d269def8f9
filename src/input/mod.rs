//! # Input Module
//!
//! Keyboard handling for player movement and quitting.

use macroquad::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-tick movement request, each axis in `-1..=1`.
///
/// # Examples
///
/// ```
/// use coinrush::MoveInput;
///
/// // Up and left held together
/// let input = MoveInput::from_keys(true, false, true, false);
/// assert_eq!(input, MoveInput::new(-1, -1));
///
/// // Opposite keys cancel out
/// assert!(MoveInput::from_keys(true, true, false, false).is_idle());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInput {
    pub dx: i32,
    pub dy: i32,
}

impl MoveInput {
    /// Creates a movement request, clamping each axis to a unit step.
    pub fn new(dx: i32, dy: i32) -> Self {
        Self {
            dx: dx.signum(),
            dy: dy.signum(),
        }
    }

    /// Builds a movement request from the four held direction keys.
    pub fn from_keys(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self::new(
            i32::from(right) - i32::from(left),
            i32::from(down) - i32::from(up),
        )
    }

    /// Returns true when no movement is requested.
    pub fn is_idle(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Player input types that can be processed by the scene loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move the player this tick
    Move(MoveInput),
    /// Quit the game
    Quit,
}

/// Input handler for processing player commands.
///
/// Movement reads held keys rather than key presses, so the player keeps
/// moving for as long as a key is down.
pub struct InputHandler {
    /// Whether the arrow keys move the player in addition to WASD
    pub arrow_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self {
            arrow_keys_enabled: true,
        }
    }

    /// Gets the current input.
    ///
    /// Quit wins over movement. Returns an idle move when nothing is held.
    pub fn get_input(&self) -> PlayerInput {
        if is_key_pressed(KeyCode::Escape) || is_quit_requested() {
            return PlayerInput::Quit;
        }
        PlayerInput::Move(self.held_movement())
    }

    /// Reads the movement keys currently held down.
    fn held_movement(&self) -> MoveInput {
        let arrows = self.arrow_keys_enabled;
        MoveInput::from_keys(
            is_key_down(KeyCode::W) || (arrows && is_key_down(KeyCode::Up)),
            is_key_down(KeyCode::S) || (arrows && is_key_down(KeyCode::Down)),
            is_key_down(KeyCode::A) || (arrows && is_key_down(KeyCode::Left)),
            is_key_down(KeyCode::D) || (arrows && is_key_down(KeyCode::Right)),
        )
    }
}
