//! # Coinrush
//!
//! A small real-time arcade game: the player moves around a bounded arena,
//! avoids obstacles and spikes, and collects coins before the clock runs out.
//! A dotted hint toward the nearest coin is computed in the background.
//!
//! ## Architecture Overview
//!
//! - **Game**: fixed-tick simulation of the player, coins, obstacles and spikes
//! - **Generation**: seeded placement of entities with minimum spacing
//! - **Navigation**: lattice breadth-first search published from a worker thread
//! - **Rendering**: macroquad drawing of the arena, the hint and the setup screen
//! - **Scenes**: setup, playing and game-over flow driving all of the above
//!
//! ## Pathfinding Hint
//!
//! The hint is the interesting part. Each tick the game asks a
//! [`PathPublisher`] for a new search toward the closest coin. If a search is
//! already running the request is dropped. Finished searches replace the
//! published path whole, and the renderer reads the latest complete path once
//! per frame.

pub mod game;
pub mod generation;
pub mod input;
pub mod navigation;
pub mod rendering;
pub mod scenes;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use navigation::*;
pub use utils::*;

pub use rendering::{MacroquadDisplay, SetupScreen};
pub use scenes::SceneManager;

/// Core error type for the Coinrush game.
#[derive(thiserror::Error, Debug)]
pub enum CoinRushError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Session configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Coinrush codebase.
pub type CoinRushResult<T> = Result<T, CoinRushError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Arena width in pixels
    pub const ARENA_WIDTH: i32 = 800;

    /// Arena height in pixels
    pub const ARENA_HEIGHT: i32 = 600;

    /// Lattice step used by the pathfinder, in pixels
    pub const GRID_STEP: i32 = 5;

    /// Step multipliers for pathfinder neighbors
    pub const NEIGHBOR_MULTIPLIERS: [i32; 3] = [2, 3, 4];

    /// Simulation ticks per second
    pub const TARGET_TPS: u32 = 60;

    /// Session length in seconds
    pub const TIME_LIMIT_SECS: u64 = 120;

    /// Coins needed to win
    pub const WINNING_SCORE: u32 = 10;

    /// Interval between coin respawns in milliseconds
    pub const COIN_RESPAWN_INTERVAL_MS: u64 = 5000;

    /// How long the respawn message stays on screen in milliseconds
    pub const MESSAGE_DURATION_MS: u64 = 3000;

    /// How long the ending banner is shown before exit in milliseconds
    pub const GAME_OVER_DELAY_MS: u64 = 5000;

    /// Player sprite edge length
    pub const PLAYER_SIZE: i32 = 30;

    /// Player movement per tick in pixels
    pub const PLAYER_SPEED: i32 = 5;

    /// Coin sprite edge length
    pub const COIN_SIZE: i32 = 30;

    /// Obstacle sprite edge length
    pub const OBSTACLE_SIZE: i32 = 50;

    /// Spike sprite edge length
    pub const SPIKE_SIZE: i32 = 30;

    /// Radius of the path hint markers
    pub const PATH_MARKER_RADIUS: f32 = 5.0;
}
