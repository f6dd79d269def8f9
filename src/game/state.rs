//! # Game State Module
//!
//! The per-tick simulation: movement, coin pickup, endings and the coin
//! respawn timer.
//!
//! Time is counted in simulation ticks rather than wall-clock time, so a
//! session plays out identically for the same seed and input sequence.

use crate::config::{
    COIN_RESPAWN_INTERVAL_MS, MESSAGE_DURATION_MS, TARGET_TPS, TIME_LIMIT_SECS, WINNING_SCORE,
};
use crate::game::{Arena, Entity, EntityId, Position};
use crate::generation::{populate_arena, spawn_coin, utils, SpawnConfig};
use crate::input::MoveInput;
use crate::CoinRushResult;
use log::info;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Text shown when a coin respawns.
pub const NEW_COIN_MESSAGE: &str = "A new coin appeared!";

/// How a session ended, if it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// Game is still in progress
    Playing,
    /// Player touched a spike
    Lost,
    /// The time limit ran out
    TimedOut,
    /// Player collected enough coins
    Won,
}

impl GameCompletionState {
    /// Banner text for the ending screen.
    pub fn banner(&self) -> &'static str {
        match self {
            GameCompletionState::Playing => "",
            GameCompletionState::Lost => "You lost!",
            GameCompletionState::TimedOut => "Time is up!",
            GameCompletionState::Won => "You won!",
        }
    }
}

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player picked up a coin
    CoinCollected { coin_id: EntityId, score: u32 },
    /// The oldest coin was removed by the respawn timer
    CoinExpired { coin_id: EntityId },
    /// A new coin was placed by the respawn timer
    CoinSpawned { coin_id: EntityId, position: Position },
    /// The player touched a spike
    PlayerHitSpike { spike_id: EntityId },
    /// The time limit ran out
    TimeExpired,
    /// The player reached the winning score
    TargetScoreReached { score: u32 },
}

/// Running totals for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    pub coins_collected: u32,
    pub coins_expired: u32,
    pub coins_spawned: u32,
    /// Ticks in which the player actually moved
    pub steps_taken: u64,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::CoinCollected { .. } => self.coins_collected += 1,
            GameEvent::CoinExpired { .. } => self.coins_expired += 1,
            GameEvent::CoinSpawned { .. } => self.coins_spawned += 1,
            _ => {}
        }
    }
}

/// A message shown for a limited time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedMessage {
    pub text: String,
    /// Tick at which the message was posted
    pub posted_at: u64,
}

/// Game time information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTimeInfo {
    /// Ticks simulated so far
    pub tick: u64,
    /// Simulated time since the session started
    pub elapsed: Duration,
    /// Whole seconds left on the clock, never negative
    pub remaining_secs: u64,
}

/// Central game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The playfield and everything in it
    pub arena: Arena,
    /// Coins collected so far
    pub score: u32,
    /// Ticks simulated so far
    pub tick_count: u64,
    /// Session statistics
    pub statistics: GameStatistics,
    completion_state: GameCompletionState,
    message: Option<TimedMessage>,
    last_coin_spawn_ms: u64,
    config: SpawnConfig,
    rng: StdRng,
}

impl GameState {
    /// Starts a session on a freshly populated reference arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinrush::{GameState, SpawnConfig};
    ///
    /// let state = GameState::new(SpawnConfig::for_testing(12345)).unwrap();
    /// assert_eq!(state.score, 0);
    /// assert!(!state.is_game_ended());
    /// ```
    pub fn new(config: SpawnConfig) -> CoinRushResult<Self> {
        config.validate()?;
        let mut state = Self::with_arena(Arena::reference(), config);
        let report = populate_arena(&mut state.arena, &state.config, &mut state.rng);
        info!(
            "session started with seed {}: {} coins, {} obstacles, {} spikes ({} skipped)",
            state.config.seed, report.coins, report.obstacles, report.spikes, report.skipped
        );
        Ok(state)
    }

    /// Starts a session on an arena prepared by the caller.
    ///
    /// The config still drives the respawn placement and RNG.
    pub fn with_arena(arena: Arena, config: SpawnConfig) -> Self {
        let rng = utils::create_rng(&config);
        Self {
            arena,
            score: 0,
            tick_count: 0,
            statistics: GameStatistics::new(),
            completion_state: GameCompletionState::Playing,
            message: None,
            last_coin_spawn_ms: 0,
            config,
            rng,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Does nothing once the session has ended. Within a tick, a spike hit is
    /// checked before the time limit, and the time limit before the score.
    pub fn tick(&mut self, input: MoveInput) -> Vec<GameEvent> {
        if self.is_game_ended() {
            return Vec::new();
        }

        self.tick_count += 1;
        let mut events = Vec::new();

        if self.arena.move_player(input) {
            self.statistics.steps_taken += 1;
        }

        for coin in self.arena.collect_coins() {
            self.score += 1;
            events.push(GameEvent::CoinCollected {
                coin_id: coin.id,
                score: self.score,
            });
        }

        if let Some(spike_id) = self.arena.touching_spike() {
            events.push(GameEvent::PlayerHitSpike { spike_id });
            self.finish(GameCompletionState::Lost);
        } else if self.elapsed_ms() / 1000 > TIME_LIMIT_SECS {
            events.push(GameEvent::TimeExpired);
            self.finish(GameCompletionState::TimedOut);
        } else if self.score >= WINNING_SCORE {
            events.push(GameEvent::TargetScoreReached { score: self.score });
            self.finish(GameCompletionState::Won);
        }

        if !self.is_game_ended() {
            self.respawn_coin_if_due(&mut events);
        }

        for event in &events {
            self.statistics.update_from_event(event);
        }
        events
    }

    /// Start and goal for this tick's path hint: the player's center and the
    /// center of the closest coin. `None` when there are no coins.
    pub fn path_request(&self) -> Option<(Position, Position)> {
        let from = self.arena.player.center();
        self.arena
            .closest_coin(from)
            .map(|coin| (from, coin.center()))
    }

    /// The respawn message, while it is still fresh.
    pub fn active_message(&self) -> Option<&str> {
        let message = self.message.as_ref()?;
        let age_ms = ticks_to_ms(self.tick_count - message.posted_at);
        (age_ms <= MESSAGE_DURATION_MS).then_some(message.text.as_str())
    }

    pub fn get_game_time_info(&self) -> GameTimeInfo {
        let elapsed_ms = self.elapsed_ms();
        GameTimeInfo {
            tick: self.tick_count,
            elapsed: Duration::from_millis(elapsed_ms),
            remaining_secs: TIME_LIMIT_SECS.saturating_sub(elapsed_ms / 1000),
        }
    }

    pub fn is_game_ended(&self) -> bool {
        self.completion_state != GameCompletionState::Playing
    }

    pub fn get_completion_state(&self) -> GameCompletionState {
        self.completion_state
    }

    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    fn elapsed_ms(&self) -> u64 {
        ticks_to_ms(self.tick_count)
    }

    fn finish(&mut self, state: GameCompletionState) {
        info!(
            "session ended after {} ticks: {:?}, score {}",
            self.tick_count, state, self.score
        );
        self.completion_state = state;
    }

    /// Replaces the oldest coin with a new one every respawn interval.
    fn respawn_coin_if_due(&mut self, events: &mut Vec<GameEvent>) {
        let now_ms = self.elapsed_ms();
        if now_ms - self.last_coin_spawn_ms < COIN_RESPAWN_INTERVAL_MS {
            return;
        }
        self.last_coin_spawn_ms = now_ms;

        if let Some(expired) = self.arena.expire_oldest_coin() {
            events.push(GameEvent::CoinExpired {
                coin_id: expired.id,
            });
        }

        if let Some(coin_id) = spawn_coin(&mut self.arena, &self.config, &mut self.rng) {
            let position = self
                .arena
                .coins
                .last()
                .map(Entity::center)
                .unwrap_or_else(Position::origin);
            events.push(GameEvent::CoinSpawned { coin_id, position });
            self.message = Some(TimedMessage {
                text: NEW_COIN_MESSAGE.to_string(),
                posted_at: self.tick_count,
            });
        }
    }
}

fn ticks_to_ms(ticks: u64) -> u64 {
    ticks * 1000 / u64::from(TARGET_TPS)
}
