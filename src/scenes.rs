//! # Scene Management System
//!
//! Drives the game through its three screens: the setup form, the arena while
//! playing, and the ending banner.

use crate::config::{GAME_OVER_DELAY_MS, TARGET_TPS};
use crate::{
    CoinRushResult, GameCompletionState, GameEvent, GameState, InputHandler, MacroquadDisplay,
    LatticeGrid, PathPublisher, PlayerInput, SetupScreen, SpawnConfig,
};
use log::{debug, info};
use macroquad::prelude::*;

/// Longest frame time fed into the simulation, in seconds.
const MAX_FRAME_TIME: f32 = 0.25;

/// Most ticks run in one frame.
const MAX_TICKS_PER_FRAME: u32 = 8;

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneType {
    /// Choosing entity counts
    Setup,
    /// Normal gameplay
    Playing,
    /// Ending banner, with seconds spent on it so far
    GameOver {
        completion_state: GameCompletionState,
        shown_for: f32,
    },
}

/// Turns variable frame times into a whole number of fixed ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
}

impl FixedTimestep {
    /// A timestep running `ticks_per_second` ticks.
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: 1.0 / ticks_per_second as f32,
            accumulator: 0.0,
        }
    }

    /// Adds a frame's duration and returns how many ticks are now due.
    ///
    /// Long frames are clamped so a stall does not trigger a burst of ticks.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        let frame_time = if frame_time.is_finite() {
            frame_time.clamp(0.0, MAX_FRAME_TIME)
        } else {
            0.0
        };
        let backlog_cap = self.step * (MAX_TICKS_PER_FRAME + 1) as f32;
        self.accumulator = (self.accumulator + frame_time).min(backlog_cap);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }
}

/// The main scene manager that coordinates all game scenes.
pub struct SceneManager {
    current_scene: SceneType,
    config: SpawnConfig,
    game_state: Option<GameState>,
    display: MacroquadDisplay,
    setup_screen: SetupScreen,
    input_handler: InputHandler,
    publisher: PathPublisher,
    timestep: FixedTimestep,
}

impl SceneManager {
    /// Creates a scene manager.
    ///
    /// With `skip_setup` the session starts right away with the counts in
    /// `config`; otherwise the setup form asks for them first.
    pub async fn new(
        config: SpawnConfig,
        skip_setup: bool,
        input_handler: InputHandler,
    ) -> CoinRushResult<Self> {
        let display = MacroquadDisplay::new().await?;
        let mut manager = Self {
            current_scene: SceneType::Setup,
            config,
            game_state: None,
            display,
            setup_screen: SetupScreen::new(),
            input_handler,
            publisher: PathPublisher::for_grid(LatticeGrid::arena()),
            timestep: FixedTimestep::new(TARGET_TPS),
        };
        if skip_setup {
            manager.start_session()?;
        }
        Ok(manager)
    }

    /// Runs the main scene loop until the game exits.
    pub async fn run(&mut self) -> CoinRushResult<()> {
        loop {
            let exit = match self.current_scene {
                SceneType::Setup => self.update_setup_scene()?,
                SceneType::Playing => self.update_playing_scene()?,
                SceneType::GameOver { .. } => self.update_game_over_scene(),
            };
            if exit {
                break;
            }
            next_frame().await;
        }

        self.publisher.wait_idle();
        info!("game loop ended");
        Ok(())
    }

    /// Updates the setup scene, returns true if exit is requested.
    fn update_setup_scene(&mut self) -> CoinRushResult<bool> {
        if is_key_pressed(KeyCode::Escape) || is_quit_requested() {
            return Ok(true);
        }

        if let Some(counts) = self.setup_screen.update() {
            self.config.counts = counts;
            self.start_session()?;
            return Ok(false);
        }

        self.setup_screen.render();
        Ok(false)
    }

    /// Updates the playing scene, returns true if exit is requested.
    fn update_playing_scene(&mut self) -> CoinRushResult<bool> {
        let movement = match self.input_handler.get_input() {
            PlayerInput::Quit => {
                info!("player quit the game");
                return Ok(true);
            }
            PlayerInput::Move(movement) => movement,
        };

        let Some(game_state) = self.game_state.as_mut() else {
            self.current_scene = SceneType::Setup;
            return Ok(false);
        };

        for _ in 0..self.timestep.advance(get_frame_time()) {
            for event in game_state.tick(movement) {
                log_event(&event);
            }
            if game_state.is_game_ended() {
                break;
            }
            if let Some((start, goal)) = game_state.path_request() {
                self.publisher.request_path_if_idle(
                    start,
                    goal,
                    game_state.arena.obstacle_snapshot(),
                )?;
            }
        }

        let path = self.publisher.read_current_path();
        self.display.render_game(game_state, &path);

        if game_state.is_game_ended() {
            self.current_scene = SceneType::GameOver {
                completion_state: game_state.get_completion_state(),
                shown_for: 0.0,
            };
        }
        Ok(false)
    }

    /// Updates the game over scene, returns true if exit is requested.
    fn update_game_over_scene(&mut self) -> bool {
        let SceneType::GameOver {
            completion_state,
            shown_for,
        } = &mut self.current_scene
        else {
            return false;
        };
        *shown_for += get_frame_time();

        if let Some(game_state) = &self.game_state {
            self.display.render_game(game_state, &[]);
        }
        self.display.render_banner(*completion_state);

        is_key_pressed(KeyCode::Escape)
            || is_quit_requested()
            || *shown_for * 1000.0 >= GAME_OVER_DELAY_MS as f32
    }

    /// Builds a fresh session from the current config and switches to it.
    fn start_session(&mut self) -> CoinRushResult<()> {
        self.game_state = Some(GameState::new(self.config.clone())?);
        self.timestep = FixedTimestep::new(TARGET_TPS);
        self.current_scene = SceneType::Playing;
        Ok(())
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::CoinCollected { score, .. } => debug!("coin collected, score {}", score),
        GameEvent::CoinSpawned { position, .. } => debug!("coin spawned at {:?}", position),
        other => debug!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestep_accumulates() {
        let mut timestep = FixedTimestep::new(60);
        assert_eq!(timestep.advance(0.01), 0);
        assert_eq!(timestep.advance(0.01), 1);
        assert_eq!(timestep.advance(1.0 / 30.0), 2);
    }

    #[test]
    fn test_timestep_clamps_stalls() {
        let mut timestep = FixedTimestep::new(60);
        assert_eq!(timestep.advance(10.0), MAX_TICKS_PER_FRAME);
        // The stall does not leave a backlog behind
        assert!(timestep.advance(0.0) <= 1);
    }

    #[test]
    fn test_timestep_ignores_bad_frames() {
        let mut timestep = FixedTimestep::new(60);
        assert_eq!(timestep.advance(f32::NAN), 0);
        assert_eq!(timestep.advance(-1.0), 0);
    }
}
