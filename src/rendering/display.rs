//! # Display Management
//!
//! Draws the arena, the HUD and the path hint with macroquad.

use crate::config::PATH_MARKER_RADIUS;
use crate::game::{Entity, GameCompletionState, GameState, Position};
use crate::utils::Rect;
use crate::CoinRushResult;
use log::{info, warn};
use macroquad::prelude::*;

const HUD_FONT_SIZE: f32 = 40.0;

/// Sprite textures. A missing texture falls back to a filled rectangle.
#[derive(Default)]
pub struct SpriteTextures {
    pub player: Option<Texture2D>,
    pub coin: Option<Texture2D>,
    pub obstacle: Option<Texture2D>,
    pub spike: Option<Texture2D>,
}

/// Text lines shown over the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub score: String,
    pub time: String,
    pub message: Option<String>,
}

impl HudText {
    /// Builds the HUD lines for the current state.
    pub fn from_state(game_state: &GameState) -> Self {
        Self {
            score: format!("Score: {}", game_state.score),
            time: format!("Time: {}", game_state.get_game_time_info().remaining_secs),
            message: game_state.active_message().map(str::to_string),
        }
    }
}

/// Color of the ending banner.
pub fn banner_color(state: GameCompletionState) -> Color {
    match state {
        GameCompletionState::Won => GOLD,
        _ => RED,
    }
}

/// Macroquad display manager for the game.
pub struct MacroquadDisplay {
    pub textures: SpriteTextures,
}

impl MacroquadDisplay {
    /// Loads the sprite textures from the assets folder.
    ///
    /// Missing or unreadable images are logged and replaced with plain
    /// colored shapes, so this only fails on errors the game cannot recover
    /// from.
    pub async fn new() -> CoinRushResult<Self> {
        let textures = SpriteTextures {
            player: load_sprite("player.png").await,
            coin: load_sprite("coin.png").await,
            obstacle: load_sprite("obstacle.png").await,
            spike: load_sprite("spike.png").await,
        };
        Ok(Self { textures })
    }

    /// Renders one frame of the arena, the path hint and the HUD.
    pub fn render_game(&self, game_state: &GameState, path: &[Position]) {
        clear_background(WHITE);

        let arena = &game_state.arena;
        for obstacle in &arena.obstacles {
            self.draw_sprite(obstacle.rect(), self.textures.obstacle.as_ref(), DARKGRAY);
        }
        for spike in &arena.spikes {
            self.draw_sprite(spike.rect(), self.textures.spike.as_ref(), PURPLE);
        }
        for coin in &arena.coins {
            self.draw_sprite(coin.rect(), self.textures.coin.as_ref(), GOLD);
        }
        self.draw_sprite(arena.player.rect(), self.textures.player.as_ref(), BLUE);

        for point in path {
            draw_circle(point.x as f32, point.y as f32, PATH_MARKER_RADIUS, RED);
        }

        self.render_hud(&HudText::from_state(game_state));
    }

    /// Draws the ending banner in the middle of the screen.
    pub fn render_banner(&self, state: GameCompletionState) {
        let text = state.banner();
        let size = measure_text(text, None, HUD_FONT_SIZE as u16, 1.0);
        draw_text(
            text,
            (screen_width() - size.width) / 2.0,
            screen_height() / 2.0,
            HUD_FONT_SIZE,
            banner_color(state),
        );
    }

    fn render_hud(&self, hud: &HudText) {
        draw_text(&hud.score, 10.0, 40.0, HUD_FONT_SIZE, BLACK);
        draw_text(
            &hud.time,
            screen_width() - 200.0,
            40.0,
            HUD_FONT_SIZE,
            BLACK,
        );
        if let Some(message) = &hud.message {
            draw_text(
                message,
                screen_width() / 2.0 - 150.0,
                screen_height() - 20.0,
                HUD_FONT_SIZE,
                DARKGREEN,
            );
        }
    }

    fn draw_sprite(&self, rect: Rect, texture: Option<&Texture2D>, fallback: Color) {
        let (x, y, w, h) = (rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32);
        match texture {
            Some(texture) => draw_texture_ex(
                texture,
                x,
                y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(w, h)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(x, y, w, h, fallback),
        }
    }
}

async fn load_sprite(name: &str) -> Option<Texture2D> {
    match load_texture(name).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            info!("loaded sprite {}", name);
            Some(texture)
        }
        Err(e) => {
            warn!("could not load sprite {}: {:?}, drawing a plain shape", name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Arena, Coin};
    use crate::generation::{SpawnConfig, SpawnCounts};

    #[test]
    fn test_hud_text_fresh_session() {
        let state = GameState::with_arena(
            Arena::reference(),
            SpawnConfig::new(1, SpawnCounts::default()),
        );
        let hud = HudText::from_state(&state);
        assert_eq!(hud.score, "Score: 0");
        assert_eq!(hud.time, "Time: 120");
        assert!(hud.message.is_none());
    }

    #[test]
    fn test_hud_text_tracks_score() {
        let mut arena = Arena::reference();
        arena.coins.push(Coin::new(Position::new(400, 300)));
        let mut state = GameState::with_arena(arena, SpawnConfig::new(1, SpawnCounts::default()));
        state.tick(Default::default());
        assert_eq!(HudText::from_state(&state).score, "Score: 1");
    }

    #[test]
    fn test_banner_colors() {
        assert_eq!(banner_color(GameCompletionState::Won), GOLD);
        assert_eq!(banner_color(GameCompletionState::Lost), RED);
        assert_eq!(banner_color(GameCompletionState::TimedOut), RED);
    }
}
