//! # Setup Screen
//!
//! The pre-game form where the player picks how many obstacles, spikes and
//! coins to place.
//!
//! The form logic ([`InputBox`], [`SetupForm`]) is plain data so it can be
//! tested without a window. [`SetupScreen`] feeds it macroquad input and draws
//! it.

use crate::game::Position;
use crate::generation::SpawnCounts;
use crate::utils::Rect;
use crate::{CoinRushError, CoinRushResult};
use log::warn;
use macroquad::prelude::*;

/// Longest number a box accepts.
const MAX_DIGITS: usize = 4;

/// A labelled single-line numeric text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBox {
    pub label: &'static str,
    pub text: String,
    pub rect: Rect,
    pub active: bool,
}

impl InputBox {
    pub fn new(label: &'static str, rect: Rect) -> Self {
        Self {
            label,
            text: String::new(),
            rect,
            active: false,
        }
    }

    /// Appends a character. Anything but an ASCII digit is ignored.
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() && self.text.len() < MAX_DIGITS {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Parses the box contents as a count.
    pub fn value(&self) -> CoinRushResult<u32> {
        self.text.parse().map_err(|_| {
            CoinRushError::InvalidConfig(format!(
                "{} needs a number, got {:?}",
                self.label.trim_end_matches(':'),
                self.text
            ))
        })
    }
}

/// What a click on the form did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormClick {
    /// Focus moved (or was cleared)
    Focus,
    /// The start button was pressed
    Start,
}

/// The three count boxes and the start button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    pub boxes: [InputBox; 3],
    pub start_button: Rect,
}

impl SetupForm {
    /// Lays the form out for an 800x600 window.
    pub fn new() -> Self {
        Self {
            boxes: [
                InputBox::new("Obstacles:", Rect::new(50, 50, 200, 50)),
                InputBox::new("Spikes:", Rect::new(50, 150, 200, 50)),
                InputBox::new("Coins:", Rect::new(50, 250, 200, 50)),
            ],
            start_button: Rect::new(350, 500, 100, 50),
        }
    }

    /// Focuses the box under `point` and unfocuses the rest.
    pub fn click(&mut self, point: Position) -> FormClick {
        for input_box in &mut self.boxes {
            input_box.active = input_box.rect.contains_point(point);
        }
        if self.start_button.contains_point(point) {
            FormClick::Start
        } else {
            FormClick::Focus
        }
    }

    /// Types into the focused box, if any.
    pub fn type_char(&mut self, c: char) {
        if let Some(input_box) = self.active_box_mut() {
            input_box.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input_box) = self.active_box_mut() {
            input_box.backspace();
        }
    }

    /// Reads the counts. Fails if any box is empty.
    pub fn submit(&self) -> CoinRushResult<SpawnCounts> {
        let [obstacles, spikes, coins] = &self.boxes;
        Ok(SpawnCounts::new(
            obstacles.value()?,
            spikes.value()?,
            coins.value()?,
        ))
    }

    fn active_box_mut(&mut self) -> Option<&mut InputBox> {
        self.boxes.iter_mut().find(|input_box| input_box.active)
    }
}

impl Default for SetupForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Interactive setup screen drawn with macroquad.
#[derive(Debug, Default)]
pub struct SetupScreen {
    form: SetupForm,
    error: Option<String>,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes this frame's mouse and keyboard input.
    ///
    /// Returns the chosen counts once the start button is pressed with every
    /// box filled in.
    pub fn update(&mut self) -> Option<SpawnCounts> {
        while let Some(c) = get_char_pressed() {
            self.form.type_char(c);
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.form.backspace();
        }

        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        let (mx, my) = mouse_position();
        if self.form.click(Position::new(mx as i32, my as i32)) != FormClick::Start {
            return None;
        }

        match self.form.submit() {
            Ok(counts) => Some(counts),
            Err(e) => {
                warn!("setup rejected: {}", e);
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn render(&self) {
        clear_background(WHITE);

        for input_box in &self.form.boxes {
            let r = input_box.rect;
            draw_text(input_box.label, r.x as f32, (r.y - 10) as f32, 40.0, BLACK);

            let color = if input_box.active {
                SKYBLUE
            } else {
                DARKGRAY
            };
            draw_rectangle_lines(r.x as f32, r.y as f32, r.w as f32, r.h as f32, 2.0, color);
            draw_text(
                &input_box.text,
                (r.x + 8) as f32,
                (r.y + 36) as f32,
                40.0,
                color,
            );
        }

        let b = self.form.start_button;
        draw_rectangle(b.x as f32, b.y as f32, b.w as f32, b.h as f32, BLUE);
        draw_text("->", (b.x + 30) as f32, (b.y + 35) as f32, 40.0, WHITE);

        if let Some(error) = &self.error {
            draw_text(error, 50.0, 400.0, 24.0, RED);
        }
    }
}
