//! # Rendering Module
//!
//! Macroquad drawing of the arena, the path hint, the HUD and the setup form.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
