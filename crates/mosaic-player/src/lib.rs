//! Mosaic Player - windowed host for the Fallers game

mod player_app;
mod settings;

pub use player_app::PlayerApp;
pub use settings::{load_settings, Overrides, Settings};
