//! Fallers - a small game built on the Mosaic runtime
//!
//! Tiles fall from the top of the grid, accelerating. Clicking one scores a
//! point and spawns one or two replacements; letting one reach the floor
//! ends the game, and after a short "GAME OVER" message a new game begins.
//!
//! - `FallerContent` - colors, sizes and spawn tables (configuration)
//! - `FallerGame` - per-game state: score and the spawn RNG
//! - `Faller`, `ScoreDisplay` - the game's entities
//! - `show_title`, `start_game` - scene flows

mod content;
mod faller;
mod flow;
mod score;
mod state;

pub use content::FallerContent;
pub use faller::{Faller, FallerSpec};
pub use flow::{game_over_message, show_title, spawn_faller, start_game};
pub use score::ScoreDisplay;
pub use state::FallerGame;
