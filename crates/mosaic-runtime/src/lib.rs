//! Mosaic Runtime - Game loop infrastructure
//!
//! Provides the building blocks of a tile game loop:
//! - `FrameClock` - delta-time between ticks
//! - `PointerState` - latest pointer position in tile-space and held state
//! - `Entity` / `TickContext` - the per-tick update contract
//! - `SceneCommands` - spawn/destroy requests queued during a tick
//! - `Scene` - scene control shared by the loop and a running tick
//! - `GameLoop` - owns the live set and runs clear → update-all → advance
//! - `HoverState`, `Button`, `MessageBox` - reusable interactive entities

mod button;
mod clock;
mod commands;
mod entity;
mod game_loop;
mod hover;
mod message_box;
mod pointer;
mod scene;

pub use button::Button;
pub use clock::FrameClock;
pub use commands::{SceneCommand, SceneCommands};
pub use entity::{AsAny, Callback, Entity, TickContext};
pub use game_loop::GameLoop;
pub use hover::HoverState;
pub use message_box::MessageBox;
pub use pointer::PointerState;
pub use scene::Scene;
