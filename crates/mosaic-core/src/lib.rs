//! Mosaic Core - Foundational types for the Mosaic tile engine
//!
//! This crate provides the types that all other Mosaic crates depend on:
//! - `EntityId` - Identity of an entity in a game loop's live set
//! - `Color`, `TileRect` - Visual and tile-space types
//! - `LoopConfig` - Startup options for a game loop
//! - Error types and Result alias

mod config;
mod error;
mod id;
mod types;

pub use config::LoopConfig;
pub use error::{MosaicError, Result};
pub use id::EntityId;
pub use types::{Color, TileRect};
