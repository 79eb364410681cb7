//! Mosaic Render - tile-space rendering surfaces
//!
//! Entities draw in logical tile coordinates through [`RenderSurface`].
//! Two implementations ship with the crate:
//! - [`TileCanvas`] - software rasterizer over a `0x00RRGGBB` pixel buffer
//! - [`RecordingSurface`] - headless surface that records every call

mod canvas;
mod font;
mod layout;
mod recording;
mod surface;

pub use canvas::TileCanvas;
pub use layout::TileLayout;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{RenderSurface, TextBox};
