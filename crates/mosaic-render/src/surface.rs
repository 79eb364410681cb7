//! The drawing capability consumed by entities

use mosaic_core::{Color, TileRect};

/// A labeled box: `rect.size × rect.size` tiles filled with `bg`, text centred in `fg`
#[derive(Debug, Clone, Copy)]
pub struct TextBox<'a> {
    pub text: &'a str,
    pub rect: TileRect,
    pub bg: Color,
    pub fg: Color,
    /// Line height in tiles
    pub text_scale: f32,
}

/// A surface addressed in tile coordinates.
///
/// Implementations own the mapping from tile-space to pixels.
pub trait RenderSurface {
    /// Tiles per side of the square grid
    fn resolution(&self) -> u32;

    /// Wipe everything drawn since the last clear
    fn clear(&mut self);

    /// Thin lines at every tile edge
    fn draw_grid(&mut self);

    /// Thick border around the whole grid
    fn draw_frame(&mut self);

    /// Fill one tile
    fn draw_tile(&mut self, tile_x: f64, tile_y: f64, color: Color);

    fn draw_text_box(&mut self, text_box: &TextBox<'_>);
}
