//! Software tile rasterizer

use crate::font::{self, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::layout::TileLayout;
use crate::surface::{RenderSurface, TextBox};
use mosaic_core::Color;

/// Border thickness drawn by `draw_frame`, in pixels
const FRAME_WIDTH: i64 = 5;

/// A viewport-sized pixel buffer addressed in tile-space.
///
/// Pixels are `0x00RRGGBB`. Drawing is clipped to the grid square, so
/// entities partially off-grid are cut at the grid edge.
pub struct TileCanvas {
    layout: TileLayout,
    pixels: Vec<u32>,
    background: Color,
    line_color: Color,
}

impl TileCanvas {
    pub fn new(resolution: u32, viewport_width: u32, viewport_height: u32) -> Self {
        let layout = TileLayout::new(resolution, viewport_width, viewport_height);
        Self {
            layout,
            pixels: vec![0; viewport_width as usize * viewport_height as usize],
            background: Color::WHITE,
            line_color: Color::BLACK,
        }
    }

    pub fn with_colors(mut self, background: Color, line_color: Color) -> Self {
        self.background = background;
        self.line_color = line_color;
        self
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at a viewport position, if inside the viewport
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        let (w, h) = self.layout.viewport();
        if x >= w || y >= h {
            return None;
        }
        self.pixels.get(y as usize * w as usize + x as usize).copied()
    }

    /// Resize the viewport; contents are discarded
    pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) {
        self.layout.resize(viewport_width, viewport_height);
        self.pixels = vec![0; viewport_width as usize * viewport_height as usize];
    }

    /// Copy into an RGBA8 frame of the same viewport size
    pub fn write_rgba(&self, frame: &mut [u8]) {
        for (px, out) in self.pixels.iter().zip(frame.chunks_exact_mut(4)) {
            out[0] = ((px >> 16) & 0xFF) as u8;
            out[1] = ((px >> 8) & 0xFF) as u8;
            out[2] = (px & 0xFF) as u8;
            out[3] = 0xFF;
        }
    }

    /// Fill a pixel rectangle, clipped to the grid square and the viewport.
    ///
    /// With one-pixel tiles the grid can be larger than the viewport.
    fn fill_rect(&mut self, x0: i64, y0: i64, w: i64, h: i64, color: u32) {
        let (ox, oy) = self.layout.offset();
        let (vw, vh) = self.layout.viewport();
        let grid = self.layout.grid_pixels() as i64;
        let (min_x, min_y) = (ox as i64, oy as i64);
        let max_x = (min_x + grid).min(vw as i64);
        let max_y = (min_y + grid).min(vh as i64);

        let x_start = x0.max(min_x);
        let y_start = y0.max(min_y);
        let x_end = (x0 + w).min(max_x);
        let y_end = (y0 + h).min(max_y);
        if x_start >= x_end || y_start >= y_end {
            return;
        }

        let stride = self.layout.viewport().0 as usize;
        for y in y_start..y_end {
            let row = y as usize * stride;
            self.pixels[row + x_start as usize..row + x_end as usize].fill(color);
        }
    }

    fn draw_text(&mut self, text: &str, center_x: i64, center_y: i64, line_px: i64, color: u32) {
        let scale = (line_px / (GLYPH_HEIGHT + 1)).max(1);
        let left = center_x - font::text_width(text) * scale / 2;
        let top = center_y - GLYPH_HEIGHT * scale / 2;

        for (i, ch) in text.chars().enumerate() {
            let Some(rows) = font::glyph(ch) else {
                continue;
            };
            let gx = left + i as i64 * GLYPH_ADVANCE * scale;
            for (ry, bits) in rows.iter().enumerate() {
                for rx in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - rx)) != 0 {
                        self.fill_rect(
                            gx + rx * scale,
                            top + ry as i64 * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
    }
}

impl RenderSurface for TileCanvas {
    fn resolution(&self) -> u32 {
        self.layout.resolution()
    }

    fn clear(&mut self) {
        self.pixels.fill(self.background.to_u32());
    }

    fn draw_grid(&mut self) {
        let (ox, oy) = self.layout.offset();
        let (ox, oy) = (ox as i64, oy as i64);
        let ts = self.layout.tile_size() as i64;
        let grid = self.layout.grid_pixels() as i64;
        let color = self.line_color.to_u32();
        for i in 0..=self.layout.resolution() as i64 {
            // The last line sits on the far edge; pull it inside the clip
            let at = (i * ts).min(grid - 1);
            self.fill_rect(ox, oy + at, grid, 1, color);
            self.fill_rect(ox + at, oy, 1, grid, color);
        }
    }

    fn draw_frame(&mut self) {
        let (ox, oy) = self.layout.offset();
        let (ox, oy) = (ox as i64, oy as i64);
        let grid = self.layout.grid_pixels() as i64;
        let color = self.line_color.to_u32();
        let w = FRAME_WIDTH;
        self.fill_rect(ox, oy, grid, w, color);
        self.fill_rect(ox, oy + grid - w, grid, w, color);
        self.fill_rect(ox, oy, w, grid, color);
        self.fill_rect(ox + grid - w, oy, w, grid, color);
    }

    fn draw_tile(&mut self, tile_x: f64, tile_y: f64, color: Color) {
        let ts = self.layout.tile_size() as i64;
        let (px, py) = self.layout.to_pixel(tile_x, tile_y);
        self.fill_rect(px, py, ts, ts, color.to_u32());
    }

    fn draw_text_box(&mut self, text_box: &TextBox<'_>) {
        let ts = self.layout.tile_size() as i64;
        let rect = text_box.rect;
        let side = rect.size as i64 * ts;
        let (px, py) = self.layout.to_pixel(rect.x, rect.y);
        self.fill_rect(px, py, side, side, text_box.bg.to_u32());

        let line_px = (text_box.text_scale as f64 * ts as f64).round() as i64;
        self.draw_text(
            text_box.text,
            px + side / 2,
            py + side / 2,
            line_px,
            text_box.fg.to_u32(),
        );
    }
}
