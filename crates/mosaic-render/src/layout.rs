//! Mapping between tile-space and viewport pixels

/// A square grid of `resolution` tiles centred in a viewport.
///
/// The tile size is the largest whole number of pixels that fits
/// `resolution` tiles into the shorter viewport side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    resolution: u32,
    viewport_width: u32,
    viewport_height: u32,
    tile_size: u32,
    offset_x: u32,
    offset_y: u32,
}

impl TileLayout {
    pub fn new(resolution: u32, viewport_width: u32, viewport_height: u32) -> Self {
        let mut layout = Self {
            resolution: resolution.max(1),
            viewport_width,
            viewport_height,
            tile_size: 1,
            offset_x: 0,
            offset_y: 0,
        };
        layout.resize(viewport_width, viewport_height);
        layout
    }

    /// Recompute tile size and offsets for a new viewport
    pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
        let side = viewport_width.min(viewport_height);
        self.tile_size = (side / self.resolution).max(1);
        let grid = self.grid_pixels();
        self.offset_x = viewport_width.saturating_sub(grid) / 2;
        self.offset_y = viewport_height.saturating_sub(grid) / 2;
        log::debug!(
            "Layout {}x{}: tile size {}px, offset ({}, {})",
            viewport_width,
            viewport_height,
            self.tile_size,
            self.offset_x,
            self.offset_y
        );
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Top-left pixel of the grid
    pub fn offset(&self) -> (u32, u32) {
        (self.offset_x, self.offset_y)
    }

    /// Side length of the grid in pixels
    pub fn grid_pixels(&self) -> u32 {
        self.tile_size * self.resolution
    }

    /// Viewport pixel position to continuous tile-space.
    /// Positions outside the grid map outside `[0, resolution)`.
    pub fn to_tile_space(&self, px: f64, py: f64) -> (f64, f64) {
        let ts = self.tile_size as f64;
        (
            (px - self.offset_x as f64) / ts,
            (py - self.offset_y as f64) / ts,
        )
    }

    /// Tile coordinate to the viewport pixel of its top-left corner
    pub fn to_pixel(&self, tile_x: f64, tile_y: f64) -> (i64, i64) {
        let ts = self.tile_size as f64;
        (
            self.offset_x as i64 + (tile_x * ts).floor() as i64,
            self.offset_y as i64 + (tile_y * ts).floor() as i64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_size_from_short_side() {
        let layout = TileLayout::new(60, 1280, 720);
        assert_eq!(layout.tile_size(), 12);
        assert_eq!(layout.grid_pixels(), 720);
        assert_eq!(layout.offset(), (280, 0));
    }

    #[test]
    fn test_round_trip_through_pixels() {
        let layout = TileLayout::new(60, 1280, 720);
        let (px, py) = layout.to_pixel(10.0, 20.0);
        assert_eq!((px, py), (280 + 120, 240));
        let (tx, ty) = layout.to_tile_space(px as f64 + 6.0, py as f64 + 6.0);
        assert!((tx - 10.5).abs() < 1e-9);
        assert!((ty - 20.5).abs() < 1e-9);
    }

    #[test]
    fn test_outside_grid_is_negative() {
        let layout = TileLayout::new(60, 1280, 720);
        let (tx, _) = layout.to_tile_space(0.0, 0.0);
        assert!(tx < 0.0);
    }

    #[test]
    fn test_resize_recomputes() {
        let mut layout = TileLayout::new(60, 600, 600);
        assert_eq!(layout.tile_size(), 10);
        layout.resize(1200, 1300);
        assert_eq!(layout.tile_size(), 20);
        assert_eq!(layout.offset(), (0, 50));
    }

    #[test]
    fn test_tiny_viewport_keeps_one_pixel_tiles() {
        let layout = TileLayout::new(60, 30, 30);
        assert_eq!(layout.tile_size(), 1);
    }
}
