//! Headless surface that records draw calls

use crate::surface::{RenderSurface, TextBox};
use mosaic_core::{Color, TileRect};

/// One recorded call on a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Grid,
    Frame,
    Tile {
        x: f64,
        y: f64,
        color: Color,
    },
    TextBox {
        text: String,
        rect: TileRect,
        bg: Color,
        fg: Color,
        text_scale: f32,
    },
}

/// Records every draw call in order. `clear` is recorded, not applied,
/// so a test can inspect the calls of several ticks at once.
pub struct RecordingSurface {
    resolution: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(resolution: u32) -> Self {
        Self {
            resolution,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Calls recorded since the most recent `clear`
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Text boxes drawn since the most recent `clear`
    pub fn text_boxes(&self) -> Vec<&DrawCommand> {
        self.last_frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::TextBox { .. }))
            .collect()
    }

    /// Texts of the boxes drawn since the most recent `clear`
    pub fn texts(&self) -> Vec<&str> {
        self.last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::TextBox { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn resolution(&self) -> u32 {
        self.resolution
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_grid(&mut self) {
        self.commands.push(DrawCommand::Grid);
    }

    fn draw_frame(&mut self) {
        self.commands.push(DrawCommand::Frame);
    }

    fn draw_tile(&mut self, tile_x: f64, tile_y: f64, color: Color) {
        self.commands.push(DrawCommand::Tile {
            x: tile_x,
            y: tile_y,
            color,
        });
    }

    fn draw_text_box(&mut self, text_box: &TextBox<'_>) {
        self.commands.push(DrawCommand::TextBox {
            text: text_box.text.to_string(),
            rect: text_box.rect,
            bg: text_box.bg,
            fg: text_box.fg,
            text_scale: text_box.text_scale,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_frame_starts_after_clear() {
        let mut surface = RecordingSurface::new(60);
        surface.draw_tile(0.0, 0.0, Color::BLACK);
        surface.clear();
        surface.draw_frame();
        surface.draw_text_box(&TextBox {
            text: "Score: 3",
            rect: TileRect::new(1.0, 50.0, 9),
            bg: Color::BLACK,
            fg: Color::WHITE,
            text_scale: 1.5,
        });
        assert_eq!(surface.commands().len(), 4);
        assert_eq!(surface.last_frame().len(), 2);
        assert_eq!(surface.texts(), vec!["Score: 3"]);
    }
}
