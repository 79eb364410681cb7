//! Player application implementing winit ApplicationHandler
//!
//! Ticks the game on its own schedule and presents the tile canvas
//! through `pixels`.

use anyhow::{Context, Result};
use mosaic_core::MosaicError;
use mosaic_game::{show_title, FallerGame};
use mosaic_render::{RenderSurface, TileCanvas};
use mosaic_runtime::{GameLoop, PointerState};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

pub struct PlayerApp {
    game: GameLoop<FallerGame>,
    pointer: PointerState,
    canvas: TileCanvas,

    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    initial_size: PhysicalSize<u32>,

    /// First fatal error; the loop exits and `main` reports it
    error: Option<anyhow::Error>,
}

impl PlayerApp {
    /// Wrap a configured loop and put the title screen up
    pub fn new(mut game: GameLoop<FallerGame>, width: u32, height: u32) -> Self {
        show_title(&mut game);
        let canvas = TileCanvas::new(game.config().resolution, width, height);
        Self {
            game,
            pointer: PointerState::new(),
            canvas,
            window: None,
            pixels: None,
            initial_size: PhysicalSize::new(width, height),
            error: None,
        }
    }

    /// Error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title("Mosaic")
            .with_inner_size(self.initial_size);
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("Failed to create window")?,
        );

        let size = window.inner_size();
        self.canvas.resize(size.width, size.height);

        let surface_texture = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .map_err(render_error)
            .context("Failed to create pixel surface")?;

        log::info!(
            "Window {}x{}, {} px tiles",
            size.width,
            size.height,
            self.canvas.layout().tile_size()
        );

        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) -> Result<()> {
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        self.canvas.resize(size.width, size.height);
        if let Some(pixels) = &mut self.pixels {
            pixels
                .resize_surface(size.width, size.height)
                .map_err(render_error)
                .context("Failed to resize surface")?;
            pixels
                .resize_buffer(size.width, size.height)
                .map_err(render_error)
                .context("Failed to resize buffer")?;
        }
        // Blank until the next scheduled tick repaints
        self.canvas.clear();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if let Some(pixels) = &mut self.pixels {
            self.canvas.write_rgba(pixels.frame_mut());
            pixels
                .render()
                .map_err(render_error)
                .context("Failed to present frame")?;
        }
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{:#}", err);
        self.error = Some(err);
        event_loop.exit();
    }
}

fn render_error(err: impl std::fmt::Display) -> MosaicError {
    MosaicError::RenderError(err.to_string())
}

impl ApplicationHandler for PlayerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.initialize(event_loop) {
                self.fail(event_loop, err);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Err(err) = self.resize(new_size) {
                    self.fail(event_loop, err);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = self.canvas.layout().to_tile_space(position.x, position.y);
                self.pointer.process_move(x, y);
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.pointer.process_button_down(),
                ElementState::Released => self.pointer.process_button_up(),
            },

            WindowEvent::RedrawRequested => {
                if let Err(err) = self.present() {
                    self.fail(event_loop, err);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.error.is_some() {
            return;
        }
        if Instant::now() >= self.game.next_deadline() {
            self.game.tick(&self.pointer, &mut self.canvas);
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.game.next_deadline()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::LoopConfig;
    use std::time::Duration;

    fn headless_app() -> PlayerApp {
        let game = GameLoop::new(LoopConfig::default(), FallerGame::default())
            .unwrap()
            .with_fixed_delta(Duration::from_millis(100));
        PlayerApp::new(game, 120, 120)
    }

    #[test]
    fn test_resize_does_not_advance_the_game() {
        let mut app = headless_app();
        app.game.tick(&app.pointer, &mut app.canvas);
        let frames = app.game.clock().frame_count();
        let deadline = app.game.next_deadline();

        app.resize(PhysicalSize::new(300, 200)).unwrap();
        app.resize(PhysicalSize::new(60, 600)).unwrap();

        assert_eq!(app.game.clock().frame_count(), frames);
        assert_eq!(app.game.next_deadline(), deadline);
        assert_eq!(app.canvas.pixels().len(), 60 * 600);
        assert!(app.canvas.pixels().iter().all(|&p| p == 0xFFFFFF));
    }

    #[test]
    fn test_zero_size_resize_is_ignored() {
        let mut app = headless_app();
        app.resize(PhysicalSize::new(0, 0)).unwrap();
        assert_eq!(app.canvas.layout().viewport(), (120, 120));
    }

    #[test]
    fn test_render_error_keeps_message() {
        let err = render_error("surface lost");
        assert!(matches!(err, MosaicError::RenderError(ref msg) if msg == "surface lost"));
    }
}
