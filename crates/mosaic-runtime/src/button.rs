//! Clickable text box

use crate::entity::{Callback, Entity, TickContext};
use crate::hover::HoverState;
use mosaic_core::{Color, TileRect};
use mosaic_render::TextBox;

/// A labeled box that activates on press-after-release inside it.
///
/// Drawn with swapped colors while hovered. The activation hook is not
/// guarded against firing again next tick while the pointer stays held;
/// hooks should destroy or otherwise change the button.
pub struct Button<S> {
    pub text: String,
    pub rect: TileRect,
    pub bg: Color,
    pub fg: Color,
    pub text_scale: f32,
    hover: HoverState,
    on_activate: Option<Callback<S>>,
}

impl<S> Button<S> {
    pub fn new(text: impl Into<String>, rect: TileRect, bg: Color, fg: Color) -> Self {
        Self {
            text: text.into(),
            rect,
            bg,
            fg,
            text_scale: 1.0,
            hover: HoverState::Idle,
            on_activate: None,
        }
    }

    pub fn with_text_scale(mut self, text_scale: f32) -> Self {
        self.text_scale = text_scale;
        self
    }

    pub fn on_activate(mut self, hook: impl FnMut(&mut TickContext<'_, S>) + 'static) -> Self {
        self.on_activate = Some(Box::new(hook));
        self
    }

    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    /// Run the hover state machine and draw. Returns true on activation.
    ///
    /// Entities that embed a button call this and act on activation
    /// themselves instead of installing a hook.
    pub fn poll(&mut self, ctx: &mut TickContext<'_, S>) -> bool {
        let (px, py) = ctx.pointer.position();
        let inside = self.rect.contains(px, py);
        let activated = self.hover.step(inside, ctx.pointer.is_held());

        // Pressed flashes back to normal colors
        let (bg, fg) = if self.hover.is_hovered() && !activated {
            (self.fg, self.bg)
        } else {
            (self.bg, self.fg)
        };
        ctx.surface.draw_text_box(&TextBox {
            text: &self.text,
            rect: self.rect,
            bg,
            fg,
            text_scale: self.text_scale,
        });

        activated
    }
}

impl<S: 'static> Entity<S> for Button<S> {
    fn update(&mut self, ctx: &mut TickContext<'_, S>) {
        if self.poll(ctx) {
            if let Some(hook) = self.on_activate.as_mut() {
                hook(ctx);
            }
        }
    }

    fn name(&self) -> &str {
        "button"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FrameClock;
    use crate::commands::{SceneCommand, SceneCommands};
    use crate::pointer::PointerState;
    use mosaic_core::EntityId;
    use mosaic_render::{DrawCommand, RecordingSurface, RenderSurface};

    const BG: Color = Color::from_hex(0xFFEBEE);
    const FG: Color = Color::from_hex(0xF44336);

    fn counting_button() -> Button<u32> {
        Button::new("Start!", TileRect::new(20.0, 20.0, 20), BG, FG)
            .with_text_scale(2.0)
            .on_activate(|ctx| *ctx.state += 1)
    }

    /// Update `button` once per pointer sample; returns the state afterwards
    fn drive(button: &mut Button<u32>, samples: &[PointerState]) -> (u32, RecordingSurface) {
        let clock = FrameClock::new(60);
        let mut surface = RecordingSurface::new(60);
        let mut commands = SceneCommands::new();
        let mut count = 0;
        let id = EntityId::new();
        for pointer in samples {
            surface.clear();
            let mut ctx = TickContext::new(
                pointer,
                &clock,
                &mut surface,
                &mut count,
                &mut commands,
                id,
                60,
            );
            button.update(&mut ctx);
        }
        (count, surface)
    }

    #[test]
    fn test_click_inside_activates() {
        let mut button = counting_button();
        let (count, _) = drive(
            &mut button,
            &[
                PointerState::at(25.0, 25.0, false),
                PointerState::at(25.0, 25.0, true),
            ],
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn test_drag_in_while_held_needs_release() {
        let mut button = counting_button();
        let held_outside = PointerState::at(5.0, 5.0, true);
        let held_inside = PointerState::at(25.0, 25.0, true);
        let released_inside = PointerState::at(25.0, 25.0, false);

        let (count, _) = drive(&mut button, &[held_outside, held_inside, held_inside]);
        assert_eq!(count, 0);

        let (count, _) = drive(&mut button, &[released_inside, held_inside]);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_far_edge_is_outside() {
        let mut button = counting_button();
        let (count, _) = drive(
            &mut button,
            &[
                PointerState::at(40.0, 25.0, false),
                PointerState::at(40.0, 25.0, true),
            ],
        );
        assert_eq!(count, 0);
        assert_eq!(button.hover_state(), HoverState::Idle);
    }

    #[test]
    fn test_hover_swaps_colors() {
        let mut button = counting_button();
        let (_, surface) = drive(&mut button, &[PointerState::at(25.0, 25.0, false)]);
        match surface.text_boxes()[0] {
            DrawCommand::TextBox { bg, fg, .. } => {
                assert_eq!(*bg, FG);
                assert_eq!(*fg, BG);
            }
            other => panic!("unexpected draw {:?}", other),
        }

        let (_, surface) = drive(&mut button, &[PointerState::at(0.0, 0.0, false)]);
        match surface.text_boxes()[0] {
            DrawCommand::TextBox { bg, fg, text, .. } => {
                assert_eq!(*bg, BG);
                assert_eq!(*fg, FG);
                assert_eq!(text, "Start!");
            }
            other => panic!("unexpected draw {:?}", other),
        }
    }

    #[test]
    fn test_hook_can_destroy_self() {
        let clock = FrameClock::new(60);
        let mut surface = RecordingSurface::new(60);
        let mut commands = SceneCommands::new();
        let mut state = ();
        let id = EntityId::new();
        let mut button: Button<()> = Button::new("x", TileRect::new(0.0, 0.0, 5), BG, FG)
            .on_activate(|ctx| ctx.destroy_self());

        for pointer in [
            PointerState::at(1.0, 1.0, false),
            PointerState::at(1.0, 1.0, true),
        ] {
            let mut ctx = TickContext::new(
                &pointer,
                &clock,
                &mut surface,
                &mut state,
                &mut commands,
                id,
                60,
            );
            button.update(&mut ctx);
        }

        let drained = commands.drain();
        assert_eq!(drained.len(), 1);
        assert!(matches!(drained[0], SceneCommand::Destroy(destroyed) if destroyed == id));
    }
}
