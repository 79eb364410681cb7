//! Text box with an optional lifetime

use crate::entity::{Callback, Entity, TickContext};
use mosaic_core::{Color, TileRect};
use mosaic_render::TextBox;
use std::time::Duration;

/// A labeled box that can expire.
///
/// With a lifetime set, each tick subtracts delta-time; when the delta
/// exceeds what remains the box destroys itself and runs its expiry hook
/// once. Without a lifetime it lives until destroyed.
pub struct MessageBox<S> {
    pub text: String,
    pub rect: TileRect,
    pub bg: Color,
    pub fg: Color,
    pub text_scale: f32,
    remaining: Option<Duration>,
    expired: bool,
    on_expire: Option<Callback<S>>,
}

impl<S> MessageBox<S> {
    pub fn new(text: impl Into<String>, rect: TileRect, bg: Color, fg: Color) -> Self {
        Self {
            text: text.into(),
            rect,
            bg,
            fg,
            text_scale: 1.0,
            remaining: None,
            expired: false,
            on_expire: None,
        }
    }

    pub fn with_text_scale(mut self, text_scale: f32) -> Self {
        self.text_scale = text_scale;
        self
    }

    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.remaining = Some(lifetime);
        self
    }

    pub fn on_expire(mut self, hook: impl FnMut(&mut TickContext<'_, S>) + 'static) -> Self {
        self.on_expire = Some(Box::new(hook));
        self
    }

    /// Time left before expiry; `None` means it never expires
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Draw and count down. Returns true on the tick the box expires.
    pub fn poll(&mut self, ctx: &mut TickContext<'_, S>) -> bool {
        ctx.surface.draw_text_box(&TextBox {
            text: &self.text,
            rect: self.rect,
            bg: self.bg,
            fg: self.fg,
            text_scale: self.text_scale,
        });

        if self.expired {
            return false;
        }
        let Some(remaining) = self.remaining else {
            return false;
        };

        let delta = ctx.delta_time();
        if delta > remaining {
            self.remaining = Some(Duration::ZERO);
            self.expired = true;
            ctx.destroy_self();
            true
        } else {
            self.remaining = Some(remaining - delta);
            false
        }
    }
}

impl<S: 'static> Entity<S> for MessageBox<S> {
    fn update(&mut self, ctx: &mut TickContext<'_, S>) {
        if self.poll(ctx) {
            if let Some(mut hook) = self.on_expire.take() {
                hook(ctx);
            }
        }
    }

    fn name(&self) -> &str {
        "message_box"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FrameClock;
    use crate::commands::{SceneCommand, SceneCommands};
    use crate::pointer::PointerState;
    use mosaic_core::EntityId;
    use mosaic_render::RecordingSurface;

    fn tick(message: &mut MessageBox<u32>, clock: &FrameClock, fired: &mut u32) -> usize {
        let pointer = PointerState::new();
        let mut surface = RecordingSurface::new(60);
        let mut commands = SceneCommands::new();
        let mut ctx = TickContext::new(
            &pointer,
            clock,
            &mut surface,
            fired,
            &mut commands,
            EntityId::new(),
            60,
        );
        message.update(&mut ctx);
        commands
            .drain()
            .iter()
            .filter(|c| matches!(c, SceneCommand::Destroy(_)))
            .count()
    }

    #[test]
    fn test_expires_when_decrement_passes_lifetime() {
        let clock = FrameClock::with_fixed_delta(10, Duration::from_millis(100));
        let rect = TileRect::new(20.0, 20.0, 20);
        let mut message = MessageBox::new("GAME OVER", rect, Color::WHITE, Color::BLACK)
            .with_lifetime(Duration::from_millis(300))
            .on_expire(|ctx| *ctx.state += 1);
        let mut fired = 0;

        for _ in 0..3 {
            assert_eq!(tick(&mut message, &clock, &mut fired), 0);
            assert_eq!(fired, 0);
        }
        assert_eq!(message.remaining(), Some(Duration::ZERO));

        assert_eq!(tick(&mut message, &clock, &mut fired), 1);
        assert_eq!(fired, 1);
        assert!(message.is_expired());

        // Never fires again even if it keeps being updated
        assert_eq!(tick(&mut message, &clock, &mut fired), 0);
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_no_lifetime_never_expires() {
        let clock = FrameClock::with_fixed_delta(10, Duration::from_secs(60));
        let rect = TileRect::new(1.0, 50.0, 9);
        let mut message = MessageBox::new("Score: 0", rect, Color::WHITE, Color::BLACK)
            .on_expire(|ctx| *ctx.state += 1);
        let mut fired = 0;
        for _ in 0..100 {
            assert_eq!(tick(&mut message, &clock, &mut fired), 0);
        }
        assert_eq!(fired, 0);
        assert_eq!(message.remaining(), None);
    }

    #[test]
    fn test_zero_delta_keeps_zero_lifetime_alive() {
        let clock = FrameClock::with_fixed_delta(10, Duration::ZERO);
        let rect = TileRect::new(0.0, 0.0, 1);
        let mut message =
            MessageBox::<u32>::new("", rect, Color::WHITE, Color::BLACK).with_lifetime(Duration::ZERO);
        let mut fired = 0;
        assert_eq!(tick(&mut message, &clock, &mut fired), 0);
        assert!(!message.is_expired());
    }
}
