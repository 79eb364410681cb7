//! Falling clickable tiles

use crate::flow::{game_over_message, spawn_faller};
use crate::state::FallerGame;
use mosaic_core::{Color, TileRect};
use mosaic_runtime::{Button, Entity, TickContext};
use rand::seq::SliceRandom;
use rand::Rng;

/// Starting parameters of one faller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallerSpec {
    pub x: f64,
    pub y: f64,
    pub size: u32,
    pub color: Color,
    /// Tiles per tick
    pub speed: f64,
    /// Tiles per tick, per second
    pub acceleration: f64,
}

impl FallerSpec {
    /// Draw spawn parameters from the content tables.
    ///
    /// `x` is an integer tile in `[0, resolution - max size)` so every
    /// size fits horizontally; `y` is the top row.
    pub fn random(game: &mut FallerGame, resolution: u32) -> Self {
        let content = &game.content;
        let rng = &mut game.rng;

        let span = resolution.saturating_sub(content.max_size());
        let x = if span == 0 { 0 } else { rng.gen_range(0..span) };
        let size = content.sizes.choose(rng).copied().unwrap_or(1);
        let color = content.colors.choose(rng).copied().unwrap_or(content.primary);
        let speed = uniform(rng, content.max_speed);
        let acceleration = uniform(rng, content.max_acceleration);

        Self {
            x: f64::from(x),
            y: 0.0,
            size,
            color,
            speed,
            acceleration,
        }
    }
}

fn uniform(rng: &mut impl Rng, max: f64) -> f64 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}

/// A button that falls. Clicking it scores; letting it reach the floor
/// ends the game.
pub struct Faller {
    button: Button<FallerGame>,
    speed: f64,
    acceleration: f64,
}

impl Faller {
    pub fn new(spec: FallerSpec, text_color: Color) -> Self {
        let rect = TileRect::new(spec.x, spec.y, spec.size);
        Self {
            button: Button::new("", rect, spec.color, text_color),
            speed: spec.speed,
            acceleration: spec.acceleration,
        }
    }

    pub fn rect(&self) -> TileRect {
        self.button.rect
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    fn fall(&mut self, delta_secs: f64) {
        self.button.rect.y += self.speed;
        self.speed += self.acceleration * delta_secs;
    }
}

impl Entity<FallerGame> for Faller {
    fn update(&mut self, ctx: &mut TickContext<'_, FallerGame>) {
        if self.button.poll(ctx) {
            ctx.state.score += 1;
            ctx.destroy_self();

            let count = ctx
                .state
                .content
                .offspring
                .choose(&mut ctx.state.rng)
                .copied()
                .unwrap_or(1);
            log::debug!("faller clicked, score {}, {} offspring", ctx.state.score, count);
            for _ in 0..count {
                spawn_faller(ctx);
            }
            return;
        }

        self.fall(ctx.delta_secs());

        if self.button.rect.bottom() > f64::from(ctx.resolution()) {
            ctx.destroy_self();
            if !ctx.state.game_over {
                ctx.state.game_over = true;
                log::info!("game over, score {}", ctx.state.score);
                let message = game_over_message(&ctx.state.content);
                ctx.instantiate(message);
            }
        }
    }

    fn name(&self) -> &str {
        "faller"
    }
}
