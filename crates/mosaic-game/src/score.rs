//! Running score box

use crate::content::FallerContent;
use crate::state::FallerGame;
use mosaic_core::TileRect;
use mosaic_runtime::{Entity, MessageBox, TickContext};

/// A message box that shows the current score
pub struct ScoreDisplay {
    message: MessageBox<FallerGame>,
}

impl ScoreDisplay {
    pub fn new(content: &FallerContent) -> Self {
        let message = MessageBox::new(
            "Score: 0",
            TileRect::new(1.0, 50.0, 9),
            content.primary,
            content.light,
        )
        .with_text_scale(1.5);
        Self { message }
    }

    pub fn text(&self) -> &str {
        &self.message.text
    }
}

impl Entity<FallerGame> for ScoreDisplay {
    fn update(&mut self, ctx: &mut TickContext<'_, FallerGame>) {
        self.message.text = format!("Score: {}", ctx.state.score);
        self.message.poll(ctx);
    }

    fn name(&self) -> &str {
        "score"
    }
}
