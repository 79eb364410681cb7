//! Scene flows: title screen, new game, spawning

use crate::content::FallerContent;
use crate::faller::{Faller, FallerSpec};
use crate::score::ScoreDisplay;
use crate::state::FallerGame;
use mosaic_core::{EntityId, TileRect};
use mosaic_runtime::{Button, MessageBox, Scene};

const BANNER: TileRect = TileRect::new(20.0, 20.0, 20);

/// Replace the scene with the "Start!" button
pub fn show_title(scene: &mut impl Scene<FallerGame>) {
    scene.clear_scene();
    let content = &scene.state_mut().content;
    let button = Button::<FallerGame>::new("Start!", BANNER, content.light, content.primary)
        .with_text_scale(2.0)
        .on_activate(|ctx| start_game(ctx));
    scene.instantiate_boxed(Box::new(button));
}

/// Replace the scene with a fresh game: one faller and the score box
pub fn start_game(scene: &mut impl Scene<FallerGame>) {
    scene.clear_scene();
    let game = scene.state_mut();
    game.reset();
    log::info!("game {} started", game.games);
    let score = ScoreDisplay::new(&game.content);

    spawn_faller(scene);
    scene.instantiate_boxed(Box::new(score));
}

/// Add one faller with random parameters
pub fn spawn_faller(scene: &mut impl Scene<FallerGame>) -> EntityId {
    let resolution = scene.resolution();
    let game = scene.state_mut();
    let spec = FallerSpec::random(game, resolution);
    let faller = Faller::new(spec, game.content.faller_text);
    scene.instantiate_boxed(Box::new(faller))
}

/// The banner shown when a faller lands; starts the next game on expiry
pub fn game_over_message(content: &FallerContent) -> MessageBox<FallerGame> {
    MessageBox::<FallerGame>::new("GAME OVER", BANNER, content.light, content.primary)
        .with_text_scale(2.0)
        .with_lifetime(content.game_over_lifetime())
        .on_expire(|ctx| start_game(ctx))
}
