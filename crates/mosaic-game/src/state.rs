//! Per-game state shared by every entity of one loop

use crate::content::FallerContent;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// State owned by the loop and handed to each update
pub struct FallerGame {
    pub score: u32,
    pub content: FallerContent,
    pub rng: StdRng,
    /// Set by the first faller to reach the floor; later ones stay quiet
    pub game_over: bool,
    /// Games started since launch
    pub games: u32,
}

impl FallerGame {
    pub fn new(content: FallerContent) -> Self {
        let rng = match content.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            score: 0,
            content,
            rng,
            game_over: false,
            games: 0,
        }
    }

    /// Fresh score and flags for a new game; the RNG keeps its stream
    pub fn reset(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.games += 1;
    }
}

impl Default for FallerGame {
    fn default() -> Self {
        Self::new(FallerContent::default())
    }
}
